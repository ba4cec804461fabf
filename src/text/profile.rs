//! Line-level statistics shared by every category scorer.
//!
//! Computed once per fragment so the marker tables can stay declarative.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_DEFINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*#define\b").expect("define regex"));

/// Counts over the decoded text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextProfile {
    /// Byte length of the original fragment.
    pub size: usize,
    /// Number of `\n`-separated lines, including a trailing empty one.
    pub lines: usize,
    pub open_braces: usize,
    pub close_braces: usize,
    /// Lines starting with `#define`.
    pub defines: usize,
    /// Lines whose first non-blank character is `;`.
    pub semicolon_comments: usize,
    /// Non-blank lines starting with a tab (make recipes).
    pub recipe_lines: usize,
    /// Lines containing `=` that are not `#` comments.
    pub assignment_lines: usize,
    /// Lines containing both a comma and a digit.
    pub numeric_lines: usize,
    pub has_tab: bool,
}

impl TextProfile {
    pub fn new(text: &str, size: usize) -> Self {
        let bytes = text.as_bytes();
        let mut profile = Self {
            size,
            open_braces: memchr::memchr_iter(b'{', bytes).count(),
            close_braces: memchr::memchr_iter(b'}', bytes).count(),
            defines: RE_DEFINE.find_iter(text).count(),
            has_tab: memchr::memchr(b'\t', bytes).is_some(),
            ..Self::default()
        };

        for line in text.split('\n') {
            profile.lines += 1;
            let trimmed = line.trim_start();
            if trimmed.starts_with(';') {
                profile.semicolon_comments += 1;
            }
            if line.starts_with('\t') && !line.trim().is_empty() {
                profile.recipe_lines += 1;
            }
            if line.contains('=') && !trimmed.starts_with('#') {
                profile.assignment_lines += 1;
            }
            if line.contains(',') && line.bytes().any(|b| b.is_ascii_digit()) {
                profile.numeric_lines += 1;
            }
        }
        profile
    }

    /// More than 10% of lines are `;` comments.
    pub fn mostly_semicolon_comments(&self) -> bool {
        self.semicolon_comments * 10 > self.lines
    }
}
