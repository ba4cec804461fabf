//! Filenames that source files declare about themselves.
//!
//! Atari ST headers often open with a comment naming the file, e.g.
//! `/* GEMBIND.H Do-It-Yourself GEM binding kit. */` or `@(#)math.h 3.1`.

use once_cell::sync::Lazy;
use regex::Regex;

const NAME: &str = r"[a-zA-Z_][a-zA-Z0-9_\-]*\.[a-zA-Z]{1,3}";

/// Extensions a bare filename line must carry to be trusted.
const STANDALONE_EXTENSIONS: &[&str] = &["H", "C", "S", "INC", "HPP", "CPP"];

enum Convention {
    Any(Regex),
    SourceOnly(Regex),
}

/// Per-line conventions, most specific first.
static CONVENTIONS: Lazy<Vec<Convention>> = Lazy::new(|| {
    let re = |p: String| Regex::new(&p).expect("embedded name pattern");
    vec![
        // SCCS / RCS id
        Convention::Any(re(format!(r"(?i)@\(#\)\s*({NAME})"))),
        // ` * ACCESS.H -- modes for the access call`
        Convention::Any(re(format!(
            r"(?i)^\s*\*\s+({NAME})(?:\s*$|\s+--|\s+-{{1,2}}\s)"
        ))),
        // `/* GEMBIND.H Do-It-Yourself ...`
        Convention::Any(re(format!(
            r"(?i)/\*\s+({NAME})(?:\s*$|\s+--|\s+-{{1,2}}\s|\s+\w)"
        ))),
        // the name alone on its line
        Convention::SourceOnly(re(format!(r"(?i)^\s*({NAME})\s*$"))),
        // `// VDI.H - ...`
        Convention::Any(re(format!(r"(?i)//\s+({NAME})\s+[-:]"))),
    ]
});

fn stem(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(stem, _)| stem)
}

fn extension(name: &str) -> &str {
    name.rsplit_once('.').map_or("", |(_, ext)| ext)
}

impl Convention {
    fn extract<'t>(&self, line: &'t str) -> Option<&'t str> {
        match self {
            Convention::Any(re) => re.captures(line)?.get(1).map(|m| m.as_str()),
            Convention::SourceOnly(re) => {
                let name = re.captures(line)?.get(1)?.as_str();
                let ext = extension(name).to_ascii_uppercase();
                STANDALONE_EXTENSIONS
                    .contains(&ext.as_str())
                    .then_some(name)
            }
        }
    }
}

/// Scan the first `max_lines` lines and return the first declared filename,
/// extension stripped.
pub fn extract_embedded_name(text: &str, max_lines: usize) -> Option<String> {
    text.split('\n')
        .take(max_lines)
        .find_map(|line| CONVENTIONS.iter().find_map(|c| c.extract(line)))
        .map(|name| stem(name).to_string())
}
