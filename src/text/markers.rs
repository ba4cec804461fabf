//! Weighted marker tables, one per text category.
//!
//! Each [`Scorer`] is plain data: a list of `(label, weight, polarity,
//! probe)` rows evaluated against the decoded text and its
//! [`TextProfile`]. Scores are clamped at zero.

use super::profile::TextProfile;
use crate::core::Extension;
use once_cell::sync::Lazy;
use regex::Regex;

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static marker pattern")
}

/// One `\b`-delimited regex per word.
fn words(list: &[&str], case_insensitive: bool) -> Vec<Regex> {
    let flags = if case_insensitive { "(?i)" } else { "" };
    list.iter()
        .map(|w| re(&format!(r"{}\b{}\b", flags, regex::escape(w))))
        .collect()
}

/// One case-insensitive regex per pattern.
fn patterns_ci(list: &[&str]) -> Vec<Regex> {
    list.iter().map(|p| re(&format!("(?i){}", p))).collect()
}

fn literals(list: &[&str]) -> Vec<Regex> {
    list.iter().map(|l| re(&regex::escape(l))).collect()
}

static RE_INCLUDE: Lazy<Regex> = Lazy::new(|| re(r#"#include\s+[<"]"#));
static RE_BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| re(r"(?s)/\*.*?\*/"));
static RE_LABEL_RULE: Lazy<Regex> = Lazy::new(|| re(r"(?m)^\w+\s*:"));
static RE_DATA_DIRECTIVE: Lazy<Regex> = Lazy::new(|| re(r"(?i)\bDC\.[BWL]\b"));

const C_KEYWORDS: &[&str] = &[
    "typedef", "struct", "enum", "static", "extern", "const", "volatile", "switch", "case",
    "break", "continue",
];

const ASM_DIRECTIVES: &[&str] = &[
    r"\bSECTION\b",
    r"\bTEXT\b",
    r"\bDATA\b",
    r"\bBSS\b",
    r"\bDC\.[BWL]\b",
    r"\bDS\.[BWL]\b",
    r"\bEQU\b",
    r"\bORG\b",
    r"\bEND\b",
    r"\bXDEF\b",
    r"\bXREF\b",
    r"\bGLOBL\b",
];

const M68K_MNEMONICS: &[&str] = &[
    "MOVE", "MOVEA", "MOVEM", "MOVEQ", "ADD", "ADDA", "ADDI", "ADDQ", "SUB", "SUBA", "SUBI",
    "SUBQ", "LEA", "PEA", "JSR", "JMP", "BRA", "BSR", "BEQ", "BNE", "BGT", "BLT", "BGE",
    "BLE", "RTS", "RTE", "CLR", "CMP", "CMPA", "CMPI", "TST", "AND", "OR", "EOR", "NOT",
    "NEG", "EXT", "SWAP", "TRAP", "LINK", "UNLK", "BTST", "BSET", "BCLR",
];

static MNEMONICS: Lazy<Vec<Regex>> = Lazy::new(|| words(M68K_MNEMONICS, true));

const INF_KEYWORDS: &[&str] = &[
    "DESKTOP", "NEWDESK", "GEMDESK", "PATH", "FILE", "DEVICE", "PRINTER", "PORT", "WINDOW",
    "AUTO",
];

const BATCH_COMMANDS: &[&str] = &[
    "echo", "REM", "cd", "copy", "del", "ren", "mkdir", "rmdir", "path", "set",
];

const RESOURCE_KEYWORDS: &[&str] = &[
    "OBJECT", "TREE", "DIALOG", "FORM", "MENU", "TEDINFO", "ICON", "BITBLK", "CICON",
    "STRING", "ALERT",
];

/// Whether a marker adds to or subtracts from its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Evidence,
    Penalty,
}

/// What a marker looks for.
pub enum Probe {
    /// The pattern occurs at least once.
    Pattern(Regex),
    /// The pattern occurs at least `n` times.
    AtLeast(Regex, usize),
    /// A literal substring occurs.
    Substring(&'static str),
    /// At least `min` of the patterns occur.
    Quorum { patterns: Vec<Regex>, min: usize },
    /// Counts each pattern that occurs, up to `cap`; the weight applies per hit.
    PerHit { patterns: Vec<Regex>, cap: usize },
    /// A predicate over the line statistics.
    Feature(fn(&TextProfile) -> bool),
    All(Vec<Probe>),
    Any(Vec<Probe>),
}

impl Probe {
    /// Number of times the marker's weight applies.
    fn hits(&self, text: &str, profile: &TextProfile) -> usize {
        match self {
            Probe::Pattern(re) => re.is_match(text) as usize,
            Probe::AtLeast(re, n) => (re.find_iter(text).take(*n).count() >= *n) as usize,
            Probe::Substring(needle) => {
                memchr::memmem::find(text.as_bytes(), needle.as_bytes()).is_some() as usize
            }
            Probe::Quorum { patterns, min } => {
                (patterns.iter().filter(|re| re.is_match(text)).count() >= *min) as usize
            }
            Probe::PerHit { patterns, cap } => patterns
                .iter()
                .filter(|re| re.is_match(text))
                .count()
                .min(*cap),
            Probe::Feature(f) => f(profile) as usize,
            Probe::All(probes) => probes.iter().all(|p| p.hits(text, profile) > 0) as usize,
            Probe::Any(probes) => probes.iter().any(|p| p.hits(text, profile) > 0) as usize,
        }
    }
}

/// A weighted row in a category table.
pub struct Marker {
    pub label: &'static str,
    pub weight: u32,
    pub polarity: Polarity,
    pub probe: Probe,
}

impl Marker {
    fn evidence(label: &'static str, weight: u32, probe: Probe) -> Self {
        Self {
            label,
            weight,
            polarity: Polarity::Evidence,
            probe,
        }
    }

    fn penalty(label: &'static str, weight: u32, probe: Probe) -> Self {
        Self {
            label,
            weight,
            polarity: Polarity::Penalty,
            probe,
        }
    }

    /// Signed contribution of this marker to its category score.
    pub fn contribution(&self, text: &str, profile: &TextProfile) -> i64 {
        let magnitude = self.weight as i64 * self.probe.hits(text, profile) as i64;
        match self.polarity {
            Polarity::Evidence => magnitude,
            Polarity::Penalty => -magnitude,
        }
    }
}

/// The marker table of one text category.
pub struct Scorer {
    pub extension: Extension,
    pub markers: Vec<Marker>,
}

impl Scorer {
    /// Sum of all contributions, clamped at zero.
    pub fn score(&self, text: &str, profile: &TextProfile) -> u32 {
        let total: i64 = self
            .markers
            .iter()
            .map(|m| m.contribution(text, profile))
            .sum();
        total.max(0) as u32
    }

    pub fn marker(&self, label: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.label == label)
    }
}

fn c_source() -> Scorer {
    use Probe::*;
    Scorer {
        extension: Extension::C,
        markers: vec![
            Marker::evidence("include directive", 4, Pattern(RE_INCLUDE.clone())),
            Marker::evidence("int main", 3, Pattern(re(r"\bint\s+main\s*\("))),
            Marker::evidence("void main", 3, Pattern(re(r"\bvoid\s+main\s*\("))),
            Marker::evidence("return", 2, Pattern(re(r"\breturn\s+"))),
            Marker::evidence("printf", 2, Pattern(re(r"\bprintf\s*\("))),
            Marker::evidence("malloc", 2, Pattern(re(r"\bmalloc\s*\("))),
            Marker::evidence("free", 2, Pattern(re(r"\bfree\s*\("))),
            Marker::evidence("sizeof", 2, Pattern(re(r"\bsizeof\s*\("))),
            Marker::evidence(
                "balanced braces",
                3,
                Feature(|p| {
                    p.open_braces > 0
                        && p.close_braces > 0
                        && p.open_braces.abs_diff(p.close_braces) <= 2
                }),
            ),
            Marker::evidence(
                "keywords",
                1,
                PerHit {
                    patterns: words(C_KEYWORDS, false),
                    cap: 4,
                },
            ),
            Marker::evidence("block comment", 1, Pattern(RE_BLOCK_COMMENT.clone())),
            Marker::evidence("line comment", 1, Substring("//")),
            Marker::evidence("define", 2, Feature(|p| p.defines > 0)),
            Marker::penalty(
                "semicolon comments",
                3,
                Feature(TextProfile::mostly_semicolon_comments),
            ),
            Marker::penalty("label rules", 3, AtLeast(RE_LABEL_RULE.clone(), 4)),
            Marker::penalty("tiny", 2, Feature(|p| p.size < 80)),
            Marker::penalty(
                "define table",
                4,
                Feature(|p| p.defines >= 10 && p.open_braces <= 1),
            ),
        ],
    }
}

fn c_header() -> Scorer {
    use Probe::*;
    Scorer {
        extension: Extension::H,
        markers: vec![
            Marker::evidence("define table", 5, Feature(|p| p.defines >= 10)),
            Marker::evidence("many defines", 4, Feature(|p| (5..10).contains(&p.defines))),
            Marker::evidence("some defines", 2, Feature(|p| (2..5).contains(&p.defines))),
            Marker::evidence(
                "include guard",
                3,
                All(vec![
                    Pattern(re(r"#ifndef\s+\w+")),
                    Pattern(re(r"#define\s+\w+")),
                    Substring("#endif"),
                ]),
            ),
            Marker::evidence(
                "prototypes",
                3,
                AtLeast(re(r"\b\w+\s+\w+\s*\([^)]*\)\s*;"), 2),
            ),
            Marker::evidence("typedef struct", 2, Pattern(re(r"\btypedef\s+struct\b"))),
            Marker::evidence("extern", 2, Substring("extern")),
            Marker::evidence("include", 2, Substring("#include")),
            Marker::evidence("few bodies", 2, Feature(|p| p.open_braces <= 2)),
            Marker::evidence("block comment", 1, Pattern(RE_BLOCK_COMMENT.clone())),
            Marker::penalty("main", 5, Pattern(re(r"\bmain\s*\("))),
            Marker::penalty("function bodies", 3, Feature(|p| p.open_braces > 5)),
        ],
    }
}

fn assembly() -> Scorer {
    use Probe::*;
    Scorer {
        extension: Extension::S,
        markers: vec![
            Marker::evidence(
                "directives",
                3,
                PerHit {
                    patterns: patterns_ci(ASM_DIRECTIVES),
                    cap: usize::MAX,
                },
            ),
            Marker::evidence(
                "semicolon comments",
                3,
                Feature(TextProfile::mostly_semicolon_comments),
            ),
            Marker::evidence("labels", 3, AtLeast(re(r"(?m)^[A-Za-z_\.][\w\.]*:\s"), 3)),
            Marker::evidence(
                "mnemonics",
                2,
                PerHit {
                    patterns: MNEMONICS.clone(),
                    cap: 5,
                },
            ),
            Marker::evidence(
                "small snippet",
                4,
                All(vec![
                    Feature(|p| p.size < 200),
                    Quorum {
                        patterns: MNEMONICS.clone(),
                        min: 2,
                    },
                ]),
            ),
            Marker::evidence("hex immediate", 2, Pattern(re(r"#\$[0-9A-Fa-f]+"))),
            Marker::penalty("include directive", 8, Pattern(RE_INCLUDE.clone())),
            Marker::penalty(
                "braces",
                6,
                Feature(|p| p.open_braces > 5 || p.close_braces > 5),
            ),
            Marker::penalty("block comment", 4, Pattern(RE_BLOCK_COMMENT.clone())),
            Marker::penalty("define table", 8, Feature(|p| p.defines >= 5)),
            Marker::penalty("defines", 5, Feature(|p| (2..5).contains(&p.defines))),
        ],
    }
}

fn inf() -> Scorer {
    use Probe::*;
    Scorer {
        extension: Extension::Inf,
        markers: vec![
            Marker::evidence(
                "assignments",
                3,
                Feature(|p| p.assignment_lines * 10 >= p.lines),
            ),
            Marker::evidence("drive paths", 3, AtLeast(re(r"[A-Z]:\\"), 2)),
            Marker::evidence(
                "keywords",
                1,
                PerHit {
                    patterns: words(INF_KEYWORDS, true),
                    cap: 5,
                },
            ),
            Marker::penalty(
                "code syntax",
                4,
                Any(vec![Feature(|p| p.open_braces > 2), Substring("#include")]),
            ),
            Marker::penalty("data directive", 4, Pattern(RE_DATA_DIRECTIVE.clone())),
        ],
    }
}

fn makefile() -> Scorer {
    use Probe::*;
    Scorer {
        extension: Extension::Mak,
        markers: vec![
            Marker::evidence(
                "rules",
                4,
                Pattern(re(r"(?m)^[^\s:#=]+(\s+[^\s:]+)*\s*:\s+")),
            ),
            Marker::evidence("recipes", 4, Feature(|p| p.recipe_lines > 0)),
            Marker::evidence("CC", 2, Pattern(re(r"CC\s*="))),
            Marker::evidence("CFLAGS", 2, Pattern(re(r"CFLAGS\s*="))),
            Marker::evidence("LDFLAGS", 2, Pattern(re(r"LDFLAGS\s*="))),
            Marker::evidence("macro use", 2, Pattern(re(r"\$\(\w+\)"))),
            Marker::evidence("automatic variables", 2, Pattern(re(r"\$[@<^]"))),
            Marker::evidence(
                "common targets",
                2,
                PerHit {
                    patterns: literals(&["all:", "clean:", "install:"]),
                    cap: 3,
                },
            ),
            Marker::penalty("braces", 5, Feature(|p| p.open_braces > 10)),
        ],
    }
}

fn batch() -> Scorer {
    use Probe::*;
    let commands = BATCH_COMMANDS
        .iter()
        .map(|c| re(&format!(r"(?im)^\s*{}\b", regex::escape(c))))
        .collect();
    Scorer {
        extension: Extension::Bat,
        markers: vec![
            Marker::evidence(
                "commands",
                4,
                Quorum {
                    patterns: commands,
                    min: 2,
                },
            ),
            Marker::evidence("echo", 2, Pattern(re(r"(?im)^\s*@?echo\b"))),
            Marker::evidence("set", 2, Pattern(re(r"(?im)^\s*SET\s+\w+="))),
            Marker::evidence("if", 2, Pattern(re(r"(?i)\bIF\b"))),
            Marker::evidence("goto", 2, Pattern(re(r"(?i)\bGOTO\b"))),
            Marker::penalty(
                "makefile",
                4,
                All(vec![Pattern(RE_LABEL_RULE.clone()), Feature(|p| p.has_tab)]),
            ),
        ],
    }
}

fn project() -> Scorer {
    use Probe::*;
    Scorer {
        extension: Extension::Prj,
        markers: vec![
            Marker::evidence(
                "file references",
                3,
                AtLeast(re(r"(?i)\.(?:c|h|s|o|prg|ttp|tos|rsc)\b"), 5),
            ),
            Marker::evidence(
                "tool flags",
                2,
                Quorum {
                    patterns: literals(&["-I", "-D", "-L", "-l", "-O", "-g"]),
                    min: 2,
                },
            ),
            Marker::evidence("sections", 2, Pattern(re(r"(?m)^\[\w+\]"))),
            Marker::evidence("backslash paths", 1, Pattern(re(r"\\[\w\.]+"))),
            Marker::penalty("braces", 4, Feature(|p| p.open_braces > 10)),
            Marker::penalty(
                "makefile",
                3,
                All(vec![Pattern(RE_LABEL_RULE.clone()), Feature(|p| p.has_tab)]),
            ),
        ],
    }
}

fn resource_definition() -> Scorer {
    use Probe::*;
    Scorer {
        extension: Extension::Rsd,
        markers: vec![
            Marker::evidence(
                "resource keywords",
                3,
                Quorum {
                    patterns: words(RESOURCE_KEYWORDS, true),
                    min: 2,
                },
            ),
            Marker::evidence("numeric tables", 2, Feature(|p| p.numeric_lines * 5 > p.lines)),
            Marker::evidence(
                "constant names",
                2,
                AtLeast(re(r"\b[A-Z_][A-Z0-9_]{3,}\b"), 11),
            ),
            Marker::penalty(
                "c code",
                4,
                All(vec![Substring("#include"), Feature(|p| p.open_braces > 5)]),
            ),
            Marker::penalty("data directive", 4, Pattern(RE_DATA_DIRECTIVE.clone())),
        ],
    }
}

/// All category tables in tie-break order.
pub static SCORERS: Lazy<Vec<Scorer>> = Lazy::new(|| {
    vec![
        c_source(),
        c_header(),
        assembly(),
        inf(),
        makefile(),
        batch(),
        project(),
        resource_definition(),
    ]
});

/// The table for one category.
pub fn scorer(extension: Extension) -> Option<&'static Scorer> {
    SCORERS.iter().find(|s| s.extension == extension)
}
