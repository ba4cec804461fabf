//! Weighted classifier for source and text fragments.
//!
//! Every category scorer runs over the decoded text; the best score wins
//! only when it clears the floor and leads the runner-up by the margin.
//! Otherwise the fragment is plain `TXT`, unless a self-declared filename
//! tips a C or header contender.

pub mod decode;
pub mod embedded;
pub mod markers;
pub mod profile;

pub use decode::{decode_ascii, is_text};
pub use embedded::extract_embedded_name;
pub use profile::TextProfile;

use crate::config::TextConfig;
use crate::core::{DetectionResult, Extension};
use crate::detectors::{Detector, Phase};
use markers::SCORERS;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Per-category scores for one fragment, in tie-break order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    scores: Vec<(Extension, u32)>,
}

impl ScoreTable {
    pub fn compute(text: &str, profile: &TextProfile) -> Self {
        Self {
            scores: SCORERS
                .iter()
                .map(|s| (s.extension, s.score(text, profile)))
                .collect(),
        }
    }

    pub fn get(&self, extension: Extension) -> u32 {
        self.scores
            .iter()
            .find(|(e, _)| *e == extension)
            .map_or(0, |(_, s)| *s)
    }

    /// Highest score first; equal scores keep tie-break order.
    pub fn ranked(&self) -> Vec<(Extension, u32)> {
        let mut ranked = self.scores.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

fn is_c_family(extension: Extension) -> bool {
    matches!(extension, Extension::C | Extension::H)
}

/// Phase 4 of the cascade.
pub struct TextClassifier {
    config: TextConfig,
}

impl TextClassifier {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Scores for `data`, or `None` when it is not text.
    pub fn scores(&self, data: &[u8]) -> Option<ScoreTable> {
        if !is_text(data, self.config.max_binary_ratio) {
            return None;
        }
        let text = decode_ascii(data);
        Some(ScoreTable::compute(&text, &TextProfile::new(&text, data.len())))
    }

    fn decide(&self, table: &ScoreTable, embedded: Option<&str>) -> DetectionResult {
        let cfg = &self.config;
        let ranked = table.ranked();
        let [(best, best_score), (second, second_score), ..] = ranked[..] else {
            return DetectionResult::no_match("No text categories");
        };

        if best_score < cfg.strong_min {
            if is_c_family(best) && best_score > 0 && embedded.is_some() {
                return DetectionResult::matched(
                    best,
                    cfg.embedded_low_confidence,
                    format!("{} score: {} (embedded name found)", best, best_score),
                );
            }
            return DetectionResult::matched(
                Extension::Txt,
                cfg.fallback_confidence,
                "No strong type match, defaulting to TXT",
            );
        }

        if best_score - second_score < cfg.margin {
            if let Some(name) = embedded {
                if is_c_family(best) || is_c_family(second) {
                    let chosen = if is_c_family(best) { best } else { second };
                    return DetectionResult::matched(
                        chosen,
                        cfg.embedded_ambiguous_confidence,
                        format!("{} (embedded name: {})", chosen, name),
                    );
                }
            }
            return DetectionResult::matched(
                Extension::Txt,
                cfg.fallback_confidence,
                format!(
                    "Ambiguous between {} ({}) and {} ({})",
                    best, best_score, second, second_score
                ),
            );
        }

        let confidence = (cfg.confidence_base as u32 + best_score).min(cfg.max_confidence as u32);
        DetectionResult::matched(
            best,
            confidence as u8,
            format!("{} score: {}", best, best_score),
        )
    }
}

impl Default for TextClassifier {
    fn default() -> Self {
        Self::new(TextConfig::default())
    }
}

impl Detector for TextClassifier {
    fn name(&self) -> &'static str {
        "text"
    }

    fn detect(&self, data: &[u8]) -> DetectionResult {
        if !is_text(data, self.config.max_binary_ratio) {
            return DetectionResult::no_match("Not a text file");
        }

        let text = decode_ascii(data);
        let profile = TextProfile::new(&text, data.len());
        let table = ScoreTable::compute(&text, &profile);
        trace!(scores = ?table, "Text category scores");

        let embedded = extract_embedded_name(&text, self.config.header_scan_lines);
        let result = self.decide(&table, embedded.as_deref());

        match (result.extension, embedded) {
            (Some(ext), Some(name)) if ext.is_source() => result.with_embedded_name(name),
            _ => result,
        }
    }
}

/// Phase wrapper for the classifier.
pub fn phase(config: TextConfig) -> Phase {
    Phase::new("text", vec![Box::new(TextClassifier::new(config))])
}
