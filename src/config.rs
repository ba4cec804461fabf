//! Configuration for the detection cascade.
//!
//! Defaults reproduce the compiled-in thresholds; a caller only needs a
//! custom configuration to tune the text classifier or to teach the
//! size fallback new headerless formats.

use crate::core::Extension;
use crate::error::{Result, StscanError};
use serde::{Deserialize, Serialize};

/// Master configuration for the cascade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Text classifier thresholds.
    pub text: TextConfig,
    /// Size-only fallback table.
    pub fallback: FallbackConfig,
}

impl DetectorConfig {
    /// Reject values that would make the cascade misbehave.
    pub fn validate(&self) -> Result<()> {
        self.text.validate()?;
        self.fallback.validate()
    }
}

/// Thresholds for the weighted text classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextConfig {
    /// Maximum share of non-printable characters for a buffer to count as text.
    pub max_binary_ratio: f64,
    /// Minimum winning score for a confident classification.
    pub strong_min: u32,
    /// Minimum gap between the best and second-best scores.
    pub margin: u32,
    /// Confidence of the generic `TXT` verdict.
    pub fallback_confidence: u8,
    /// Confidence when a weak C/H score is rescued by an embedded name.
    pub embedded_low_confidence: u8,
    /// Confidence when an ambiguous C/H score is rescued by an embedded name.
    pub embedded_ambiguous_confidence: u8,
    /// Upper bound for scored verdicts.
    pub max_confidence: u8,
    /// Confidence of a scored verdict before the score is added.
    pub confidence_base: u8,
    /// Leading lines searched for an embedded filename.
    pub header_scan_lines: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            max_binary_ratio: 0.05,
            strong_min: 8,
            margin: 3,
            fallback_confidence: 50,
            embedded_low_confidence: 60,
            embedded_ambiguous_confidence: 65,
            max_confidence: 95,
            confidence_base: 70,
            header_scan_lines: 20,
        }
    }
}

impl TextConfig {
    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.max_binary_ratio) {
            return Err(StscanError::InvalidConfig(format!(
                "max_binary_ratio must be within [0, 1], got {}",
                self.max_binary_ratio
            )));
        }
        let confidences = [
            ("fallback_confidence", self.fallback_confidence),
            ("embedded_low_confidence", self.embedded_low_confidence),
            ("embedded_ambiguous_confidence", self.embedded_ambiguous_confidence),
            ("max_confidence", self.max_confidence),
            ("confidence_base", self.confidence_base),
        ];
        for (name, value) in confidences {
            check_confidence(name, value)?;
        }
        Ok(())
    }
}

/// A headerless format recognized by exact byte length alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownSize {
    pub size: usize,
    pub extension: Extension,
    pub confidence: u8,
    pub description: String,
}

/// Table consulted by the size-only fallback, first entry wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackConfig {
    pub known_sizes: Vec<KnownSize>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            known_sizes: vec![KnownSize {
                size: 32_000,
                extension: Extension::Art,
                confidence: 60,
                description: "640x400 monochrome bitmap".to_string(),
            }],
        }
    }
}

impl FallbackConfig {
    fn validate(&self) -> Result<()> {
        for entry in &self.known_sizes {
            if entry.size == 0 {
                return Err(StscanError::InvalidConfig(
                    "known size entries must be non-zero".to_string(),
                ));
            }
            check_confidence("known_sizes.confidence", entry.confidence)?;
        }
        Ok(())
    }
}

fn check_confidence(name: &str, value: u8) -> Result<()> {
    if value > 100 {
        return Err(StscanError::InvalidConfig(format!(
            "{} must be at most 100, got {}",
            name, value
        )));
    }
    Ok(())
}
