//! The detection verdict shared by every detector and the cascade.

use super::extension::Extension;
use serde::{Deserialize, Serialize};

/// Auxiliary payload recovered from inside the fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Extra {
    /// A filename the fragment declares about itself, extension stripped
    /// (e.g. `"GEMBIND"` from a `/* GEMBIND.H ... */` header).
    EmbeddedName(String),
}

/// Outcome of a single detection.
///
/// `confidence` is only meaningful when `matched` is true; `reason` is
/// always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub matched: bool,
    pub extension: Option<Extension>,
    /// 0-100. 100 means the structural check is exact.
    pub confidence: u8,
    pub reason: String,
    pub extra: Option<Extra>,
}

impl DetectionResult {
    /// A positive verdict.
    pub fn matched(extension: Extension, confidence: u8, reason: impl Into<String>) -> Self {
        Self {
            matched: true,
            extension: Some(extension),
            confidence: confidence.min(100),
            reason: reason.into(),
            extra: None,
        }
    }

    /// A rejection with its justification.
    pub fn no_match(reason: impl Into<String>) -> Self {
        Self {
            matched: false,
            extension: None,
            confidence: 0,
            reason: reason.into(),
            extra: None,
        }
    }

    pub fn with_embedded_name(mut self, name: impl Into<String>) -> Self {
        self.extra = Some(Extra::EmbeddedName(name.into()));
        self
    }

    /// Extension tag, or `""` when unmatched.
    pub fn extension_tag(&self) -> &'static str {
        self.extension.map(|e| e.as_str()).unwrap_or("")
    }

    pub fn embedded_name(&self) -> Option<&str> {
        match &self.extra {
            Some(Extra::EmbeddedName(name)) => Some(name.as_str()),
            None => None,
        }
    }
}
