//! Error types for the stscan detection engine.
//!
//! Detection itself never fails: a rejected format is reported through
//! [`DetectionResult::no_match`](crate::core::DetectionResult::no_match).
//! Decoders carry their own [`DecodeError`](crate::decompress::DecodeError),
//! which detectors fold into a reason string. What is left to fail at the
//! crate level is building a cascade from user configuration.

use thiserror::Error;

/// Main error type for stscan operations.
#[derive(Debug, Error)]
pub enum StscanError {
    /// Configuration values outside their valid range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for stscan operations
pub type Result<T> = std::result::Result<T, StscanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StscanError::InvalidConfig("margin must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: margin must be positive"
        );
    }
}
