//! Last-resort identification of headerless binaries by exact size.

use super::{Detector, Phase};
use crate::config::{FallbackConfig, KnownSize};
use crate::core::DetectionResult;
use crate::text::is_text;

/// Matches non-text fragments whose length appears in the known-size table.
pub struct SizeFallbackDetector {
    known_sizes: Vec<KnownSize>,
    max_binary_ratio: f64,
}

impl SizeFallbackDetector {
    pub fn new(config: &FallbackConfig, max_binary_ratio: f64) -> Self {
        Self {
            known_sizes: config.known_sizes.clone(),
            max_binary_ratio,
        }
    }
}

impl Default for SizeFallbackDetector {
    fn default() -> Self {
        Self::new(&FallbackConfig::default(), 0.05)
    }
}

impl Detector for SizeFallbackDetector {
    fn name(&self) -> &'static str {
        "size-fallback"
    }

    fn detect(&self, data: &[u8]) -> DetectionResult {
        if is_text(data, self.max_binary_ratio) {
            return DetectionResult::no_match("Text content is not a headerless binary");
        }

        match self.known_sizes.iter().find(|k| k.size == data.len()) {
            Some(known) => DetectionResult::matched(
                known.extension,
                known.confidence,
                format!("Binary file, {} bytes ({})", known.size, known.description),
            ),
            None => DetectionResult::no_match(format!("No known format of {} bytes", data.len())),
        }
    }
}

/// Phase 5 of the cascade.
pub fn phase(config: &FallbackConfig, max_binary_ratio: f64) -> Phase {
    Phase::new(
        "size",
        vec![Box::new(SizeFallbackDetector::new(config, max_binary_ratio))],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Extension;

    #[test]
    fn test_32000_byte_binary_is_art() {
        let r = SizeFallbackDetector::default().detect(&vec![0u8; 32_000]);
        assert!(r.matched);
        assert_eq!(r.extension, Some(Extension::Art));
        assert_eq!(r.confidence, 60);
        assert_eq!(
            r.reason,
            "Binary file, 32000 bytes (640x400 monochrome bitmap)"
        );
    }

    #[test]
    fn test_text_of_known_size_is_refused() {
        let r = SizeFallbackDetector::default().detect(&vec![b'a'; 32_000]);
        assert!(!r.matched);
    }

    #[test]
    fn test_unknown_size() {
        let r = SizeFallbackDetector::default().detect(&[0u8; 31_999]);
        assert_eq!(r.reason, "No known format of 31999 bytes");
    }

    #[test]
    fn test_table_is_extensible() {
        let mut config = FallbackConfig::default();
        config.known_sizes.push(KnownSize {
            size: 8_000,
            extension: Extension::Img,
            confidence: 40,
            description: "test bitmap".to_string(),
        });
        let r = SizeFallbackDetector::new(&config, 0.05).detect(&[0xAAu8; 8_000]);
        assert_eq!(r.extension, Some(Extension::Img));
        assert_eq!(r.confidence, 40);
    }
}
