//! The master cascade.
//!
//! Phases run from most to least structurally certain:
//! resource → executables → images → text → size fallback.
//! The first phase that matches ends the search; there is no comparison of
//! confidences across phases.

use crate::config::DetectorConfig;
use crate::core::DetectionResult;
use crate::detectors::{executables, fallback, images, resource, Detector};
use crate::error::Result;
use crate::span_trace;
use crate::text;
use tracing::debug;

/// An ordered list of phases.
pub struct Cascade {
    phases: Vec<Box<dyn Detector>>,
}

impl Cascade {
    /// The standard five-phase cascade with default thresholds.
    pub fn standard() -> Self {
        Self::build(&DetectorConfig::default())
    }

    /// The standard cascade with custom thresholds.
    pub fn with_config(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(&config))
    }

    /// A cascade over arbitrary phases, tried in the given order.
    pub fn from_phases(phases: Vec<Box<dyn Detector>>) -> Self {
        Self { phases }
    }

    fn build(config: &DetectorConfig) -> Self {
        Self::from_phases(vec![
            Box::new(resource::phase()),
            Box::new(executables::phase()),
            Box::new(images::phase()),
            Box::new(text::phase(config.text.clone())),
            Box::new(fallback::phase(
                &config.fallback,
                config.text.max_binary_ratio,
            )),
        ])
    }

    /// Phase names in evaluation order.
    pub fn phase_names(&self) -> Vec<&'static str> {
        self.phases.iter().map(|p| p.name()).collect()
    }

    /// Classify one fragment.
    pub fn detect(&self, data: &[u8]) -> DetectionResult {
        let span = span_trace!("detect", size = data.len());
        let _guard = span.enter();

        if data.is_empty() {
            return DetectionResult::no_match("Empty file");
        }

        for phase in &self.phases {
            let result = phase.detect(data);
            if result.matched {
                debug!(
                    phase = phase.name(),
                    extension = result.extension_tag(),
                    confidence = result.confidence,
                    size = data.len(),
                    "Fragment classified"
                );
                return result;
            }
        }

        debug!(size = data.len(), "No phase matched");
        DetectionResult::no_match("No matching file type detected")
    }
}

impl Default for Cascade {
    fn default() -> Self {
        Self::standard()
    }
}

impl Detector for Cascade {
    fn name(&self) -> &'static str {
        "cascade"
    }

    fn detect(&self, data: &[u8]) -> DetectionResult {
        Cascade::detect(self, data)
    }
}
