//! Format detectors and the ordered phases that group them.
//!
//! Every detector is a pure function of the fragment bytes. Families are
//! expressed as a [`Phase`]: an ordered list of detectors where the first
//! match wins. New formats are added by inserting a detector, not by
//! editing dispatch code.

pub mod executables;
pub mod fallback;
pub mod images;
pub mod resource;

use crate::core::DetectionResult;
use tracing::trace;

/// A single format check.
pub trait Detector: Send + Sync {
    /// Short stable name used in logs.
    fn name(&self) -> &'static str;

    /// Classify `data`. Must not panic on any input.
    fn detect(&self, data: &[u8]) -> DetectionResult;
}

/// An ordered group of detectors; the first match wins.
pub struct Phase {
    name: &'static str,
    detectors: Vec<Box<dyn Detector>>,
}

impl Phase {
    pub fn new(name: &'static str, detectors: Vec<Box<dyn Detector>>) -> Self {
        Self { name, detectors }
    }

    pub fn detectors(&self) -> &[Box<dyn Detector>] {
        &self.detectors
    }

    /// Append a detector at the lowest priority.
    pub fn push(&mut self, detector: Box<dyn Detector>) {
        self.detectors.push(detector);
    }
}

impl Detector for Phase {
    fn name(&self) -> &'static str {
        self.name
    }

    fn detect(&self, data: &[u8]) -> DetectionResult {
        for detector in &self.detectors {
            let result = detector.detect(data);
            if result.matched {
                return result;
            }
            trace!(
                phase = self.name,
                detector = detector.name(),
                reason = %result.reason,
                "Detector rejected fragment"
            );
        }
        DetectionResult::no_match(format!("No {} format matched", self.name))
    }
}
