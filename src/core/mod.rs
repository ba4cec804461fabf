//! Core data types: the detection verdict and the extension catalogue.

pub mod extension;
pub mod result;

pub use extension::Extension;
pub use result::{DetectionResult, Extra};
