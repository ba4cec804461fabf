//! File-type identification for unlabeled Atari ST disk fragments.
//!
//! [`detect`] runs the standard cascade over a byte buffer and returns a
//! [`DetectionResult`]: the assigned extension, a 0-100 confidence, the
//! reason, and optionally a filename recovered from inside the fragment.
//!
//! ```
//! let r = stscan::detect(b"#include <stdio.h>\n\nint main()\n{\n    printf(\"hi\\n\");\n    return 0;\n}\n");
//! assert_eq!(r.extension_tag(), "C");
//! ```

/// Result types and the extension catalogue
pub mod core;

pub mod cascade;
pub mod config;
pub mod decompress;
pub mod detectors;
pub mod error;
pub mod formats;
pub mod logging;
pub mod text;

pub use crate::cascade::Cascade;
pub use crate::config::DetectorConfig;
pub use crate::core::{DetectionResult, Extension, Extra};
pub use crate::error::{Result, StscanError};

use once_cell::sync::Lazy;

static STANDARD: Lazy<Cascade> = Lazy::new(Cascade::standard);

/// Classify `data` with the standard cascade.
pub fn detect(data: &[u8]) -> DetectionResult {
    STANDARD.detect(data)
}
