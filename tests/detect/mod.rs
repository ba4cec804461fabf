//! End-to-end detection through the standard cascade.

mod binaries;
mod determinism_json;
mod images;
mod properties;
mod text_samples;
