//! Low-level format primitives shared by the detectors.

pub mod palette;
pub mod utils;

pub use palette::{palette_is_strict_classic, palette_looks_valid, PALETTE_ENTRIES};
pub use utils::{read_long_be, read_signed_word_be, read_word_be, read_words_be, BigEndianRead};
