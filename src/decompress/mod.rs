//! Byte-stream decoders used as proof of format identity.
//!
//! A compressed picture is only accepted when its payload decodes to the
//! exact screen size. A decoder that stops short or would overrun is an
//! error, never a partial buffer.

pub mod packbits;
pub mod stad;

use thiserror::Error;

pub use packbits::{decode_scanline, decode_scanlines};
pub use stad::{decode_stad, StadControls};

/// Size of one ST screen in bytes (low, medium and high resolution alike).
pub const SCREEN_BYTES: usize = 32_000;

/// Why a decode was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("literal run of {needed} bytes at offset {offset:#x} exceeds input")]
    TruncatedLiteral { offset: usize, needed: usize },

    #[error("run at offset {offset:#x} is missing its operand")]
    TruncatedRun { offset: usize },

    #[error("run at offset {offset:#x} overflows output ({produced} + {count} > {expected})")]
    Overflow {
        offset: usize,
        produced: usize,
        count: usize,
        expected: usize,
    },

    #[error("unknown control byte {control:#04x} at offset {offset:#x}")]
    UnknownControl { offset: usize, control: u8 },

    #[error("input exhausted at offset {offset:#x}")]
    InputExhausted { offset: usize },

    #[error("decoded {produced} bytes, expected {expected}")]
    LengthMismatch { produced: usize, expected: usize },
}
