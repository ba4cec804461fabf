//! Text recognition and decoding.
//!
//! Fragments are read as 7-bit ASCII: bytes at or above 0x80 are dropped
//! before any counting, so umlauts in a German comment neither help nor
//! hurt a source file.

/// Printable ASCII or one of the three whitespace controls text files use.
#[inline]
fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7E | b'\n' | b'\r' | b'\t')
}

/// True when at least `1 - max_binary_ratio` of the ASCII characters are
/// printable. Empty buffers, and buffers with no ASCII at all, are not text.
pub fn is_text(data: &[u8], max_binary_ratio: f64) -> bool {
    let (total, printable) = data
        .iter()
        .filter(|b| b.is_ascii())
        .fold((0usize, 0usize), |(total, printable), &b| {
            (total + 1, printable + is_printable(b) as usize)
        });

    if total == 0 {
        return false;
    }
    printable as f64 / total as f64 >= 1.0 - max_binary_ratio
}

/// Decode as ASCII, skipping bytes that are not.
pub fn decode_ascii(data: &[u8]) -> String {
    data.iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect()
}
