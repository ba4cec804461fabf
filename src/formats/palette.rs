//! ST/STE palette validation.
//!
//! A palette is a run of 16-bit `0x0RGB` words. The classic ST uses three
//! bits per channel, the STE four.

use super::utils::read_word_be;

/// Standard number of entries in an ST palette.
pub const PALETTE_ENTRIES: usize = 16;

const TWELVE_BIT_MASK: u16 = 0xF000;
const STE_CHANNEL_BITS: u16 = 0x0888;

/// Lenient check: at least half of the `count` entries are 12-bit colors.
///
/// Palettes are a weak signal next to size and resolution checks, so a few
/// damaged words are tolerated. Out-of-bounds reads fail the check.
pub fn palette_looks_valid(data: &[u8], offset: usize, count: usize) -> bool {
    match count_entries(data, offset, count, |w| w & TWELVE_BIT_MASK == 0) {
        Some(valid) => valid * 2 >= count,
        None => false,
    }
}

/// Strict check: every entry is a classic ST color (each channel <= 7).
pub fn palette_is_strict_classic(data: &[u8], offset: usize, count: usize) -> bool {
    match count_entries(data, offset, count, |w| {
        w & TWELVE_BIT_MASK == 0 && w & STE_CHANNEL_BITS == 0
    }) {
        Some(valid) => valid == count,
        None => false,
    }
}

fn count_entries(
    data: &[u8],
    offset: usize,
    count: usize,
    accept: impl Fn(u16) -> bool,
) -> Option<usize> {
    let mut valid = 0;
    for i in 0..count {
        let word = read_word_be(data, offset.checked_add(i * 2)?)?;
        if accept(word) {
            valid += 1;
        }
    }
    Some(valid)
}
