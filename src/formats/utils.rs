//! Bounds-checked big-endian readers.
//!
//! Everything on the ST is Motorola byte order. Reads past the end yield
//! `None`; callers treat that as a failed format check.

/// Trait for reading big-endian values at an offset
pub trait BigEndianRead {
    fn read_u16_be(&self, offset: usize) -> Option<u16>;
    fn read_u32_be(&self, offset: usize) -> Option<u32>;
    fn read_i16_be(&self, offset: usize) -> Option<i16>;
}

impl BigEndianRead for [u8] {
    fn read_u16_be(&self, offset: usize) -> Option<u16> {
        let bytes = self.get(offset..offset.checked_add(2)?)?;
        Some(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn read_u32_be(&self, offset: usize) -> Option<u32> {
        let bytes = self.get(offset..offset.checked_add(4)?)?;
        Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_i16_be(&self, offset: usize) -> Option<i16> {
        self.read_u16_be(offset).map(|v| v as i16)
    }
}

/// Read a big-endian 16-bit word.
pub fn read_word_be(data: &[u8], offset: usize) -> Option<u16> {
    data.read_u16_be(offset)
}

/// Read a big-endian 32-bit long.
pub fn read_long_be(data: &[u8], offset: usize) -> Option<u32> {
    data.read_u32_be(offset)
}

/// Read a big-endian signed 16-bit word.
pub fn read_signed_word_be(data: &[u8], offset: usize) -> Option<i16> {
    data.read_i16_be(offset)
}

/// Read `N` consecutive words starting at `offset`, all or nothing.
pub fn read_words_be<const N: usize>(data: &[u8], offset: usize) -> Option<[u16; N]> {
    let mut out = [0u16; N];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = data.read_u16_be(offset.checked_add(i * 2)?)?;
    }
    Some(out)
}
