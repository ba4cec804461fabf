//! Common test utilities and fixture builders.
//!
//! Fixtures are assembled byte by byte so every integration test documents
//! the exact layout it exercises.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Get the full path to a sample file
pub fn sample_file_path<P: AsRef<Path>>(relative_path: P) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(relative_path)
}

/// Read a sample file, panicking with its path when missing.
pub fn read_sample<P: AsRef<Path>>(relative_path: P) -> Vec<u8> {
    let path = sample_file_path(relative_path);
    std::fs::read(&path).unwrap_or_else(|e| panic!("read {}: {}", path.display(), e))
}

pub fn be16(v: u16) -> [u8; 2] {
    v.to_be_bytes()
}

pub fn be32(v: u32) -> [u8; 4] {
    v.to_be_bytes()
}

/// A classic ST palette: every entry within 0x0777.
pub const ST_PALETTE: [u16; 16] = [
    0x0777, 0x0700, 0x0070, 0x0007, 0x0770, 0x0707, 0x0077, 0x0555, 0x0333, 0x0733, 0x0373,
    0x0337, 0x0773, 0x0737, 0x0377, 0x0000,
];

pub fn palette_bytes(palette: &[u16; 16]) -> Vec<u8> {
    palette.iter().flat_map(|w| w.to_be_bytes()).collect()
}

/// RSC header with every offset and count zero, declaring `size` bytes.
pub fn empty_rsc(size: u16) -> Vec<u8> {
    let mut data = vec![0u8; 34];
    data.extend(be16(size));
    data.resize(size as usize, 0);
    data
}

/// DEGAS picture of `total` bytes (32034 or 32066).
pub fn degas(total: usize, resolution: u16, palette: &[u16; 16]) -> Vec<u8> {
    let mut data = be16(resolution).to_vec();
    data.extend(palette_bytes(palette));
    data.resize(total, 0);
    data
}

/// 32128-byte NEOchrome picture.
pub fn neochrome(resolution: u16) -> Vec<u8> {
    let mut data = be16(0).to_vec();
    data.extend(be16(resolution));
    data.extend(palette_bytes(&ST_PALETTE));
    data.extend(be16(0));
    data.extend(be16(0));
    data.extend(be16(320));
    data.extend(be16(200));
    data.resize(32_128, 0);
    data
}

/// PackBits stream for a 32000-byte screen: each scanline is a 128-byte
/// run followed by a 32-byte literal.
pub fn packbits_screen() -> Vec<u8> {
    let mut stream = Vec::new();
    for line in 0..200u32 {
        stream.extend([0x81, line as u8]);
        stream.push(31);
        stream.extend((0..32u8).map(|i| i.wrapping_mul(7)));
    }
    stream
}

/// DEGAS Elite compressed picture with the animation tables appended.
pub fn degas_compressed(resolution: u16) -> Vec<u8> {
    let mut data = be16(0x8000 | resolution).to_vec();
    data.extend(palette_bytes(&ST_PALETTE));
    data.extend(packbits_screen());
    data.extend([0u8; 32]);
    data
}

/// STAD picture whose stream expands to 32000 bytes of `fill`.
pub fn stad(fill: u8) -> Vec<u8> {
    let (id, pack, special) = (0xCD, 0x01, 0xAB);
    let mut data = b"pM85".to_vec();
    data.extend([id, pack, special]);
    for _ in 0..160 {
        data.extend([id, pack, 200, fill]);
    }
    data
}

/// Turbo-C object with the given segment sizes.
pub fn turbo_c_object(text: u32, data_len: u32, meta: u32) -> Vec<u8> {
    let mut data = vec![0x4E, 0xFA];
    data.extend(be16(0x1C));
    data.extend(be32(text));
    data.extend(be32(data_len));
    data.extend(be32(meta));
    data.extend(be32(0));
    data.resize(32, 0);
    data.resize(32 + (text + data_len + meta) as usize, 0x4E);
    data
}

/// Devpac object declaring `name`.
pub fn devpac_object(name: &str) -> Vec<u8> {
    let mut data = vec![0xFF, 0x65];
    data.extend(name.as_bytes());
    data.push(0);
    data.extend([0x01, 0x02, 0x03, 0x04, 0x00, 0x00, 0x00, 0x00]);
    data
}

/// GEMDOS program: header, TEXT/DATA, DRI symbols with `values`, then the
/// relocation tail.
pub fn gemdos(text: u32, data_len: u32, values: &[u32], relocation: &[u8]) -> Vec<u8> {
    let mut data = vec![0x60, 0x1A];
    data.extend(be32(text));
    data.extend(be32(data_len));
    data.extend(be32(0));
    data.extend(be32(values.len() as u32 * 14));
    data.extend([0u8; 10]);
    data.resize(28 + (text + data_len) as usize, 0x4E);
    for (i, value) in values.iter().enumerate() {
        let mut name = format!("_sym{:03}", i).into_bytes();
        name.resize(8, 0);
        data.extend(name);
        data.extend(be16(0xA200));
        data.extend(be32(*value));
    }
    data.extend(relocation);
    data
}
