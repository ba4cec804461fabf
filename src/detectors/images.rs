//! Atari ST raster image formats.
//!
//! Compressed formats are only accepted once their stream decodes to a
//! full 32000-byte screen.

use super::{Detector, Phase};
use crate::core::{DetectionResult, Extension};
use crate::decompress::{decode_scanlines, decode_stad, StadControls, SCREEN_BYTES};
use crate::formats::{palette_looks_valid, read_word_be, read_words_be, PALETTE_ENTRIES};
use tracing::trace;

const STAD_MIN_SIZE: usize = 20;
const STAD_MAGICS: [&[u8; 4]; 2] = [b"pM85", b"pM86"];
const STAD_DATA_OFFSET: usize = 7;

/// Resolution word, 16-entry palette, 32000-byte screen.
pub const DEGAS_SIZE: usize = 2 + 32 + SCREEN_BYTES;
/// DEGAS plus 32 bytes of colour-animation tables.
pub const DEGAS_ELITE_SIZE: usize = DEGAS_SIZE + 32;
/// 128-byte header plus the screen.
pub const NEO_SIZE: usize = 128 + SCREEN_BYTES;

const DEGAS_PALETTE_OFFSET: usize = 2;
const DEGAS_DATA_OFFSET: usize = 34;
const DEGAS_COMPRESSED_BIT: u16 = 0x8000;
const DEGAS_ANIMATION_SIZE: usize = 32;
/// Header, palette, animation tables and a minimal stream.
const DEGAS_COMPRESSED_MIN_SIZE: usize = 2 + 32 + 32 + 100;
const SCANLINES: usize = 200;
const SCANLINE_BYTES: usize = 160;

const NEO_PALETTE_OFFSET: usize = 4;
const NEO_RESERVED: std::ops::Range<usize> = 44..128;

const IMG_HEADER_MIN_WORDS: u16 = 8;
const IMG_MAX_DIMENSION: u16 = 4096;

fn resolution_ok(res: u16) -> bool {
    res <= 2
}

/// STAD compressed pictures (`pM85` / `pM86`).
pub struct StadDetector;

impl Detector for StadDetector {
    fn name(&self) -> &'static str {
        "stad"
    }

    fn detect(&self, data: &[u8]) -> DetectionResult {
        if data.len() < STAD_MIN_SIZE || !STAD_MAGICS.iter().any(|m| data.starts_with(*m)) {
            return DetectionResult::no_match("No STAD signature");
        }

        let controls = StadControls {
            id: data[4],
            pack: data[5],
            special: data[6],
        };
        if controls.id == controls.special {
            return DetectionResult::no_match("Invalid compression params");
        }

        match decode_stad(data, STAD_DATA_OFFSET, controls, SCREEN_BYTES) {
            Ok(_) => DetectionResult::matched(
                Extension::Pac,
                100,
                "Valid STAD PAC with successful decompression",
            ),
            Err(e) => {
                trace!(error = %e, "STAD stream rejected");
                DetectionResult::no_match(format!("Decompression failed: {}", e))
            }
        }
    }
}

/// Uncompressed DEGAS and DEGAS Elite pictures, told apart by exact size.
pub struct DegasDetector {
    size: usize,
    label: &'static str,
}

impl DegasDetector {
    pub fn classic() -> Self {
        Self {
            size: DEGAS_SIZE,
            label: "DEGAS",
        }
    }

    pub fn elite() -> Self {
        Self {
            size: DEGAS_ELITE_SIZE,
            label: "DEGAS Elite",
        }
    }
}

impl Detector for DegasDetector {
    fn name(&self) -> &'static str {
        if self.size == DEGAS_SIZE {
            "degas"
        } else {
            "degas-elite"
        }
    }

    fn detect(&self, data: &[u8]) -> DetectionResult {
        if data.len() != self.size {
            return DetectionResult::no_match(format!("Size is not {}", self.size));
        }

        let res = match read_word_be(data, 0) {
            Some(r) => r,
            None => return DetectionResult::no_match("Missing resolution word"),
        };
        let ext = match Extension::degas(res) {
            Some(ext) => ext,
            None => return DetectionResult::no_match(format!("Invalid resolution: {}", res)),
        };

        if !palette_looks_valid(data, DEGAS_PALETTE_OFFSET, PALETTE_ENTRIES) {
            return DetectionResult::no_match("Invalid palette");
        }

        DetectionResult::matched(
            ext,
            100,
            format!("Valid {} {} (resolution {})", self.label, ext, res),
        )
    }
}

/// NEOchrome pictures.
pub struct NeoDetector;

impl Detector for NeoDetector {
    fn name(&self) -> &'static str {
        "neochrome"
    }

    fn detect(&self, data: &[u8]) -> DetectionResult {
        if data.len() != NEO_SIZE {
            return DetectionResult::no_match(format!("Size is not {}", NEO_SIZE));
        }

        let (Some([flag, res]), Some([x, y, width, height])) =
            (read_words_be::<2>(data, 0), read_words_be::<4>(data, 36))
        else {
            return DetectionResult::no_match("Truncated NEOchrome header");
        };

        if flag != 0 {
            return DetectionResult::no_match("flag != 0");
        }
        if !resolution_ok(res) {
            return DetectionResult::no_match(format!("Invalid resolution: {}", res));
        }
        if x != 0 || y != 0 {
            return DetectionResult::no_match("Non-zero offset");
        }
        if width != 320 || height != 200 {
            return DetectionResult::no_match(format!(
                "Invalid dimensions: {}x{}",
                width, height
            ));
        }
        if !palette_looks_valid(data, NEO_PALETTE_OFFSET, PALETTE_ENTRIES) {
            return DetectionResult::no_match("Invalid palette");
        }

        let reserved = &data[NEO_RESERVED];
        let zeros = reserved.iter().filter(|&&b| b == 0).count();
        // at least 90% zero
        if zeros * 10 < reserved.len() * 9 {
            return DetectionResult::no_match("Reserved area not mostly zero");
        }

        DetectionResult::matched(Extension::Neo, 100, "Valid NEOchrome image")
    }
}

/// DEGAS Elite PackBits-compressed pictures.
pub struct DegasCompressedDetector;

impl Detector for DegasCompressedDetector {
    fn name(&self) -> &'static str {
        "degas-compressed"
    }

    fn detect(&self, data: &[u8]) -> DetectionResult {
        let size = data.len();
        if !(DEGAS_COMPRESSED_MIN_SIZE..DEGAS_ELITE_SIZE).contains(&size) {
            return DetectionResult::no_match("Size outside compressed DEGAS range");
        }

        let word = match read_word_be(data, 0) {
            Some(w) => w,
            None => return DetectionResult::no_match("Missing resolution word"),
        };
        if word & DEGAS_COMPRESSED_BIT == 0 {
            return DetectionResult::no_match("High bit not set");
        }
        let res = word & 0x0003;
        let ext = match Extension::degas_compressed(res) {
            Some(ext) => ext,
            None => return DetectionResult::no_match(format!("Invalid resolution: {}", res)),
        };

        if !palette_looks_valid(data, DEGAS_PALETTE_OFFSET, PALETTE_ENTRIES) {
            return DetectionResult::no_match("Invalid palette");
        }
        if size - DEGAS_ANIMATION_SIZE <= DEGAS_DATA_OFFSET {
            return DetectionResult::no_match("No room for compressed data");
        }

        // The stream may run into the trailing animation tables.
        match decode_scanlines(data, DEGAS_DATA_OFFSET, SCANLINES, SCANLINE_BYTES) {
            Ok(_) => DetectionResult::matched(
                ext,
                100,
                format!("Valid DEGAS Elite {} with successful decompression", ext),
            ),
            Err(e) => {
                trace!(error = %e, "PackBits stream rejected");
                DetectionResult::no_match(format!("Decompression failed: {}", e))
            }
        }
    }
}

/// GEM bit images, validated on header fields only.
pub struct GemImgDetector;

impl Detector for GemImgDetector {
    fn name(&self) -> &'static str {
        "gem-img"
    }

    fn detect(&self, data: &[u8]) -> DetectionResult {
        let Some([version, header_words, planes, _pattern, width, height, line_width, lines]) =
            read_words_be::<8>(data, 0)
        else {
            return DetectionResult::no_match("Too small for IMG header");
        };

        if version != 1 {
            return DetectionResult::no_match(format!("Version != 1: {}", version));
        }
        if header_words < IMG_HEADER_MIN_WORDS {
            return DetectionResult::no_match(format!(
                "Header length too small: {}",
                header_words
            ));
        }
        if !(1..=8).contains(&planes) {
            return DetectionResult::no_match(format!("Invalid planes: {}", planes));
        }
        if width == 0 || height == 0 {
            return DetectionResult::no_match("Zero dimensions");
        }
        if width > IMG_MAX_DIMENSION || height > IMG_MAX_DIMENSION {
            return DetectionResult::no_match("Dimensions too large");
        }
        if line_width == 0 || lines == 0 {
            return DetectionResult::no_match("Zero line dimensions");
        }
        if header_words as usize * 2 >= data.len() {
            return DetectionResult::no_match("Data offset >= file size");
        }

        DetectionResult::matched(
            Extension::Img,
            90,
            "Valid GEM IMG header (decode not verified)",
        )
    }
}

/// Phase 3 of the cascade: signatures, then exact sizes, then decode proofs,
/// then header-only IMG.
pub fn phase() -> Phase {
    Phase::new(
        "image",
        vec![
            Box::new(StadDetector),
            Box::new(DegasDetector::classic()),
            Box::new(DegasDetector::elite()),
            Box::new(NeoDetector),
            Box::new(DegasCompressedDetector),
            Box::new(GemImgDetector),
        ],
    )
}
