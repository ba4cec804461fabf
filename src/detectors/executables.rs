//! Executables and object modules.
//!
//! - Turbo-C / Pure-C objects (`0x4EFA`): exact size formula
//! - HiSoft Devpac objects (`FF 65`): magic plus embedded module name
//! - GEMDOS programs (`0x601A`): PRG or DRI object, told apart by the
//!   relocation stream and symbol tagging

use super::{Detector, Phase};
use crate::core::{DetectionResult, Extension};
use crate::formats::{read_long_be, read_signed_word_be, read_word_be};
use tracing::debug;

const TCO_MAGIC: u16 = 0x4EFA;
const TCO_HEADER_SIZE: u64 = 32;
const TCO_MAX_SEGMENT: u32 = 10 * 1024 * 1024;

const DEVPAC_MAGIC: [u8; 2] = [0xFF, 0x65];
const DEVPAC_MIN_SIZE: usize = 10;
const DEVPAC_MAX_SIZE: usize = 5 * 1024 * 1024;
const DEVPAC_MAX_NAME_SCAN: usize = 64;
const DEVPAC_MAX_NAME_LEN: usize = 32;

const GEMDOS_MAGIC: u16 = 0x601A;
/// GEMDOS program header length; TEXT starts here.
pub const GEMDOS_HEADER_SIZE: u64 = 0x1C;
const GEMDOS_MAX_SEGMENT: u32 = 20 * 1024 * 1024;
/// DRI symbol table record size.
pub const DRI_SYMBOL_SIZE: u64 = 14;
/// Name (8 bytes) and type word precede the value long.
const DRI_SYMBOL_VALUE_OFFSET: u64 = 10;
const SYMBOLS_CHECKED: u64 = 20;
const TAGGED_BIT: u32 = 0x8000_0000;

/// Turbo-C / Pure-C object files.
pub struct TurboCObjectDetector;

impl Detector for TurboCObjectDetector {
    fn name(&self) -> &'static str {
        "turbo-c-object"
    }

    fn detect(&self, data: &[u8]) -> DetectionResult {
        let size = data.len() as u64;
        if size < TCO_HEADER_SIZE || read_word_be(data, 0) != Some(TCO_MAGIC) {
            return DetectionResult::no_match("No Turbo-C magic");
        }

        let (Some(displacement), Some(tlen), Some(dlen), Some(blen), Some(slen)) = (
            read_signed_word_be(data, 0x02),
            read_long_be(data, 0x04),
            read_long_be(data, 0x08),
            // stored metadata size rather than BSS
            read_long_be(data, 0x0C),
            read_long_be(data, 0x10),
        ) else {
            return DetectionResult::no_match("Truncated Turbo-C header");
        };

        if slen != 0 {
            return DetectionResult::no_match("slen not zero");
        }

        let expected = TCO_HEADER_SIZE + tlen as u64 + dlen as u64 + blen as u64;
        if expected != size {
            return DetectionResult::no_match(format!(
                "Size mismatch: expected {}, got {}",
                expected, size
            ));
        }

        let entry = 4 + displacement as i64;
        if entry < 0 || entry as u64 > size {
            return DetectionResult::no_match("Invalid entry point");
        }

        if [tlen, dlen, blen].iter().any(|&len| len > TCO_MAX_SEGMENT) {
            return DetectionResult::no_match("Segment size too large");
        }

        DetectionResult::matched(
            Extension::Tco,
            100,
            "Valid Turbo-C object with exact size match",
        )
    }
}

/// HiSoft Devpac object files.
pub struct DevpacObjectDetector;

impl DevpacObjectDetector {
    /// Module name declared after the magic, extension stripped.
    pub fn embedded_name(data: &[u8]) -> Result<String, &'static str> {
        let scan_len = DEVPAC_MAX_NAME_SCAN.min(data.len().saturating_sub(3));
        let window = data.get(2..2 + scan_len).ok_or("No filename terminator found")?;
        let end = memchr::memchr(0, window).ok_or("No filename terminator found")?;
        let raw = &window[..end];

        if !raw.iter().all(|b| (0x20..0x7F).contains(b)) {
            return Err("Non-printable filename");
        }
        // all bytes are ASCII, so this cannot fail
        let name = std::str::from_utf8(raw).map_err(|_| "Non-printable filename")?;
        let stem = match name.rfind('.') {
            Some(dot) => &name[..dot],
            None => name,
        };

        if stem.is_empty() || stem.len() > DEVPAC_MAX_NAME_LEN {
            return Err("Invalid filename length");
        }
        Ok(stem.to_string())
    }
}

impl Detector for DevpacObjectDetector {
    fn name(&self) -> &'static str {
        "devpac-object"
    }

    fn detect(&self, data: &[u8]) -> DetectionResult {
        if data.len() < DEVPAC_MIN_SIZE || data[..2] != DEVPAC_MAGIC {
            return DetectionResult::no_match("No Devpac magic");
        }
        if data.len() > DEVPAC_MAX_SIZE {
            return DetectionResult::no_match("File too large for Devpac object");
        }

        match Self::embedded_name(data) {
            Ok(name) => DetectionResult::matched(
                Extension::Object,
                95,
                format!("Devpac object with embedded name: {}", name),
            )
            .with_embedded_name(name),
            Err(reason) => DetectionResult::no_match(reason),
        }
    }
}

/// GEMDOS program header (`PH`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramHeader {
    pub text: u32,
    pub data: u32,
    pub bss: u32,
    pub symbols: u32,
}

impl ProgramHeader {
    pub fn parse(data: &[u8]) -> Option<Self> {
        if read_word_be(data, 0)? != GEMDOS_MAGIC || data.len() < GEMDOS_HEADER_SIZE as usize {
            return None;
        }
        Some(Self {
            text: read_long_be(data, 0x02)?,
            data: read_long_be(data, 0x06)?,
            bss: read_long_be(data, 0x0A)?,
            symbols: read_long_be(data, 0x0E)?,
        })
    }

    /// Offset of the symbol table.
    pub fn symbols_offset(&self) -> u64 {
        GEMDOS_HEADER_SIZE + self.text as u64 + self.data as u64
    }

    /// Offset of the relocation stream.
    pub fn relocation_offset(&self) -> u64 {
        self.symbols_offset() + self.symbols as u64
    }
}

/// What the first relocation long says about the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relocation {
    /// No bytes after the symbol table.
    Absent,
    /// First offset is zero: no fixups.
    Empty,
    /// A runtime offset inside TEXT+DATA.
    Valid(u32),
    /// An offset past TEXT+DATA, typical of linker-internal layouts.
    Invalid(u32),
}

impl Relocation {
    pub fn inspect(data: &[u8], header: &ProgramHeader) -> Self {
        let start = header.relocation_offset();
        if start >= data.len() as u64 {
            return Relocation::Absent;
        }
        match read_long_be(data, start as usize) {
            None => Relocation::Absent,
            Some(0) => Relocation::Empty,
            Some(first) if (first as u64) < header.text as u64 + header.data as u64 => {
                Relocation::Valid(first)
            }
            Some(first) => Relocation::Invalid(first),
        }
    }
}

/// Tagged-value census over the leading DRI symbol records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolTagging {
    pub checked: u32,
    pub tagged: u32,
}

impl SymbolTagging {
    /// `None` when the symbol table is absent or not DRI-shaped.
    pub fn inspect(data: &[u8], header: &ProgramHeader) -> Option<Self> {
        let slen = header.symbols as u64;
        if slen == 0 || slen % DRI_SYMBOL_SIZE != 0 {
            return None;
        }

        let checked = (slen / DRI_SYMBOL_SIZE).min(SYMBOLS_CHECKED);
        let base = header.symbols_offset();
        let mut tagged = 0;
        for i in 0..checked {
            let record = base + i * DRI_SYMBOL_SIZE;
            if record + DRI_SYMBOL_SIZE > data.len() as u64 {
                continue;
            }
            if let Some(value) = read_long_be(data, (record + DRI_SYMBOL_VALUE_OFFSET) as usize) {
                if value & TAGGED_BIT != 0 {
                    tagged += 1;
                }
            }
        }
        Some(Self {
            checked: checked as u32,
            tagged,
        })
    }

    /// At least a third of the checked symbols carry the tag bit.
    pub fn indicates_object(&self) -> bool {
        self.checked > 0 && self.tagged * 3 >= self.checked
    }
}

/// GEMDOS programs and DRI object modules sharing the `0x601A` magic.
pub struct GemdosDetector;

impl Detector for GemdosDetector {
    fn name(&self) -> &'static str {
        "gemdos"
    }

    fn detect(&self, data: &[u8]) -> DetectionResult {
        let header = match ProgramHeader::parse(data) {
            Some(h) => h,
            None => return DetectionResult::no_match("No GEMDOS magic"),
        };

        if (data.len() as u64) < header.relocation_offset() {
            return DetectionResult::no_match("File too small for header values");
        }
        if [header.text, header.data, header.symbols]
            .iter()
            .any(|&len| len > GEMDOS_MAX_SEGMENT)
        {
            return DetectionResult::no_match("Segment size unreasonable");
        }
        if header.bss > GEMDOS_MAX_SEGMENT {
            return DetectionResult::no_match("BSS size unreasonable");
        }

        // Linked programs may keep tagged symbols from their object modules,
        // so a valid relocation stream settles it before symbols are read.
        let relocation = Relocation::inspect(data, &header);
        if let Relocation::Valid(first) = relocation {
            debug!(first_fixup = first, "GEMDOS relocation stream is valid");
            return DetectionResult::matched(
                Extension::Prg,
                92,
                "GEMDOS executable (valid relocation stream)",
            );
        }

        if let Some(tagging) = SymbolTagging::inspect(data, &header) {
            if tagging.indicates_object() {
                return if matches!(relocation, Relocation::Invalid(_)) {
                    DetectionResult::matched(
                        Extension::Object,
                        98,
                        "GEMDOS object (.O): Tagged symbols + invalid relocation",
                    )
                } else {
                    DetectionResult::matched(
                        Extension::Object,
                        95,
                        format!(
                            "GEMDOS object (.O): DRI symbols with tagged values ({}/{})",
                            tagging.tagged, tagging.checked
                        ),
                    )
                };
            }
        }

        DetectionResult::matched(
            Extension::Prg,
            92,
            "GEMDOS executable (PRG/TOS/TTP/ACC)",
        )
    }
}

/// Phase 2 of the cascade, most specific format first.
pub fn phase() -> Phase {
    Phase::new(
        "executable",
        vec![
            Box::new(TurboCObjectDetector),
            Box::new(DevpacObjectDetector),
            Box::new(GemdosDetector),
        ],
    )
}
