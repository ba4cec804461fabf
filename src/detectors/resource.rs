//! GEM resource files (.RSC).
//!
//! The 36-byte header declares the total file size, which makes this the
//! most reliable format in the catalogue.

use super::{Detector, Phase};
use crate::core::{DetectionResult, Extension};
use crate::formats::read_words_be;

/// Header length in bytes.
pub const RSC_HEADER_SIZE: usize = 36;

const OBJECT_SIZE: usize = 24;
const TEDINFO_SIZE: usize = 28;
const ICONBLK_SIZE: usize = 34;
const BITBLK_SIZE: usize = 14;
const TREE_INDEX_SIZE: usize = 2;

const MAX_OBJECTS: u16 = 10_000;
const MAX_TREES: u16 = 1_000;
const MAX_TEDINFOS: u16 = 1_000;

/// Parsed RSC header (`RSHDR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RscHeader {
    pub version: u16,
    pub object: u16,
    pub tedinfo: u16,
    pub iconblk: u16,
    pub bitblk: u16,
    pub frstr: u16,
    pub string: u16,
    pub imdata: u16,
    pub frimg: u16,
    pub trindex: u16,
    pub nobs: u16,
    pub ntree: u16,
    pub nted: u16,
    pub nib: u16,
    pub nbb: u16,
    pub nstring: u16,
    pub nimages: u16,
    pub rssize: u16,
}

impl RscHeader {
    pub fn parse(data: &[u8]) -> Option<Self> {
        let w = read_words_be::<18>(data, 0)?;
        Some(Self {
            version: w[0],
            object: w[1],
            tedinfo: w[2],
            iconblk: w[3],
            bitblk: w[4],
            frstr: w[5],
            string: w[6],
            imdata: w[7],
            frimg: w[8],
            trindex: w[9],
            nobs: w[10],
            ntree: w[11],
            nted: w[12],
            nib: w[13],
            nbb: w[14],
            nstring: w[15],
            nimages: w[16],
            rssize: w[17],
        })
    }

    fn offsets(&self) -> [u16; 9] {
        [
            self.object,
            self.tedinfo,
            self.iconblk,
            self.bitblk,
            self.frstr,
            self.string,
            self.imdata,
            self.frimg,
            self.trindex,
        ]
    }

    /// `(name, offset, count, entry size)` for each fixed-size table.
    fn tables(&self) -> [(&'static str, u16, u16, usize); 5] {
        [
            ("OBJECT", self.object, self.nobs, OBJECT_SIZE),
            ("TEDINFO", self.tedinfo, self.nted, TEDINFO_SIZE),
            ("ICONBLK", self.iconblk, self.nib, ICONBLK_SIZE),
            ("BITBLK", self.bitblk, self.nbb, BITBLK_SIZE),
            ("TREE index", self.trindex, self.ntree, TREE_INDEX_SIZE),
        ]
    }
}

/// Detector for GEM resource files.
pub struct RscDetector;

impl Detector for RscDetector {
    fn name(&self) -> &'static str {
        "rsc"
    }

    fn detect(&self, data: &[u8]) -> DetectionResult {
        let size = data.len();
        let header = match RscHeader::parse(data) {
            Some(h) => h,
            None => return DetectionResult::no_match("Too small for RSC header"),
        };

        if header.rssize as usize != size {
            return DetectionResult::no_match(format!(
                "RSC size field {} != file size {}",
                header.rssize, size
            ));
        }

        for offset in header.offsets() {
            let offset = offset as usize;
            if offset > 0 && offset < RSC_HEADER_SIZE {
                return DetectionResult::no_match("Invalid offset < 36");
            }
            if offset >= size {
                return DetectionResult::no_match("Offset >= file size");
            }
        }

        for (name, offset, count, entry_size) in header.tables() {
            if count > 0
                && offset > 0
                && offset as usize + count as usize * entry_size > size
            {
                return DetectionResult::no_match(format!("{} table overflows", name));
            }
        }

        if header.nobs > MAX_OBJECTS || header.ntree > MAX_TREES || header.nted > MAX_TEDINFOS {
            return DetectionResult::no_match("Unreasonable count values");
        }

        DetectionResult::matched(
            Extension::Rsc,
            100,
            "Valid RSC header with exact size match",
        )
    }
}

/// Phase 1 of the cascade.
pub fn phase() -> Phase {
    Phase::new("resource", vec![Box::new(RscDetector)])
}
