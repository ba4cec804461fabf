//! The closed catalogue of file extensions the engine can assign.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Format tag assigned to a recognized fragment.
///
/// Serialized as the uppercase tag used for the renamed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Extension {
    /// GEM resource file
    #[serde(rename = "RSC")]
    Rsc,
    /// Turbo-C / Pure-C object module
    #[serde(rename = "TCO")]
    Tco,
    /// Linkable object module (Devpac or GEMDOS/DRI)
    #[serde(rename = "O")]
    Object,
    /// GEMDOS executable (PRG/TOS/TTP/ACC)
    #[serde(rename = "PRG")]
    Prg,
    /// STAD compressed picture
    #[serde(rename = "PAC")]
    Pac,
    /// DEGAS low resolution
    #[serde(rename = "PI1")]
    Pi1,
    /// DEGAS medium resolution
    #[serde(rename = "PI2")]
    Pi2,
    /// DEGAS high resolution
    #[serde(rename = "PI3")]
    Pi3,
    /// DEGAS Elite compressed, low resolution
    #[serde(rename = "PC1")]
    Pc1,
    /// DEGAS Elite compressed, medium resolution
    #[serde(rename = "PC2")]
    Pc2,
    /// DEGAS Elite compressed, high resolution
    #[serde(rename = "PC3")]
    Pc3,
    /// NEOchrome picture
    #[serde(rename = "NEO")]
    Neo,
    /// GEM bit image
    #[serde(rename = "IMG")]
    Img,
    /// Headerless 640x400 monochrome bitmap
    #[serde(rename = "ART")]
    Art,
    /// C source
    #[serde(rename = "C")]
    C,
    /// C header
    #[serde(rename = "H")]
    H,
    /// 68000 assembly source
    #[serde(rename = "S")]
    S,
    /// INF configuration (DESKTOP.INF and friends)
    #[serde(rename = "INF")]
    Inf,
    /// Makefile
    #[serde(rename = "MAK")]
    Mak,
    /// Batch script
    #[serde(rename = "BAT")]
    Bat,
    /// Compiler project file
    #[serde(rename = "PRJ")]
    Prj,
    /// Resource definition script
    #[serde(rename = "RSD")]
    Rsd,
    /// Generic text
    #[serde(rename = "TXT")]
    Txt,
}

impl Extension {
    /// Uppercase tag, e.g. `"PI1"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Extension::Rsc => "RSC",
            Extension::Tco => "TCO",
            Extension::Object => "O",
            Extension::Prg => "PRG",
            Extension::Pac => "PAC",
            Extension::Pi1 => "PI1",
            Extension::Pi2 => "PI2",
            Extension::Pi3 => "PI3",
            Extension::Pc1 => "PC1",
            Extension::Pc2 => "PC2",
            Extension::Pc3 => "PC3",
            Extension::Neo => "NEO",
            Extension::Img => "IMG",
            Extension::Art => "ART",
            Extension::C => "C",
            Extension::H => "H",
            Extension::S => "S",
            Extension::Inf => "INF",
            Extension::Mak => "MAK",
            Extension::Bat => "BAT",
            Extension::Prj => "PRJ",
            Extension::Rsd => "RSD",
            Extension::Txt => "TXT",
        }
    }

    /// Source-like tags whose files commonly carry their own name in a
    /// comment header.
    pub fn is_source(&self) -> bool {
        matches!(self, Extension::C | Extension::H | Extension::S)
    }

    /// Uncompressed DEGAS tag for a resolution code (0, 1, 2).
    pub fn degas(resolution: u16) -> Option<Self> {
        match resolution {
            0 => Some(Extension::Pi1),
            1 => Some(Extension::Pi2),
            2 => Some(Extension::Pi3),
            _ => None,
        }
    }

    /// Compressed DEGAS Elite tag for a resolution code (0, 1, 2).
    pub fn degas_compressed(resolution: u16) -> Option<Self> {
        match resolution {
            0 => Some(Extension::Pc1),
            1 => Some(Extension::Pc2),
            2 => Some(Extension::Pc3),
            _ => None,
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
