//! Tracker color and its persisted hex form.
//!
//! The UI only ever offers the fixed 18-color selection palette, so the
//! codec needs to be lossless exactly for those values. Stored form is
//! "#RRGGBB"; "#RRGGBBAA" is accepted on read with the alpha discarded.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The 18 selection colors offered by the tracker creation flow.
pub const SELECTION_PALETTE: [Rgb; 18] = [
    Rgb { r: 0xFD, g: 0x4C, b: 0x49 },
    Rgb { r: 0xFF, g: 0x88, b: 0x1E },
    Rgb { r: 0x00, g: 0x7B, b: 0xFA },
    Rgb { r: 0x6E, g: 0x44, b: 0xFE },
    Rgb { r: 0x33, g: 0xCF, b: 0x69 },
    Rgb { r: 0xE6, g: 0x6D, b: 0xD4 },
    Rgb { r: 0xF9, g: 0xD4, b: 0xD4 },
    Rgb { r: 0x34, g: 0xA7, b: 0xFE },
    Rgb { r: 0x46, g: 0xE6, b: 0x9D },
    Rgb { r: 0x35, g: 0x34, b: 0x7C },
    Rgb { r: 0xFF, g: 0x67, b: 0x4D },
    Rgb { r: 0xFF, g: 0x99, b: 0xCC },
    Rgb { r: 0xF6, g: 0xC4, b: 0x8B },
    Rgb { r: 0x79, g: 0x94, b: 0xF5 },
    Rgb { r: 0x83, g: 0x2C, b: 0xF1 },
    Rgb { r: 0xAD, g: 0x56, b: 0xDA },
    Rgb { r: 0x8D, g: 0x72, b: 0xE3 },
    Rgb { r: 0x2F, g: 0xD0, b: 0x58 },
];

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn from_hex(s: &str) -> AppResult<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        // Accept RRGGBB and RRGGBBAA (alpha ignored). The ASCII check
        // keeps the fixed-offset slices below on char boundaries.
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(AppError::DecodeColor(s.to_string()));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| AppError::DecodeColor(s.to_string()))
        };
        Ok(Rgb {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }

    /// Resolve a CLI color argument: either a 1-based palette index
    /// ("1".."18") or an explicit hex string.
    pub fn from_arg(s: &str) -> AppResult<Self> {
        if let Ok(n) = s.parse::<usize>() {
            return SELECTION_PALETTE
                .get(n.wrapping_sub(1))
                .copied()
                .ok_or_else(|| {
                    AppError::InvalidColor(format!("palette index out of range (1-18): {}", n))
                });
        }
        Self::from_hex(s).map_err(|_| AppError::InvalidColor(s.to_string()))
    }
}
