//! Fixed-size RGBA palette tables for the indexed formats.
//!
//! The external quantizer owns color reduction and index assignment; this
//! module only lays its ordered palette out as the fixed-size table the
//! target format expects. Entry order is load-bearing -- the pixel stream
//! references the table by position.

use crate::error::CodecError;
use crate::format::ColorFormat;
use crate::image::Rgb;

/// Color used to pad the table past the quantizer's actual color count.
const FILL: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

/// A palette table of exactly `palette_size(format)` RGBA entries.
///
/// Entries below the actual color count come from the quantizer in order;
/// the remainder is opaque white. Built once per conversion and immutable
/// afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteTable {
    entries: Vec<[u8; 4]>,
    color_count: usize,
}

impl PaletteTable {
    /// Build the table for an indexed format from the quantizer's palette.
    ///
    /// # Errors
    ///
    /// - [`CodecError::RgbaSourceRequired`] if `format` is not indexed
    ///   (non-indexed formats carry no palette).
    /// - [`CodecError::PaletteTooLarge`] if the quantizer produced more
    ///   colors than the format can index. The codec never re-quantizes;
    ///   an over-long palette means index values that cannot survive the
    ///   bit-width mask, so it is rejected outright.
    pub fn build(format: ColorFormat, colors: &[Rgb]) -> Result<Self, CodecError> {
        let size = format.palette_size();
        if size == 0 {
            return Err(CodecError::RgbaSourceRequired { format });
        }
        if colors.len() > size {
            return Err(CodecError::PaletteTooLarge {
                colors: colors.len(),
                max: size,
            });
        }

        let mut entries = Vec::with_capacity(size);
        for color in colors {
            entries.push([color.r, color.g, color.b, 0xFF]);
        }
        entries.resize(size, FILL);

        Ok(Self {
            entries,
            color_count: colors.len(),
        })
    }

    /// Number of entries in the table (the format's full palette size).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: indexed formats have at least a 2-entry table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries actually produced by the quantizer.
    #[inline]
    pub fn color_count(&self) -> usize {
        self.color_count
    }

    /// The RGBA entry at `index`.
    #[inline]
    pub fn entry(&self, index: usize) -> [u8; 4] {
        self.entries[index]
    }

    /// Serialize the table into the first `len() * 4` bytes of `out`.
    pub(crate) fn write_into(&self, out: &mut [u8]) {
        for (i, entry) in self.entries.iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(entry);
        }
    }
}
