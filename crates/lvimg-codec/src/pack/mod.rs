//! Per-format packing of pixel values into the output buffer.
//!
//! One packer per format family: [`TrueColorPacker`] for the RGB layouts,
//! [`AlphaPacker`] for the alpha-only depths, [`IndexedPacker`] for the
//! palette-index depths. The encoder pre-sizes the output buffer from the
//! format's size formula, so the sub-byte packers OR their bits into bytes
//! that are already zero.

mod alpha;
mod indexed;
mod true_color;

pub(crate) use alpha::AlphaPacker;
pub(crate) use indexed::IndexedPacker;
pub(crate) use true_color::TrueColorPacker;

/// Locate a sub-byte sample within its row: returns the byte offset from
/// the row start and the left-shift placing the sample MSB-first.
///
/// `bits` must be 1, 2 or 4.
#[inline]
pub(crate) fn bit_slot(x: u32, bits: u8) -> (usize, u8) {
    match bits {
        1 => ((x >> 3) as usize, 7 - (x & 0x7) as u8),
        2 => ((x >> 2) as usize, 6 - ((x & 0x3) as u8 * 2)),
        4 => ((x >> 1) as usize, 4 - ((x & 0x1) as u8 * 4)),
        _ => unreachable!("bit_slot is only defined for 1/2/4-bit samples"),
    }
}
