//! Floyd-Steinberg error diffusion for true-color conversions.
//!
//! One [`Ditherer`] instance lives for exactly one conversion. It keeps two
//! kinds of carry per channel:
//!
//! - a scalar carry to the next pixel in the current row (the 7/16 weight),
//!   reset at the start of every row, and
//! - a `width + 2` element row-carry array holding the error diffused into
//!   the *next* row (3/16 down-left, 5/16 down, 1/16 down-right). The extra
//!   two slots absorb diffusion past the row ends without bounds checks.
//!
//! The row array persists across rows; a cell is consumed (read, then
//! zeroed) when its pixel is processed. Quantization error is measured
//! against the raw source value, not the error-laden accumulator.

use crate::classify::RgbTargets;

/// Floyd-Steinberg weights over 16, applied with round-to-nearest.
#[inline]
fn weighted(err: i32, numerator: i32) -> i32 {
    ((numerator * err) as f32 / 16.0).round() as i32
}

/// Per-conversion error diffusion state for the three color channels.
pub(crate) struct Ditherer {
    targets: RgbTargets,
    /// Carry into the next pixel of the current row, one slot per channel.
    next: [i32; 3],
    /// Carry into the next row, indexed by column + 1, one array per channel.
    rows: [Vec<i32>; 3],
}

impl Ditherer {
    pub fn new(width: u32, targets: RgbTargets) -> Self {
        let len = width as usize + 2;
        Self {
            targets,
            next: [0; 3],
            rows: [vec![0; len], vec![0; len], vec![0; len]],
        }
    }

    /// Reset the in-row carry. Call before processing each row; the
    /// row-carry arrays deliberately survive so error keeps flowing
    /// downward.
    pub fn start_row(&mut self) {
        self.next = [0; 3];
    }

    /// Quantize one pixel's channels at column `x`, updating the carries.
    pub fn quantize(&mut self, r: u8, g: u8, b: u8, x: usize) -> (u8, u8, u8) {
        let targets = [self.targets.r, self.targets.g, self.targets.b];
        let input = [r as i32, g as i32, b as i32];
        let mut out = [0u8; 3];

        for c in 0..3 {
            let row = &mut self.rows[c];
            let acted = input[c] + self.next[c] + row[x + 1];
            row[x + 1] = 0;

            let quantized = targets[c].quantize(acted);
            let err = input[c] - quantized;

            self.next[c] = weighted(err, 7);
            row[x] += weighted(err, 3);
            row[x + 1] += weighted(err, 5);
            row[x + 2] += weighted(err, 1);

            out[c] = quantized as u8;
        }

        (out[0], out[1], out[2])
    }
}
