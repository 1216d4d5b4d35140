//! Packer for the four true-color byte layouts.

use crate::classify::RgbTargets;
use crate::dither::Ditherer;
use crate::format::ColorFormat;
use crate::image::Rgba;

/// Channel quantization strategy: error diffusion or direct classification.
enum Quantizer {
    Dithered(Ditherer),
    Direct(RgbTargets),
}

/// Packs quantized RGB(A) pixels for a concrete true-color layout.
pub(crate) struct TrueColorPacker {
    layout: ColorFormat,
    alpha_byte: bool,
    bytes_per_pixel: usize,
    quantizer: Quantizer,
}

impl TrueColorPacker {
    /// Create a packer for `layout` (one of the four true-color formats).
    pub fn new(layout: ColorFormat, width: u32, dither: bool, alpha_byte: bool) -> Self {
        let targets = RgbTargets::for_format(layout)
            .unwrap_or_else(|| unreachable!("{layout} is not a true-color layout"));
        Self {
            layout,
            alpha_byte,
            bytes_per_pixel: layout
                .bytes_per_pixel(alpha_byte)
                .unwrap_or_else(|| unreachable!()),
            quantizer: if dither {
                Quantizer::Dithered(Ditherer::new(width, targets))
            } else {
                Quantizer::Direct(targets)
            },
        }
    }

    /// Start a new scanline: resets the ditherer's in-row carry.
    pub fn start_row(&mut self) {
        if let Quantizer::Dithered(d) = &mut self.quantizer {
            d.start_row();
        }
    }

    /// Quantize `px` and write its bytes for position `(x, y)` into `out`.
    pub fn pack(&mut self, out: &mut [u8], px: Rgba, x: u32, y: u32, width: u32) {
        let (r, g, b) = match &mut self.quantizer {
            Quantizer::Dithered(d) => d.quantize(px.r, px.g, px.b, x as usize),
            Quantizer::Direct(t) => t.quantize(px.r, px.g, px.b),
        };

        let offset = (y as usize * width as usize + x as usize) * self.bytes_per_pixel;
        match self.layout {
            ColorFormat::TrueColor332 => {
                out[offset] = r | (g >> 3) | (b >> 6);
                if self.alpha_byte {
                    out[offset + 1] = px.a;
                }
            }
            ColorFormat::TrueColor565 | ColorFormat::TrueColor565Swap => {
                let c16 = ((r as u16) << 8) | ((g as u16) << 3) | ((b as u16) >> 3);
                let [lo, hi] = c16.to_le_bytes();
                if self.layout == ColorFormat::TrueColor565 {
                    out[offset] = lo;
                    out[offset + 1] = hi;
                } else {
                    out[offset] = hi;
                    out[offset + 1] = lo;
                }
                if self.alpha_byte {
                    out[offset + 2] = px.a;
                }
            }
            ColorFormat::TrueColor888 => {
                out[offset] = b;
                out[offset + 1] = g;
                out[offset + 2] = r;
                out[offset + 3] = px.a;
            }
            _ => unreachable!("constructor only accepts true-color layouts"),
        }
    }
}
