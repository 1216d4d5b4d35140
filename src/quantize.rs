//! Color quantization for the indexed formats.
//!
//! The codec consumes a finished palette plus per-pixel indices; producing
//! them is this module's job, delegated to libimagequant. Quantizer-level
//! dithering happens here during remapping -- the codec itself never
//! dithers indexed content.

use lvimg_codec::{IndexedImage, Rgb, RgbaImage, SourceImage};
use tracing::debug;

use crate::error::ConvertError;

/// Reduce `image` to at most `max_colors` colors and assign every pixel a
/// palette index.
pub fn quantize(image: &RgbaImage, max_colors: usize) -> Result<IndexedImage, ConvertError> {
    let pixels: Vec<imagequant::RGBA> = image
        .pixels()
        .iter()
        .map(|px| imagequant::RGBA::new(px.r, px.g, px.b, px.a))
        .collect();

    let width = image.width();
    let height = image.height();

    let mut liq = imagequant::new();
    liq.set_max_colors(max_colors as u32)
        .map_err(|e| ConvertError::Quantize(e.to_string()))?;

    let mut img = liq
        .new_image(&pixels[..], width as usize, height as usize, 0.0)
        .map_err(|e| ConvertError::Quantize(e.to_string()))?;

    let mut result = liq
        .quantize(&mut img)
        .map_err(|e| ConvertError::Quantize(e.to_string()))?;
    result
        .set_dithering_level(1.0)
        .map_err(|e| ConvertError::Quantize(e.to_string()))?;

    let (palette, indices) = result
        .remapped(&mut img)
        .map_err(|e| ConvertError::Quantize(e.to_string()))?;

    debug!(
        width,
        height,
        colors = palette.len(),
        requested = max_colors,
        "quantized image"
    );

    let palette: Vec<Rgb> = palette.iter().map(|c| Rgb::new(c.r, c.g, c.b)).collect();
    Ok(IndexedImage::new(width, height, palette, indices))
}
