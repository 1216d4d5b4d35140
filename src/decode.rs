//! PNG decoding into the codec's RGBA raster.
//!
//! Every PNG color type is expanded to 8-bit RGBA here so the rest of the
//! pipeline only ever sees one pixel layout.

use std::fs::File;
use std::path::Path;

use lvimg_codec::{Rgba, RgbaImage};
use tracing::debug;

use crate::error::ConvertError;

/// Decode a PNG file into an [`RgbaImage`].
pub fn decode_png(path: &Path) -> Result<RgbaImage, ConvertError> {
    let file = File::open(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut decoder = png::Decoder::new(file);
    // Expand palettes and low bit depths, add alpha from tRNS, drop 16-bit
    // down to 8 so every input reaches us as 8-bit samples.
    decoder.set_transformations(
        png::Transformations::EXPAND | png::Transformations::ALPHA | png::Transformations::STRIP_16,
    );

    let mut reader = decoder.read_info().map_err(|e| ConvertError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(|e| ConvertError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    buf.truncate(info.buffer_size());

    let pixels = match info.color_type {
        png::ColorType::Rgba => buf
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect(),
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .map(|px| Rgba::opaque(px[0], px[1], px[2]))
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .map(|px| Rgba::new(px[0], px[0], px[0], px[1]))
            .collect(),
        png::ColorType::Grayscale => buf.iter().map(|&v| Rgba::opaque(v, v, v)).collect(),
        other => {
            return Err(ConvertError::Decode {
                path: path.to_path_buf(),
                message: format!("unexpected color type {other:?} after expansion"),
            })
        }
    };

    debug!(
        path = %path.display(),
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "decoded PNG"
    );
    Ok(RgbaImage::new(info.width, info.height, pixels))
}
