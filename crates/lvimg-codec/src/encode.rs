//! The conversion entry point: [`ImageEncoder`] drives the per-format
//! packers over a source image and produces an [`EncodedImage`].

use tracing::debug;

use crate::error::CodecError;
use crate::format::ColorFormat;
use crate::image::{IndexedImage, SourceImage};
use crate::pack::{AlphaPacker, IndexedPacker, TrueColorPacker};
use crate::palette::PaletteTable;

/// Conversion builder: target format plus options.
///
/// Configuration methods consume and return `self`; the encode methods take
/// `&self`, so one encoder can convert any number of images. Dithering is
/// on by default and only affects true-color formats. `alpha_byte` appends
/// the source alpha after each true-color pixel (RGB888 always stores its
/// alpha and ignores the flag).
///
/// # Example
///
/// ```
/// use lvimg_codec::{ColorFormat, ImageEncoder, Rgba, RgbaImage};
///
/// let image = RgbaImage::filled(4, 4, Rgba::opaque(128, 128, 128));
/// let encoder = ImageEncoder::new(ColorFormat::TrueColor565).dither(false);
/// let encoded = encoder.encode(&image).unwrap();
///
/// assert_eq!(encoded.data().len(), 4 * 4 * 2);
/// ```
#[derive(Debug, Clone)]
pub struct ImageEncoder {
    format: ColorFormat,
    dither: bool,
    alpha_byte: bool,
}

impl ImageEncoder {
    /// Create an encoder for `format` with dithering enabled and no alpha
    /// byte.
    pub fn new(format: ColorFormat) -> Self {
        Self {
            format,
            dither: true,
            alpha_byte: false,
        }
    }

    /// Enable or disable error-diffusion dithering (true-color only).
    #[inline]
    pub fn dither(mut self, enabled: bool) -> Self {
        self.dither = enabled;
        self
    }

    /// Append the source alpha value after each true-color pixel.
    #[inline]
    pub fn alpha_byte(mut self, enabled: bool) -> Self {
        self.alpha_byte = enabled;
        self
    }

    /// The target format.
    #[inline]
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// Encode a decoded RGBA raster.
    ///
    /// Valid for the true-color and alpha formats. Indexed formats need
    /// quantizer output ([`encode_indexed`](Self::encode_indexed)) and raw
    /// formats need the source file bytes ([`encode_raw`](Self::encode_raw)).
    pub fn encode(&self, image: &dyn SourceImage) -> Result<EncodedImage, CodecError> {
        let (width, height) = (image.width(), image.height());

        if self.format.is_true_color() {
            let size = self
                .format
                .data_size(width, height, self.alpha_byte)
                .unwrap_or(0);
            let mut data = vec![0u8; size];
            let mut packer =
                TrueColorPacker::new(self.format, width, self.dither, self.alpha_byte);
            for y in 0..height {
                packer.start_row();
                for x in 0..width {
                    packer.pack(&mut data, image.pixel(x, y), x, y, width);
                }
            }
            debug!(format = %self.format, width, height, bytes = data.len(), "encoded raster");
            return Ok(self.finish(width, height, data));
        }

        if self.format.is_alpha() {
            let size = self.format.data_size(width, height, false).unwrap_or(0);
            let mut data = vec![0u8; size];
            let packer = AlphaPacker::new(self.format, width);
            for y in 0..height {
                for x in 0..width {
                    packer.pack(&mut data, image.pixel(x, y).a, x, y);
                }
            }
            debug!(format = %self.format, width, height, bytes = data.len(), "encoded raster");
            return Ok(self.finish(width, height, data));
        }

        if self.format.is_indexed() {
            return Err(CodecError::PaletteRequired {
                format: self.format,
            });
        }
        if self.format.is_raw() {
            return Err(CodecError::RawSourceRequired {
                format: self.format,
            });
        }
        Err(CodecError::UnsupportedFormat {
            format: self.format,
        })
    }

    /// Encode quantizer output for an indexed format.
    ///
    /// The palette is laid out first (4 bytes per entry, white-filled to
    /// the format's table size), followed by the packed index stream. The
    /// quantizer must not produce more colors than the format can index.
    pub fn encode_indexed(&self, image: &IndexedImage) -> Result<EncodedImage, CodecError> {
        if !self.format.is_indexed() {
            return if self.format.is_aggregate() {
                Err(CodecError::UnsupportedFormat {
                    format: self.format,
                })
            } else {
                Err(CodecError::RgbaSourceRequired {
                    format: self.format,
                })
            };
        }

        let (width, height) = (image.width(), image.height());
        let table = PaletteTable::build(self.format, image.palette())?;

        let size = self.format.data_size(width, height, false).unwrap_or(0);
        let mut data = vec![0u8; size];
        table.write_into(&mut data);

        let packer = IndexedPacker::new(self.format, width);
        for y in 0..height {
            for x in 0..width {
                packer.pack(&mut data, image.index_at(x, y), x, y);
            }
        }
        debug!(
            format = %self.format,
            width,
            height,
            colors = table.color_count(),
            bytes = data.len(),
            "encoded indexed raster"
        );
        Ok(self.finish(width, height, data))
    }

    /// Wrap the source file bytes verbatim for a raw format.
    ///
    /// Raw formats perform no pixel iteration; the dimensions are only
    /// carried into the output metadata (the binary header needs them).
    pub fn encode_raw(
        &self,
        bytes: &[u8],
        width: u32,
        height: u32,
    ) -> Result<EncodedImage, CodecError> {
        if !self.format.is_raw() {
            return if self.format.is_aggregate() {
                Err(CodecError::UnsupportedFormat {
                    format: self.format,
                })
            } else if self.format.is_indexed() {
                Err(CodecError::PaletteRequired {
                    format: self.format,
                })
            } else {
                Err(CodecError::RgbaSourceRequired {
                    format: self.format,
                })
            };
        }
        debug!(format = %self.format, bytes = bytes.len(), "copied raw payload");
        Ok(self.finish(width, height, bytes.to_vec()))
    }

    fn finish(&self, width: u32, height: u32, data: Vec<u8>) -> EncodedImage {
        EncodedImage {
            format: self.format,
            width,
            height,
            alpha_byte: self.alpha_byte,
            data,
        }
    }
}

/// The finished conversion: the packed byte buffer plus the metadata both
/// serializers need.
///
/// For indexed formats the first `palette_size * 4` bytes are the
/// serialized palette; everything after is packed pixel data. For raw
/// formats the buffer is the source file verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    format: ColorFormat,
    width: u32,
    height: u32,
    alpha_byte: bool,
    data: Vec<u8>,
}

impl EncodedImage {
    /// The format this buffer was packed for.
    #[inline]
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether true-color pixels carry a trailing alpha byte.
    #[inline]
    pub fn has_alpha_byte(&self) -> bool {
        self.alpha_byte
    }

    /// The packed bytes (palette prefix included for indexed formats).
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Serialized palette length in bytes (0 for non-indexed formats).
    #[inline]
    pub fn palette_bytes(&self) -> usize {
        self.format.palette_bytes()
    }

    /// The format tag the descriptor advertises.
    ///
    /// Concrete true-color layouts are depth-specific detail the consumer
    /// resolves at compile time, so the descriptor promotes them to the
    /// aggregate tag (with or without alpha). All other formats describe
    /// themselves.
    pub fn descriptor_format(&self) -> ColorFormat {
        if self.format.is_true_color() {
            if self.alpha_byte {
                ColorFormat::TrueColorAlpha
            } else {
                ColorFormat::TrueColor
            }
        } else {
            self.format
        }
    }
}
