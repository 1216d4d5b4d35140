//! lvimg-codec: pixel-format codec for LVGL-style image descriptors
//!
//! This library re-encodes a decoded raster image into one of the compact
//! pixel representations consumed by a resource-constrained GUI framework's
//! image descriptor, optionally applying Floyd-Steinberg error diffusion to
//! soften the loss of color depth, and serializes the result as either a C
//! source array or a binary blob with a bit-packed header.
//!
//! # Quick Start
//!
//! The [`ImageEncoder`] builder is the primary entry point:
//!
//! ```
//! use lvimg_codec::{ColorFormat, ImageEncoder, Rgba, RgbaImage};
//!
//! let image = RgbaImage::filled(4, 4, Rgba::opaque(90, 120, 200));
//! let encoded = ImageEncoder::new(ColorFormat::TrueColor565)
//!     .dither(true)
//!     .encode(&image)
//!     .unwrap();
//!
//! let c_source = encoded.to_c_source("my_icon");
//! let blob = encoded.to_bin().unwrap();
//! assert!(c_source.contains("lv_img_dsc_t my_icon"));
//! assert_eq!(blob.len(), 4 + 4 * 4 * 2);
//! ```
//!
//! # Source Kinds
//!
//! Formats take their pixels from three different places, and the encoder
//! exposes one operation per kind:
//!
//! - True-color and alpha formats read an RGBA raster through the
//!   [`SourceImage`] trait: [`ImageEncoder::encode`].
//! - Indexed formats consume an external quantizer's palette and index
//!   stream ([`IndexedImage`]): [`ImageEncoder::encode_indexed`]. The
//!   codec never quantizes or dithers indexed content itself.
//! - Raw formats copy the encoded source file verbatim:
//!   [`ImageEncoder::encode_raw`].
//!
//! # Dithering
//!
//! True-color conversions diffuse quantization error with the classic
//! Floyd-Steinberg weights (7/16 right, 3/16 down-left, 5/16 down, 1/16
//! down-right). Channel values are classified by *ceiling* to the next
//! representable step, so diffusion pulls the average back down; the two
//! together preserve aggregate brightness across a scanline. Alpha and
//! indexed formats never dither -- alpha depths truncate the alpha channel
//! to their bit width, and indexed depths encode pre-assigned palette
//! indices verbatim.
//!
//! # Serialization
//!
//! Both renderers consume the same [`EncodedImage`] and agree on every
//! numeric field. The C source rendering emits a palette constant (indexed
//! formats), the payload array and an `lv_img_dsc_t` descriptor; the
//! binary rendering emits a 4-byte little-endian header (format code in
//! bits 0-9, width in 10-20, height in 21-31) followed by the payload.

pub mod classify;
pub mod encode;
pub mod error;
pub mod format;
pub mod image;
pub mod output;
pub mod palette;

mod dither;
mod pack;


pub use classify::classify;
pub use encode::{EncodedImage, ImageEncoder};
pub use error::{CodecError, ParseFormatError};
pub use format::{ColorFormat, MAX_HEADER_DIM};
pub use image::{IndexedImage, Rgb, Rgba, RgbaImage, SourceImage};
pub use output::{sanitize_identifier, BinHeader};
pub use palette::PaletteTable;
