//! Binary rendering: a bit-packed 4-byte header followed by the payload.

use crate::encode::EncodedImage;
use crate::error::CodecError;
use crate::format::{ColorFormat, MAX_HEADER_DIM};

/// The decoded form of the 4-byte binary image header.
///
/// Bit layout of the little-endian header word: format code in bits 0-9,
/// width in bits 10-20, height in bits 21-31.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinHeader {
    /// Serialized format code (see [`ColorFormat::descriptor_code`]).
    pub code: u16,
    /// Image width in pixels (11 bits).
    pub width: u32,
    /// Image height in pixels (11 bits).
    pub height: u32,
}

impl BinHeader {
    /// Pack the header into its 32-bit wire form.
    ///
    /// # Errors
    ///
    /// [`CodecError::DimensionsTooLarge`] if either dimension exceeds the
    /// 11-bit field.
    pub fn pack(&self) -> Result<u32, CodecError> {
        if self.width > MAX_HEADER_DIM || self.height > MAX_HEADER_DIM {
            return Err(CodecError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_HEADER_DIM,
            });
        }
        Ok(self.code as u32 | (self.width << 10) | (self.height << 21))
    }

    /// Decode a header from its 32-bit wire form.
    pub fn unpack(raw: u32) -> Self {
        Self {
            code: (raw & 0x3FF) as u16,
            width: (raw >> 10) & 0x7FF,
            height: (raw >> 21) & 0x7FF,
        }
    }
}

impl EncodedImage {
    /// Render the binary blob: little-endian header word, then the packed
    /// buffer verbatim (palette prefix included for indexed formats).
    pub fn to_bin(&self) -> Result<Vec<u8>, CodecError> {
        let header = BinHeader {
            code: self.descriptor_format().descriptor_code(),
            width: self.width(),
            height: self.height(),
        }
        .pack()?;

        let mut out = Vec::with_capacity(4 + self.data().len());
        out.extend_from_slice(&header.to_le_bytes());
        out.extend_from_slice(self.data());
        Ok(out)
    }
}
