//! Error types for the codec.

use thiserror::Error;

use crate::format::ColorFormat;

/// Errors produced while encoding or serializing an image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A descriptor-only aggregate format was handed to the packer.
    /// Aggregates describe the final descriptor's format code; they carry
    /// no byte layout of their own.
    #[error("format {format:?} is descriptor-only and cannot pack pixels")]
    UnsupportedFormat {
        /// The offending format selector
        format: ColorFormat,
    },

    /// An indexed format was encoded without quantizer output.
    #[error("format {format:?} requires a quantized palette and index stream")]
    PaletteRequired {
        /// The indexed format that was requested
        format: ColorFormat,
    },

    /// A format that packs decoded pixels was handed some other source
    /// kind (quantizer output or raw file bytes).
    #[error("format {format:?} takes a decoded RGBA source")]
    RgbaSourceRequired {
        /// The format that was requested
        format: ColorFormat,
    },

    /// A raw format was asked to pack pixels; raw formats copy the source
    /// file bytes verbatim.
    #[error("format {format:?} takes the raw source file bytes")]
    RawSourceRequired {
        /// The raw format that was requested
        format: ColorFormat,
    },

    /// The quantizer produced more colors than the target depth can index.
    #[error("palette has {colors} colors but the format holds at most {max}")]
    PaletteTooLarge {
        /// Number of colors the quantizer produced
        colors: usize,
        /// Palette capacity of the target format
        max: usize,
    },

    /// Width or height does not fit the binary header's 11-bit fields.
    #[error("dimensions {width}x{height} exceed the header limit of {max}x{max}")]
    DimensionsTooLarge {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
        /// Largest dimension the header can carry
        max: u32,
    },
}

/// Error type for parsing color format names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown color format name: {name:?}")]
pub struct ParseFormatError {
    /// The string that failed to parse
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CodecError::PaletteTooLarge { colors: 20, max: 16 };
        assert_eq!(
            err.to_string(),
            "palette has 20 colors but the format holds at most 16"
        );

        let err = CodecError::DimensionsTooLarge {
            width: 4096,
            height: 32,
            max: 2047,
        };
        assert_eq!(
            err.to_string(),
            "dimensions 4096x32 exceed the header limit of 2047x2047"
        );
    }

    #[test]
    fn test_parse_format_error_message() {
        let err = ParseFormatError {
            name: "rgb999".to_string(),
        };
        assert_eq!(err.to_string(), "unknown color format name: \"rgb999\"");
    }
}
