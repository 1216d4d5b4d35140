//! The closed set of target pixel formats and their static properties.
//!
//! Every per-format constant lives here: palette capacities, byte widths,
//! row strides, payload size formulas, the serialized descriptor code and
//! the symbolic `LV_IMG_CF_*` name. The packers and serializers dispatch on
//! [`ColorFormat`] and never carry format knowledge of their own.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseFormatError;

/// Target pixel format for a conversion.
///
/// Three groups:
///
/// - **Packable formats** re-encode decoded pixels: the four true-color
///   layouts, the four alpha-only depths and the four indexed depths.
/// - **Raw formats** copy the source file's bytes verbatim.
/// - **Aggregate tags** (`TrueColor`, `TrueColorAlpha`, `TrueColorChroma`)
///   exist only in the emitted descriptor, where the concrete true-color
///   layout is irrelevant (the consuming framework selects it at compile
///   time). Passing an aggregate to an encode operation is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// 8-bit true color: red 3 bits, green 3 bits, blue 2 bits.
    TrueColor332,
    /// 16-bit true color: red 5 bits, green 6 bits, blue 5 bits, little-endian.
    TrueColor565,
    /// RGB565 with the two color bytes swapped.
    TrueColor565Swap,
    /// 32-bit true color, stored B,G,R,A.
    TrueColor888,
    /// 1-bit alpha mask, 8 pixels per byte.
    Alpha1Bit,
    /// 2-bit alpha, 4 pixels per byte.
    Alpha2Bit,
    /// 4-bit alpha, 2 pixels per byte.
    Alpha4Bit,
    /// 8-bit alpha, one byte per pixel.
    Alpha8Bit,
    /// 1-bit palette index, 2-entry palette.
    Indexed1Bit,
    /// 2-bit palette index, 4-entry palette.
    Indexed2Bit,
    /// 4-bit palette index, 16-entry palette.
    Indexed4Bit,
    /// 8-bit palette index, 256-entry palette.
    Indexed8Bit,
    /// Verbatim copy of the encoded source file.
    Raw,
    /// Verbatim copy, consumer decodes alpha from the container.
    RawAlpha,
    /// Verbatim copy, consumer applies chroma keying.
    RawChroma,
    /// Descriptor-only tag: true color at the consumer's native depth.
    TrueColor,
    /// Descriptor-only tag: true color followed by an alpha byte per pixel.
    TrueColorAlpha,
    /// Descriptor-only tag: true color with one color value keyed transparent.
    TrueColorChroma,
}

/// Largest width or height the binary header's 11-bit fields can carry.
pub const MAX_HEADER_DIM: u32 = 0x7FF;

impl ColorFormat {
    /// All formats an encode operation accepts, in declaration order.
    pub const PACKABLE: [ColorFormat; 15] = [
        ColorFormat::TrueColor332,
        ColorFormat::TrueColor565,
        ColorFormat::TrueColor565Swap,
        ColorFormat::TrueColor888,
        ColorFormat::Alpha1Bit,
        ColorFormat::Alpha2Bit,
        ColorFormat::Alpha4Bit,
        ColorFormat::Alpha8Bit,
        ColorFormat::Indexed1Bit,
        ColorFormat::Indexed2Bit,
        ColorFormat::Indexed4Bit,
        ColorFormat::Indexed8Bit,
        ColorFormat::Raw,
        ColorFormat::RawAlpha,
        ColorFormat::RawChroma,
    ];

    /// True for the four concrete true-color layouts.
    pub fn is_true_color(self) -> bool {
        matches!(
            self,
            ColorFormat::TrueColor332
                | ColorFormat::TrueColor565
                | ColorFormat::TrueColor565Swap
                | ColorFormat::TrueColor888
        )
    }

    /// True for the four alpha-only depths.
    pub fn is_alpha(self) -> bool {
        matches!(
            self,
            ColorFormat::Alpha1Bit
                | ColorFormat::Alpha2Bit
                | ColorFormat::Alpha4Bit
                | ColorFormat::Alpha8Bit
        )
    }

    /// True for the four indexed depths.
    pub fn is_indexed(self) -> bool {
        matches!(
            self,
            ColorFormat::Indexed1Bit
                | ColorFormat::Indexed2Bit
                | ColorFormat::Indexed4Bit
                | ColorFormat::Indexed8Bit
        )
    }

    /// True for the verbatim-copy formats.
    pub fn is_raw(self) -> bool {
        matches!(
            self,
            ColorFormat::Raw | ColorFormat::RawAlpha | ColorFormat::RawChroma
        )
    }

    /// True for the descriptor-only aggregate tags.
    pub fn is_aggregate(self) -> bool {
        matches!(
            self,
            ColorFormat::TrueColor | ColorFormat::TrueColorAlpha | ColorFormat::TrueColorChroma
        )
    }

    /// Bits per sample for the alpha and indexed depths, `None` otherwise.
    pub fn sample_bits(self) -> Option<u8> {
        match self {
            ColorFormat::Alpha1Bit | ColorFormat::Indexed1Bit => Some(1),
            ColorFormat::Alpha2Bit | ColorFormat::Indexed2Bit => Some(2),
            ColorFormat::Alpha4Bit | ColorFormat::Indexed4Bit => Some(4),
            ColorFormat::Alpha8Bit | ColorFormat::Indexed8Bit => Some(8),
            _ => None,
        }
    }

    /// Palette entry count for indexed formats; 0 for everything else.
    pub fn palette_size(self) -> usize {
        match self {
            ColorFormat::Indexed1Bit => 2,
            ColorFormat::Indexed2Bit => 4,
            ColorFormat::Indexed4Bit => 16,
            ColorFormat::Indexed8Bit => 256,
            _ => 0,
        }
    }

    /// Serialized palette length in bytes (4 bytes per RGBA entry).
    pub fn palette_bytes(self) -> usize {
        self.palette_size() * 4
    }

    /// Bytes per pixel for true-color layouts, including the optional
    /// trailing alpha byte where the layout supports one.
    ///
    /// `TrueColor888` always carries its alpha in the fourth byte, so
    /// `alpha_byte` has no effect there.
    pub fn bytes_per_pixel(self, alpha_byte: bool) -> Option<usize> {
        let base = match self {
            ColorFormat::TrueColor332 => 1,
            ColorFormat::TrueColor565 | ColorFormat::TrueColor565Swap => 2,
            ColorFormat::TrueColor888 => return Some(4),
            _ => return None,
        };
        Some(if alpha_byte { base + 1 } else { base })
    }

    /// Packed row width in bytes for alpha and indexed depths:
    /// `ceil(width * bits / 8)`.
    pub fn row_stride(self, width: u32) -> Option<usize> {
        let bits = self.sample_bits()? as usize;
        Some((width as usize * bits + 7) / 8)
    }

    /// Total payload size in bytes for the packable pixel formats
    /// (palette included for indexed formats). `None` for raw formats,
    /// whose size is the source file length, and for aggregates.
    pub fn data_size(self, width: u32, height: u32, alpha_byte: bool) -> Option<usize> {
        let h = height as usize;
        if let Some(bpp) = self.bytes_per_pixel(alpha_byte) {
            return Some(width as usize * h * bpp);
        }
        if let Some(stride) = self.row_stride(width) {
            return Some(self.palette_bytes() + stride * h);
        }
        None
    }

    /// The small-integer format code serialized into the binary header.
    ///
    /// Everything without an entry in the mapping (concrete true-color
    /// layouts and the raw formats) falls back to 4.
    pub fn descriptor_code(self) -> u16 {
        match self {
            ColorFormat::TrueColor => 4,
            ColorFormat::TrueColorAlpha => 5,
            ColorFormat::TrueColorChroma => 6,
            ColorFormat::Indexed1Bit => 7,
            ColorFormat::Indexed2Bit => 8,
            ColorFormat::Indexed4Bit => 9,
            ColorFormat::Indexed8Bit => 10,
            ColorFormat::Alpha1Bit => 11,
            ColorFormat::Alpha2Bit => 12,
            ColorFormat::Alpha4Bit => 13,
            ColorFormat::Alpha8Bit => 14,
            _ => 4,
        }
    }

    /// The symbolic `header.cf` constant emitted in C source output.
    ///
    /// Concrete true-color layouts are promoted to an aggregate tag before
    /// the descriptor is emitted, so they have no symbol of their own.
    pub fn descriptor_symbol(self) -> &'static str {
        match self {
            ColorFormat::TrueColor
            | ColorFormat::TrueColor332
            | ColorFormat::TrueColor565
            | ColorFormat::TrueColor565Swap
            | ColorFormat::TrueColor888 => "LV_IMG_CF_TRUE_COLOR",
            ColorFormat::TrueColorAlpha => "LV_IMG_CF_TRUE_COLOR_ALPHA",
            ColorFormat::TrueColorChroma => "LV_IMG_CF_TRUE_COLOR_CHROMA_KEYED",
            ColorFormat::Alpha1Bit => "LV_IMG_CF_ALPHA_1BIT",
            ColorFormat::Alpha2Bit => "LV_IMG_CF_ALPHA_2BIT",
            ColorFormat::Alpha4Bit => "LV_IMG_CF_ALPHA_4BIT",
            ColorFormat::Alpha8Bit => "LV_IMG_CF_ALPHA_8BIT",
            ColorFormat::Indexed1Bit => "LV_IMG_CF_INDEXED_1BIT",
            ColorFormat::Indexed2Bit => "LV_IMG_CF_INDEXED_2BIT",
            ColorFormat::Indexed4Bit => "LV_IMG_CF_INDEXED_4BIT",
            ColorFormat::Indexed8Bit => "LV_IMG_CF_INDEXED_8BIT",
            ColorFormat::Raw => "LV_IMG_CF_RAW",
            ColorFormat::RawAlpha => "LV_IMG_CF_RAW_ALPHA",
            ColorFormat::RawChroma => "LV_IMG_CF_RAW_CHROMA_KEYED",
        }
    }

    /// The CLI/manifest name of the format.
    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::TrueColor332 => "true_color_332",
            ColorFormat::TrueColor565 => "true_color_565",
            ColorFormat::TrueColor565Swap => "true_color_565_swap",
            ColorFormat::TrueColor888 => "true_color_888",
            ColorFormat::Alpha1Bit => "alpha_1bit",
            ColorFormat::Alpha2Bit => "alpha_2bit",
            ColorFormat::Alpha4Bit => "alpha_4bit",
            ColorFormat::Alpha8Bit => "alpha_8bit",
            ColorFormat::Indexed1Bit => "indexed_1bit",
            ColorFormat::Indexed2Bit => "indexed_2bit",
            ColorFormat::Indexed4Bit => "indexed_4bit",
            ColorFormat::Indexed8Bit => "indexed_8bit",
            ColorFormat::Raw => "raw",
            ColorFormat::RawAlpha => "raw_alpha",
            ColorFormat::RawChroma => "raw_chroma",
            ColorFormat::TrueColor => "true_color",
            ColorFormat::TrueColorAlpha => "true_color_alpha",
            ColorFormat::TrueColorChroma => "true_color_chroma",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ParseFormatError;

    /// Parse a format from its CLI/manifest name (see [`ColorFormat::name`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true_color_332" => Ok(ColorFormat::TrueColor332),
            "true_color_565" => Ok(ColorFormat::TrueColor565),
            "true_color_565_swap" => Ok(ColorFormat::TrueColor565Swap),
            "true_color_888" => Ok(ColorFormat::TrueColor888),
            "alpha_1bit" => Ok(ColorFormat::Alpha1Bit),
            "alpha_2bit" => Ok(ColorFormat::Alpha2Bit),
            "alpha_4bit" => Ok(ColorFormat::Alpha4Bit),
            "alpha_8bit" => Ok(ColorFormat::Alpha8Bit),
            "indexed_1bit" => Ok(ColorFormat::Indexed1Bit),
            "indexed_2bit" => Ok(ColorFormat::Indexed2Bit),
            "indexed_4bit" => Ok(ColorFormat::Indexed4Bit),
            "indexed_8bit" => Ok(ColorFormat::Indexed8Bit),
            "raw" => Ok(ColorFormat::Raw),
            "raw_alpha" => Ok(ColorFormat::RawAlpha),
            "raw_chroma" => Ok(ColorFormat::RawChroma),
            _ => Err(ParseFormatError {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_palette_sizes() {
        assert_eq!(ColorFormat::Indexed1Bit.palette_size(), 2);
        assert_eq!(ColorFormat::Indexed2Bit.palette_size(), 4);
        assert_eq!(ColorFormat::Indexed4Bit.palette_size(), 16);
        assert_eq!(ColorFormat::Indexed8Bit.palette_size(), 256);
        assert_eq!(ColorFormat::TrueColor565.palette_size(), 0);
        assert_eq!(ColorFormat::Alpha4Bit.palette_size(), 0);
    }

    #[test]
    fn test_row_stride_rounds_up() {
        // 9 pixels at 1 bit each needs 2 bytes
        assert_eq!(ColorFormat::Alpha1Bit.row_stride(9), Some(2));
        assert_eq!(ColorFormat::Alpha1Bit.row_stride(8), Some(1));
        // 5 pixels at 4 bits needs 3 bytes
        assert_eq!(ColorFormat::Indexed4Bit.row_stride(5), Some(3));
        assert_eq!(ColorFormat::Alpha2Bit.row_stride(5), Some(2));
        assert_eq!(ColorFormat::Indexed8Bit.row_stride(5), Some(5));
        assert_eq!(ColorFormat::TrueColor888.row_stride(5), None);
    }

    #[test]
    fn test_data_size_formulas() {
        // Indexed4Bit on 5x2: 16 palette entries * 4 + ceil(5/2) * 2 rows
        assert_eq!(
            ColorFormat::Indexed4Bit.data_size(5, 2, false),
            Some(16 * 4 + 3 * 2)
        );
        assert_eq!(ColorFormat::Alpha8Bit.data_size(10, 3, false), Some(30));
        assert_eq!(ColorFormat::TrueColor332.data_size(10, 3, false), Some(30));
        assert_eq!(ColorFormat::TrueColor332.data_size(10, 3, true), Some(60));
        assert_eq!(ColorFormat::TrueColor565.data_size(10, 3, false), Some(60));
        assert_eq!(ColorFormat::TrueColor565.data_size(10, 3, true), Some(90));
        // 888 ignores the alpha_byte flag
        assert_eq!(ColorFormat::TrueColor888.data_size(10, 3, false), Some(120));
        assert_eq!(ColorFormat::TrueColor888.data_size(10, 3, true), Some(120));
        assert_eq!(ColorFormat::Raw.data_size(10, 3, false), None);
        assert_eq!(ColorFormat::TrueColor.data_size(10, 3, false), None);
    }

    #[test]
    fn test_descriptor_codes() {
        assert_eq!(ColorFormat::TrueColor.descriptor_code(), 4);
        assert_eq!(ColorFormat::TrueColorAlpha.descriptor_code(), 5);
        assert_eq!(ColorFormat::TrueColorChroma.descriptor_code(), 6);
        assert_eq!(ColorFormat::Indexed1Bit.descriptor_code(), 7);
        assert_eq!(ColorFormat::Indexed8Bit.descriptor_code(), 10);
        assert_eq!(ColorFormat::Alpha1Bit.descriptor_code(), 11);
        assert_eq!(ColorFormat::Alpha8Bit.descriptor_code(), 14);
        // No mapping entry: fall back to 4
        assert_eq!(ColorFormat::TrueColor565.descriptor_code(), 4);
        assert_eq!(ColorFormat::Raw.descriptor_code(), 4);
        assert_eq!(ColorFormat::RawAlpha.descriptor_code(), 4);
    }

    #[test]
    fn test_name_round_trip() {
        for format in ColorFormat::PACKABLE {
            assert_eq!(format.name().parse::<ColorFormat>(), Ok(format));
        }
    }

    #[test]
    fn test_aggregates_do_not_parse() {
        // Aggregates are descriptor-only; the CLI never selects them.
        assert!("true_color".parse::<ColorFormat>().is_err());
        assert!("bogus".parse::<ColorFormat>().is_err());
    }

    #[test]
    fn test_group_predicates_are_disjoint() {
        for format in ColorFormat::PACKABLE {
            let groups = [
                format.is_true_color(),
                format.is_alpha(),
                format.is_indexed(),
                format.is_raw(),
            ];
            assert_eq!(
                groups.iter().filter(|&&g| g).count(),
                1,
                "{format} must belong to exactly one group"
            );
            assert!(!format.is_aggregate());
        }
        assert!(ColorFormat::TrueColorAlpha.is_aggregate());
    }
}
