//! Text rendering: the packed buffer as C source for the consuming GUI
//! framework -- a palette constant (indexed formats), the payload array,
//! and an `lv_img_dsc_t` descriptor record.

use std::fmt::Write;

use crate::encode::EncodedImage;
use crate::format::ColorFormat;

/// Bytes per output line for raw payloads, where no row structure exists.
const RAW_GROUP: usize = 16;

/// Derive a C identifier from an input file's base name.
///
/// Non-alphanumeric characters become underscores; a leading digit gets an
/// underscore prefix.
///
/// # Example
/// ```
/// use lvimg_codec::sanitize_identifier;
/// assert_eq!(sanitize_identifier("app-logo v2"), "app_logo_v2");
/// assert_eq!(sanitize_identifier("8ball"), "_8ball");
/// ```
pub fn sanitize_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if ident.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// The `#if` guard and pixel-format comment for a true-color payload.
fn true_color_guard(layout: ColorFormat, alpha_byte: bool) -> (&'static str, String) {
    let (guard, channels) = match layout {
        ColorFormat::TrueColor332 => (
            "#if LV_COLOR_DEPTH == 1 || LV_COLOR_DEPTH == 8",
            "Blue: 2 bit, Green: 3 bit, Red: 3 bit",
        ),
        ColorFormat::TrueColor565 => (
            "#if LV_COLOR_DEPTH == 16 && LV_COLOR_16_SWAP == 0",
            "Blue: 5 bit, Green: 6 bit, Red: 5 bit",
        ),
        ColorFormat::TrueColor565Swap => (
            "#if LV_COLOR_DEPTH == 16 && LV_COLOR_16_SWAP != 0",
            "Blue: 5 bit, Green: 6 bit, Red: 5 bit BUT the 2 bytes are swapped",
        ),
        ColorFormat::TrueColor888 => (
            "#if LV_COLOR_DEPTH == 32",
            "Blue: 8 bit, Green: 8 bit, Red: 8 bit, Alpha: 8 bit",
        ),
        _ => unreachable!("guards exist only for true-color layouts"),
    };
    let comment = if alpha_byte && layout != ColorFormat::TrueColor888 {
        format!("  /*Pixel format: {channels}, Alpha 8 bit*/")
    } else {
        format!("  /*Pixel format: {channels}*/")
    };
    (guard, comment)
}

/// The `.data_size` initializer: symbolic for aggregate true-color tags
/// (the byte width depends on the consumer's color depth), numeric
/// otherwise.
fn data_size_expr(image: &EncodedImage) -> String {
    let px = image.width() as usize * image.height() as usize;
    match image.descriptor_format() {
        ColorFormat::TrueColor | ColorFormat::TrueColorChroma => {
            format!("{px} * LV_COLOR_SIZE / 8")
        }
        ColorFormat::TrueColorAlpha => format!("{px} * LV_IMG_PX_SIZE_ALPHA_BYTE"),
        _ => format!("{}", image.data().len()),
    }
}

/// Append payload bytes as hex literals, `group` per line.
fn write_payload(out: &mut String, bytes: &[u8], group: usize) {
    for row in bytes.chunks(group.max(1)) {
        out.push_str("  ");
        for (i, byte) in row.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "0x{byte:02X}");
        }
        out.push_str(",\n");
    }
}

impl EncodedImage {
    /// Render the conversion as a self-contained C source fragment.
    ///
    /// `name` is the identifier base (typically the input's file stem);
    /// it is sanitized with [`sanitize_identifier`]. Indexed formats emit
    /// the palette as a separate `{name}_palette` constant annotated per
    /// index, followed by the `{name}_map` payload array and the
    /// descriptor.
    pub fn to_c_source(&self, name: &str) -> String {
        let ident = sanitize_identifier(name);
        let upper = ident.to_ascii_uppercase();
        let palette_bytes = self.palette_bytes();

        let mut out = String::new();
        out.push_str("#include \"lvgl.h\"\n\n");
        out.push_str("#ifndef LV_ATTRIBUTE_MEM_ALIGN\n#define LV_ATTRIBUTE_MEM_ALIGN\n#endif\n\n");
        let _ = write!(
            out,
            "#ifndef LV_ATTRIBUTE_IMG_{upper}\n#define LV_ATTRIBUTE_IMG_{upper}\n#endif\n\n"
        );

        if palette_bytes > 0 {
            let _ = write!(out, "static const uint8_t {ident}_palette[] = {{\n");
            for (index, entry) in self.data()[..palette_bytes].chunks(4).enumerate() {
                let _ = write!(
                    out,
                    "  0x{:02X}, 0x{:02X}, 0x{:02X}, 0x{:02X},\t/*Color of index {index}*/\n",
                    entry[0], entry[1], entry[2], entry[3]
                );
            }
            out.push_str("};\n\n");
        }

        let _ = write!(
            out,
            "const LV_ATTRIBUTE_MEM_ALIGN LV_ATTRIBUTE_LARGE_CONST LV_ATTRIBUTE_IMG_{upper} \
             uint8_t {ident}_map[] = {{\n"
        );

        let payload = &self.data()[palette_bytes..];
        if self.format().is_true_color() {
            let (guard, comment) = true_color_guard(self.format(), self.has_alpha_byte());
            out.push_str(guard);
            out.push('\n');
            out.push_str(&comment);
            out.push('\n');
            let group = self
                .format()
                .bytes_per_pixel(self.has_alpha_byte())
                .unwrap_or(1)
                * self.width() as usize;
            write_payload(&mut out, payload, group);
            out.push_str("#endif\n");
        } else if self.format().is_raw() {
            write_payload(&mut out, payload, RAW_GROUP);
        } else {
            let group = self
                .format()
                .row_stride(self.width())
                .unwrap_or(RAW_GROUP);
            write_payload(&mut out, payload, group);
        }
        out.push_str("};\n\n");

        let _ = write!(
            out,
            "const lv_img_dsc_t {ident} = {{\n\
             \x20 .header.always_zero = 0,\n\
             \x20 .header.w = {},\n\
             \x20 .header.h = {},\n\
             \x20 .data_size = {},\n\
             \x20 .header.cf = {},\n\
             \x20 .data = {ident}_map,\n\
             }};\n",
            self.width(),
            self.height(),
            data_size_expr(self),
            self.descriptor_format().descriptor_symbol(),
        );
        out
    }
}
