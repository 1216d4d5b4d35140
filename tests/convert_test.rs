//! End-to-end conversion tests: PNG in, C source / binary out.

mod common;

use common::{read_bin_header, write_checkerboard_png, write_solid_png, TestDir};
use lvforge::convert::{run_job, ConvertJob, Emit};
use lvimg_codec::ColorFormat;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn job(input: PathBuf, format: ColorFormat, emit: Emit) -> ConvertJob {
    ConvertJob {
        input,
        format,
        dither: true,
        alpha_byte: false,
        emit,
        name: None,
    }
}

#[test]
fn test_true_color_c_array_output() {
    let dir = TestDir::new();
    let input = dir.file("logo.png");
    write_solid_png(&input, 4, 3, [10, 20, 30, 255]);

    let written = run_job(
        &job(input, ColorFormat::TrueColor565, Emit::CArray),
        dir.path(),
    )
    .unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].file_name().unwrap(), "logo.h");

    let source = std::fs::read_to_string(&written[0]).unwrap();
    assert!(source.contains("const lv_img_dsc_t logo = {"));
    assert!(source.contains(".header.w = 4,"));
    assert!(source.contains(".header.h = 3,"));
    assert!(source.contains(".header.cf = LV_IMG_CF_TRUE_COLOR,"));
    assert!(source.contains("logo_map"));
}

#[test]
fn test_binary_output_header_and_size() {
    let dir = TestDir::new();
    let input = dir.file("sprite.png");
    write_solid_png(&input, 10, 6, [200, 100, 50, 255]);

    let written = run_job(&job(input, ColorFormat::TrueColor332, Emit::Bin), dir.path()).unwrap();
    assert_eq!(written[0].file_name().unwrap(), "sprite.bin");

    let header = read_bin_header(&written[0]);
    assert_eq!(header.code, 4);
    assert_eq!(header.width, 10);
    assert_eq!(header.height, 6);

    let bytes = std::fs::read(&written[0]).unwrap();
    assert_eq!(bytes.len(), 4 + 10 * 6);
}

#[test]
fn test_indexed_pipeline_quantizes_and_packs() {
    let dir = TestDir::new();
    let input = dir.file("checker.png");
    write_checkerboard_png(&input, 8, 8);

    let written = run_job(
        &job(input, ColorFormat::Indexed4Bit, Emit::Both),
        dir.path(),
    )
    .unwrap();
    assert_eq!(written.len(), 2);

    let source = std::fs::read_to_string(&written[0]).unwrap();
    assert!(source.contains("static const uint8_t checker_palette[] = {"));
    assert!(source.contains("/*Color of index 0*/"));
    assert!(source.contains(".header.cf = LV_IMG_CF_INDEXED_4BIT,"));
    // 16 entries * 4 bytes + ceil(8/2) * 8 rows
    assert!(source.contains(".data_size = 96,"));

    let header = read_bin_header(&written[1]);
    assert_eq!(header.code, 9);
    assert_eq!(header.width, 8);
    assert_eq!(header.height, 8);
    let bytes = std::fs::read(&written[1]).unwrap();
    assert_eq!(bytes.len(), 4 + 96);
}

#[test]
fn test_alpha_format_encodes_transparency() {
    let dir = TestDir::new();
    let input = dir.file("mask.png");
    // fully transparent image: every packed alpha byte must be zero
    write_solid_png(&input, 8, 2, [255, 255, 255, 0]);

    let written = run_job(&job(input, ColorFormat::Alpha1Bit, Emit::Bin), dir.path()).unwrap();
    let bytes = std::fs::read(&written[0]).unwrap();
    assert_eq!(bytes.len(), 4 + 2);
    assert_eq!(&bytes[4..], &[0x00, 0x00]);

    let header = read_bin_header(&written[0]);
    assert_eq!(header.code, 11);
}

#[test]
fn test_raw_output_is_file_identity_with_header() {
    let dir = TestDir::new();
    let input = dir.file("photo.png");
    write_solid_png(&input, 5, 5, [1, 2, 3, 255]);
    let original = std::fs::read(&input).unwrap();

    let written = run_job(&job(input, ColorFormat::Raw, Emit::Bin), dir.path()).unwrap();
    let bytes = std::fs::read(&written[0]).unwrap();

    // 4-byte header, then the source file verbatim
    assert_eq!(&bytes[4..], &original[..]);
    let header = read_bin_header(&written[0]);
    assert_eq!(header.code, 4);
    assert_eq!(header.width, 5);
    assert_eq!(header.height, 5);
}

#[test]
fn test_conversion_is_deterministic_across_runs() {
    let dir = TestDir::new();
    let input = dir.file("gradient.png");
    let rgba: Vec<u8> = (0..8u32 * 4 * 4)
        .map(|i| (i * 7 % 256) as u8)
        .collect();
    common::write_rgba_png(&input, 8, 4, &rgba);

    let out_a = dir.file("a");
    let out_b = dir.file("b");
    let j = job(input, ColorFormat::TrueColor565, Emit::Both);
    let first = run_job(&j, &out_a).unwrap();
    let second = run_job(&j, &out_b).unwrap();

    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(
            std::fs::read(a).unwrap(),
            std::fs::read(b).unwrap(),
            "outputs must be byte-identical across runs"
        );
    }
}

#[test]
fn test_name_override_controls_identifiers() {
    let dir = TestDir::new();
    let input = dir.file("img-2024.png");
    write_solid_png(&input, 2, 2, [0, 0, 0, 255]);

    let mut j = job(input, ColorFormat::TrueColor332, Emit::CArray);
    j.name = Some("boot logo".to_string());
    let written = run_job(&j, dir.path()).unwrap();

    assert_eq!(written[0].file_name().unwrap(), "boot_logo.h");
    let source = std::fs::read_to_string(&written[0]).unwrap();
    assert!(source.contains("const lv_img_dsc_t boot_logo = {"));
    assert!(source.contains("LV_ATTRIBUTE_IMG_BOOT_LOGO"));
}

#[test]
fn test_missing_input_fails_before_writing() {
    let dir = TestDir::new();
    let j = job(dir.file("absent.png"), ColorFormat::TrueColor565, Emit::Both);
    let err = run_job(&j, dir.path()).unwrap_err();
    assert!(matches!(err, lvforge::ConvertError::Read { .. }));
    // nothing may be left behind
    assert!(!dir.file("absent.h").exists());
    assert!(!dir.file("absent.bin").exists());
}
