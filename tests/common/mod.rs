//! Common test infrastructure for lvforge integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};

/// Write an 8-bit RGBA PNG with the given pixel bytes.
pub fn write_rgba_png(path: &Path, width: u32, height: u32, rgba: &[u8]) {
    assert_eq!(rgba.len(), (width * height * 4) as usize);
    let file = File::create(path).unwrap();
    let mut encoder = png::Encoder::new(file, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(rgba).unwrap();
}

/// Write a PNG filled with one RGBA color.
pub fn write_solid_png(path: &Path, width: u32, height: u32, color: [u8; 4]) {
    let rgba: Vec<u8> = color
        .iter()
        .copied()
        .cycle()
        .take((width * height * 4) as usize)
        .collect();
    write_rgba_png(path, width, height, &rgba);
}

/// Write a black/white checkerboard PNG (two exact colors, quantizer-friendly).
pub fn write_checkerboard_png(path: &Path, width: u32, height: u32) {
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = if (x + y) % 2 == 0 { 0u8 } else { 255 };
            rgba.extend_from_slice(&[v, v, v, 255]);
        }
    }
    write_rgba_png(path, width, height, &rgba);
}

/// Decode the 4-byte binary header of a `.bin` output.
pub fn read_bin_header(path: &Path) -> lvimg_codec::BinHeader {
    let bytes = std::fs::read(path).unwrap();
    lvimg_codec::BinHeader::unpack(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// A temporary working directory for one test.
pub struct TestDir {
    pub dir: tempfile::TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
