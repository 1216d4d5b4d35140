//! The per-image conversion pipeline: decode, quantize where needed,
//! encode, serialize, write.

use std::path::{Path, PathBuf};

use lvimg_codec::{ColorFormat, EncodedImage, ImageEncoder};
use serde::Deserialize;
use tracing::info;

use crate::decode::decode_png;
use crate::error::ConvertError;
use crate::quantize::quantize;

/// Which outputs a job produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Emit {
    /// C source array plus descriptor (`.h`)
    #[default]
    CArray,
    /// Binary blob with bit-packed header (`.bin`)
    Bin,
    /// Both outputs
    Both,
}

impl Emit {
    fn wants_c_array(self) -> bool {
        matches!(self, Emit::CArray | Emit::Both)
    }

    fn wants_bin(self) -> bool {
        matches!(self, Emit::Bin | Emit::Both)
    }
}

/// One image conversion, fully resolved.
#[derive(Debug, Clone)]
pub struct ConvertJob {
    /// Input image path
    pub input: PathBuf,
    /// Target color format
    pub format: ColorFormat,
    /// Error-diffusion dithering (true-color formats only)
    pub dither: bool,
    /// Append an alpha byte after each true-color pixel
    pub alpha_byte: bool,
    /// Which outputs to produce
    pub emit: Emit,
    /// Identifier override; defaults to the input file stem
    pub name: Option<String>,
}

impl ConvertJob {
    /// The C identifier and file stem for this job's outputs.
    pub fn output_name(&self) -> String {
        let base = match &self.name {
            Some(name) => name.clone(),
            None => self
                .input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string()),
        };
        lvimg_codec::sanitize_identifier(&base)
    }

    /// Run the in-memory half of the conversion.
    pub fn encode(&self) -> Result<EncodedImage, ConvertError> {
        let encoder = ImageEncoder::new(self.format)
            .dither(self.dither)
            .alpha_byte(self.alpha_byte);

        let encoded = if self.format.is_raw() {
            // Raw formats carry the encoded file verbatim. Decode only to
            // recover dimensions for the binary header; non-PNG payloads
            // fall back to 0x0.
            let bytes = std::fs::read(&self.input).map_err(|source| ConvertError::Read {
                path: self.input.clone(),
                source,
            })?;
            let (width, height) = match decode_png(&self.input) {
                Ok(img) => {
                    use lvimg_codec::SourceImage;
                    (img.width(), img.height())
                }
                Err(_) => (0, 0),
            };
            encoder.encode_raw(&bytes, width, height)?
        } else if self.format.is_indexed() {
            let image = decode_png(&self.input)?;
            let indexed = quantize(&image, self.format.palette_size())?;
            encoder.encode_indexed(&indexed)?
        } else {
            let image = decode_png(&self.input)?;
            encoder.encode(&image)?
        };

        Ok(encoded)
    }
}

/// Run `job`, writing its outputs into `out_dir`. Returns the files
/// written.
pub fn run_job(job: &ConvertJob, out_dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let name = job.output_name();
    let encoded = job.encode()?;

    if !out_dir.exists() {
        std::fs::create_dir_all(out_dir).map_err(|source| ConvertError::Write {
            path: out_dir.to_path_buf(),
            source,
        })?;
    }

    let mut written = Vec::new();

    if job.emit.wants_c_array() {
        let path = out_dir.join(format!("{name}.h"));
        std::fs::write(&path, encoded.to_c_source(&name)).map_err(|source| {
            ConvertError::Write {
                path: path.clone(),
                source,
            }
        })?;
        written.push(path);
    }

    if job.emit.wants_bin() {
        let path = out_dir.join(format!("{name}.bin"));
        std::fs::write(&path, encoded.to_bin()?).map_err(|source| ConvertError::Write {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    info!(
        input = %job.input.display(),
        format = %job.format,
        outputs = written.len(),
        bytes = encoded.data().len(),
        "converted image"
    );
    Ok(written)
}
