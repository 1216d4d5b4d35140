//! Batch conversion manifests loaded from YAML.
//!
//! A manifest lists the images to convert together with per-image options,
//! so a project's whole asset set rebuilds from one command:
//!
//! ```yaml
//! output_dir: assets
//! jobs:
//!   - input: logo.png
//!     format: indexed_4bit
//!     emit: both
//!   - input: splash.png
//!     format: true_color_565
//!     dither: false
//!     name: splash_screen
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::convert::{ConvertJob, Emit};
use crate::error::ConvertError;

/// A batch manifest: shared output directory plus one entry per image.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Directory receiving all generated files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Conversion jobs, run in order
    #[serde(default)]
    pub jobs: Vec<JobSpec>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// One image conversion in a manifest.
#[derive(Debug, Deserialize)]
pub struct JobSpec {
    /// Path to the input image, relative to the manifest's directory
    pub input: PathBuf,

    /// Target color format name (see `lvforge formats`)
    pub format: String,

    /// Error-diffusion dithering for true-color formats
    #[serde(default = "default_dither")]
    pub dither: bool,

    /// Append an alpha byte after each true-color pixel
    #[serde(default)]
    pub alpha_byte: bool,

    /// Which outputs to produce: c_array, bin or both
    #[serde(default)]
    pub emit: Emit,

    /// Identifier override; defaults to the input file stem
    #[serde(default)]
    pub name: Option<String>,
}

fn default_dither() -> bool {
    true
}

impl Manifest {
    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|e| ConvertError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Resolve the manifest entries into runnable jobs. Relative input
    /// paths are anchored at `base_dir` (the manifest's directory).
    pub fn jobs(&self, base_dir: &Path) -> Result<Vec<ConvertJob>, ConvertError> {
        self.jobs
            .iter()
            .map(|spec| {
                Ok(ConvertJob {
                    input: if spec.input.is_absolute() {
                        spec.input.clone()
                    } else {
                        base_dir.join(&spec.input)
                    },
                    format: spec.format.parse()?,
                    dither: spec.dither,
                    alpha_byte: spec.alpha_byte,
                    emit: spec.emit,
                    name: spec.name.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lvimg_codec::ColorFormat;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_manifest_with_defaults() {
        let yaml = r#"
output_dir: assets
jobs:
  - input: logo.png
    format: indexed_4bit
  - input: splash.png
    format: true_color_565
    dither: false
    alpha_byte: true
    emit: both
    name: splash_screen
"#;
        let manifest: Manifest = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(manifest.output_dir, PathBuf::from("assets"));
        assert_eq!(manifest.jobs.len(), 2);

        let jobs = manifest.jobs(Path::new("/project")).unwrap();
        assert_eq!(jobs[0].input, PathBuf::from("/project/logo.png"));
        assert_eq!(jobs[0].format, ColorFormat::Indexed4Bit);
        assert!(jobs[0].dither, "dither defaults on");
        assert!(!jobs[0].alpha_byte);
        assert_eq!(jobs[0].emit, Emit::CArray);
        assert_eq!(jobs[0].name, None);

        assert_eq!(jobs[1].format, ColorFormat::TrueColor565);
        assert!(!jobs[1].dither);
        assert!(jobs[1].alpha_byte);
        assert_eq!(jobs[1].emit, Emit::Both);
        assert_eq!(jobs[1].name.as_deref(), Some("splash_screen"));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let yaml = r#"
jobs:
  - input: a.png
    format: rgb999
"#;
        let manifest: Manifest = serde_yaml::from_str(yaml).unwrap();
        let err = manifest.jobs(Path::new(".")).unwrap_err();
        assert!(matches!(err, ConvertError::Format(_)));
    }

    #[test]
    fn test_empty_manifest() {
        let manifest: Manifest = serde_yaml::from_str("{}").unwrap();
        assert_eq!(manifest.output_dir, PathBuf::from("."));
        assert!(manifest.jobs(Path::new(".")).unwrap().is_empty());
    }
}
