use std::path::PathBuf;
use thiserror::Error;

/// Errors from the conversion pipeline.
///
/// Read and decode failures surface before any packing begins; write
/// failures surface after the in-memory conversion succeeded, so the
/// caller may retry against a different destination.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG decode error in {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("Quantization failed: {0}")]
    Quantize(String),

    #[error("Codec error: {0}")]
    Codec(#[from] lvimg_codec::CodecError),

    #[error("Unknown color format: {0}")]
    Format(#[from] lvimg_codec::ParseFormatError),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest error in {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_message() {
        let error = ConvertError::Read {
            path: PathBuf::from("missing.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read missing.png: no such file"
        );
    }

    #[test]
    fn test_codec_error_wraps() {
        let codec = lvimg_codec::CodecError::PaletteTooLarge { colors: 9, max: 4 };
        let error: ConvertError = codec.into();
        assert!(matches!(error, ConvertError::Codec(_)));
        assert_eq!(
            error.to_string(),
            "Codec error: palette has 9 colors but the format holds at most 4"
        );
    }

    #[test]
    fn test_quantize_error_message() {
        let error = ConvertError::Quantize("image too small".to_string());
        assert_eq!(error.to_string(), "Quantization failed: image too small");
    }
}
