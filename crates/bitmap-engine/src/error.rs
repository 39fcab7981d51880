use std::path::PathBuf;

/// Errors that can occur while converting an image to a bitmap.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Unsupported file format: '{extension}' ({}). Only PNG and JPEG are supported.", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Malformed image: {0}")]
    MalformedImage(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for bitmap-engine operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = ConvertError::FileNotFound {
            path: PathBuf::from("missing.png"),
        };
        assert_eq!(err.to_string(), "Input file not found: missing.png");

        let err = ConvertError::UnsupportedFormat {
            path: PathBuf::from("notes.txt"),
            extension: "txt".into(),
        };
        assert!(err.to_string().contains("'txt'"));
        assert!(err.to_string().contains("notes.txt"));
    }

    #[test]
    fn test_write_error_keeps_source() {
        let err = ConvertError::Write {
            path: PathBuf::from("/nope/out.bmp"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Failed to write /nope/out.bmp"));
    }
}
