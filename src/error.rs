/// Error types for the conversion pipeline
///
/// Every failure ends up as a human-readable string in the UI, so the
/// `Display` text of each variant is what the user sees in the error dialog.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while converting a PDF to images
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The PDFium shared library could not be bound
    #[error("PDF rendering library is unavailable: {0}")]
    LibraryUnavailable(String),

    /// The source document could not be opened or parsed
    #[error("Could not open {}: {reason}", path.display())]
    Open { path: PathBuf, reason: String },

    /// A page could not be fetched or rasterized
    #[error("Failed to render page {page}: {reason}")]
    Render { page: usize, reason: String },

    /// The raster buffer could not be encoded to the chosen format
    #[error("Failed to encode {}: {reason}", path.display())]
    Encode { path: PathBuf, reason: String },

    /// Creating the output folder or writing a page file failed
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The background worker died before reporting an outcome
    #[error("Conversion worker stopped unexpectedly: {0}")]
    Worker(String),
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io { path: path.into(), source }
    }

    pub fn encode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ConvertError::Encode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn open(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ConvertError::Open {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_mentions_path() {
        let err = ConvertError::open("/tmp/missing.pdf", "file not found");
        let message = err.to_string();
        assert!(message.starts_with("Could not open"));
        assert!(message.contains("missing.pdf"));
        assert!(message.contains("file not found"));
    }

    #[test]
    fn test_render_error_names_page() {
        let err = ConvertError::Render { page: 4, reason: "bad stream".into() };
        assert_eq!(err.to_string(), "Failed to render page 4: bad stream");
    }
}
