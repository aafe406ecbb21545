//! Error types for header export.

use thiserror::Error;

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors raised while exporting a model to C source.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Model exposes no usable input/output shape metadata.
    #[error("shape error: {message}")]
    Shape { message: String },

    /// Underlying conversion capability rejected the model.
    #[error("conversion failed: {message}")]
    Conversion { message: String },

    /// I/O error while writing generated source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Create a shape error.
    pub fn shape(message: impl Into<String>) -> Self {
        ExportError::Shape {
            message: message.into(),
        }
    }

    /// Create a conversion error.
    pub fn conversion(message: impl Into<String>) -> Self {
        ExportError::Conversion {
            message: message.into(),
        }
    }

    /// Get error category for logging.
    pub fn category(&self) -> &'static str {
        match self {
            ExportError::Shape { .. } => "shape",
            ExportError::Conversion { .. } => "conversion",
            ExportError::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExportError::shape("model declares no input shape");
        assert_eq!(
            err.to_string(),
            "shape error: model declares no input shape"
        );
        assert_eq!(err.category(), "shape");

        let err = ExportError::conversion("unsupported op: CUSTOM");
        assert_eq!(err.to_string(), "conversion failed: unsupported op: CUSTOM");
        assert_eq!(err.category(), "conversion");
    }
}
