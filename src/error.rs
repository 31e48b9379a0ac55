//! Error types for Ecdotica.
//!
//! The analyzer never fails; everything here belongs to the collaborators
//! around it (request validation, text extraction, configuration and the
//! integration stubs). Each variant maps to one HTTP status in `core::api`.

use thiserror::Error;

/// Result type alias using `EcdoticaError`.
pub type Result<T> = std::result::Result<T, EcdoticaError>;

#[derive(Debug, Error)]
pub enum EcdoticaError {
    /// Caller-supplied input rejected (too short, missing field, too large).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A document could not be turned into text.
    #[error("Extraction error: {message}")]
    Extraction {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Request body or uploaded file over the configured size bound.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Integration boundary with no backend wired in.
    #[error("{integration} is not implemented")]
    NotImplemented { integration: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EcdoticaError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
            source: None,
        }
    }

    pub fn extraction_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Extraction {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat(format.into())
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::PayloadTooLarge(message.into())
    }

    pub fn not_implemented(integration: &'static str) -> Self {
        Self::NotImplemented { integration }
    }

    /// Short name used as `error_type` in JSON error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::Extraction { .. } => "ExtractionError",
            Self::UnsupportedFormat(_) => "UnsupportedFormatError",
            Self::PayloadTooLarge(_) => "PayloadTooLargeError",
            Self::NotImplemented { .. } => "NotImplementedError",
            Self::Config(_) => "ConfigError",
            Self::Io(_) => "IoError",
            Self::Serialization(_) => "SerializationError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_extraction_keeps_source_chain() {
        let utf8 = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = EcdoticaError::extraction_with_source("not valid UTF-8", utf8);
        assert!(err.source().is_some());
        assert_eq!(err.kind(), "ExtractionError");
    }

    #[test]
    fn test_payload_too_large_kind() {
        let err = EcdoticaError::payload_too_large("2048 bytes, maximum is 1024");
        assert_eq!(err.kind(), "PayloadTooLargeError");
        assert!(err.to_string().starts_with("Payload too large"));
    }

    #[test]
    fn test_not_implemented_names_integration() {
        let err = EcdoticaError::not_implemented("Blockchain registry");
        assert_eq!(err.to_string(), "Blockchain registry is not implemented");
    }
}
