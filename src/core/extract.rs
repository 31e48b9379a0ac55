//! Text extraction boundary.
//!
//! Turns an uploaded document into plain text before analysis. Only plain
//! text ships with a backend; PDF and Word are recognised so that callers get
//! a precise error instead of an "unsupported format" one.

use std::collections::HashMap;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::{EcdoticaError, Result};

const UTF8_BOM: &str = "\u{feff}";

/// Document formats the service knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Word,
}

impl DocumentFormat {
    /// Detect format from the file extension (case-insensitive)
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .ok_or_else(|| {
                EcdoticaError::unsupported_format(format!("'{}' has no file extension", file_name))
            })?;

        match extension.as_str() {
            "txt" | "text" | "md" => Ok(DocumentFormat::PlainText),
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" | "doc" => Ok(DocumentFormat::Word),
            other => Err(EcdoticaError::unsupported_format(format!(
                ".{} (expected .txt, .md, .pdf, .doc or .docx)",
                other
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DocumentFormat::PlainText => "plain_text",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Word => "word",
        }
    }
}

/// Backend that turns raw document bytes into text
pub trait TextExtractor: Send + Sync {
    fn format(&self) -> DocumentFormat;

    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

/// UTF-8 text files
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::PlainText
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| EcdoticaError::extraction_with_source("File is not valid UTF-8 text", e))?;
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

        if text.trim().is_empty() {
            return Err(EcdoticaError::extraction("File contains no text"));
        }
        Ok(text.to_string())
    }
}

/// Format → extractor table with a size bound (`PayloadTooLarge` above it)
pub struct ExtractorRegistry {
    extractors: HashMap<DocumentFormat, Box<dyn TextExtractor>>,
    max_bytes: usize,
}

impl ExtractorRegistry {
    /// Empty registry
    pub fn new(max_bytes: usize) -> Self {
        Self {
            extractors: HashMap::new(),
            max_bytes,
        }
    }

    /// Registry with every built-in backend
    pub fn with_defaults(max_bytes: usize) -> Self {
        let mut registry = Self::new(max_bytes);
        registry.register(Box::new(PlainTextExtractor));
        registry
    }

    /// Add or replace the backend for an extractor's format
    pub fn register(&mut self, extractor: Box<dyn TextExtractor>) {
        self.extractors.insert(extractor.format(), extractor);
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    pub fn supports(&self, format: DocumentFormat) -> bool {
        self.extractors.contains_key(&format)
    }

    /// Detect format from `file_name`, check size, extract
    pub fn extract(&self, file_name: &str, bytes: &[u8]) -> Result<(DocumentFormat, String)> {
        let format = DocumentFormat::from_file_name(file_name)?;

        if bytes.len() > self.max_bytes {
            return Err(EcdoticaError::payload_too_large(format!(
                "File '{}' is {} bytes, maximum is {} bytes",
                file_name,
                bytes.len(),
                self.max_bytes
            )));
        }

        let extractor = self.extractors.get(&format).ok_or_else(|| {
            EcdoticaError::extraction(format!(
                "No extraction backend available for {} documents",
                format.name()
            ))
        })?;

        tracing::debug!(file_name, format = format.name(), bytes = bytes.len(), "extracting text");
        let text = extractor.extract(bytes)?;
        Ok((format, text))
    }

    /// Read a file from disk and extract it
    pub fn extract_path(&self, path: &Path) -> Result<(DocumentFormat, String)> {
        let size = std::fs::metadata(path)?.len();
        if size > self.max_bytes as u64 {
            return Err(EcdoticaError::payload_too_large(format!(
                "File '{}' is {} bytes, maximum is {} bytes",
                path.display(),
                size,
                self.max_bytes
            )));
        }
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        self.extract(file_name, &bytes)
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formats: Vec<_> = self.extractors.keys().map(|k| k.name()).collect();
        formats.sort_unstable();
        f.debug_struct("ExtractorRegistry")
            .field("formats", &formats)
            .field("max_bytes", &self.max_bytes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            DocumentFormat::from_file_name("novela.TXT").unwrap(),
            DocumentFormat::PlainText
        );
        assert_eq!(
            DocumentFormat::from_file_name("novela.pdf").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_file_name("dir/novela.docx").unwrap(),
            DocumentFormat::Word
        );
        assert!(matches!(
            DocumentFormat::from_file_name("novela.odt"),
            Err(EcdoticaError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            DocumentFormat::from_file_name("novela"),
            Err(EcdoticaError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_plain_text_strips_bom() {
        let text = PlainTextExtractor.extract("\u{feff}Hola".as_bytes()).unwrap();
        assert_eq!(text, "Hola");
    }

    #[test]
    fn test_plain_text_rejects_invalid_utf8() {
        let err = PlainTextExtractor.extract(&[0x48, 0xff, 0x48]).unwrap_err();
        assert!(matches!(err, EcdoticaError::Extraction { .. }));
    }

    #[test]
    fn test_plain_text_rejects_blank() {
        assert!(PlainTextExtractor.extract(b"  \n\t ").is_err());
    }

    #[test]
    fn test_registry_size_limit() {
        let registry = ExtractorRegistry::with_defaults(4);
        let err = registry.extract("a.txt", b"12345").unwrap_err();
        assert!(matches!(err, EcdoticaError::PayloadTooLarge(_)));
        assert!(registry.extract("a.txt", b"1234").is_ok());
    }

    #[test]
    fn test_registry_pdf_has_no_backend() {
        let registry = ExtractorRegistry::with_defaults(1024);
        assert!(!registry.supports(DocumentFormat::Pdf));
        let err = registry.extract("a.pdf", b"%PDF-1.7").unwrap_err();
        assert!(matches!(err, EcdoticaError::Extraction { .. }));
        assert!(err.to_string().contains("pdf"));
    }

    #[test]
    fn test_registry_accepts_custom_backend() {
        struct FakeWord;
        impl TextExtractor for FakeWord {
            fn format(&self) -> DocumentFormat {
                DocumentFormat::Word
            }
            fn extract(&self, _bytes: &[u8]) -> Result<String> {
                Ok("extracted".to_string())
            }
        }

        let mut registry = ExtractorRegistry::with_defaults(1024);
        registry.register(Box::new(FakeWord));
        let (format, text) = registry.extract("a.docx", b"PK").unwrap();
        assert_eq!(format, DocumentFormat::Word);
        assert_eq!(text, "extracted");
    }
}
