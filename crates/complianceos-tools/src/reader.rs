//! Uploaded-document decoding.
//!
//! Text formats are decoded as UTF-8 (invalid sequences replaced). PDF and
//! unknown formats are rejected with `UnsupportedFormat`; binary decoding is
//! an external concern.

use std::any::Any;
use std::path::Path;

use tracing::debug;

use complianceos_contracts::{
    error::{ComplianceError, ComplianceResult},
    tool::ToolId,
};
use complianceos_core::traits::{Tool, ToolKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Pdf,
    Text,
    Unknown,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentReader;

impl DocumentReader {
    pub fn new() -> Self {
        Self
    }

    pub fn detect_type(&self, filename: &str) -> DocumentType {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match ext.as_deref() {
            Some("pdf") => DocumentType::Pdf,
            Some("txt" | "md" | "csv") => DocumentType::Text,
            _ => DocumentType::Unknown,
        }
    }

    pub fn read_bytes(&self, content: &[u8], filename: &str) -> ComplianceResult<String> {
        match self.detect_type(filename) {
            DocumentType::Text => {
                let text = String::from_utf8_lossy(content).into_owned();
                if text.trim().is_empty() {
                    return Err(ComplianceError::InvalidInput {
                        reason: format!("document '{}' is empty", filename),
                    });
                }
                debug!(filename, chars = text.len(), "document decoded");
                Ok(text)
            }
            DocumentType::Pdf | DocumentType::Unknown => Err(ComplianceError::UnsupportedFormat {
                filename: filename.to_string(),
            }),
        }
    }
}

impl Tool for DocumentReader {
    fn id(&self) -> ToolId {
        ToolId::DocumentReader
    }

    fn description(&self) -> &'static str {
        "Decodes uploaded text documents"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ToolKind for DocumentReader {
    const ID: ToolId = ToolId::DocumentReader;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_types_by_extension() {
        let reader = DocumentReader::new();
        assert_eq!(reader.detect_type("policy.PDF"), DocumentType::Pdf);
        assert_eq!(reader.detect_type("notes.md"), DocumentType::Text);
        assert_eq!(reader.detect_type("export.csv"), DocumentType::Text);
        assert_eq!(reader.detect_type("image.png"), DocumentType::Unknown);
        assert_eq!(reader.detect_type("README"), DocumentType::Unknown);
    }

    #[test]
    fn text_is_decoded_lossily() {
        let text = DocumentReader::new()
            .read_bytes(b"Data must be encrypted \xFF at rest.", "gdpr.txt")
            .unwrap();
        assert!(text.starts_with("Data must be encrypted"));
    }

    #[test]
    fn unsupported_formats_are_rejected() {
        let reader = DocumentReader::new();
        assert!(matches!(
            reader.read_bytes(b"%PDF-1.7", "scan.pdf"),
            Err(ComplianceError::UnsupportedFormat { filename }) if filename == "scan.pdf"
        ));
        assert!(matches!(
            reader.read_bytes(b"\x89PNG", "logo.png"),
            Err(ComplianceError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn empty_text_is_invalid_input() {
        assert!(matches!(
            DocumentReader::new().read_bytes(b"   \n", "empty.txt"),
            Err(ComplianceError::InvalidInput { .. })
        ));
    }
}
