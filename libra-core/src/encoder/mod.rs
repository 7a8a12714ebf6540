//! Encoders for writing book collections to external formats

mod csv;
mod jsonl;
mod xml;

pub use self::csv::CsvEncoder;
pub use jsonl::JsonLinesEncoder;
pub use xml::XmlEncoder;

use crate::error::ConversionError;
use crate::types::Book;
use std::io::Write;

/// Trait for encoding a book collection
pub trait Encoder: Send + Sync {
    /// Encode all books to a writer, in order
    fn encode(&self, books: &[Book], writer: &mut dyn Write) -> Result<(), ConversionError>;

    /// Encode all books into a new buffer
    fn encode_to_vec(&self, books: &[Book]) -> Result<Vec<u8>, ConversionError> {
        let mut buffer = Vec::new();
        self.encode(books, &mut buffer)?;
        Ok(buffer)
    }

    /// Format name (e.g., "XML", "CSV")
    fn format_name(&self) -> &str;

    /// File extension for this format
    fn file_extension(&self) -> &str;

    /// MIME type for this format
    fn mime_type(&self) -> &str;
}

/// Get an encoder by format name
pub fn encoder_for_format(format: &str) -> Option<Box<dyn Encoder>> {
    match format.to_lowercase().as_str() {
        "jsonl" | "ndjson" | "json" | "json-lines" => Some(Box::new(JsonLinesEncoder::new())),
        "xml" => Some(Box::new(XmlEncoder::new())),
        "csv" => Some(Box::new(CsvEncoder::new())),
        _ => None,
    }
}

/// Get an encoder for a file extension
pub fn encoder_for_extension(ext: &str) -> Option<Box<dyn Encoder>> {
    match ext.to_lowercase().as_str() {
        "jsonl" | "ndjson" | "json" => Some(Box::new(JsonLinesEncoder::new())),
        "xml" => Some(Box::new(XmlEncoder::new())),
        "csv" => Some(Box::new(CsvEncoder::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_for_format() {
        assert_eq!(encoder_for_format("JSONL").unwrap().file_extension(), "jsonl");
        assert_eq!(encoder_for_format("xml").unwrap().mime_type(), "application/xml");
        assert_eq!(encoder_for_format("csv").unwrap().format_name(), "CSV");
        // Free text is decode-only
        assert!(encoder_for_format("text").is_none());
        assert!(encoder_for_extension("txt").is_none());
    }
}
