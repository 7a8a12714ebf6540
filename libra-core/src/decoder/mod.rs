//! Decoders for reading book collections from external formats
//!
//! JSON lines and XML are strict: the first malformed record aborts the whole
//! decode. CSV and free text are lenient: malformed records are dropped and
//! reported through [`Decoded::skipped`].

mod csv;
mod jsonl;
mod text;
mod xml;

pub use self::csv::CsvDecoder;
pub use jsonl::JsonLinesDecoder;
pub use text::TextDecoder;
pub use xml::XmlDecoder;

use crate::error::{Result, SkippedRecord};
use crate::types::Book;
use std::io::Read;

/// Books recovered by a decoder, plus the records it dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub books: Vec<Book>,
    pub skipped: Vec<SkippedRecord>,
}

impl Decoded {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
            skipped: Vec::new(),
        }
    }

    /// Record a dropped record and log it
    pub(crate) fn skip(&mut self, format: &str, record: SkippedRecord) {
        tracing::warn!("Skipping {} record on line {}: {}", format, record.line, record.reason);
        self.skipped.push(record);
    }
}

/// Trait for decoding a book collection
pub trait Decoder: Send + Sync {
    /// Decode all books from a reader, keeping diagnostics for skipped records
    fn decode_with_diagnostics(&self, reader: &mut dyn Read) -> Result<Decoded>;

    /// Decode all books from a reader
    fn decode(&self, reader: &mut dyn Read) -> Result<Vec<Book>> {
        Ok(self.decode_with_diagnostics(reader)?.books)
    }

    /// Decode all books from an in-memory buffer
    fn decode_bytes(&self, data: &[u8]) -> Result<Vec<Book>> {
        let mut slice = data;
        self.decode(&mut slice)
    }

    /// Format name (e.g., "JSON lines", "CSV")
    fn format_name(&self) -> &str;

    /// Whether a single malformed record fails the whole decode
    fn is_strict(&self) -> bool;

    /// File extensions this decoder supports
    fn supported_extensions(&self) -> &[&str];
}

/// Every available decoder
fn all_decoders() -> Vec<Box<dyn Decoder>> {
    vec![
        Box::new(JsonLinesDecoder::new()),
        Box::new(XmlDecoder::new()),
        Box::new(CsvDecoder::new()),
        Box::new(TextDecoder::new()),
    ]
}

/// Get the appropriate decoder for a file extension
pub fn decoder_for_extension(ext: &str) -> Option<Box<dyn Decoder>> {
    let ext = ext.to_lowercase();
    all_decoders()
        .into_iter()
        .find(|decoder| decoder.supported_extensions().contains(&ext.as_str()))
}

/// Get a decoder by format name
pub fn decoder_for_format(format: &str) -> Option<Box<dyn Decoder>> {
    match format.to_lowercase().as_str() {
        "jsonl" | "ndjson" | "json" | "json-lines" => Some(Box::new(JsonLinesDecoder::new())),
        "xml" => Some(Box::new(XmlDecoder::new())),
        "csv" => Some(Box::new(CsvDecoder::new())),
        "text" | "txt" => Some(Box::new(TextDecoder::new())),
        _ => None,
    }
}
