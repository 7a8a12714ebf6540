//! JSON lines encoder implementation

use super::Encoder;
use crate::error::ConversionError;
use crate::types::Book;
use std::io::Write;

/// Encoder writing one JSON object per line
pub struct JsonLinesEncoder;

impl JsonLinesEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonLinesEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for JsonLinesEncoder {
    fn encode(&self, books: &[Book], writer: &mut dyn Write) -> Result<(), ConversionError> {
        for book in books {
            serde_json::to_writer(&mut *writer, book)?;
            writer.write_all(b"\n")?;
        }
        tracing::debug!("Encoded {} books as JSON lines", books.len());
        Ok(())
    }

    fn format_name(&self) -> &str {
        "JSON lines"
    }

    fn file_extension(&self) -> &str {
        "jsonl"
    }

    fn mime_type(&self) -> &str {
        "application/x-ndjson"
    }
}
