//! CSV encoder implementation
//!
//! Writes `title,author,pages` rows with no header. The cover path is not part
//! of this format and is dropped.

use super::Encoder;
use crate::error::ConversionError;
use crate::types::Book;
use csv::WriterBuilder;
use std::io::Write;

/// Encoder for headerless `title,author,pages` CSV
pub struct CsvEncoder;

impl CsvEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for CsvEncoder {
    fn encode(&self, books: &[Book], writer: &mut dyn Write) -> Result<(), ConversionError> {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        for book in books {
            let pages = book.pages.to_string();
            wtr.write_record([book.title.as_str(), book.author.as_str(), pages.as_str()])?;
        }
        wtr.flush()?;

        tracing::debug!("Encoded {} books as CSV", books.len());
        Ok(())
    }

    fn format_name(&self) -> &str {
        "CSV"
    }

    fn file_extension(&self) -> &str {
        "csv"
    }

    fn mime_type(&self) -> &str {
        "text/csv"
    }
}
