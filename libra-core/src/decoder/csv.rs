//! CSV decoder implementation
//!
//! Rows are `title,author,pages` with no header. Lenient: a row that cannot be
//! turned into a book is dropped and reported, the rest are returned.

use super::{Decoded, Decoder};
use crate::error::{Result, SkipReason, SkippedRecord};
use crate::types::Book;
use csv::{ByteRecord, ReaderBuilder, StringRecord};
use std::io::{self, Read};

/// Number of columns a book row must carry
const BOOK_COLUMNS: usize = 3;

/// Decoder for headerless `title,author,pages` CSV
pub struct CsvDecoder;

impl CsvDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Convert one row, or explain why it was rejected
    fn book_from_record(record: &StringRecord) -> std::result::Result<Book, SkipReason> {
        if record.len() < BOOK_COLUMNS {
            return Err(SkipReason::MissingColumns {
                expected: BOOK_COLUMNS,
                found: record.len(),
            });
        }

        let pages_field = &record[2];
        let pages = pages_field
            .parse::<u32>()
            .map_err(|source| SkipReason::InvalidPages {
                value: pages_field.to_string(),
                source,
            })?;

        Ok(Book::new(&record[0], &record[1], pages))
    }
}

/// Source text of a row for diagnostics, lossy when it isn't UTF-8
fn raw_text(record: &ByteRecord) -> String {
    record
        .iter()
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join(",")
}

impl Default for CsvDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for CsvDecoder {
    fn decode_with_diagnostics(&self, reader: &mut dyn Read) -> Result<Decoded> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut decoded = Decoded::default();

        for (index, result) in csv_reader.byte_records().enumerate() {
            let fallback_line = index as u64 + 1;
            let record = match result {
                Ok(record) => record,
                Err(err) if err.is_io_error() => return Err(io::Error::other(err).into()),
                Err(err) => {
                    let (line, raw) = match err.position() {
                        Some(pos) => (pos.line(), format!("<unreadable row at byte {}>", pos.byte())),
                        None => (fallback_line, String::new()),
                    };
                    decoded.skip(
                        self.format_name(),
                        SkippedRecord::new(line, raw, SkipReason::Malformed(err.to_string())),
                    );
                    continue;
                }
            };

            let line = record
                .position()
                .map(|pos| pos.line())
                .unwrap_or(fallback_line);
            let raw = raw_text(&record);

            let record = match StringRecord::from_byte_record(record) {
                Ok(record) => record,
                Err(err) => {
                    let reason = SkipReason::Malformed(err.utf8_error().to_string());
                    decoded.skip(self.format_name(), SkippedRecord::new(line, raw, reason));
                    continue;
                }
            };

            match Self::book_from_record(&record) {
                Ok(book) => decoded.books.push(book),
                Err(reason) => {
                    decoded.skip(self.format_name(), SkippedRecord::new(line, raw, reason));
                }
            }
        }

        tracing::debug!(
            "Decoded {} books from CSV ({} skipped)",
            decoded.books.len(),
            decoded.skipped.len()
        );
        Ok(decoded)
    }

    fn format_name(&self) -> &str {
        "CSV"
    }

    fn is_strict(&self) -> bool {
        false
    }

    fn supported_extensions(&self) -> &[&str] {
        &["csv"]
    }
}
