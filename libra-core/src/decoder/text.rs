//! Free-text book listing decoder
//!
//! Scans lines for `Title: <T>, Author: <A>, Pages: <P>`. Best effort and read
//! only: lines that don't match are ignored, a match with an unusable page
//! count or a line that is not UTF-8 is reported and dropped.

use super::{Decoded, Decoder};
use crate::error::{Result, SkipReason, SkippedRecord};
use crate::types::Book;
use regex::Regex;
use std::io::{BufRead, BufReader, Read};

/// Pattern a book listing line must contain
const BOOK_LINE_PATTERN: &str = r"Title: (.+), Author: (.+), Pages: ([0-9]+)";

/// Decoder for free-text book listings
pub struct TextDecoder {
    pattern: Regex,
}

impl TextDecoder {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(BOOK_LINE_PATTERN).expect("book line pattern is valid"),
        }
    }

    /// Extract a book from a single line.
    ///
    /// `None` when the line doesn't look like a listing at all.
    fn parse_line(&self, line: &str) -> Option<std::result::Result<Book, SkipReason>> {
        let captures = self.pattern.captures(line)?;
        let title = &captures[1];
        let author = &captures[2];
        let pages_text = &captures[3];

        Some(
            pages_text
                .parse::<u32>()
                .map(|pages| Book::new(title, author, pages))
                .map_err(|source| SkipReason::InvalidPages {
                    value: pages_text.to_string(),
                    source,
                }),
        )
    }
}

impl Default for TextDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for TextDecoder {
    fn decode_with_diagnostics(&self, reader: &mut dyn Read) -> Result<Decoded> {
        let reader = BufReader::new(reader);
        let mut decoded = Decoded::default();

        for (index, line) in reader.split(b'\n').enumerate() {
            let mut bytes = line?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }

            let line = match String::from_utf8(bytes) {
                Ok(line) => line,
                Err(err) => {
                    let raw = String::from_utf8_lossy(err.as_bytes()).into_owned();
                    decoded.skip(
                        self.format_name(),
                        SkippedRecord::new(
                            index as u64 + 1,
                            raw,
                            SkipReason::Malformed(err.utf8_error().to_string()),
                        ),
                    );
                    continue;
                }
            };

            match self.parse_line(&line) {
                Some(Ok(book)) => decoded.books.push(book),
                Some(Err(reason)) => {
                    decoded.skip(
                        self.format_name(),
                        SkippedRecord::new(index as u64 + 1, line, reason),
                    );
                }
                None => {}
            }
        }

        tracing::debug!(
            "Extracted {} books from text ({} skipped)",
            decoded.books.len(),
            decoded.skipped.len()
        );
        Ok(decoded)
    }

    fn format_name(&self) -> &str {
        "text"
    }

    fn is_strict(&self) -> bool {
        false
    }

    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }
}
