//! JSON lines decoder implementation
//!
//! One JSON object per line. Strict: any line that is not a valid book fails
//! the whole decode.

use super::{Decoded, Decoder};
use crate::error::{ParseError, Result};
use crate::types::Book;
use std::io::{BufRead, BufReader, Read};

/// Decoder for line-delimited JSON
pub struct JsonLinesDecoder;

impl JsonLinesDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonLinesDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for JsonLinesDecoder {
    fn decode_with_diagnostics(&self, reader: &mut dyn Read) -> Result<Decoded> {
        let reader = BufReader::new(reader);
        let mut books = Vec::new();

        for (index, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            let book: Book = serde_json::from_slice(&line).map_err(|source| {
                ParseError::InvalidJsonLine {
                    line: index + 1,
                    source,
                }
            })?;
            books.push(book);
        }

        tracing::debug!("Decoded {} books from JSON lines", books.len());
        Ok(Decoded::new(books))
    }

    fn format_name(&self) -> &str {
        "JSON lines"
    }

    fn is_strict(&self) -> bool {
        true
    }

    fn supported_extensions(&self) -> &[&str] {
        &["jsonl", "ndjson", "json"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibraError;

    #[test]
    fn test_decode_lines() {
        let input = concat!(
            r#"{"title":"The Go Programming Language","author":"Alan A. A. Donovan","pages":380}"#,
            "\n",
            r#"{"title":"Go in Action","author":"William Kennedy","pages":300,"cover_path":"covers/action.png"}"#,
            "\n",
        );
        let books = JsonLinesDecoder::new().decode_bytes(input.as_bytes()).unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0], Book::new("The Go Programming Language", "Alan A. A. Donovan", 380));
        assert_eq!(
            books[1],
            Book::new("Go in Action", "William Kennedy", 300).with_cover("covers/action.png")
        );
    }

    #[test]
    fn test_empty_input() {
        let books = JsonLinesDecoder::new().decode_bytes(b"").unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn test_blank_lines_ignored() {
        let input = "\n{\"title\":\"A\",\"author\":\"B\",\"pages\":1}\r\n\n  \n";
        let books = JsonLinesDecoder::new().decode_bytes(input.as_bytes()).unwrap();
        assert_eq!(books, vec![Book::new("A", "B", 1)]);
    }

    #[test]
    fn test_non_numeric_pages_fails_whole_decode() {
        let input = concat!(
            r#"{"title":"A","author":"B","pages":1}"#,
            "\n",
            r#"{"title":"Go Basics","author":"Jane Doe","pages":"abc"}"#,
            "\n",
        );
        let err = JsonLinesDecoder::new().decode_bytes(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LibraError::Parse(ParseError::InvalidJsonLine { line: 2, .. })
        ));
    }

    #[test]
    fn test_missing_field_fails() {
        let input = r#"{"title":"A","pages":1}"#;
        let err = JsonLinesDecoder::new().decode_bytes(input.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 1"));
        assert!(err.to_string().contains("author"));
    }

    #[test]
    fn test_non_utf8_line_is_parse_error() {
        let mut input = br#"{"title":"A","author":"B","pages":1}"#.to_vec();
        input.extend_from_slice(b"\n{\"title\":\"\xff\",\"author\":\"B\",\"pages\":1}\n");
        let err = JsonLinesDecoder::new().decode_bytes(&input).unwrap_err();
        assert!(matches!(
            err,
            LibraError::Parse(ParseError::InvalidJsonLine { line: 2, .. })
        ));
    }

    #[test]
    fn test_invalid_json_fails() {
        let err = JsonLinesDecoder::new().decode_bytes(b"not json").unwrap_err();
        assert!(matches!(
            err,
            LibraError::Parse(ParseError::InvalidJsonLine { line: 1, .. })
        ));
    }
}
