//! XML decoder implementation
//!
//! Walks the quick-xml event stream rather than deserializing through serde so
//! that the root tag is checked and whitespace inside field values survives.
//! Whitespace between elements (indentation) is ignored.

use super::{Decoded, Decoder};
use crate::error::{ParseError, Result};
use crate::types::{
    Book, Library, AUTHOR_TAG, BOOK_TAG, COVER_PATH_TAG, LIBRARY_TAG, PAGES_TAG, TITLE_TAG,
};
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::Reader;
use std::io::Read;

type ParseResult<T> = std::result::Result<T, ParseError>;

/// Decoder for `<Library>` XML documents
pub struct XmlDecoder;

/// Child elements of `<book>` this decoder understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Author,
    Pages,
    CoverPath,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        if tag == TITLE_TAG.as_bytes() {
            Some(Field::Title)
        } else if tag == AUTHOR_TAG.as_bytes() {
            Some(Field::Author)
        } else if tag == PAGES_TAG.as_bytes() {
            Some(Field::Pages)
        } else if tag == COVER_PATH_TAG.as_bytes() {
            Some(Field::CoverPath)
        } else {
            None
        }
    }
}

/// Field values collected while inside a `<book>` element
#[derive(Default)]
struct PartialBook {
    title: Option<String>,
    author: Option<String>,
    pages: Option<String>,
    cover_path: Option<String>,
}

impl PartialBook {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = Some(value),
            Field::Author => self.author = Some(value),
            Field::Pages => self.pages = Some(value),
            Field::CoverPath => self.cover_path = Some(value),
        }
    }

    fn finish(self, record: usize) -> ParseResult<Book> {
        let title = self.title.ok_or(ParseError::MissingField {
            record,
            field: TITLE_TAG,
        })?;
        let author = self.author.ok_or(ParseError::MissingField {
            record,
            field: AUTHOR_TAG,
        })?;
        let pages_text = self.pages.ok_or(ParseError::MissingField {
            record,
            field: PAGES_TAG,
        })?;
        let pages = pages_text
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidField {
                record,
                field: PAGES_TAG,
                value: pages_text.clone(),
            })?;

        Ok(Book {
            title,
            author,
            pages,
            cover_path: self.cover_path,
        })
    }
}

impl XmlDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Parse a complete document into a library
    pub fn parse(&self, text: &str) -> ParseResult<Library> {
        let mut reader = Reader::from_str(text);

        loop {
            match reader.read_event().map_err(invalid_xml)? {
                Event::Start(e) => {
                    check_root(&e)?;
                    return read_library(&mut reader);
                }
                Event::Empty(e) => {
                    check_root(&e)?;
                    return Ok(Library::new());
                }
                Event::Text(t) if !is_blank(&t) => {
                    return Err(ParseError::InvalidXml(
                        "text content before the root element".to_string(),
                    ));
                }
                Event::Eof => return Err(ParseError::MissingRoot),
                _ => {}
            }
        }
    }
}

impl Default for XmlDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for XmlDecoder {
    fn decode_with_diagnostics(&self, reader: &mut dyn Read) -> Result<Decoded> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes).map_err(invalid_xml)?;

        let library = self.parse(&text)?;
        tracing::debug!("Decoded {} books from XML", library.len());
        Ok(Decoded::new(library.into_books()))
    }

    fn format_name(&self) -> &str {
        "XML"
    }

    fn is_strict(&self) -> bool {
        true
    }

    fn supported_extensions(&self) -> &[&str] {
        &["xml"]
    }
}

fn invalid_xml(err: impl std::fmt::Display) -> ParseError {
    ParseError::InvalidXml(err.to_string())
}

fn unexpected_eof(inside: &str) -> ParseError {
    ParseError::InvalidXml(format!("unexpected end of document inside <{}>", inside))
}

fn element_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn is_blank(text: &BytesText) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}

fn check_root(e: &BytesStart) -> ParseResult<()> {
    if e.name().as_ref() == LIBRARY_TAG.as_bytes() {
        Ok(())
    } else {
        Err(ParseError::UnexpectedRoot {
            expected: LIBRARY_TAG,
            found: element_name(e),
        })
    }
}

/// Read `<book>` children until the root closes
fn read_library(reader: &mut Reader<&[u8]>) -> ParseResult<Library> {
    let mut library = Library::new();

    loop {
        match reader.read_event().map_err(invalid_xml)? {
            Event::Start(e) if e.name().as_ref() == BOOK_TAG.as_bytes() => {
                let record = library.len() + 1;
                library.push(read_book(reader, record)?);
            }
            Event::Empty(e) if e.name().as_ref() == BOOK_TAG.as_bytes() => {
                return Err(ParseError::MissingField {
                    record: library.len() + 1,
                    field: TITLE_TAG,
                });
            }
            Event::Start(_) => skip_element(reader)?,
            Event::End(_) => return Ok(library),
            Event::Eof => return Err(unexpected_eof(LIBRARY_TAG)),
            _ => {}
        }
    }
}

/// Read the fields of one `<book>` up to its closing tag
fn read_book(reader: &mut Reader<&[u8]>, record: usize) -> ParseResult<Book> {
    let mut book = PartialBook::default();

    loop {
        match reader.read_event().map_err(invalid_xml)? {
            Event::Start(e) => match Field::from_tag(e.name().as_ref()) {
                Some(field) => book.set(field, read_text(reader)?),
                None => skip_element(reader)?,
            },
            Event::Empty(e) => {
                if let Some(field) = Field::from_tag(e.name().as_ref()) {
                    book.set(field, String::new());
                }
            }
            Event::End(_) => return book.finish(record),
            Event::Eof => return Err(unexpected_eof(BOOK_TAG)),
            _ => {}
        }
    }
}

/// Collect the text of a field element, consuming its closing tag
fn read_text(reader: &mut Reader<&[u8]>) -> ParseResult<String> {
    let mut value = String::new();

    loop {
        match reader.read_event().map_err(invalid_xml)? {
            Event::Text(t) => value.push_str(&t.unescape().map_err(invalid_xml)?),
            Event::CData(c) => value.push_str(std::str::from_utf8(&c).map_err(invalid_xml)?),
            Event::End(_) => return Ok(value),
            Event::Start(e) | Event::Empty(e) => {
                return Err(ParseError::InvalidXml(format!(
                    "unexpected element <{}> inside a book field",
                    element_name(&e)
                )));
            }
            Event::Eof => return Err(unexpected_eof(BOOK_TAG)),
            _ => {}
        }
    }
}

/// Skip an element whose start tag was just read
fn skip_element(reader: &mut Reader<&[u8]>) -> ParseResult<()> {
    let mut depth = 1usize;
    while depth > 0 {
        match reader.read_event().map_err(invalid_xml)? {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth -= 1,
            Event::Eof => return Err(ParseError::InvalidXml("unexpected end of document".into())),
            _ => {}
        }
    }
    Ok(())
}
