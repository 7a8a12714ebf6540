//! XML encoder implementation
//!
//! Uses quick-xml to write a `<Library>` document with one `<book>` element
//! per record.

use super::Encoder;
use crate::error::ConversionError;
use crate::types::{Book, AUTHOR_TAG, BOOK_TAG, COVER_PATH_TAG, LIBRARY_TAG, PAGES_TAG, TITLE_TAG};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Default indentation width in spaces
const DEFAULT_INDENT: usize = 2;

/// Encoder for `<Library>` XML documents
pub struct XmlEncoder {
    /// Spaces per nesting level, `None` for compact output
    indent: Option<usize>,
}

impl XmlEncoder {
    pub fn new() -> Self {
        Self {
            indent: Some(DEFAULT_INDENT),
        }
    }

    /// Set indentation width, or `None` to write everything on one line
    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    fn write_library<W: Write>(
        &self,
        writer: &mut Writer<W>,
        books: &[Book],
    ) -> Result<(), quick_xml::Error> {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(BytesStart::new(LIBRARY_TAG)))?;

        for book in books {
            write_book(writer, book)?;
        }

        writer.write_event(Event::End(BytesEnd::new(LIBRARY_TAG)))?;
        Ok(())
    }
}

impl Default for XmlEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for XmlEncoder {
    fn encode(&self, books: &[Book], writer: &mut dyn Write) -> Result<(), ConversionError> {
        let mut xml_writer = match self.indent {
            Some(width) => Writer::new_with_indent(&mut *writer, b' ', width),
            None => Writer::new(&mut *writer),
        };

        self.write_library(&mut xml_writer, books)
            .map_err(|e| ConversionError::Xml(e.to_string()))?;
        tracing::debug!("Encoded {} books as XML", books.len());
        Ok(())
    }

    fn format_name(&self) -> &str {
        "XML"
    }

    fn file_extension(&self) -> &str {
        "xml"
    }

    fn mime_type(&self) -> &str {
        "application/xml"
    }
}

/// Write a simple text element
fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    content: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write one `<book>` element
fn write_book<W: Write>(writer: &mut Writer<W>, book: &Book) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(BOOK_TAG)))?;

    write_text_element(writer, TITLE_TAG, &book.title)?;
    write_text_element(writer, AUTHOR_TAG, &book.author)?;
    write_text_element(writer, PAGES_TAG, &book.pages.to_string())?;
    if let Some(ref cover_path) = book.cover_path {
        write_text_element(writer, COVER_PATH_TAG, cover_path)?;
    }

    writer.write_event(Event::End(BytesEnd::new(BOOK_TAG)))?;
    Ok(())
}
