//! Named wrapper around a book collection

use super::Book;

/// Root element name of the XML representation
pub const LIBRARY_TAG: &str = "Library";

/// Element name of each record in the XML representation
pub const BOOK_TAG: &str = "book";

pub(crate) const TITLE_TAG: &str = "title";
pub(crate) const AUTHOR_TAG: &str = "author";
pub(crate) const PAGES_TAG: &str = "pages";
pub(crate) const COVER_PATH_TAG: &str = "cover_path";

/// An ordered collection of books.
///
/// XML has no bare top-level sequence, so the collection is carried inside a
/// `<Library>` root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    pub books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book, keeping insertion order
    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn into_books(self) -> Vec<Book> {
        self.books
    }
}

