//! Libra Core Library
//!
//! Book records and the codecs that move them between line-delimited JSON,
//! XML, CSV and free-text listings, plus a passthrough for cover images.
//! Every codec works on a whole collection and keeps record order.

pub mod cover;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod files;
pub mod types;

pub use cover::{copy_cover, read_cover, write_cover};
pub use decoder::{Decoded, Decoder};
pub use encoder::Encoder;
pub use error::{
    ConversionError, LibraError, ParseError, Result, SkipReason, SkippedRecord,
};
pub use files::{load_books, load_books_with, save_books, save_books_with};
pub use types::{Book, Library};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new("Test Book", "Test Author", 100);
        assert_eq!(book.title, "Test Book");
        assert_eq!(book.author, "Test Author");
    }
}
