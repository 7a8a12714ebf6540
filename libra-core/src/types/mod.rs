//! Core record types

mod book;
mod library;

pub use book::Book;
pub use library::{Library, BOOK_TAG, LIBRARY_TAG};
pub(crate) use library::{AUTHOR_TAG, COVER_PATH_TAG, PAGES_TAG, TITLE_TAG};
