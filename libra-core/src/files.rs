//! Loading and saving book collections through files
//!
//! The format is picked from the file extension unless a codec is given.

use crate::decoder::{decoder_for_extension, Decoded, Decoder};
use crate::encoder::{encoder_for_extension, Encoder};
use crate::error::{ConversionError, ParseError, Result};
use crate::types::Book;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

fn extension_of(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// Load books from a file, choosing the decoder by extension
pub fn load_books(path: impl AsRef<Path>) -> Result<Decoded> {
    let path = path.as_ref();
    let decoder = extension_of(path)
        .and_then(decoder_for_extension)
        .ok_or_else(|| ParseError::UnsupportedFormat(path.display().to_string()))?;

    load_books_with(path, decoder.as_ref())
}

/// Load books from a file with a specific decoder
pub fn load_books_with(path: impl AsRef<Path>, decoder: &dyn Decoder) -> Result<Decoded> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let decoded = decoder.decode_with_diagnostics(&mut reader)?;
    tracing::debug!(
        "Loaded {} books from {:?} as {}",
        decoded.books.len(),
        path,
        decoder.format_name()
    );
    Ok(decoded)
}

/// Save books to a file, choosing the encoder by extension
pub fn save_books(path: impl AsRef<Path>, books: &[Book]) -> Result<()> {
    let path = path.as_ref();
    let encoder = extension_of(path)
        .and_then(encoder_for_extension)
        .ok_or_else(|| ConversionError::UnsupportedFormat(path.display().to_string()))?;

    save_books_with(path, books, encoder.as_ref())
}

/// Save books to a file with a specific encoder, replacing its contents
pub fn save_books_with(path: impl AsRef<Path>, books: &[Book], encoder: &dyn Encoder) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    encoder.encode(books, &mut writer)?;
    writer.flush()?;

    tracing::debug!(
        "Saved {} books to {:?} as {}",
        books.len(),
        path,
        encoder.format_name()
    );
    Ok(())
}
