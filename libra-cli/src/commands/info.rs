//! Info command implementation

use super::decoder_for_input;
use anyhow::{Context, Result};
use libra_core::{load_books_with, Book};
use serde::Serialize;
use std::path::Path;

/// Collection info output
#[derive(Serialize)]
struct CollectionInfo<'a> {
    format: &'a str,
    count: usize,
    skipped: usize,
    books: &'a [Book],
}

/// Display the books in a collection
pub fn info(input: &str, json: bool) -> Result<()> {
    let input_path = Path::new(input);
    let decoder = decoder_for_input(input_path)?;

    let decoded = load_books_with(input_path, decoder.as_ref())
        .with_context(|| format!("Failed to decode {}", input))?;

    let info = CollectionInfo {
        format: decoder.format_name(),
        count: decoded.books.len(),
        skipped: decoded.skipped.len(),
        books: &decoded.books,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Format:  {}", info.format);
        println!("Books:   {}", info.count);
        if info.skipped > 0 {
            println!("Skipped: {}", info.skipped);
        }
        for (i, book) in info.books.iter().enumerate() {
            println!();
            println!("{:>3}. {}", i + 1, book.title);
            println!("     Author: {}", book.author);
            println!("     Pages:  {}", book.pages);
            if let Some(cover) = &book.cover_path {
                println!("     Cover:  {}", cover);
            }
        }
    }

    Ok(())
}
