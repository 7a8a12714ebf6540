//! Sample command implementation

use super::encoder_for_output;
use anyhow::{Context, Result};
use libra_core::{save_books_with, Book};
use std::path::Path;

/// The collection the tool ships as a starting point
fn sample_books() -> Vec<Book> {
    vec![
        Book::new("The Go Programming Language", "Alan A. A. Donovan", 380),
        Book::new("Go in Action", "William Kennedy", 300),
    ]
}

/// Write the sample collection
pub fn sample(output: &str, format: Option<&str>) -> Result<()> {
    let output_path = Path::new(output);
    let encoder = encoder_for_output(output_path, format)?;
    let books = sample_books();

    save_books_with(output_path, &books, encoder.as_ref())
        .with_context(|| format!("Failed to write {}", output))?;

    tracing::info!("Wrote {} sample books to {}", books.len(), output);
    println!("Wrote {} books to {}", books.len(), output);
    Ok(())
}
