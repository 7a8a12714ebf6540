//! Validate command implementation

use super::decoder_for_input;
use anyhow::{bail, Result};
use libra_core::load_books_with;
use std::path::Path;

/// Validate a book collection file
pub fn validate(input: &str, strict: bool) -> Result<()> {
    let input_path = Path::new(input);
    let decoder = decoder_for_input(input_path)?;

    match load_books_with(input_path, decoder.as_ref()) {
        Ok(decoded) => {
            println!("Valid {} file", decoder.format_name());
            println!("  Books: {}", decoded.books.len());
            println!("  Skipped: {}", decoded.skipped.len());
            for skipped in &decoded.skipped {
                println!("    {}", skipped);
            }

            if strict && !decoded.skipped.is_empty() {
                bail!(
                    "Validation failed for {}: {} records skipped",
                    input,
                    decoded.skipped.len()
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Invalid {} file: {}", decoder.format_name(), e);
            bail!("Validation failed for {}", input);
        }
    }
}
