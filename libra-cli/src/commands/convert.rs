//! Convert command implementation

use super::{decoder_for_input, encoder_for_output};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use libra_core::encoder::XmlEncoder;
use libra_core::{load_books_with, save_books_with};
use std::path::Path;
use std::time::Duration;

/// Convert a book collection from one format to another
pub fn convert(input: &str, output: &str, format: Option<&str>, compact: bool) -> Result<()> {
    let input_path = Path::new(input);
    let output_path = Path::new(output);

    let decoder = decoder_for_input(input_path)?;
    let mut encoder = encoder_for_output(output_path, format)?;
    if compact && encoder.file_extension() == "xml" {
        encoder = Box::new(XmlEncoder::new().with_indent(None));
    }

    // Set up progress spinner
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    // Decode
    pb.set_message(format!("Decoding {}...", decoder.format_name()));
    let decoded = load_books_with(input_path, decoder.as_ref())
        .with_context(|| format!("Failed to decode {}", input))?;

    for skipped in &decoded.skipped {
        tracing::warn!("Skipped record in {}: {}", input, skipped);
    }
    tracing::info!(
        "Decoded {} books from {} ({} skipped)",
        decoded.books.len(),
        input,
        decoded.skipped.len()
    );

    // Encode
    pb.set_message(format!("Encoding to {}...", encoder.format_name()));
    save_books_with(output_path, &decoded.books, encoder.as_ref())
        .with_context(|| format!("Failed to write {}", output))?;

    pb.finish_with_message(format!(
        "Converted {} books to {} -> {}",
        decoded.books.len(),
        encoder.format_name(),
        output
    ));

    Ok(())
}
