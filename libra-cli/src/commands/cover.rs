//! Cover command implementation

use anyhow::{Context, Result};
use libra_core::copy_cover;

/// Copy a cover image byte for byte
pub fn cover(input: &str, output: &str) -> Result<()> {
    let bytes = copy_cover(input, output)
        .with_context(|| format!("Failed to copy cover {} -> {}", input, output))?;

    tracing::info!("Copied {} bytes {} -> {}", bytes, input, output);
    println!("Copied {} bytes to {}", bytes, output);
    Ok(())
}
