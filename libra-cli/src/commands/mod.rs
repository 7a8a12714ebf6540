//! CLI command implementations

mod convert;
mod cover;
mod info;
mod sample;
mod validate;

pub use convert::convert;
pub use cover::cover;
pub use info::info;
pub use sample::sample;
pub use validate::validate;

use anyhow::{Context, Result};
use libra_core::decoder::{decoder_for_extension, Decoder};
use libra_core::encoder::{encoder_for_extension, encoder_for_format, Encoder};
use std::path::Path;

fn extension_of<'a>(path: &'a Path, role: &str) -> Result<&'a str> {
    path.extension()
        .and_then(|e| e.to_str())
        .with_context(|| format!("Could not determine {} file extension", role))
}

/// Pick a decoder from the input file's extension
pub(crate) fn decoder_for_input(input: &Path) -> Result<Box<dyn Decoder>> {
    let ext = extension_of(input, "input")?;
    decoder_for_extension(ext).with_context(|| format!("No decoder available for .{} files", ext))
}

/// Pick an encoder from an explicit format, falling back to the output extension
pub(crate) fn encoder_for_output(output: &Path, format: Option<&str>) -> Result<Box<dyn Encoder>> {
    match format {
        Some(format) => encoder_for_format(format)
            .with_context(|| format!("No encoder available for {} format", format)),
        None => {
            let ext = extension_of(output, "output")?;
            encoder_for_extension(ext)
                .with_context(|| format!("No encoder available for .{} files", ext))
        }
    }
}
