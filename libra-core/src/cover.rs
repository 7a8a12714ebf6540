//! Cover image passthrough
//!
//! Covers are opaque blobs: bytes are read and written unchanged, never
//! inspected. File handles are closed when they drop, on success and on error.

use crate::error::Result;
use crate::types::Book;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Read the raw bytes of a cover file
pub fn read_cover(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let mut file = File::open(path.as_ref())?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    Ok(data)
}

/// Write cover bytes verbatim, replacing any existing file.
///
/// Parent directories must already exist.
pub fn write_cover(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let mut file = File::create(path.as_ref())?;
    file.write_all(data)?;
    file.flush()?;
    Ok(())
}

/// Copy a cover from one path to another, returning the number of bytes
pub fn copy_cover(from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<u64> {
    let data = read_cover(from.as_ref())?;
    write_cover(to.as_ref(), &data)?;
    tracing::debug!(
        "Copied {} cover bytes {:?} -> {:?}",
        data.len(),
        from.as_ref(),
        to.as_ref()
    );
    Ok(data.len() as u64)
}

impl Book {
    /// Read this book's cover, if it has one
    pub fn read_cover(&self) -> Result<Option<Vec<u8>>> {
        self.cover_path().map(|path| read_cover(path)).transpose()
    }
}
