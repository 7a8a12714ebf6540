//! The Book record

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single book record.
///
/// Plain value type: no identity, duplicates allowed. `cover_path` is a
/// reference to a cover image on disk and is never checked for existence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Page count
    pub pages: u32,

    /// Path to the cover image, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_path: Option<String>,
}

impl Book {
    /// Create a book without a cover
    pub fn new(title: impl Into<String>, author: impl Into<String>, pages: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages,
            cover_path: None,
        }
    }

    /// Attach a cover path
    pub fn with_cover(mut self, path: impl Into<String>) -> Self {
        self.cover_path = Some(path.into());
        self
    }

    /// Cover path as a filesystem path
    pub fn cover_path(&self) -> Option<&Path> {
        self.cover_path.as_deref().map(Path::new)
    }
}
