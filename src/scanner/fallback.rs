//! Placeholder file written when a scan finds nothing.
//!
//! Downstream tooling expects at least one `.json` file in the scanned
//! directory, so an empty `blank.json` stands in when no `moc*.json` exists.
//! This mutates the scanned tree on purpose and is never cleaned up.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::core::errors::{MocError, Result};

/// Name of the placeholder created in the scan root.
pub const FALLBACK_FILE_NAME: &str = "blank.json";

/// Creates the placeholder when a scan came back empty.
#[derive(Debug, Clone, Copy)]
pub struct FallbackWriter {
    enabled: bool,
}

impl Default for FallbackWriter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FallbackWriter {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Returns the path of the file it created, or `None` when nothing was
    /// needed. An existing placeholder is truncated back to zero bytes.
    pub fn ensure_non_empty(&self, root: &Path, match_found: bool) -> Result<Option<PathBuf>> {
        if match_found || !self.enabled {
            return Ok(None);
        }

        let path = root.join(FALLBACK_FILE_NAME);
        File::create(&path).map_err(|source| MocError::FallbackWrite {
            path: path.clone(),
            source,
        })?;
        Ok(Some(path))
    }
}
