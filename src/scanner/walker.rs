//! Depth-first directory scanner for `moc*.json` files.
//!
//! At each level the scanner reports matching files first, then descends into
//! subdirectories, in the order the lister yields them. Whether anything was
//! found is threaded back up through return values; there is no shared flag.

#![allow(missing_docs)]

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crate::core::errors::{MocError, Result};
use crate::platform::listing::{DirEntry, DirectoryLister, EntryKind};
use crate::scanner::predicate::{is_hidden, is_moc_json};
use crate::scanner::report::ReportSink;

/// Result of a completed walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub root: PathBuf,
    pub found_match: bool,
    /// Directories that could not be listed; their subtrees were not visited.
    pub skipped: Vec<PathBuf>,
}

/// Recursive scanner over a [`DirectoryLister`].
pub struct DirectoryScanner {
    lister: Box<dyn DirectoryLister>,
    quiet: bool,
}

impl std::fmt::Debug for DirectoryScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryScanner")
            .field("quiet", &self.quiet)
            .finish_non_exhaustive()
    }
}

impl DirectoryScanner {
    pub fn new(lister: Box<dyn DirectoryLister>) -> Self {
        Self {
            lister,
            quiet: false,
        }
    }

    /// Suppress stderr diagnostics for unreadable directories.
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Walk `root`, handing each match's root-relative path to `sink`.
    ///
    /// Unreadable directories are reported and skipped. Only a failing sink
    /// aborts the walk.
    pub fn scan(&self, root: &Path, sink: &mut dyn ReportSink) -> Result<ScanOutcome> {
        let mut skipped = Vec::new();
        let found_match = self.scan_dir(root, String::new(), sink, &mut skipped)?;
        Ok(ScanOutcome {
            root: root.to_path_buf(),
            found_match,
            skipped,
        })
    }

    /// Returns whether this directory or any descendant held a match.
    fn scan_dir(
        &self,
        dir_path: &Path,
        relative: String,
        sink: &mut dyn ReportSink,
        skipped: &mut Vec<PathBuf>,
    ) -> Result<bool> {
        let entries = match self.lister.list(dir_path) {
            Ok(entries) => entries,
            Err(err) if !err.is_fatal() => {
                if !self.quiet {
                    eprintln!("[MOC-SCAN] skipping subtree: {err}");
                }
                skipped.push(dir_path.to_path_buf());
                return Ok(false);
            }
            Err(err) => return Err(err),
        };

        let (files, dirs): (Vec<DirEntry>, Vec<DirEntry>) = entries
            .into_iter()
            .filter(|entry| !is_hidden(&entry.name))
            .partition(|entry| entry.kind == EntryKind::File);

        let mut found = false;
        for file in &files {
            let name = file.name.to_string_lossy();
            if is_moc_json(&name) {
                sink.on_match(&format!("{relative}{name}"))
                    .map_err(|source| MocError::Output { source })?;
                found = true;
            }
        }

        for dir in &dirs {
            let child_relative =
                format!("{relative}{}{MAIN_SEPARATOR}", dir.name.to_string_lossy());
            if self.scan_dir(&dir_path.join(&dir.name), child_relative, sink, skipped)? {
                found = true;
            }
        }

        Ok(found)
    }
}
