//! Directory listing trait and the std-backed implementation.
//!
//! The scanner only ever asks one question of the OS: "what is in this
//! directory, and is each entry a file or a directory?". Everything that
//! differs between platforms stays on this side of the trait.

#![allow(missing_docs)]

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::core::errors::{MocError, Result};

/// Kind tag for a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: OsString,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }
}

/// Lists directory entries, each tagged file-or-directory.
///
/// Implementations return entries in the order the underlying source yields
/// them and must release any directory handle before returning. Entries that
/// are neither files nor directories are left out.
pub trait DirectoryLister {
    fn list(&self, path: &Path) -> Result<Vec<DirEntry>>;
}

/// Lister built on `std::fs::read_dir`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdLister {
    follow_symlinks: bool,
}

impl StdLister {
    #[must_use]
    pub fn new(follow_symlinks: bool) -> Self {
        Self { follow_symlinks }
    }
}

impl DirectoryLister for StdLister {
    fn list(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let entries = fs::read_dir(path).map_err(|source| MocError::DirectoryUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let mut listed = Vec::new();
        for entry_result in entries {
            // Entries that vanish mid-listing are skipped, not fatal.
            let Ok(entry) = entry_result else {
                continue;
            };
            // file_type() is usually served from the dirent without a stat.
            let Ok(ft) = entry.file_type() else {
                continue;
            };

            let kind = if ft.is_symlink() {
                if !self.follow_symlinks {
                    continue;
                }
                match fs::metadata(entry.path()) {
                    Ok(meta) => classify(&meta.file_type()),
                    Err(_) => None, // Dangling link.
                }
            } else {
                classify(&ft)
            };

            if let Some(kind) = kind {
                listed.push(DirEntry {
                    name: entry.file_name(),
                    kind,
                });
            }
        }

        Ok(listed)
    }
}

fn classify(ft: &fs::FileType) -> Option<EntryKind> {
    if ft.is_dir() {
        Some(EntryKind::Directory)
    } else if ft.is_file() {
        Some(EntryKind::File)
    } else {
        None
    }
}

/// Pick the lister for the current target.
pub fn detect_lister(follow_symlinks: bool) -> Box<dyn DirectoryLister> {
    Box::new(StdLister::new(follow_symlinks))
}
