//! Fixed filename rules: the `moc*.json` match and dotfile hiding.

use std::ffi::OsStr;

/// Required filename prefix.
pub const MATCH_PREFIX: &str = "moc";
/// Required filename suffix.
pub const MATCH_SUFFIX: &str = ".json";

/// `true` when `name` starts with `moc` and ends with `.json`.
///
/// Never slices, so names shorter than the suffix just fail the test.
#[must_use]
pub fn is_moc_json(name: &str) -> bool {
    name.starts_with(MATCH_PREFIX) && name.ends_with(MATCH_SUFFIX)
}

/// Dot-prefixed entries, including `.` and `..`, are neither reported nor
/// descended into.
#[must_use]
pub fn is_hidden(name: &OsStr) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        name.as_bytes().first() == Some(&b'.')
    }
    #[cfg(not(unix))]
    {
        name.to_string_lossy().starts_with('.')
    }
}
