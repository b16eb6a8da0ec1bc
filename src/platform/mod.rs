//! Platform abstraction: directory listing behind a single trait.

pub mod listing;
