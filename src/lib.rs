#![forbid(unsafe_code)]

//! mocscan — finds `moc*.json` files under a directory tree.
//!
//! Matching paths are reported relative to the scan root. When nothing
//! matches, an empty `blank.json` is created in the root so downstream
//! tooling always has a file to pick up.
//!
//! # Library usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use mocscan::prelude::*;
//!
//! let scanner = DirectoryScanner::new(detect_lister(false));
//! let mut sink = LineSink::new(std::io::stdout());
//! let outcome = scanner.scan(Path::new("build/automoc"), &mut sink)?;
//! FallbackWriter::default().ensure_non_empty(&outcome.root, outcome.found_match)?;
//! # Ok::<(), MocError>(())
//! ```

pub mod prelude;

pub mod core;
pub mod platform;
pub mod scanner;
