//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use mocscan::prelude::*;
//! ```

// Core
pub use crate::core::config::{Config, OutputFormat};
pub use crate::core::errors::{MocError, Result};

// Platform
pub use crate::platform::listing::{DirEntry, DirectoryLister, EntryKind, StdLister, detect_lister};

// Scanner
pub use crate::scanner::fallback::{FALLBACK_FILE_NAME, FallbackWriter};
pub use crate::scanner::predicate::is_moc_json;
pub use crate::scanner::report::{JsonReport, LineSink, ReportSink, ScanReport};
pub use crate::scanner::walker::{DirectoryScanner, ScanOutcome};
