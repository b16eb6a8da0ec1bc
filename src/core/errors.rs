//! MOC-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, MocError>;

/// Exit code for a failed placeholder write.
pub const EXIT_FALLBACK_FAILURE: i32 = 2;

/// Exit code for usage, configuration, and output failures.
pub const EXIT_FAILURE: i32 = 1;

/// Top-level error type for mocscan.
#[derive(Debug, Error)]
pub enum MocError {
    #[error("[MOC-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[MOC-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[MOC-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[MOC-2001] cannot list directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[MOC-2002] failed writing report: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },

    #[error("[MOC-3001] cannot create placeholder {path}: {source}")]
    FallbackWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[MOC-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MocError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "MOC-1001",
            Self::MissingConfig { .. } => "MOC-1002",
            Self::ConfigParse { .. } => "MOC-1003",
            Self::DirectoryUnreadable { .. } => "MOC-2001",
            Self::Output { .. } => "MOC-2002",
            Self::FallbackWrite { .. } => "MOC-3001",
            Self::Io { .. } => "MOC-3002",
        }
    }

    /// Whether this error ends the run. An unreadable directory only costs
    /// its own subtree.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::DirectoryUnreadable { .. })
    }

    /// Process exit status for a fatal error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::FallbackWrite { .. } => EXIT_FALLBACK_FAILURE,
            _ => EXIT_FAILURE,
        }
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for MocError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output {
            source: std::io::Error::other(value),
        }
    }
}

impl From<toml::de::Error> for MocError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}
