//! Report sinks: where matched relative paths go.

#![allow(missing_docs)]

use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::scanner::walker::ScanOutcome;

/// Receives each match as the walk finds it.
pub trait ReportSink {
    fn on_match(&mut self, relative: &str) -> io::Result<()>;
}

/// Streams one path per line.
#[derive(Debug)]
pub struct LineSink<W: Write> {
    out: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for LineSink<W> {
    fn on_match(&mut self, relative: &str) -> io::Result<()> {
        writeln!(self.out, "{relative}")
    }
}

/// Collects matches for a single JSON document at the end of the run.
#[derive(Debug, Default)]
pub struct JsonReport {
    matches: Vec<String>,
}

impl JsonReport {
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    /// Assemble the final document once the fallback step has run.
    #[must_use]
    pub fn finish(self, outcome: &ScanOutcome, fallback: Option<&Path>) -> ScanReport {
        ScanReport {
            root: outcome.root.display().to_string(),
            matches: self.matches,
            fallback: fallback.map(|p| p.display().to_string()),
            skipped: outcome
                .skipped
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        }
    }
}

impl ReportSink for JsonReport {
    fn on_match(&mut self, relative: &str) -> io::Result<()> {
        self.matches.push(relative.to_string());
        Ok(())
    }
}

/// Machine-readable summary of one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanReport {
    pub root: String,
    pub matches: Vec<String>,
    pub fallback: Option<String>,
    pub skipped: Vec<String>,
}
