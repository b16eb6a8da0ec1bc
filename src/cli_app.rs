//! Top-level CLI definition and dispatch.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use mocscan::core::config::{Config, OutputFormat};
use mocscan::core::errors::{MocError, Result};
use mocscan::platform::listing::detect_lister;
use mocscan::scanner::fallback::FallbackWriter;
use mocscan::scanner::report::{JsonReport, LineSink};
use mocscan::scanner::walker::DirectoryScanner;

/// Lists every moc*.json under a directory, or leaves a blank.json when there are none.
#[derive(Debug, Parser)]
#[command(name = "mocscan", author, version, long_about = None)]
pub struct Cli {
    /// Directory to scan.
    #[arg(value_name = "PATH")]
    path: PathBuf,
    /// Override config file path.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Print a JSON report instead of one path per line.
    #[arg(long)]
    json: bool,
    /// Do not report unreadable directories on stderr.
    #[arg(short, long)]
    quiet: bool,
}

/// Load configuration, scan, and report to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    if cli.quiet {
        config.output.quiet = true;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(cli, &config, &mut out)
}

fn run_with(cli: &Cli, config: &Config, out: &mut dyn Write) -> Result<()> {
    let lister = detect_lister(config.scan.follow_symlinks);
    let scanner = DirectoryScanner::new(lister).quiet(config.output.quiet);
    let fallback = FallbackWriter::new(config.fallback.enabled);

    let result = match config.output.format {
        OutputFormat::Plain => report_plain(cli, &scanner, fallback, out),
        OutputFormat::Json => report_json(cli, &scanner, fallback, out),
    };

    // The trailing line goes out even when the placeholder write failed,
    // but a failure to write it never masks the earlier error.
    let trailing = if config.output.trailing_blank_line {
        writeln!(out)
    } else {
        Ok(())
    };
    let finished = trailing
        .and_then(|()| out.flush())
        .map_err(|source| MocError::Output { source });
    result.and(finished)
}

fn report_plain(
    cli: &Cli,
    scanner: &DirectoryScanner,
    fallback: FallbackWriter,
    out: &mut dyn Write,
) -> Result<()> {
    let mut sink = LineSink::new(&mut *out);
    let outcome = scanner.scan(&cli.path, &mut sink)?;
    if let Some(placeholder) = fallback.ensure_non_empty(&cli.path, outcome.found_match)? {
        writeln!(out, "{}", placeholder.display()).map_err(|source| MocError::Output { source })?;
    }
    Ok(())
}

fn report_json(
    cli: &Cli,
    scanner: &DirectoryScanner,
    fallback: FallbackWriter,
    out: &mut dyn Write,
) -> Result<()> {
    let mut report = JsonReport::default();
    let outcome = scanner.scan(&cli.path, &mut report)?;
    // On a failed placeholder write the document still goes out, with a
    // null fallback, before the error is returned.
    let placeholder = fallback.ensure_non_empty(&cli.path, outcome.found_match);
    let created = placeholder.as_ref().ok().and_then(Option::as_deref);
    let doc = report.finish(&outcome, created);
    let written = serde_json::to_writer_pretty(&mut *out, &doc)
        .map_err(MocError::from)
        .and_then(|()| writeln!(out).map_err(|source| MocError::Output { source }));
    placeholder.and(written)
}
