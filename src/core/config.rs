//! Configuration: optional TOML file + env var overrides + defaults.
//!
//! The match predicate and the placeholder file name are fixed; the knobs
//! here only shape traversal of symlinks and how results are reported.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{MocError, Result};

/// Full mocscan configuration model.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
    pub fallback: FallbackConfig,
}

/// Traversal behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScanConfig {
    /// Classify symlinks by their target. There is no cycle detection.
    pub follow_symlinks: bool,
}

/// Report format on stdout.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = MocError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            other => Err(MocError::InvalidConfig {
                details: format!("output.format must be \"plain\" or \"json\", got {other:?}"),
            }),
        }
    }
}

/// Reporting behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Emit an empty line after the report.
    pub trailing_blank_line: bool,
    /// Suppress diagnostics for unreadable directories.
    pub quiet: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            trailing_blank_line: true,
            quiet: false,
        }
    }
}

/// Placeholder creation when nothing matched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FallbackConfig {
    pub enabled: bool,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    /// Default configuration path: `$HOME/.config/mocscan/config.toml`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        let home_dir = env::var_os("HOME").map_or_else(|| PathBuf::from("/"), PathBuf::from);
        home_dir.join(".config").join("mocscan").join("config.toml")
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from default path; defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let raw =
                fs::read_to_string(&path_buf).map_err(|source| MocError::io(&path_buf, source))?;
            toml::from_str(&raw)?
        } else if is_explicit_path {
            return Err(MocError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.apply_env_overrides_from(|name| env::var(name).ok())?;
        Ok(cfg)
    }

    /// Apply `MOCSCAN_*` overrides using `lookup` to resolve variable names.
    pub fn apply_env_overrides_from<F>(&mut self, mut lookup: F) -> Result<()>
    where
        F: FnMut(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("MOCSCAN_SCAN_FOLLOW_SYMLINKS") {
            self.scan.follow_symlinks = parse_env_bool("MOCSCAN_SCAN_FOLLOW_SYMLINKS", &raw)?;
        }
        if let Some(raw) = lookup("MOCSCAN_OUTPUT_FORMAT") {
            self.output.format = raw.parse()?;
        }
        if let Some(raw) = lookup("MOCSCAN_OUTPUT_TRAILING_BLANK_LINE") {
            self.output.trailing_blank_line =
                parse_env_bool("MOCSCAN_OUTPUT_TRAILING_BLANK_LINE", &raw)?;
        }
        if let Some(raw) = lookup("MOCSCAN_OUTPUT_QUIET") {
            self.output.quiet = parse_env_bool("MOCSCAN_OUTPUT_QUIET", &raw)?;
        }
        if let Some(raw) = lookup("MOCSCAN_FALLBACK_ENABLED") {
            self.fallback.enabled = parse_env_bool("MOCSCAN_FALLBACK_ENABLED", &raw)?;
        }
        Ok(())
    }
}

fn parse_env_bool(name: &str, raw: &str) -> Result<bool> {
    raw.trim()
        .parse::<bool>()
        .map_err(|error| MocError::ConfigParse {
            context: "env",
            details: format!("{name}={raw:?}: {error}"),
        })
}

#[cfg(test)]
mod tests {
    use super::{Config, MocError, OutputFormat};
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn defaults_report_plain_with_fallback() {
        let cfg = Config::default();
        assert!(!cfg.scan.follow_symlinks);
        assert_eq!(cfg.output.format, OutputFormat::Plain);
        assert!(cfg.output.trailing_blank_line);
        assert!(!cfg.output.quiet);
        assert!(cfg.fallback.enabled);
    }

    #[test]
    fn default_path_lives_under_config_dir() {
        let path = Config::default_path();
        assert!(path.ends_with(".config/mocscan/config.toml"), "{path:?}");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [output]
            format = "json"
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert!(cfg.output.trailing_blank_line);
        assert!(cfg.fallback.enabled);
    }

    #[test]
    fn unknown_format_in_toml_is_a_parse_error() {
        let err = toml::from_str::<Config>("[output]\nformat = \"xml\"\n")
            .map_err(MocError::from)
            .expect_err("xml is not a format");
        assert_eq!(err.code(), "MOC-1003");
    }

    #[test]
    fn load_reads_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("mocscan.toml");
        fs::write(
            &path,
            "[scan]\nfollow_symlinks = true\n\n[fallback]\nenabled = false\n",
        )
        .unwrap();

        let cfg = Config::load(Some(&path)).expect("load");
        assert!(cfg.scan.follow_symlinks);
        assert!(!cfg.fallback.enabled);
    }

    #[test]
    fn load_reports_unreadable_file_with_its_path() {
        // A directory exists but cannot be read as a file.
        let tmp = TempDir::new().unwrap();
        let err = Config::load(Some(tmp.path())).expect_err("directory is not a config file");
        assert_eq!(err.code(), "MOC-3002");
        assert!(err.to_string().contains(&tmp.path().display().to_string()));
    }

    #[test]
    fn load_rejects_missing_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.toml");
        let err = Config::load(Some(&path)).expect_err("missing file");
        assert!(matches!(err, MocError::MissingConfig { .. }));
    }

    #[test]
    fn env_overrides_apply() {
        let mut cfg = Config::default();
        let overrides = vars(&[
            ("MOCSCAN_SCAN_FOLLOW_SYMLINKS", "true"),
            ("MOCSCAN_OUTPUT_FORMAT", "JSON"),
            ("MOCSCAN_OUTPUT_TRAILING_BLANK_LINE", "false"),
            ("MOCSCAN_OUTPUT_QUIET", "true"),
            ("MOCSCAN_FALLBACK_ENABLED", "false"),
        ]);
        cfg.apply_env_overrides_from(|name| overrides.get(name).cloned())
            .expect("overrides");

        assert!(cfg.scan.follow_symlinks);
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert!(!cfg.output.trailing_blank_line);
        assert!(cfg.output.quiet);
        assert!(!cfg.fallback.enabled);
    }

    #[test]
    fn env_bool_rejects_garbage() {
        let mut cfg = Config::default();
        let overrides = vars(&[("MOCSCAN_FALLBACK_ENABLED", "maybe")]);
        let err = cfg
            .apply_env_overrides_from(|name| overrides.get(name).cloned())
            .expect_err("maybe is not a bool");
        match err {
            MocError::ConfigParse { context, details } => {
                assert_eq!(context, "env");
                assert!(details.contains("MOCSCAN_FALLBACK_ENABLED"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn env_format_rejects_unknown_value() {
        let mut cfg = Config::default();
        let overrides = vars(&[("MOCSCAN_OUTPUT_FORMAT", "yaml")]);
        let err = cfg
            .apply_env_overrides_from(|name| overrides.get(name).cloned())
            .expect_err("yaml is not a format");
        assert_eq!(err.code(), "MOC-1001");
    }
}
