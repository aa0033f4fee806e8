//! User configuration for the `calc` binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print reports as JSON instead of text.
    pub json: bool,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            pretty: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `"warn"`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default location: `<config dir>/calc-core/config.toml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calc-core")
            .join("config.toml")
    }

    /// Load from `path`, or from [`Config::default_path`].
    ///
    /// A missing file at the default location yields the defaults. A missing
    /// file that was asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !explicit && !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.output.pretty);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml("[output]\njson = true\n").unwrap();
        assert!(config.output.json);
        assert!(config.output.pretty);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_full_file() {
        let config = Config::from_toml(
            r#"
            [output]
            json = true
            pretty = false

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert!(config.output.json);
        assert!(!config.output.pretty);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_bad_types_rejected() {
        assert!(Config::from_toml("[output]\njson = \"yes\"\n").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let path = Path::new("/nonexistent/calc-core/config.toml");
        assert!(Config::load(Some(path)).is_err());
    }

    #[test]
    fn test_default_path_file_name() {
        let path = Config::default_path();
        assert!(path.ends_with("calc-core/config.toml"));
    }
}
