//! User configuration loaded from `config.toml`.
//!
//! # File Location
//!
//! - Linux: `~/.config/stepwise/config.toml`
//! - macOS: `~/Library/Application Support/stepwise/config.toml`
//! - Windows: `%APPDATA%\stepwise\config.toml`
//!
//! The file is optional; every field has a default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StepwiseError};
use crate::methodology::{DEFAULT_METHODOLOGY_ID, MethodologyCatalog};

const APP_DIR: &str = "stepwise";
const CONFIG_FILE: &str = "config.toml";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"info"` or `"stepwise_core=debug"`.
    pub filter: String,
    /// When set, logs go to a daily-rolling file in this directory instead of stderr.
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            directory: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StepwiseConfig {
    /// Methodology selected in the browser at startup.
    pub default_methodology: String,
    pub log: LogConfig,
    pub display: DisplayConfig,
}

impl Default for StepwiseConfig {
    fn default() -> Self {
        Self {
            default_methodology: DEFAULT_METHODOLOGY_ID.to_string(),
            log: LogConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl StepwiseConfig {
    /// Platform config path, or `None` if no config directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file exists but cannot be read, or a
    /// serialization error if it is not valid TOML for this schema.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!("Loading config from {:?}", path);
                Self::from_toml_str(&content)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {:?}, using defaults", path);
                Ok(Self::default())
            }
            Err(err) => Err(StepwiseError::from(err)),
        }
    }

    /// Loads from the platform config path, falling back to defaults.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// The configured startup methodology if the catalog knows it, else the
    /// catalog default.
    pub fn initial_methodology(&self, catalog: &MethodologyCatalog) -> String {
        if catalog.contains(&self.default_methodology) {
            return self.default_methodology.clone();
        }

        tracing::warn!(
            "Configured default_methodology '{}' is unknown, using '{}'",
            self.default_methodology,
            catalog.default_id()
        );
        catalog.default_id().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = StepwiseConfig::default();
        assert_eq!(config.default_methodology, "4-step");
        assert_eq!(config.log.filter, "warn");
        assert!(config.log.directory.is_none());
        assert!(config.display.color);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = StepwiseConfig::from_toml_str(
            r#"
default_methodology = "pdca"

[display]
color = false
"#,
        )
        .unwrap();
        assert_eq!(config.default_methodology, "pdca");
        assert!(!config.display.color);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = StepwiseConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, StepwiseConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[log]\nfilter = \"debug\"\ndirectory = \"/tmp/stepwise-logs\"").unwrap();

        let config = StepwiseConfig::load(file.path()).unwrap();
        assert_eq!(config.log.filter, "debug");
        assert_eq!(config.log.directory, Some(PathBuf::from("/tmp/stepwise-logs")));
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_methodology = [1, 2").unwrap();

        let err = StepwiseConfig::load(file.path()).unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_initial_methodology_falls_back() {
        let catalog = MethodologyCatalog::builtin();
        let mut config = StepwiseConfig::default();
        config.default_methodology = "5-whys".into();
        assert_eq!(config.initial_methodology(&catalog), "5-whys");

        config.default_methodology = "six-hats".into();
        assert_eq!(config.initial_methodology(&catalog), "4-step");
    }
}
