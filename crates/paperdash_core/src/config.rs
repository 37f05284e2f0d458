//! Dashboard configuration file.
//!
//! # Responsibility
//! - Load optional settings from a JSON file, defaulting every field.
//! - Validate values before they reach the layout engine or logger.
//!
//! # Invariants
//! - A missing config file is not an error; it yields `DashboardConfig::default()`.
//! - `month_count` is within `1..=MAX_MONTH_COUNT` after validation.

use crate::logging::{default_log_level, normalize_level};
use crate::timeline::DEFAULT_MONTH_COUNT;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Upper bound for the Gantt window.
pub const MAX_MONTH_COUNT: usize = 120;

/// File-backed dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Months shown in the Gantt grid.
    pub month_count: usize,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling logs; logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    /// SQLite store used by the admin commands.
    pub db_path: Option<PathBuf>,
    /// Title of the rendered HTML document.
    pub title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            month_count: DEFAULT_MONTH_COUNT,
            log_level: default_log_level().to_string(),
            log_dir: None,
            db_path: None,
            title: "Research Dashboard".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.month_count == 0 || self.month_count > MAX_MONTH_COUNT {
            return Err(ConfigError::InvalidMonthCount(self.month_count));
        }
        normalize_level(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))?;
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir.clone()));
            }
        }
        Ok(())
    }
}

/// Config loading failures.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    InvalidMonthCount(usize),
    InvalidLogLevel(String),
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "cannot parse config `{}`: {source}", path.display())
            }
            Self::InvalidMonthCount(count) => write!(
                f,
                "month_count must be between 1 and {MAX_MONTH_COUNT}, got {count}"
            ),
            Self::InvalidLogLevel(level) => write!(f, "unsupported log_level `{level}`"),
            Self::RelativeLogDir(path) => {
                write!(f, "log_dir must be absolute, got `{}`", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Reads and validates `path`; a missing file yields defaults.
pub fn load_config(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(DashboardConfig::default())
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: DashboardConfig =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load_config, ConfigError, DashboardConfig};
    use crate::timeline::DEFAULT_MONTH_COUNT;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.month_count, DEFAULT_MONTH_COUNT);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paperdash.json");
        std::fs::write(&path, r#"{ "month_count": 6, "log_level": "WARN" }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.month_count, 6);
        assert_eq!(config.log_level, "WARN");
        assert_eq!(config.title, DashboardConfig::default().title);
    }

    #[test]
    fn validation_rejects_bad_values() {
        let zero = DashboardConfig {
            month_count: 0,
            ..DashboardConfig::default()
        };
        assert!(matches!(zero.validate(), Err(ConfigError::InvalidMonthCount(0))));

        let level = DashboardConfig {
            log_level: "loud".to_string(),
            ..DashboardConfig::default()
        };
        assert!(matches!(level.validate(), Err(ConfigError::InvalidLogLevel(_))));

        let relative = DashboardConfig {
            log_dir: Some("logs".into()),
            ..DashboardConfig::default()
        };
        assert!(matches!(relative.validate(), Err(ConfigError::RelativeLogDir(_))));
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ month_count: }").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Parse { .. })));
    }
}
