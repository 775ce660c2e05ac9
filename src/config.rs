//! Application configuration, loadable from TOML

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::ConfigError;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub store: StoreConfig,
    pub computer: ComputerConfig,
    pub logging: LoggingConfig,
}

/// Board size used by the front ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
    /// Smallest size the console accepts for a new board
    pub min_size: usize,
    /// Largest size the console accepts for a new board
    pub max_size: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_BOARD_SIZE,
            columns: DEFAULT_BOARD_SIZE,
            min_size: 5,
            max_size: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite database file
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            path: PathBuf::from("gomoku.db"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputerConfig {
    /// Fixed RNG seed for reproducible computer moves
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.columns == 0 {
            return Err(ConfigError::Validation("board.columns must be > 0".into()));
        }
        if self.board.min_size == 0 {
            return Err(ConfigError::Validation("board.min_size must be > 0".into()));
        }
        if self.board.max_size < self.board.min_size || self.board.max_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board.max_size must be between board.min_size and {MAX_BOARD_SIZE}"
            )));
        }
        let size_range = self.board.min_size..=self.board.max_size;
        if !size_range.contains(&self.board.rows) || !size_range.contains(&self.board.columns) {
            return Err(ConfigError::Validation(
                "board.rows and board.columns must lie within board.min_size..=board.max_size"
                    .into(),
            ));
        }
        if self.store.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("store.path must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board.rows, 15);
        assert_eq!(config.board.columns, 15);
        assert_eq!(config.board.min_size, 5);
        assert_eq!(config.board.max_size, 50);
        assert_eq!(config.computer.seed, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [board]
            rows = 19
            columns = 19

            [computer]
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.board.rows, 19);
        assert_eq!(config.board.min_size, 5);
        assert_eq!(config.computer.seed, Some(42));
        assert_eq!(config.store.path, PathBuf::from("gomoku.db"));
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_below_min_size() {
        let mut config = AppConfig::default();
        config.board.columns = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_max_size() {
        let mut config = AppConfig::default();
        config.board.rows = 60;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.board.max_size = 4;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.board.max_size = MAX_BOARD_SIZE + 1;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[store]\npath = \"saves.db\"\n[logging]\nfilter = \"debug\"").unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.store.path, PathBuf::from("saves.db"));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[board\nrows = ").unwrap();
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
