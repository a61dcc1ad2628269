//! Runtime configuration for the `bookstore` binary.
//!
//! The program takes no flags; everything is resolved from environment
//! variables with working-directory defaults.

use bookstore_core::{default_log_level, DEFAULT_DB_FILE_NAME};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "BOOKSTORE_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "BOOKSTORE_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "BOOKSTORE_LOG_DIR";
const DEFAULT_LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    WorkingDir(io::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WorkingDir(err) => write!(f, "cannot resolve working directory: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::WorkingDir(err) => Some(err),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(ConfigError::WorkingDir)?;
        Ok(Self::resolve(|key| std::env::var(key).ok(), cwd))
    }

    /// Builds configuration from a variable lookup and a base directory.
    ///
    /// Blank values count as unset. A relative log directory is anchored at
    /// `cwd` so the logger always receives an absolute path.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>, cwd: PathBuf) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = non_blank(DB_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME));
        let log_level =
            non_blank(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string());
        let log_dir = non_blank(LOG_DIR_VAR)
            .map(PathBuf::from)
            .map(|dir| if dir.is_absolute() { dir } else { cwd.join(dir) })
            .unwrap_or_else(|| cwd.join(DEFAULT_LOG_DIR_NAME));

        Self {
            db_path,
            log_level,
            log_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DB_PATH_VAR, LOG_DIR_VAR, LOG_LEVEL_VAR};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn resolve(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::resolve(|key| vars.get(key).cloned(), PathBuf::from("/srv/shop"))
    }

    #[test]
    fn defaults_use_working_directory() {
        let config = resolve(&[]);
        assert_eq!(config.db_path, PathBuf::from("ebookstore.db"));
        assert_eq!(config.log_dir, PathBuf::from("/srv/shop/logs"));
        assert_eq!(config.log_level, bookstore_core::default_log_level());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = resolve(&[
            (DB_PATH_VAR, "/data/books.db"),
            (LOG_LEVEL_VAR, "warn"),
            (LOG_DIR_VAR, "var/log"),
        ]);
        assert_eq!(config.db_path, PathBuf::from("/data/books.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, PathBuf::from("/srv/shop/var/log"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = resolve(&[(DB_PATH_VAR, "   "), (LOG_LEVEL_VAR, "")]);
        assert_eq!(config.db_path, PathBuf::from("ebookstore.db"));
        assert_eq!(config.log_level, bookstore_core::default_log_level());
    }
}
