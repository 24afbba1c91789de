use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8082";
pub const DEFAULT_LOOKUP_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Endpoints the client talks to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub lookup_base_url: String,
    /// Base for listing image paths; falls back to the API base when unset.
    pub image_base_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            lookup_base_url: DEFAULT_LOOKUP_BASE_URL.to_string(),
            image_base_url: None,
        }
    }
}

impl AppConfig {
    pub fn image_base_url(&self) -> &str {
        self.image_base_url
            .as_deref()
            .unwrap_or(self.api_base_url.as_str())
    }

    /// Apply `CARMARKET_*_URL` environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("CARMARKET_API_URL")
            && !url.trim().is_empty()
        {
            self.api_base_url = url;
        }
        if let Ok(url) = std::env::var("CARMARKET_LOOKUP_URL")
            && !url.trim().is_empty()
        {
            self.lookup_base_url = url;
        }
        if let Ok(url) = std::env::var("CARMARKET_IMAGE_URL")
            && !url.trim().is_empty()
        {
            self.image_base_url = Some(url);
        }
        self
    }
}

/// Load the config file, or defaults when it does not exist.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &std::path::Path) -> Result<AppConfig, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("CARMARKET_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

pub fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("CARMARKET_DATA_HOME") {
        return PathBuf::from(path);
    }

    if let Some(dir) = dirs::data_dir() {
        return dir.join("carmarket");
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".carmarket")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.image_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_base_url = \"https://cars.example\"").unwrap();
        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.api_base_url, "https://cars.example");
        assert_eq!(config.lookup_base_url, DEFAULT_LOOKUP_BASE_URL);
        assert_eq!(config.image_base_url(), "https://cars.example");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_base_url = [").unwrap();
        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
