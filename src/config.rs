//! Application configuration.
//!
//! Loaded from a TOML file when one is present, otherwise defaults are used.
//! `LOCALIS_BACKEND_URL` overrides the backend address either way.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const APP_NAME: &str = "localis";
pub const BACKEND_URL_ENV: &str = "LOCALIS_BACKEND_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub progress: ProgressConfig,
    pub downloads: DownloadConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    /// Limit for a whole translation request. Unset waits for the backend.
    pub request_timeout_seconds: Option<u64>,
    pub progress_timeout_seconds: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout_seconds: None,
            progress_timeout_seconds: 10,
        }
    }
}

impl BackendConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }

    pub fn progress_timeout(&self) -> Duration {
        Duration::from_secs(self.progress_timeout_seconds.max(1))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub poll_interval_ms: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
        }
    }
}

impl ProgressConfig {
    pub fn poll_interval(&self) -> Duration {
        // A zero period would make tokio's interval panic.
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Falls back to the user's downloads folder, then the working directory.
    pub directory: Option<PathBuf>,
}

impl DownloadConfig {
    pub fn resolve_directory(&self) -> PathBuf {
        self.directory
            .clone()
            .or_else(dirs::download_dir)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 720.0,
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Explicit path first, then the per-user config file, then defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let mut config = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) if p.exists() => match Self::load_from_file(&p) {
                Ok(config) => {
                    log::info!("Loaded configuration from {}", p.display());
                    config
                }
                Err(e) => {
                    log::warn!("{}; using defaults", e);
                    Self::default()
                }
            },
            Some(p) if path.is_some() => {
                log::warn!("Config file {} not found; using defaults", p.display());
                Self::default()
            }
            _ => Self::default(),
        };

        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            if !url.trim().is_empty() {
                config.backend.base_url = url.trim().to_string();
            }
        }

        config
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [backend]
            base_url = "http://translator.internal:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.base_url, "http://translator.internal:9000");
        assert_eq!(config.backend.request_timeout(), None);
        assert_eq!(config.backend.progress_timeout(), Duration::from_secs(10));
        assert_eq!(config.progress.poll_interval_ms, 1000);
        assert!(config.downloads.directory.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[progress]\npoll_interval_ms = 250\n[downloads]\ndirectory = \"/tmp/out\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.progress.poll_interval(), Duration::from_millis(250));
        assert_eq!(config.downloads.resolve_directory(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[backend\nbase_url = ").unwrap();

        assert!(matches!(
            AppConfig::load_from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_request_timeout_is_opt_in() {
        let config = AppConfig::from_toml(
            r#"
            [backend]
            request_timeout_seconds = 1800
            progress_timeout_seconds = 3
            "#,
        )
        .unwrap();

        assert_eq!(
            config.backend.request_timeout(),
            Some(Duration::from_secs(1800))
        );
        assert_eq!(config.backend.progress_timeout(), Duration::from_secs(3));
        assert_eq!(config.backend.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let progress = ProgressConfig { poll_interval_ms: 0 };
        assert_eq!(progress.poll_interval(), Duration::from_millis(1));
    }
}
