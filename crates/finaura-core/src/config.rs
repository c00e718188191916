//! Application configuration.
//!
//! The backend base URL is a deployment-time value, never a source
//! constant. Resolution order (highest precedence first):
//!
//! 1. `--api-url` CLI flag
//! 2. `FINAURA_API_URL` environment variable
//! 3. `~/.finaura/config.yaml`
//! 4. Default: `http://127.0.0.1:8000`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FinauraError, Result};

/// Default backend origin (local development server).
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the FinAura backend, without a trailing slash.
    pub api_base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// On-disk configuration file shape (`~/.finaura/config.yaml`).
///
/// All fields optional; anything missing falls back to the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    api_base_url: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Load configuration from the default file location, environment,
    /// and an optional CLI override.
    pub fn load(cli_api_url: Option<String>) -> Result<Self> {
        let config_path = finaura_dir()?.join("config.yaml");
        let env_api_url = std::env::var("FINAURA_API_URL").ok();
        Self::resolve(&config_path, env_api_url, cli_api_url)
    }

    /// Resolve configuration from an explicit file path plus overrides.
    ///
    /// Split out from [`AppConfig::load`] so tests can point at a
    /// temporary config file and control the override values.
    pub fn resolve(
        config_path: &Path,
        env_api_url: Option<String>,
        cli_api_url: Option<String>,
    ) -> Result<Self> {
        let file = Self::read_config_file(config_path)?;

        let api_base_url = cli_api_url
            .or(env_api_url)
            .or(file.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let timeout_secs = file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);

        let config = Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    fn read_config_file(path: &Path) -> Result<ConfigFile> {
        if !path.exists() {
            return Ok(ConfigFile::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| FinauraError::io("reading config", path, e))?;

        serde_yaml::from_str(&contents).map_err(|e| FinauraError::ConfigInvalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Validate the resolved configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(FinauraError::ConfigValidation {
                message: format!(
                    "api_base_url must start with http:// or https://, got '{}'",
                    self.api_base_url
                ),
            });
        }
        if self.timeout_secs == 0 {
            return Err(FinauraError::ConfigValidation {
                message: "timeout_secs must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Get the FinAura data directory (`~/.finaura`).
pub fn finaura_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").map_err(|_| FinauraError::Internal {
        message: "HOME environment variable not set".into(),
    })?;
    Ok(PathBuf::from(home).join(".finaura"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_nothing_configured() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");

        let config = AppConfig::resolve(&path, None, None).unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_file_is_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(
            &path,
            "api_base_url: https://finaura.example.com\ntimeout_secs: 10\n",
        )
        .unwrap();

        let config = AppConfig::resolve(&path, None, None).unwrap();
        assert_eq!(config.api_base_url, "https://finaura.example.com");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_env_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "api_base_url: https://from-file.example.com\n").unwrap();

        let config =
            AppConfig::resolve(&path, Some("https://from-env.example.com".into()), None).unwrap();
        assert_eq!(config.api_base_url, "https://from-env.example.com");
    }

    #[test]
    fn test_cli_overrides_env() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");

        let config = AppConfig::resolve(
            &path,
            Some("https://from-env.example.com".into()),
            Some("https://from-cli.example.com".into()),
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://from-cli.example.com");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");

        let config =
            AppConfig::resolve(&path, None, Some("http://localhost:8000/".into())).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");

        let result = AppConfig::resolve(&path, None, Some("ftp://example.com".into()));
        assert!(matches!(
            result,
            Err(FinauraError::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "api_base_url: [unclosed\n").unwrap();

        let result = AppConfig::resolve(&path, None, None);
        assert!(matches!(result, Err(FinauraError::ConfigInvalid { .. })));
    }
}
