use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};
use tracing::debug;

pub const EXCHANGERATE_HOST_URL: &str = "https://api.exchangerate.host";
pub const OPEN_ER_API_URL: &str = "https://open.er-api.com";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProviderConfig {
    pub base_url: String,
}

impl ProviderConfig {
    fn new(base_url: &str) -> Self {
        ProviderConfig {
            base_url: base_url.to_string(),
        }
    }
}

/// Providers in fallback order. A provider set to `null` is skipped.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    #[serde(default = "default_exchangerate_host")]
    pub exchangerate_host: Option<ProviderConfig>,
    #[serde(default = "default_open_er_api")]
    pub open_er_api: Option<ProviderConfig>,
}

fn default_exchangerate_host() -> Option<ProviderConfig> {
    Some(ProviderConfig::new(EXCHANGERATE_HOST_URL))
}

fn default_open_er_api() -> Option<ProviderConfig> {
    Some(ProviderConfig::new(OPEN_ER_API_URL))
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            exchangerate_host: default_exchangerate_host(),
            open_er_api: default_open_er_api(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    8
}

fn default_refresh_hours() -> u64 {
    8
}

/// Longest accepted refresh interval: one year.
pub const MAX_REFRESH_HOURS: u64 = 24 * 365;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_refresh_hours")]
    pub refresh_hours: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            providers: ProvidersConfig::default(),
            timeout_secs: default_timeout_secs(),
            refresh_hours: default_refresh_hours(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, or defaults if no file exists there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "ratefetch", "ratefetch")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config.validate()?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }
        if self.refresh_hours == 0 || self.refresh_hours > MAX_REFRESH_HOURS {
            anyhow::bail!(
                "refresh_hours must be between 1 and {}, got {}",
                MAX_REFRESH_HOURS,
                self.refresh_hours
            );
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_hours.saturating_mul(60 * 60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config.timeout_secs, 8);
        assert_eq!(config.refresh_hours, 8);
        assert_eq!(config.timeout(), Duration::from_secs(8));
        assert_eq!(config.refresh_interval(), Duration::from_secs(8 * 3600));
        assert_eq!(
            config.providers.exchangerate_host,
            Some(ProviderConfig::new(EXCHANGERATE_HOST_URL))
        );
        assert_eq!(
            config.providers.open_er_api,
            Some(ProviderConfig::new(OPEN_ER_API_URL))
        );
    }

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
providers:
  exchangerate_host:
    base_url: "http://example.com/host"
  open_er_api: null
timeout_secs: 3
refresh_hours: 12
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(
            config.providers.exchangerate_host.unwrap().base_url,
            "http://example.com/host"
        );
        assert!(config.providers.open_er_api.is_none());
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.refresh_hours, 12);
    }

    #[test]
    fn test_zero_timeout_rejected() -> Result<()> {
        let file = tempfile::NamedTempFile::new()?;
        fs::write(file.path(), "timeout_secs: 0\n")?;

        let result = AppConfig::load_from_path(file.path());
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("timeout_secs must be greater than zero")
        );
        Ok(())
    }

    #[test]
    fn test_zero_refresh_hours_rejected() -> Result<()> {
        let file = tempfile::NamedTempFile::new()?;
        fs::write(file.path(), "refresh_hours: 0\n")?;

        let result = AppConfig::load_from_path(file.path());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("refresh_hours must be between 1 and 8760, got 0")
        );
        Ok(())
    }

    #[test]
    fn test_huge_refresh_hours_rejected() -> Result<()> {
        let file = tempfile::NamedTempFile::new()?;
        fs::write(file.path(), "refresh_hours: 18446744073709551615\n")?;

        let result = AppConfig::load_from_path(file.path());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("refresh_hours must be between 1 and 8760")
        );
        Ok(())
    }

    #[test]
    fn test_refresh_interval_does_not_overflow() {
        let config = AppConfig {
            refresh_hours: u64::MAX,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.refresh_interval(), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_max_refresh_hours_accepted() -> Result<()> {
        let file = tempfile::NamedTempFile::new()?;
        fs::write(file.path(), format!("refresh_hours: {MAX_REFRESH_HOURS}\n"))?;

        let config = AppConfig::load_from_path(file.path())?;
        assert_eq!(
            config.refresh_interval(),
            Duration::from_secs(MAX_REFRESH_HOURS * 3600)
        );
        Ok(())
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = AppConfig::load_from_path("/nonexistent/ratefetch/config.yaml");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
