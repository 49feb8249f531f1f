use crate::providers::google_finance::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::{debug, info};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GoogleProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub google: Option<GoogleProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            google: Some(GoogleProviderConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
            }),
        }
    }
}

fn default_refresh_secs() -> u64 {
    10
}

fn default_http_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Directory holding one `<asset>.csv` per asset.
    pub data_path: Option<String>,
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Seconds after which a render pass re-fetches live quotes.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            providers: ProvidersConfig::default(),
            refresh_secs: default_refresh_secs(),
            http_timeout_secs: default_http_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, or built-in defaults when
    /// no config file has been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "moneyview", "moneyview")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn data_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("io", "moneyview", "moneyview")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().join("Index_data"))
    }

    pub fn quote_base_url(&self) -> &str {
        self.providers
            .google
            .as_ref()
            .map_or(DEFAULT_BASE_URL, |p| &p.base_url)
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
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

    fn validate(&self) -> Result<()> {
        if self.http_timeout_secs == 0 {
            anyhow::bail!("http_timeout_secs must be at least 1");
        }
        Ok(())
    }
}
