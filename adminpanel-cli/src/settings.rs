//! Host configuration.
//!
//! Sources, lowest to highest precedence: built-in defaults, the TOML file,
//! `ADMINPANEL_*` environment variables, command-line flags.

use adminpanel_client::ClientConfig;
use adminpanel_core::{PanelSettings, RefreshStrategy};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

const DEFAULT_FILE: &str = "adminpanel";
const ENV_PREFIX: &str = "ADMINPANEL";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid base_url {0:?}: expected an http:// or https:// URL")]
    InvalidBaseUrl(String),

    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Admin API root, e.g. `https://api.example.com`
    pub base_url: String,
    /// Name of the environment variable holding the bearer token
    pub token_env: String,
    pub timeout_secs: Option<u64>,
    pub refresh_strategy: RefreshStrategy,
    /// How long the employee screen keeps its status line
    pub status_ttl_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        let client = ClientConfig::default();
        let panel = PanelSettings::default();
        Self {
            base_url: client.base_url,
            token_env: "ADMINPANEL_TOKEN".to_string(),
            timeout_secs: client.timeout_secs,
            refresh_strategy: panel.refresh_strategy,
            status_ttl_secs: panel.status_ttl_secs,
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub refresh_strategy: Option<RefreshStrategy>,
}

impl Overrides {
    fn apply(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        builder
            .set_override_option("base_url", self.base_url.clone())?
            .set_override_option("timeout_secs", self.timeout_secs.map(|t| t.to_string()))?
            .set_override_option("refresh_strategy", self.refresh_strategy.map(|s| s.to_string()))
    }
}

impl Settings {
    /// Load from `path` (or an optional `./adminpanel.toml`), the environment
    /// and `overrides`, then validate.
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self, SettingsError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_FILE).required(false),
        };
        let builder = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX));
        Self::from_builder(overrides.apply(builder)?)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let base = self.base_url.trim();
        let rest = base
            .strip_prefix("https://")
            .or_else(|| base.strip_prefix("http://"))
            .unwrap_or_default();
        if rest.is_empty() || rest.starts_with('/') {
            return Err(SettingsError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout_secs == Some(0) {
            return Err(SettingsError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig { base_url: self.base_url.trim().to_string(), timeout_secs: self.timeout_secs }
    }

    pub const fn panel_settings(&self) -> PanelSettings {
        PanelSettings { refresh_strategy: self.refresh_strategy, status_ttl_secs: self.status_ttl_secs }
    }
}
