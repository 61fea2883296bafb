use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::core::{ClientConfig, ServerSelection, DEFAULT_BASE_PATH, DEFAULT_TIMEOUT_SECS};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_path")]
    pub base_path: String,
    pub custom_base_url: Option<String>,
    #[serde(default)]
    pub servers: Vec<String>,
    #[serde(default)]
    pub host_index: usize,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            custom_base_url: None,
            servers: Vec::new(),
            host_index: 0,
            timeout_secs: None,
            user_agent: None,
        }
    }
}

fn default_base_path() -> String { DEFAULT_BASE_PATH.to_string() }

impl ApiSettings {
    /// Build the fetcher configuration these settings describe
    pub fn client_config(&self) -> ClientConfig {
        let servers = ServerSelection {
            custom_base_url: self.custom_base_url.clone(),
            servers: self.servers.clone(),
            host_index: self.host_index,
        };

        let mut config = ClientConfig::new(self.base_path.clone())
            .with_servers(servers)
            .with_timeout(Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)));

        if let Some(user_agent) = &self.user_agent {
            config = config.with_user_agent(user_agent.clone());
        }

        config
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ROOMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ROOMATCH__API__CUSTOM_BASE_URL -> api.custom_base_url
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("ROOMATCH")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("api.servers")
        .try_parsing(true)
}
