use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::storage::StoreConfig;

/// Connection string variable honoured regardless of config prefix.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("USER_API_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("USER_API")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if let Ok(url) = env::var(DATABASE_URL_ENV) {
            config.database.url = url;
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Resolve the storage backend to build.
    pub fn store_runtime(&self) -> Result<StoreConfig> {
        self.database.to_runtime()
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseSection {
    pub backend: StoreBackendKind,
    pub url: String,
}

impl DatabaseSection {
    pub fn to_runtime(&self) -> Result<StoreConfig> {
        match self.backend {
            StoreBackendKind::Postgres => {
                let url = self.url.trim();
                if url.is_empty() {
                    bail!(
                        "database.url (or {}) must be set for the postgres backend",
                        DATABASE_URL_ENV
                    );
                }
                Ok(StoreConfig::Postgres {
                    url: url.to_string(),
                })
            }
            StoreBackendKind::Memory => Ok(StoreConfig::Memory),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackendKind {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}
