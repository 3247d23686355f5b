//! Configuration for the registration service.

use crate::error::FormError;
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

/// Service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// API credentials
    #[serde(default)]
    pub api: ApiConfig,

    /// Database configuration (declared, not used by the service)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Collection endpoint configuration
    #[serde(default)]
    pub collector: CollectorConfig,

    /// System settings
    #[serde(default)]
    pub system: SystemConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// API key copied into every registrant record
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Value of the `Authorization` header sent to the collection endpoint
    #[serde(default)]
    pub auth_token: Option<SecretString>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub connection_string: Option<SecretString>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectorConfig {
    /// URL registrant records are posted to
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Collector host address (informational)
    #[serde(default)]
    pub server_ip: Option<String>,

    /// HTTP request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// Delay before a record is sent
    #[serde(default = "default_dispatch_delay", with = "humantime_serde")]
    pub dispatch_delay: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    #[serde(default)]
    pub admin_email: Option<String>,

    #[serde(default)]
    pub admin_password: Option<SecretString>,

    /// Lower the default log level to debug
    #[serde(default)]
    pub debug_mode: bool,

    /// Declared registry capacity. Not enforced.
    #[serde(default = "default_max_records")]
    pub max_records: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Everything needed to reach the collection endpoint.
#[derive(Debug, Clone)]
pub struct CollectorSettings {
    pub endpoint: String,
    pub auth_token: SecretString,
    pub timeout: Duration,
    pub dispatch_delay: Duration,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            server_ip: None,
            timeout: default_timeout(),
            dispatch_delay: default_dispatch_delay(),
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            admin_email: None,
            admin_password: None,
            debug_mode: false,
            max_records: default_max_records(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_dispatch_delay() -> Duration {
    Duration::from_secs(1)
}

fn default_max_records() -> usize {
    1000
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Collector settings, or the first required key that is missing.
    pub fn collector_settings(&self) -> Result<CollectorSettings, FormError> {
        let endpoint = self
            .collector
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or_else(|| FormError::ConfigurationMissing("collector.endpoint".into()))?;

        let auth_token = self
            .api
            .auth_token
            .clone()
            .filter(|t| !t.expose_secret().trim().is_empty())
            .ok_or_else(|| FormError::ConfigurationMissing("api.auth_token".into()))?;

        Ok(CollectorSettings {
            endpoint: endpoint.to_string(),
            auth_token,
            timeout: self.collector.timeout,
            dispatch_delay: self.collector.dispatch_delay,
        })
    }

    /// Filter directive used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &str {
        if self.system.debug_mode {
            "debug"
        } else {
            self.log.level.as_str()
        }
    }
}
