use crate::error::{DirectoryError, Result};
use dashmap::DashMap;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Key/value configuration, loaded from the process environment.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// Empty configuration; every lookup falls back to its default.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        let Some(raw) = self.get(key) else {
            return Ok(default);
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            other => Err(DirectoryError::Config {
                key: key.to_string(),
                message: format!("expected a boolean, got '{}'", other),
            }),
        }
    }
}

/// Settings the server needs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Reject emails that fail `validate_email` on create.
    pub strict_email: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            strict_email: false,
        }
    }
}

impl ServerConfig {
    pub fn from_config(config: &ConfigService) -> Result<Self> {
        let host = config.get_or("HOST", DEFAULT_HOST);
        let port = match config.get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| DirectoryError::Config {
                key: "PORT".to_string(),
                message: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };
        let strict_email = config.get_bool("STRICT_EMAIL", false)?;

        Ok(Self {
            host,
            port,
            strict_email,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| DirectoryError::Config {
                key: "HOST".to_string(),
                message: format!("'{}' is not a valid listen address", self.host),
            })
    }
}
