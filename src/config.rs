//! Configuration loading and defaults.
//!
//! Configuration is resolved in order of precedence (highest wins):
//!
//! 1. **Environment variables** — `POLI_LISTEN`, `POLI_LOG_LEVEL`,
//!    `POLI_CORS_ORIGINS` (comma-separated)
//! 2. **Config file** — path via `--config <path>`, or `poli.toml` in CWD
//! 3. **Compiled defaults** — see each field's default value below
//!
//! The TOML file mirrors the struct hierarchy:
//!
//! ```toml
//! [server]
//! listen = "127.0.0.1:8000"
//! max_concurrent_requests = 1024
//!
//! [cors]
//! allowed_origins = ["http://localhost:5500"]   # "*" allows any origin
//!
//! [logging]
//! level = "info"
//! ```

use std::net::SocketAddr;
use std::path::Path;

use axum::http::HeaderValue;
use serde::Deserialize;

use crate::error::ConfigError;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "poli.toml";

/// Top-level configuration, deserialized from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Listener and request-limit settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to bind (default `127.0.0.1:8000`, where the web
    /// frontend expects the API).
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Requests served at once before new ones wait (default 1024).
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,
}

/// Cross-origin settings for browser clients served from another origin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed `Origin` values. Empty disables CORS entirely; `"*"` allows any.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// tracing filter (default `info`). Overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_listen() -> String {
    "127.0.0.1:8000".to_string()
}
fn default_max_concurrent_requests() -> usize {
    1024
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_concurrent_requests: default_max_concurrent_requests(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl CorsConfig {
    /// Whether a CORS layer should be installed at all.
    pub fn enabled(&self) -> bool {
        !self.allowed_origins.is_empty()
    }

    /// `true` when the wildcard origin is listed.
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Config {
    /// Load configuration with the precedence chain: env vars > file > defaults.
    ///
    /// If `path` is `Some`, that file must exist and parse. Otherwise
    /// `poli.toml` in the current directory is used when present.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config.apply_env(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file without applying overrides.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(path, &content)
    }

    /// Parse TOML content; `origin` only labels errors.
    pub fn from_toml(origin: &str, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    /// Apply `POLI_*` overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(listen) = lookup("POLI_LISTEN") {
            self.server.listen = listen;
        }
        if let Some(level) = lookup("POLI_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(origins) = lookup("POLI_CORS_ORIGINS") {
            self.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(ToString::to_string)
                .collect();
        }
    }

    /// Replace the listen address (the `--listen` flag) and re-validate.
    ///
    /// On error the previous address is kept.
    pub fn override_listen(&mut self, listen: String) -> Result<(), ConfigError> {
        let previous = std::mem::replace(&mut self.server.listen, listen);
        if let Err(e) = self.validate() {
            self.server.listen = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Reject values that would only fail later, at bind or layer setup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.listen.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidListen(self.server.listen.clone()));
        }
        if self.server.max_concurrent_requests == 0 {
            return Err(ConfigError::InvalidConcurrency);
        }
        for origin in &self.cors.allowed_origins {
            if origin != "*" && HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::InvalidOrigin(origin.clone()));
            }
        }
        Ok(())
    }
}
