//! Startup error types.
//!
//! Request handling has no error path of its own; everything here can only
//! happen before the listener accepts its first connection.

use std::io;

use thiserror::Error;

/// Problems loading or validating [`crate::config::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid listen address {0:?}")]
    InvalidListen(String),

    #[error("server.max_concurrent_requests must be at least 1")]
    InvalidConcurrency,

    #[error("invalid CORS origin {0:?}")]
    InvalidOrigin(String),
}

/// Errors that stop the server from starting or keep it from running.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Io(#[from] io::Error),
}
