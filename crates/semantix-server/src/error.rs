//! Error types for Semantix Server

use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration could not be resolved
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file unreadable
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`FileConfig`](crate::config::FileConfig)
    #[error("failed to parse config file {path}: {message}")]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// No API key from any layer
    #[error("no API key configured (set OPENAI_API_KEY, --openai-api-key or openai_api_key)")]
    MissingApiKey,

    /// A resolved value is out of range
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// Config key
        key: &'static str,
        /// What is wrong with it
        message: String,
    },
}

/// Server startup or runtime failure
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP client could not be built
    #[error("failed to build generation client: {0}")]
    Client(String),

    /// Listener could not bind
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Requested address
        addr: SocketAddr,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Server loop terminated abnormally
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl ServerError {
    /// Check if error comes from operator-supplied settings
    #[inline]
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Bind { .. })
    }
}
