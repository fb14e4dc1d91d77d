//! Layered server configuration
//!
//! Each key resolves as: command-line flag, then environment variable (both
//! handled by `clap`), then the optional TOML file, then the built-in default.

use crate::error::ConfigError;
use crate::openai::OpenAiConfig;
use clap::Args;
use semantix_core::PipelineConfig;
use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Default listen address
pub const DEFAULT_BIND: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
    3000,
);
/// Default OpenAI-compatible endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default completion model
pub const DEFAULT_MODEL: &str = "gpt-4o";
/// Default per-request budget
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
/// Default request body cap (1 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Flag and environment layer
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Address to listen on
    #[arg(long, env = "SEMANTIX_BIND", global = true)]
    pub bind: Option<SocketAddr>,

    /// API key for the completion backend
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub openai_api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", global = true)]
    pub openai_base_url: Option<String>,

    /// Completion model
    #[arg(long, env = "OPENAI_MODEL", global = true)]
    pub model: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "SEMANTIX_REQUEST_TIMEOUT_SECS", global = true)]
    pub request_timeout_secs: Option<u64>,

    /// Maximum accepted request body in bytes
    #[arg(long, env = "SEMANTIX_MAX_BODY_BYTES", global = true)]
    pub max_body_bytes: Option<usize>,
}

/// TOML file layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub bind: Option<SocketAddr>,
    pub openai_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub model: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub max_body_bytes: Option<usize>,
}

impl FileConfig {
    /// Read and parse a config file
    ///
    /// # Errors
    /// - `ConfigError::Read` if the file cannot be read
    /// - `ConfigError::Parse` if it is not a valid config
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse config text; `origin` only labels errors
    ///
    /// # Errors
    /// - `ConfigError::Parse` on invalid TOML or unknown keys
    pub fn parse(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|err| ConfigError::Parse {
            path: origin.to_path_buf(),
            message: err.message().to_string(),
        })
    }
}

/// Fully resolved server configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind", &self.bind)
            .field("openai_api_key", &"<redacted>")
            .field("openai_base_url", &self.openai_base_url)
            .field("model", &self.model)
            .field("request_timeout", &self.request_timeout)
            .field("max_body_bytes", &self.max_body_bytes)
            .finish()
    }
}

impl ServerConfig {
    /// Resolve flags/env over an optional config file
    ///
    /// # Errors
    /// - Any [`ConfigError`] from loading or resolving
    pub fn load(args: &ConfigArgs, file: Option<&Path>) -> Result<Self, ConfigError> {
        let file = file.map(FileConfig::load).transpose()?.unwrap_or_default();
        Self::resolve(args, file)
    }

    /// Merge the layers
    ///
    /// # Errors
    /// - `ConfigError::MissingApiKey` if no layer supplies a non-blank key
    /// - `ConfigError::InvalidValue` for zero limits or a blank URL/model
    pub fn resolve(args: &ConfigArgs, file: FileConfig) -> Result<Self, ConfigError> {
        let openai_api_key = args
            .openai_api_key
            .clone()
            .or(file.openai_api_key)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let openai_base_url = args
            .openai_base_url
            .clone()
            .or(file.openai_base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if openai_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "openai_base_url",
                message: "must not be empty".to_string(),
            });
        }

        let model = args
            .model
            .clone()
            .or(file.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        if model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "model",
                message: "must not be empty".to_string(),
            });
        }

        let timeout_secs = args
            .request_timeout_secs
            .or(file.request_timeout_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "request_timeout_secs",
                message: "must be greater than zero".to_string(),
            });
        }

        let max_body_bytes = args
            .max_body_bytes
            .or(file.max_body_bytes)
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);
        if max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_body_bytes",
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            bind: args.bind.or(file.bind).unwrap_or(DEFAULT_BIND),
            openai_api_key,
            openai_base_url,
            model,
            request_timeout: Duration::from_secs(timeout_secs),
            max_body_bytes,
        })
    }

    /// Pipeline settings derived from this config
    #[must_use]
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new().with_request_timeout(self.request_timeout)
    }

    /// Generator settings derived from this config
    #[must_use]
    pub fn generator_config(&self) -> OpenAiConfig {
        OpenAiConfig {
            api_key: self.openai_api_key.clone(),
            base_url: self.openai_base_url.clone(),
            model: self.model.clone(),
            timeout: self.request_timeout,
        }
    }
}
