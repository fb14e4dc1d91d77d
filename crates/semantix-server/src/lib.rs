//! Semantix Server - HTTP analysis service
//!
//! Wires the [`semantix_core`] pipeline to an OpenAI-compatible completion
//! backend and exposes it over HTTP.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod openai;
pub mod routes;

pub use config::{ConfigArgs, FileConfig, ServerConfig};
pub use error::{ConfigError, ServerError};
pub use openai::{OpenAiConfig, OpenAiGenerator};
pub use routes::{build_router, ApiError};

use semantix_core::{AnalysisPipeline, TextGenerator};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Build the pipeline described by `config`
///
/// # Errors
/// - `ServerError::Client` if the HTTP client cannot be built
pub fn pipeline_from_config(config: &ServerConfig) -> Result<Arc<AnalysisPipeline>, ServerError> {
    let generator = OpenAiGenerator::new(config.generator_config())
        .map_err(|err| ServerError::Client(err.to_string()))?;
    tracing::info!(
        generator = generator.name(),
        endpoint = generator.endpoint(),
        "completion backend configured"
    );
    Ok(Arc::new(AnalysisPipeline::new(
        Arc::new(generator),
        config.pipeline_config(),
    )))
}

/// Bind and serve until `shutdown` resolves
///
/// # Errors
/// - `ServerError::Bind` if the address is unavailable
/// - `ServerError::Serve` if the server loop fails
pub async fn run<F>(config: ServerConfig, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let pipeline = pipeline_from_config(&config)?;
    let router = build_router(pipeline, config.max_body_bytes);

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind,
            source,
        })?;
    tracing::info!(addr = %config.bind, "semantix listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("server stopped");
    Ok(())
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
