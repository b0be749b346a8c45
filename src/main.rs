//! Study-hall seat reservation host.
//!
//! Serves the server-rendered reservation app and, optionally, relays its
//! API calls to the remote reservation service.
#![recursion_limit = "256"]

mod config;
mod proxy;
mod routes;

use config::{Config, ConfigError};
use proxy::ProxyError;

/// Failures that stop the host before it starts serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error(transparent)]
    Proxy(#[from] ProxyError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let app = routes::app(&config)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "studyhall listening");
    axum::serve(listener, app).await?;
    Ok(())
}
