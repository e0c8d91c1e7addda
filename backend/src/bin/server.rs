//! Subway HTTP Server Binary
//!
//! Main entry point for the subway REST API server. It loads configuration,
//! initializes the repository, sets up the HTTP router and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin subway-server
//!
//! # with an explicit configuration file
//! SUBWAY_CONFIG=./subway.toml cargo run --bin subway-server
//! ```
//!
//! # Environment Variables
//!
//! - `SUBWAY_CONFIG`: Path of the TOML configuration file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_TYPE`: Repository backend (default: local)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use subway_rust::config::AppConfig;
use subway_rust::db::RepositoryFactory;
use subway_rust::http::{create_router_with_limit, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting subway HTTP server");

    let config = AppConfig::load(None)?;

    let repository = RepositoryFactory::from_settings(&config.repository)?;
    info!("Repository initialized ({})", config.repository.repo_type);

    let state = AppState::new(repository);
    let app = create_router_with_limit(state, config.server.body_limit_bytes);

    let addr: SocketAddr = config.server.bind_address().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
