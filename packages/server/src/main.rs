//! Trivia API Server Binary
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (127.0.0.1:5000, ~/.trivia/database/trivia.db)
//! cargo run --bin trivia-server
//!
//! # Custom port and database
//! TRIVIA_PORT=8080 TRIVIA_DATABASE_PATH=/tmp/trivia.db cargo run --bin trivia-server
//! ```
//!
//! # Environment Variables
//!
//! See [`trivia_server::config`]; `RUST_LOG` sets the log filter (default: info).

use std::sync::Arc;

use anyhow::Context;
use trivia_core::db::{DatabaseService, TursoStore};
use trivia_core::services::TriviaService;
use trivia_server::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🧠 Trivia API Server");

    let config = ServerConfig::from_env().context("Invalid configuration")?;

    tracing::info!("📦 Database: {}", config.database_path.display());

    let db = Arc::new(
        DatabaseService::new(config.database_path.clone())
            .await
            .context("Failed to open database")?,
    );

    if config.seed_categories {
        let seeded = db
            .seed_default_categories()
            .await
            .context("Failed to seed categories")?;
        if seeded == 0 {
            tracing::debug!("Categories already present, skipping seed");
        }
    }

    let store = Arc::new(TursoStore::new(db));
    let service = Arc::new(TriviaService::new(store));

    tracing::info!("✅ Services initialized");

    trivia_server::http::start_server(service, &config).await
}
