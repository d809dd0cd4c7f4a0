//! # stayhubd — stayhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct the review service, injecting repositories via port traits
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tracing_subscriber::EnvFilter;

use stayhub_adapter_http_axum::state::AppState;
use stayhub_adapter_storage_sqlite_sqlx::{
    Config as DbConfig, SqlitePlaceRepository, SqliteReviewRepository, SqliteUserRepository,
};
use stayhub_app::services::review_service::ReviewService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let place_repo = SqlitePlaceRepository::new(pool.clone());
    let user_repo = SqliteUserRepository::new(pool.clone());
    let review_repo = SqliteReviewRepository::new(pool);

    // Service
    let review_service = ReviewService::new(place_repo, user_repo, review_repo);

    // HTTP
    let state = AppState::new(review_service);
    let app = stayhub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "stayhubd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
