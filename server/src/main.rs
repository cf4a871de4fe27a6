use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use anyhow::Context;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod database;
mod error;
mod health;
mod log_requests;
mod players;
mod repository;
mod server_init;
mod service;

use config::Config;
use database::Database;
use log_requests::log_request_middleware;
use service::LeaderboardService;

#[derive(Clone)]
pub struct AppState {
    pub service: LeaderboardService,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/users", get(players::list_players).post(players::create_player))
        .route("/claim-points", post(players::claim_points))
        .route("/point-history", get(players::get_point_history))
        .route("/health", get(health::health))
        .layer(middleware::from_fn(log_request_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("server=info,tower_http=info,sqlx=warn")),
        )
        .with(fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    info!("Claimboard server starting...");

    let config = Config::from_env();

    let db = Database::new(&config.database_url)
        .await
        .with_context(|| format!("Failed to connect to database at {}", config.database_url))?;
    db.initialize().await.context("Failed to initialize database schema")?;
    info!("Database initialized successfully");

    let service = LeaderboardService::new(Arc::new(db));

    match service.ensure_seeded().await {
        Ok(0) => {}
        Ok(created) => info!("Seeded {created} default players"),
        Err(e) => error!("Failed to seed default players: {e}"),
    }

    let app = app(AppState { service });

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running on {addr}");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
