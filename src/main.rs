use axum::{Router, middleware::from_fn_with_state};
use dotenvy::dotenv;
use models::app_state::AppState;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api::{
        auth_mw::auth_mw, format::format_routes, health::health_routes, player::player_routes,
        quiz::quiz_routes, round::round_routes,
    },
    config::app_config::CONFIG,
};

mod api;
mod config;
mod db;
mod models;
mod service;
mod tests;

#[tokio::main]
async fn main() {
    // Initialize .env
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Initialize state
    let state = AppState::from_connection_string(&CONFIG.database_url)
        .await
        .unwrap_or_else(|e| panic!("{}", e));

    // Run migrations
    if let Err(e) = sqlx::migrate!().run(state.get_pool()).await {
        error!("Failed to run migrations: {}", e);
        return;
    }

    let public_routes = Router::new().nest("/health", health_routes(state.clone()));

    let protected_routes = Router::new()
        .nest("/quizzes", quiz_routes(state.clone()))
        .nest("/rounds", round_routes(state.clone()))
        .nest("/formats", format_routes(state.clone()))
        .nest("/players", player_routes(state.clone()))
        .layer(from_fn_with_state(state.clone(), auth_mw));

    let app = Router::new().merge(protected_routes).merge(public_routes);

    // Initialize webserver
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", CONFIG.server.address, CONFIG.server.port))
            .await
            .unwrap();

    info!(
        "Server listening on address: {}",
        listener.local_addr().unwrap()
    );
    axum::serve(listener, app).await.unwrap();
}
