mod config;
mod error;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::credentials::InMemoryCredentials;
use services::menu::Menu;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env();
    let state = state::AppState::new(
        Arc::new(InMemoryCredentials::new()),
        Menu::seeded(),
        Some(config.session_key()),
        config.cookie,
    );

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "pizzeria listening");
    axum::serve(listener, app).await.expect("server failed");
}
