//! # Blogengine API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod fixtures;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use fixtures::Fixtures;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Blogengine API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(config.database.as_ref()).await;

    if let Some(path) = &config.fixtures_path {
        let loaded = match Fixtures::load(path).await {
            Ok(fixtures) => fixtures.apply(&state).await,
            Err(e) => Err(e),
        };
        if let Err(e) = loaded {
            tracing::error!("{}", e);
            return Err(std::io::Error::other(e));
        }
    }

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
