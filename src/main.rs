// Main entry point for the cinema listings server

use std::sync::Arc;

use anyhow::{Context, Result};
use tera::Tera;

use cinema_scraper_service::web::{build_router, AppState};
use cinema_scraper_service::{CinemaConfig, CinemaScraper, DEFAULT_SOURCE_URL};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cinema_scraper_service=debug".into()),
        )
        .init();

    tracing::info!("Starting cinema scraper service");

    // Load configuration from environment
    let source_url = std::env::var("CINEMA_SOURCE_URL")
        .unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let config = CinemaConfig::new(source_url);
    tracing::info!("Source: {}", config.source_url);

    // Load templates once at startup
    let templates =
        Tera::new(&config.template_glob).context("Failed to load templates")?;

    let state = AppState {
        scraper: Arc::new(CinemaScraper::new(config.clone())),
        templates: Arc::new(templates),
        config,
    };
    let app = build_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Movie list: http://localhost:{}/movies", port);
    tracing::info!("JSON API: http://localhost:{}/api/v1/movies", port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
