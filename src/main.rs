//! Nyumba Web Gateway
//!
//! Serves the server-rendered property search and detail pages and the
//! passthrough API routes that relay requests to the listings backend.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};

use nyumba_web::client::ApiClient;
use nyumba_web::config::Config;
use nyumba_web::middleware;
use nyumba_web::routes;
use nyumba_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .init();

    tracing::info!(
        environment = config.environment.as_str(),
        backend = %config.backend_api_url,
        "Starting Nyumba web gateway"
    );

    let client = Arc::new(ApiClient::new(
        config.backend_api_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?);

    let state = AppState::new(client);

    let mut app = routes::router(state).layer(configure_cors(&config));
    if config.environment.is_production() {
        app = app.layer(axum::middleware::from_fn(middleware::hsts_header));
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Listings at http://{}/properties", addr);
    tracing::info!("Health check at http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

fn configure_cors(config: &Config) -> CorsLayer {
    let allowed_origins_str = config.cors_allowed_origins.clone().unwrap_or_default();

    if allowed_origins_str.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins_str
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
