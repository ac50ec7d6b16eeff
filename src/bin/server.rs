//! Menu Server
//!
//! A small dish collection service speaking the REST interface the `menu`
//! client expects. Dishes live in memory only.
//!
//! # Configuration
//!
//! Environment variables:
//! - `MENU_SERVER_PORT`: Port to listen on (default: 6020)
//! - `MENU_SERVER_EMPTY`: Start with no dishes instead of the two house dishes
//!
//! # Endpoints
//!
//! - `GET /health`: Health check endpoint
//! - `GET /dish`, `POST /dish`: List or create dishes
//! - `GET /dish/{id}`, `PUT /dish/{id}`, `DELETE /dish/{id}`: Single dish

use std::net::SocketAddr;
use std::sync::Arc;

use menu_sync::server::{router, MenuRepository};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Server configuration
#[derive(Debug, Clone)]
struct Config {
    /// Port to listen on
    port: u16,
    /// Start without the seed dishes
    empty: bool,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Self {
        let port = std::env::var("MENU_SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(6020);

        let empty = std::env::var("MENU_SERVER_EMPTY")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self { port, empty }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menu_server=info,menu_sync=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let repo = if config.empty {
        MenuRepository::new()
    } else {
        MenuRepository::seeded()
    };
    if repo.is_empty().await {
        tracing::info!("Starting with an empty menu");
    } else {
        tracing::info!("Serving {} dish(es)", repo.len().await);
    }

    let app = router(Arc::new(repo)).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
