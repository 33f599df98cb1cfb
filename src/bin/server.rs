//! Settings navigation REST server
//!
//! Run with: cargo run --features server --bin settings-nav-server
//!
//! Environment:
//!   SETTINGS_NAV_CATALOG  - JSON catalog file (built-in catalog when unset)
//!   PORT                  - listen port (default 3000)
//!   RUST_LOG              - tracing filter

use std::sync::Arc;

use settings_nav::server::{router, ServerConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env();
    let catalog = match config.catalog() {
        Ok(c) => c,
        Err(e) => {
            error!("cannot load settings catalog: {}", e);
            std::process::exit(1);
        }
    };

    let app = router(Arc::new(catalog));

    let addr = format!("0.0.0.0:{}", config.port);
    info!("settings-nav server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}
