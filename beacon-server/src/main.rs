use anyhow::Result;
use axum::Router;
use axum::routing::{get, post};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use beacon_server::{ServerConfig, SignalingService, ice_handler, join_handler, ws_handler};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env();
    let service = SignalingService::new(&config);
    service.spawn_sweeper();

    // Browser clients call /join and /ice from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/join/{room_id}", post(join_handler))
        .route("/ice", post(ice_handler))
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(service);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Signaling relay listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
