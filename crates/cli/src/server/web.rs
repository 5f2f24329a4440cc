use axum::Router;
use doh_relay_api::{create_api_routes, AppState};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_web_server(bind_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!(bind_address = %bind_addr, "Gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway shut down");
    Ok(())
}

fn create_app(state: AppState) -> Router {
    create_api_routes(state).layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
