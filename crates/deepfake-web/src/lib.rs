//! Deepfake Web Server
//!
//! Axum-based HTTP surface for the analysis service.

pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use deepfake_core::{Scorer, Settings};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let settings = state.settings.clone();

    let api_routes = Router::new()
        .route("/analysis/deepfake", post(routes::analysis::analyze_media));

    Router::new()
        .route("/", get(routes::docs::root))
        .route("/health", get(routes::health::health_check))
        .route(&settings.docs_url, get(routes::docs::docs_page))
        .route("/openapi.json", get(routes::docs::openapi_json))
        .nest(&settings.api_prefix, api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serve the application on an already bound listener until shutdown.
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let app = create_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Run the web server.
pub async fn run_server(settings: Settings, scorer: Arc<dyn Scorer>) -> anyhow::Result<()> {
    settings.validate()?;
    let addr = settings.bind_addr();
    let state = AppState::new(scorer, settings);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    serve(listener, state).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
