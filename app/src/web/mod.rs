//! Axum web server: JSON endpoints over the shot engine.

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the API router. Every request bumps the shared request counter.
pub fn router(state: Arc<AppState>) -> Router {
    let counter_state = Arc::clone(&state);
    let count_middleware = axum::middleware::from_fn(move |req, next: axum::middleware::Next| {
        let st = Arc::clone(&counter_state);
        async move {
            st.count_request();
            next.run(req).await
        }
    });

    Router::new()
        .route("/api/status", get(routes::get_status))
        .route(
            "/api/settings",
            get(routes::get_settings).post(routes::post_settings),
        )
        .route("/api/bag", get(routes::get_bag))
        .route("/api/bag/generate", post(routes::post_generate_bag))
        .route("/api/predict", post(routes::post_predict))
        .route("/api/dispersion", post(routes::post_dispersion))
        .route("/api/arc", post(routes::post_arc))
        .route("/api/recommend", post(routes::post_recommend))
        .route("/api/layup", post(routes::post_layup))
        .route("/api/strategy", post(routes::post_strategy))
        .route("/api/plan", post(routes::post_plan))
        .layer(count_middleware)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the API on `addr` until ctrl-c.
pub async fn run(addr: SocketAddr, state: Arc<AppState>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("web server listening on {addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("failed to listen for ctrl-c: {e}");
                std::future::pending::<()>().await;
            }
            tracing::info!("shutting down...");
        })
        .await?;
    Ok(())
}
