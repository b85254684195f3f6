//! HTTP API server.
//!
//! Routes:
//! - `/api/ip` - geolocation lookup, optionally projected with `return=<field>`
//! - `/api/features` - enabled feature flags
//! - `/api/debug` - request echo for proxy troubleshooting
//! - `/health` - liveness probe
//!
//! Every other path serves the embedded frontend unless the server is headless.

mod client_ip;
mod frontend;
mod handlers;
mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::http::{header, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::config::{CORS_MAX_AGE, REQUEST_TIMEOUT};
use frontend::frontend_handler;
use handlers::{debug_handler, features_handler, health_handler, lookup_handler};

pub use client_ip::client_ip;
pub use types::{AppState, DebugResponse, ErrorResponse, FeaturesResponse, HealthResponse};

/// Builds the router with CORS, request timeout, and request logging applied.
pub fn build_router(state: AppState, headless: bool) -> Router {
    build_router_with_timeout(state, headless, REQUEST_TIMEOUT)
}

/// Requests running past `timeout` are answered with `504 Gateway Timeout`.
fn build_router_with_timeout(state: AppState, headless: bool, timeout: Duration) -> Router {
    let mut app = Router::new()
        .route("/api/ip", get(lookup_handler))
        .route("/api/debug", get(debug_handler))
        .route("/api/features", get(features_handler))
        .route("/health", get(health_handler));

    if !headless {
        app = app.fallback(frontend_handler);
    }

    app.with_state(state)
        .layer(middleware::from_fn(log_requests))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            timeout,
        ))
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers([header::LINK])
        .max_age(CORS_MAX_AGE)
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    log::info!(
        "{} {} {} {}ms",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}

/// Binds `addr` and serves until Ctrl-C, then drains in-flight requests.
pub async fn start_server(addr: &str, state: AppState, headless: bool) -> Result<()> {
    let app = build_router(state, headless);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind server to {}", addr))?;

    log::info!("Server listening on http://{}/", addr);
    if headless {
        log::info!("Running in headless mode (API only)");
    } else {
        log::info!("Frontend available at http://{}/", addr);
    }

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Shutting down server..."),
        Err(e) => {
            log::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
