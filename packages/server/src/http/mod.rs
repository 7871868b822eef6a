//! HTTP API
//!
//! REST surface over `TriviaService`, organized into one module per resource:
//! - `category_endpoints`: category listing and per-category questions
//! - `question_endpoints`: question listing, search, create and delete
//! - `quiz_endpoints`: quiz question picker
//!
//! Every error, including unknown routes and wrong verbs, is answered with
//! the JSON envelope from [`HttpError`].
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin trivia-server
//! ```

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use trivia_core::services::TriviaService;

mod category_endpoints;
mod http_error;
pub mod payload;
mod question_endpoints;
mod quiz_endpoints;

pub use http_error::{ErrorEnvelope, ErrorKind, HttpError};

/// Application state shared across all endpoints
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TriviaService>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Liveness probe
///
/// ```bash
/// curl http://localhost:5000/health
/// ```
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Any path no route matches
async fn route_not_found() -> HttpError {
    HttpError::new(ErrorKind::NotFound)
}

/// axum answers a known path with the wrong verb with an empty 405; give it
/// the envelope, keeping the `Allow` header.
async fn envelope_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut enveloped = HttpError::new(ErrorKind::MethodNotAllowed).into_response();
    if let Some(allow) = allow {
        enveloped.headers_mut().insert(header::ALLOW, allow);
    }
    enveloped
}

/// Create the application router with all endpoint modules
///
/// `cors_origin` of `None` allows any origin.
pub fn create_router(state: AppState, cors_origin: Option<HeaderValue>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(category_endpoints::routes(state.clone()))
        .merge(question_endpoints::routes(state.clone()))
        .merge(quiz_endpoints::routes(state))
        .fallback(route_not_found)
        .layer(middleware::map_response(envelope_method_not_allowed))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origin))
}

/// CORS for browser clients
///
/// Mirrors the headers the API has always sent: any origin unless one is
/// configured, JSON and Authorization headers, the CRUD verbs.
fn cors_layer(origin: Option<HeaderValue>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(false);

    match origin {
        Some(origin) => layer.allow_origin(origin),
        None => layer.allow_origin(Any),
    }
}

/// Start the HTTP server and run until Ctrl-C
///
/// # Errors
///
/// Returns error if the listener fails to bind or the server fails.
pub async fn start_server(service: Arc<TriviaService>, config: &ServerConfig) -> anyhow::Result<()> {
    let app = create_router(AppState { service }, config.cors_allow_origin.clone());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("🚀 Trivia API listening on http://{}", addr);
    match &config.cors_allow_origin {
        Some(origin) => tracing::info!("📡 CORS enabled for {:?}", origin),
        None => tracing::info!("📡 CORS enabled for any origin"),
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown requested"),
        Err(e) => {
            tracing::warn!("Failed to listen for Ctrl-C, running until killed: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
