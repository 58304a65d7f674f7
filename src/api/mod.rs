//! HTTP transport for the task use-cases.
//!
//! Handlers validate input, call exactly one use-case and map failures onto
//! the JSON error envelope in [`error`].

pub mod error;
mod tasks;

use crate::config::RuntimeMode;
use crate::task::composition::DynTaskUseCases;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::{ApiError, ApiRejection};

/// Shared state handed to every handler.
pub struct AppState {
    /// Wired use-cases.
    pub tasks: DynTaskUseCases,
    /// Controls how much internal detail error responses carry.
    pub mode: RuntimeMode,
}

impl AppState {
    /// Creates the state.
    #[must_use]
    pub const fn new(tasks: DynTaskUseCases, mode: RuntimeMode) -> Self {
        Self { tasks, mode }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Builds the application router with CORS and request tracing.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/tasks", tasks::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
