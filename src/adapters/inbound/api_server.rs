//! Lookup API Server
//!
//! HTTP API exposing BIN lookup and country classification.

use crate::application::LookupService;
use crate::domain::services::CountryClassifier;
use crate::domain::value_objects::Classification;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Classification response.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub country: String,
    pub classification: Classification,
}

/// API Server state.
#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<LookupService>,
}

impl ApiState {
    pub fn new(service: Arc<LookupService>) -> Self {
        Self { service }
    }
}

/// Build the API router.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/bin/:bin", get(lookup_handler))
        .route("/api/v1/classify/:country", get(classify_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API Server for BIN lookups.
pub struct ApiServer {
    listen_addr: String,
    state: ApiState,
}

impl ApiServer {
    pub fn new(listen_addr: String, service: Arc<LookupService>) -> Self {
        Self {
            listen_addr,
            state: ApiState::new(service),
        }
    }

    /// Run the API server.
    pub async fn run(&self) -> anyhow::Result<()> {
        let app = router(self.state.clone());

        let listener = TcpListener::bind(&self.listen_addr).await?;
        tracing::info!("lookup API listening on {}", self.listen_addr);

        axum::serve(listener, app).await?;
        Ok(())
    }
}

// Handler functions

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn lookup_handler(
    State(state): State<ApiState>,
    Path(bin): Path<String>,
) -> Response {
    match state.service.lookup_and_classify(&bin).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => {
            tracing::error!("lookup failed for bin {}: {}", bin, e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "bin": bin,
                    "error": e.to_string()
                })),
            )
                .into_response()
        }
    }
}

async fn classify_handler(Path(country): Path<String>) -> impl IntoResponse {
    let classification = CountryClassifier::classify(Some(country.as_str()));
    Json(ClassifyResponse {
        country,
        classification,
    })
}
