use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{ConnectInfo, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use super::service::{DiagnosticService, render_repair_page};
use crate::errors::DiagnosticError;

// ── Shared application state ──────────────────────────────────────────

pub type SharedState = Arc<DiagnosticService>;

// ── Response payload types ────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub damaged_system: String,
}

pub const TEAPOT_BODY: &str = "I'm a teapot";

// ── Error handling ────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

impl From<DiagnosticError> for ApiError {
    fn from(err: DiagnosticError) -> Self {
        match err {
            DiagnosticError::NoDamagedSystem => ApiError::NotFound(err.to_string()),
            DiagnosticError::InvalidDamagedSystem { .. } | DiagnosticError::EmptyCatalog => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(serde_json::json!({"error": message}))).into_response()
    }
}

// ── Router ────────────────────────────────────────────────────────────

pub fn api_router() -> Router<SharedState> {
    Router::new()
        .route("/status", get(check_status))
        .route("/repair-bay", get(repair_bay))
        .route("/teapot", post(teapot))
}

/// Sessions are keyed by peer IP; the port changes per connection.
fn client_key(addr: &SocketAddr) -> String {
    addr.ip().to_string()
}

// ── Handlers ──────────────────────────────────────────────────────────

async fn check_status(
    State(service): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Json<StatusResponse> {
    let damaged_system = service.check_status(&client_key(&addr)).await;
    Json(StatusResponse { damaged_system })
}

async fn repair_bay(
    State(service): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Html<String>, ApiError> {
    let code = service.repair_code(&client_key(&addr)).await?;
    Ok(Html(render_repair_page(&code)))
}

async fn teapot() -> (StatusCode, &'static str) {
    (StatusCode::IM_A_TEAPOT, TEAPOT_BODY)
}
