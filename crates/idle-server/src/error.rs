// File: crates/idle-server/src/error.rs
// Summary: Handler errors and their JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use idle_data::ParseError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("player data unavailable: {0}")]
    Data(#[from] ParseError),

    #[error("chart rendering failed: {0:#}")]
    Render(anyhow::Error),

    #[error("worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
