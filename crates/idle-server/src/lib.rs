// File: crates/idle-server/src/lib.rs
// Summary: Router and handlers: the players API, the index page and a server-rendered chart.

pub mod config;
pub mod error;

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use idle_chart::RenderOptions;
use idle_data::{build_series, load_log_file, PlayerDataset};
use idle_viewer::{render_into, MemoryContainer, CONTAINER_ID, PLAYERS_PATH};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

pub use error::ServerError;

#[derive(Clone)]
pub struct AppState {
    data_file: Arc<PathBuf>,
    render: RenderOptions,
}

impl AppState {
    pub fn new(data_file: impl Into<PathBuf>, render: RenderOptions) -> Self {
        Self { data_file: Arc::new(data_file.into()), render }
    }

    pub fn data_file(&self) -> &std::path::Path { &self.data_file }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    Router::new()
        .route("/", get(index))
        .route(PLAYERS_PATH, get(players))
        .route("/chart.png", get(chart_png))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Parse the log off the async runtime.
async fn read_dataset(state: &AppState) -> Result<PlayerDataset, ServerError> {
    let path = state.data_file.clone();
    let dataset = tokio::task::spawn_blocking(move || load_log_file(path.as_path())).await??;
    debug!(players = dataset.len(), events = dataset.event_count(), "log parsed");
    Ok(dataset)
}

async fn players(State(state): State<AppState>) -> Result<Json<PlayerDataset>, ServerError> {
    Ok(Json(read_dataset(&state).await?))
}

async fn index() -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Idle Data Viewer</title></head>\n<body>\n<div id=\"{CONTAINER_ID}\"><img src=\"/chart.png\" alt=\"Idle Data Viewer\"></div>\n</body>\n</html>\n"
    ))
}

async fn chart_png(State(state): State<AppState>) -> Result<impl IntoResponse, ServerError> {
    let dataset = read_dataset(&state).await?;
    let opts = state.render;
    let png = tokio::task::spawn_blocking(move || {
        let mut container = MemoryContainer::new();
        render_into(&mut container, &build_series(&dataset), &opts)?;
        container.into_chart().map(|c| c.png).ok_or_else(|| anyhow::anyhow!("container left empty"))
    })
    .await?
    .map_err(ServerError::Render)?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
