// File: crates/idle-server/src/main.rs
// Summary: Binary entry: parse flags, bind and serve.

use anyhow::{Context, Result};
use clap::Parser;
use idle_chart::{theme, RenderOptions};
use idle_server::config::Args;
use idle_server::{router, AppState};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    idle_viewer::logging::init();
    let args = Args::parse();

    if !args.data_file.exists() {
        warn!(path = %args.data_file.display(), "data file missing; /api/players will fail until it exists");
    }
    let render = RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() };
    let app = router(AppState::new(args.data_file.clone(), render));

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    info!("listening on http://{}", args.bind);
    axum::serve(listener, app).await?;
    Ok(())
}
