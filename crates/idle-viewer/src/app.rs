// File: crates/idle-viewer/src/app.rs
// Summary: Load -> build -> render pipeline. Runs once; failures are logged and leave the container as it was.

use idle_chart::{Chart, RenderOptions};
use idle_data::build_series;
use tracing::{error, info};

use crate::container::Container;
use crate::loader::{LoadError, PlayerLoader};
use crate::renderer::{configure_chart, encode_chart, mount_chart};

/// Result of one pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Rendered { players: usize, series: usize },
    Failed(String),
}

impl Outcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Outcome::Rendered { .. })
    }
}

pub struct Viewer<L> {
    loader: L,
    opts: RenderOptions,
}

impl<L: PlayerLoader> Viewer<L> {
    pub fn new(loader: L, opts: RenderOptions) -> Self {
        Self { loader, opts }
    }

    /// Fetch the dataset and configure the chart without rendering it.
    pub async fn prepare(&self) -> Result<Chart, LoadError> {
        self.load_chart().await.map(|(_, chart)| chart)
    }

    async fn load_chart(&self) -> Result<(usize, Chart), LoadError> {
        let dataset = self.loader.load().await?;
        let series = build_series(&dataset);
        info!(players = dataset.len(), series = series.len(), "player data loaded");
        Ok((dataset.len(), configure_chart(&series)))
    }

    pub async fn run(&self, container: &mut dyn Container) -> Outcome {
        let (players, chart) = match self.load_chart().await {
            Ok(loaded) => loaded,
            Err(e) => {
                error!(error = %e, "loading player data failed");
                return Outcome::Failed(e.to_string());
            }
        };
        let series = chart.series.len();
        let opts = self.opts;
        // Skia rasterizes on the blocking pool; only the mount runs on this task.
        let encoded = tokio::task::spawn_blocking(move || encode_chart(&chart, &opts))
            .await
            .map_err(anyhow::Error::from)
            .and_then(|rendered| rendered);
        match encoded.and_then(|rendered| mount_chart(container, rendered)) {
            Ok(()) => Outcome::Rendered { players, series },
            Err(e) => {
                let msg = format!("{e:#}");
                error!(error = %msg, "rendering chart failed");
                Outcome::Failed(msg)
            }
        }
    }
}
