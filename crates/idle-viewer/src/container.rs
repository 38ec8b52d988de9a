// File: crates/idle-viewer/src/container.rs
// Summary: Render targets. A container exists before the pipeline runs and receives at most one chart.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Identifier of the chart container; file targets are named after it.
pub const CONTAINER_ID: &str = "idledataviewer-container";

/// An encoded chart ready to be shown.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedChart {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub series: usize,
}

pub trait Container: Send {
    fn id(&self) -> &str;
    /// Place the chart in the container.
    fn mount(&mut self, chart: RenderedChart) -> Result<()>;
    fn is_mounted(&self) -> bool;
}

/// Writes `<dir>/idledataviewer-container.png`. The directory must already exist.
#[derive(Debug)]
pub struct FileContainer {
    dir: PathBuf,
    mounted: bool,
}

impl FileContainer {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            anyhow::bail!("container directory {} does not exist", dir.display());
        }
        Ok(Self { dir: dir.to_path_buf(), mounted: false })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{CONTAINER_ID}.png"))
    }
}

impl Container for FileContainer {
    fn id(&self) -> &str { CONTAINER_ID }

    fn mount(&mut self, chart: RenderedChart) -> Result<()> {
        let path = self.path();
        std::fs::write(&path, &chart.png).with_context(|| format!("writing {}", path.display()))?;
        self.mounted = true;
        info!(path = %path.display(), bytes = chart.png.len(), series = chart.series, "chart written");
        Ok(())
    }

    fn is_mounted(&self) -> bool { self.mounted }
}

/// Keeps the mounted chart in memory.
#[derive(Debug, Default)]
pub struct MemoryContainer {
    chart: Option<RenderedChart>,
}

impl MemoryContainer {
    pub fn new() -> Self { Self::default() }

    pub fn chart(&self) -> Option<&RenderedChart> { self.chart.as_ref() }

    pub fn into_chart(self) -> Option<RenderedChart> { self.chart }
}

impl Container for MemoryContainer {
    fn id(&self) -> &str { CONTAINER_ID }

    fn mount(&mut self, chart: RenderedChart) -> Result<()> {
        self.chart = Some(chart);
        Ok(())
    }

    fn is_mounted(&self) -> bool { self.chart.is_some() }
}
