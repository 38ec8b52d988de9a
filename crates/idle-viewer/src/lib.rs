// File: crates/idle-viewer/src/lib.rs
// Summary: Viewer library: data loader, chart renderer, container targets and the load -> build -> render pipeline.

pub mod app;
pub mod config;
pub mod container;
pub mod loader;
pub mod logging;
pub mod renderer;

pub use app::{Outcome, Viewer};
pub use container::{Container, FileContainer, MemoryContainer, RenderedChart, CONTAINER_ID};
pub use loader::{HttpLoader, LoadError, PlayerLoader, PLAYERS_PATH};
pub use renderer::{configure_chart, render_into};
