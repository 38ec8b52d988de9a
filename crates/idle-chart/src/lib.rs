// File: crates/idle-chart/src/lib.rs
// Summary: Chart engine entry point; exports the API for building and rendering dual-axis time charts.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod legend;

pub use chart::{Chart, RenderOptions};
pub use series::Series;
pub use axis::{Axis, AxisBinding, TickFormat};
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
