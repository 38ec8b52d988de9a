// File: crates/idle-chart/src/series.rs
// Summary: Named line series bound to the primary or secondary value axis.

use crate::axis::AxisBinding;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Legend label.
    pub name: String,
    pub data_xy: Vec<(f64, f64)>,
    pub axis: AxisBinding,
    pub show_in_legend: bool,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), data_xy: Vec::new(), axis: AxisBinding::Primary, show_in_legend: true }
    }

    pub fn with_data(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, ..Self::new(name) }
    }

    pub fn on_axis(mut self, axis: AxisBinding) -> Self {
        self.axis = axis;
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Points drawn at animation `progress` (0..=1); the full series once progress reaches 1.
    pub fn visible_prefix(&self, progress: f32) -> &[(f64, f64)] {
        let n = self.data_xy.len();
        let k = if progress >= 1.0 {
            n
        } else {
            ((n as f32) * progress.max(0.0)).ceil() as usize
        };
        &self.data_xy[..k.min(n)]
    }
}
