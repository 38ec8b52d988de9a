// File: crates/idle-chart/src/axis.rs
// Summary: Axis model with labels, ranges, tick formatting and an optional minimum clamp.

/// How tick values on an axis are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    Number,
    /// Values are epoch seconds (UTC).
    DateTime,
}

/// Which value axis a series is plotted against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AxisBinding {
    /// Left axis.
    #[default]
    Primary,
    /// Right axis.
    Secondary,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub format: TickFormat,
    /// Lower bound the visible range never goes below, whatever the data or view says.
    pub min_clamp: Option<f64>,
    /// Tick label rotation in degrees; negative turns counter-clockwise.
    pub label_angle_deg: f32,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            format: TickFormat::Number,
            min_clamp: None,
            label_angle_deg: 0.0,
        }
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_min_clamp(mut self, min: f64) -> Self {
        self.min_clamp = Some(min);
        self
    }

    pub fn with_label_angle(mut self, deg: f32) -> Self {
        self.label_angle_deg = deg;
        self
    }

    /// Apply `min_clamp` to a candidate range, keeping a non-empty span.
    pub fn clamp_range(&self, lo: f64, hi: f64) -> (f64, f64) {
        match self.min_clamp {
            Some(m) => {
                let lo = lo.max(m);
                let hi = if hi <= lo { lo + 1.0 } else { hi };
                (lo, hi)
            }
            None => (lo, hi),
        }
    }

    pub fn default_x() -> Self {
        Self::new("Time", 0.0, 10.0).with_format(TickFormat::DateTime)
    }

    pub fn default_y() -> Self {
        Self::new("Value", 0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_lifts_negative_minimum() {
        let a = Axis::new("days", 0.0, 1.0).with_min_clamp(0.0);
        assert_eq!(a.clamp_range(-0.3, 4.0), (0.0, 4.0));
    }

    #[test]
    fn clamp_keeps_span_when_range_falls_below() {
        let a = Axis::new("days", 0.0, 1.0).with_min_clamp(0.0);
        assert_eq!(a.clamp_range(-5.0, -1.0), (0.0, 1.0));
    }

    #[test]
    fn unclamped_axis_passes_through() {
        let a = Axis::default_y();
        assert_eq!(a.clamp_range(-2.0, 3.0), (-2.0, 3.0));
    }
}
