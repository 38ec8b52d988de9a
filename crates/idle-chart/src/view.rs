// File: crates/idle-chart/src/view.rs
// Visible ranges for the time axis and both value axes, with x-only zoom/pan and visible-window autoscale.

use crate::axis::{Axis, AxisBinding, TickFormat};
use crate::scale::LinearScale;
use crate::types::Insets;
use crate::Chart;

/// Default headroom added above and below the value ranges, as a fraction of the span.
pub const Y_MARGIN: f64 = 0.02;
/// Narrowest time window zoom allows, in seconds.
pub const MIN_X_SPAN: f64 = 60.0;
/// A time axis holding a single instant shows an hour either side of it.
const SINGLE_INSTANT_HALF_SPAN: f64 = 3600.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub y2_min: f64,
    pub y2_max: f64,
}

impl ViewState {
    pub fn from_chart(chart: &Chart) -> Self {
        Self::fit(chart, Y_MARGIN)
    }

    /// Fit every series, padding value ranges by `margin` of their span, then apply axis clamps.
    pub fn fit(chart: &Chart, margin: f64) -> Self {
        let (x_min, x_max) = x_extent(chart).unwrap_or((0.0, 1.0));
        let half = match chart.x_axis.format {
            TickFormat::DateTime => SINGLE_INSTANT_HALF_SPAN,
            TickFormat::Number => 0.5,
        };
        let (x_min, x_max) = widen(x_min, x_max, half);
        let (y_min, y_max) = value_range(chart, AxisBinding::Primary, None)
            .map(|(lo, hi)| pad(lo, hi, margin))
            .unwrap_or((0.0, 1.0));
        let (y2_min, y2_max) = value_range(chart, AxisBinding::Secondary, None)
            .map(|(lo, hi)| pad(lo, hi, margin))
            .unwrap_or((0.0, 1.0));
        let (y_min, y_max) = chart.y_axis.clamp_range(y_min, y_max);
        let (y2_min, y2_max) = chart.y2_axis.clamp_range(y2_min, y2_max);
        Self { x_min, x_max, y_min, y_max, y2_min, y2_max }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        set_range(&mut chart.x_axis, self.x_min, self.x_max);
        set_range(&mut chart.y_axis, self.y_min, self.y_max);
        set_range(&mut chart.y2_axis, self.y2_min, self.y2_max);
    }

    fn x_scale(&self, width: i32, insets: &Insets) -> LinearScale {
        let l = insets.left as f32;
        let r = (width - insets.right as i32) as f32;
        LinearScale::new(self.x_min, self.x_max, l, r.max(l + 1.0))
    }

    /// Shift the time window by a horizontal drag of `dx` pixels.
    pub fn pan_by_pixels(&mut self, dx: f64, width: i32, insets: &Insets) {
        let scale = self.x_scale(width, insets);
        let plot_w = (scale.px1 - scale.px0) as f64;
        let wx = -dx / plot_w * scale.span();
        self.x_min += wx;
        self.x_max += wx;
    }

    /// Zoom the time window keeping the instant under `cursor_x` fixed.
    /// Positive `scroll` zooms in.
    pub fn zoom_at_pixel(&mut self, scroll: f64, cursor_x: f64, width: i32, insets: &Insets) {
        let scale = self.x_scale(width, insets);
        let cx = (cursor_x as f32).clamp(scale.px0, scale.px1);
        let wx = scale.from_px(cx);
        let span = scale.span();
        let factor = (1.0 - scroll).clamp(0.1, 10.0);
        let new_span = (span * factor).max(MIN_X_SPAN);
        let rx = (wx - self.x_min) / span;
        self.x_min = wx - rx * new_span;
        self.x_max = self.x_min + new_span;
    }

    /// Re-fit both value ranges to the points inside the current time window.
    /// Returns false when no point is visible (ranges are left untouched).
    pub fn autoscale_y_visible(&mut self, chart: &Chart) -> bool {
        let window = Some((self.x_min, self.x_max));
        let primary = value_range(chart, AxisBinding::Primary, window);
        let secondary = value_range(chart, AxisBinding::Secondary, window);
        if primary.is_none() && secondary.is_none() {
            return false;
        }
        if let Some((lo, hi)) = primary {
            let (lo, hi) = pad(lo, hi, Y_MARGIN);
            (self.y_min, self.y_max) = chart.y_axis.clamp_range(lo, hi);
        }
        if let Some((lo, hi)) = secondary {
            let (lo, hi) = pad(lo, hi, Y_MARGIN);
            (self.y2_min, self.y2_max) = chart.y2_axis.clamp_range(lo, hi);
        }
        true
    }
}

fn set_range(axis: &mut Axis, min: f64, max: f64) {
    axis.min = min;
    axis.max = max;
}

/// Spread a zero-width range by `half` on each side.
fn widen(lo: f64, hi: f64, half: f64) -> (f64, f64) {
    if (hi - lo).abs() < 1e-9 { (lo - half, lo + half) } else { (lo, hi) }
}

fn pad(lo: f64, hi: f64, margin: f64) -> (f64, f64) {
    let (lo, hi) = widen(lo, hi, 0.5);
    let m = (hi - lo) * margin;
    (lo - m, hi + m)
}

fn x_extent(chart: &Chart) -> Option<(f64, f64)> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    for s in &chart.series {
        for &(x, _) in &s.data_xy {
            if x.is_finite() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
            }
        }
    }
    (x_min.is_finite() && x_max.is_finite()).then_some((x_min, x_max))
}

/// Min/max y of series bound to `binding`, optionally only for points with x inside `window`.
pub fn value_range(chart: &Chart, binding: AxisBinding, window: Option<(f64, f64)>) -> Option<(f64, f64)> {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for s in chart.series.iter().filter(|s| s.axis == binding) {
        for &(x, y) in &s.data_xy {
            let inside = window.map_or(true, |(lo, hi)| x >= lo && x <= hi);
            if inside && y.is_finite() {
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
    }
    (y_min.is_finite() && y_max.is_finite()).then_some((y_min, y_max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis, Series};

    fn chart() -> Chart {
        let mut c = Chart::new();
        c.y2_axis = Axis::new("days", 0.0, 1.0).with_min_clamp(0.0);
        c.add_series(Series::with_data("level", vec![(0.0, 10.0), (100.0, 20.0), (200.0, 30.0)]));
        c.add_series(
            Series::with_data("remaining", vec![(0.0, 0.1), (100.0, 3.0), (200.0, 1.0)])
                .on_axis(AxisBinding::Secondary),
        );
        c
    }

    #[test]
    fn fit_separates_axes_and_clamps_secondary() {
        let v = ViewState::fit(&chart(), 0.1);
        assert_eq!((v.x_min, v.x_max), (0.0, 200.0));
        assert!((v.y_min - 8.0).abs() < 1e-9 && (v.y_max - 32.0).abs() < 1e-9);
        // 0.1 - 0.29 would go negative; clamp holds it at zero
        assert_eq!(v.y2_min, 0.0);
        assert!(v.y2_max > 3.0);
    }

    #[test]
    fn empty_chart_gets_unit_ranges() {
        let v = ViewState::from_chart(&Chart::new());
        assert_eq!((v.x_min, v.x_max, v.y_min, v.y_max), (0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn zoom_keeps_cursor_instant_fixed() {
        let insets = Insets::NONE;
        let mut v = ViewState::fit(&chart(), 0.0);
        v.x_max = 10_000.0;
        // cursor at the middle of a 1000px plot -> x = 5000
        v.zoom_at_pixel(0.5, 500.0, 1000, &insets);
        assert!((v.x_max - v.x_min - 5000.0).abs() < 1e-6);
        assert!(((v.x_min + v.x_max) * 0.5 - 5000.0).abs() < 1e-6);
    }

    #[test]
    fn pan_moves_window_against_drag() {
        let insets = Insets::NONE;
        let mut v = ViewState::fit(&chart(), 0.0);
        v.pan_by_pixels(100.0, 1000, &insets);
        assert!((v.x_min + 20.0).abs() < 1e-9);
        assert!((v.x_max - 180.0).abs() < 1e-9);
    }

    #[test]
    fn visible_autoscale_uses_window_only() {
        let c = chart();
        let mut v = ViewState::fit(&c, 0.0);
        v.x_min = 150.0;
        v.x_max = 250.0;
        assert!(v.autoscale_y_visible(&c));
        assert!(v.y_min > 29.0 && v.y_max < 31.0);

        v.x_min = 1000.0;
        v.x_max = 2000.0;
        assert!(!v.autoscale_y_visible(&c));
    }
}
