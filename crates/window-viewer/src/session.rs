// File: crates/window-viewer/src/session.rs
// Summary: Interactive state for one loaded chart: intro animation, x-only zoom/pan and reset.

use std::time::Duration;

use idle_chart::types::Insets;
use idle_chart::{Chart, RenderOptions, ViewState};

pub const ANIMATION: Duration = Duration::from_millis(600);

/// Fraction of each series to draw `elapsed` after the window first showed.
pub fn animation_progress(elapsed: Duration, enabled: bool) -> f32 {
    if !enabled {
        return 1.0;
    }
    (elapsed.as_secs_f32() / ANIMATION.as_secs_f32()).clamp(0.0, 1.0)
}

/// Scroll amount from a wheel event, positive zooms in.
pub fn wheel_scroll(delta: winit::event::MouseScrollDelta) -> f64 {
    match delta {
        winit::event::MouseScrollDelta::LineDelta(_, y) => y as f64 * 0.1,
        winit::event::MouseScrollDelta::PixelDelta(p) => p.y / 240.0,
    }
}

pub struct Session {
    chart: Chart,
    home: ViewState,
    view: ViewState,
    insets: Insets,
}

impl Session {
    pub fn new(chart: Chart, insets: Insets) -> Self {
        let home = ViewState::from_chart(&chart);
        Self { chart, home, view: home, insets }
    }

    pub fn zoom_enabled(&self) -> bool { self.chart.zoom_enabled }

    pub fn animation_enabled(&self) -> bool { self.chart.animation_enabled }

    pub fn view(&self) -> &ViewState { &self.view }

    pub fn zoom(&mut self, scroll: f64, cursor_x: f64, width: i32) {
        if !self.chart.zoom_enabled {
            return;
        }
        self.view.zoom_at_pixel(scroll, cursor_x, width, &self.insets);
        self.view.autoscale_y_visible(&self.chart);
    }

    pub fn pan(&mut self, dx: f64, width: i32) {
        if !self.chart.zoom_enabled {
            return;
        }
        self.view.pan_by_pixels(dx, width, &self.insets);
        self.view.autoscale_y_visible(&self.chart);
    }

    pub fn reset(&mut self) {
        self.view = self.home;
    }

    /// Chart with the current view applied, ready to draw.
    pub fn frame(&mut self) -> &Chart {
        self.view.apply_to_chart(&mut self.chart);
        &self.chart
    }

    pub fn options(&self, base: &RenderOptions, width: u32, height: u32, progress: f32) -> RenderOptions {
        RenderOptions { width: width.max(1) as i32, height: height.max(1) as i32, insets: self.insets, progress, ..*base }
    }
}
