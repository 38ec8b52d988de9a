// File: crates/idle-chart/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PNG bytes/file, RGBA buffer) using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use crate::axis::{Axis, AxisBinding, TickFormat};
use crate::geometry::RectI32;
use crate::grid::{format_tick, ticks_for};
use crate::legend::{layout_legend, LegendSlot, SWATCH};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;

const TITLE_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 11.0;
const X_TICKS: usize = 8;
const Y_TICKS: usize = 6;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw text (title, axis titles, tick labels, legend). Off for pixel-exact tests.
    pub draw_labels: bool,
    /// Fraction of every series to draw, 0..=1; the window host ramps it for the intro animation.
    pub progress: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            progress: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    /// Bottom (time) axis.
    pub x_axis: Axis,
    /// Left value axis.
    pub y_axis: Axis,
    /// Right value axis; drawn only when a series binds to it.
    pub y2_axis: Axis,
    pub show_legend: bool,
    /// Hosts that can animate draw series progressively on first show.
    pub animation_enabled: bool,
    /// Hosts that can take input let the user zoom and pan the time axis.
    pub zoom_enabled: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            y2_axis: Axis::new("", 0.0, 1.0),
            show_legend: true,
            animation_enabled: false,
            zoom_enabled: false,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn has_secondary(&self) -> bool {
        self.series.iter().any(|s| s.axis == AxisBinding::Secondary)
    }

    /// Fit all three axes to the data, padding value ranges by `margin` of their span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::fit(self, margin).apply_to_chart(self);
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Render the chart and encode it as PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render into an RGBA8 buffer. Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width as u32, opts.height as u32);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {}x{} surface failed", w, h);
        }
        Ok((pixels, w, h, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= 0 || opts.height <= 0 {
            anyhow::bail!("invalid surface size {}x{}", opts.width, opts.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        debug!(series = self.series.len(), width = opts.width, height = opts.height, "rendering chart");
        self.paint(surface.canvas(), opts);
        Ok(surface)
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        if plot.is_empty() {
            return;
        }
        let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
        let xs = LinearScale::new(self.x_axis.min, self.x_axis.max, l, r);
        let ys = LinearScale::new(self.y_axis.min, self.y_axis.max, b, t);
        let y2s = LinearScale::new(self.y2_axis.min, self.y2_axis.max, b, t);

        let x_ticks = ticks_for(self.x_axis.format, self.x_axis.min, self.x_axis.max, X_TICKS);
        let y_ticks = ticks_for(self.y_axis.format, self.y_axis.min, self.y_axis.max, Y_TICKS);
        let secondary = self.has_secondary();

        draw_grid(canvas, theme, plot, &xs, &ys, &x_ticks, &y_ticks);
        draw_axis_lines(canvas, theme, plot, secondary);

        canvas.save();
        canvas.clip_rect(skia::Rect::from_ltrb(l, t, r, b), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            let sy = match s.axis {
                AxisBinding::Primary => &ys,
                AxisBinding::Secondary => &y2s,
            };
            draw_line_series(canvas, &xs, sy, s.visible_prefix(opts.progress), theme.series_color(i));
        }
        canvas.restore();

        if !opts.draw_labels {
            return;
        }
        let shaper = TextShaper::new();
        if !self.title.is_empty() {
            shaper.draw(canvas, &self.title, (opts.width as f32 * 0.5, 30.0), Anchor::Middle, TITLE_SIZE, theme.title, false);
        }
        self.draw_tick_labels(canvas, &shaper, theme, plot, (&xs, &ys, &y2s), &x_ticks, &y_ticks, secondary);
        self.draw_axis_titles(canvas, &shaper, theme, plot, opts, secondary);
        if self.show_legend {
            self.draw_legend(canvas, &shaper, theme, plot);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tick_labels(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        theme: &Theme,
        plot: RectI32,
        (xs, ys, y2s): (&LinearScale, &LinearScale, &LinearScale),
        x_ticks: &[f64],
        y_ticks: &[f64],
        secondary: bool,
    ) {
        let x_step = tick_step(x_ticks);
        let angle = self.x_axis.label_angle_deg;
        // Slanted labels hang from the tick with their end at the anchor.
        let x_anchor = if angle < 0.0 { Anchor::End } else if angle > 0.0 { Anchor::Start } else { Anchor::Middle };
        for &v in x_ticks {
            let label = format_tick(v, self.x_axis.format, x_step);
            let at = (xs.to_px(v), plot.bottom as f32 + 16.0);
            shaper.draw_rotated(canvas, &label, at, angle, x_anchor, TICK_SIZE, theme.tick, true);
        }

        let y_step = tick_step(y_ticks);
        for &v in y_ticks {
            let label = format_tick(v, self.y_axis.format, y_step);
            let at = (plot.left as f32 - 6.0, ys.to_px(v) + TICK_SIZE * 0.35);
            shaper.draw(canvas, &label, at, Anchor::End, TICK_SIZE, theme.tick, true);
        }

        if secondary {
            let y2_ticks = ticks_for(self.y2_axis.format, self.y2_axis.min, self.y2_axis.max, Y_TICKS);
            let y2_step = tick_step(&y2_ticks);
            for &v in &y2_ticks {
                let label = format_tick(v, self.y2_axis.format, y2_step);
                let at = (plot.right as f32 + 6.0, y2s.to_px(v) + TICK_SIZE * 0.35);
                shaper.draw(canvas, &label, at, Anchor::Start, TICK_SIZE, theme.tick, true);
            }
        }
    }

    fn draw_axis_titles(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        theme: &Theme,
        plot: RectI32,
        opts: &RenderOptions,
        secondary: bool,
    ) {
        let mid_y = (plot.top + plot.bottom) as f32 * 0.5;
        let mid_x = (plot.left + plot.right) as f32 * 0.5;
        shaper.draw(canvas, &self.x_axis.label, (mid_x, plot.bottom as f32 + 96.0), Anchor::Middle, LABEL_SIZE, theme.axis_label, false);
        shaper.draw_rotated(canvas, &self.y_axis.label, (20.0, mid_y), -90.0, Anchor::Middle, LABEL_SIZE, theme.axis_label, false);
        if secondary {
            let x = opts.width as f32 - 20.0;
            shaper.draw_rotated(canvas, &self.y2_axis.label, (x, mid_y), 90.0, Anchor::Middle, LABEL_SIZE, theme.axis_label, false);
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, shaper: &TextShaper, theme: &Theme, plot: RectI32) {
        let entries: Vec<(usize, &str)> = self
            .series
            .iter()
            .enumerate()
            .filter(|(_, s)| s.show_in_legend)
            .map(|(i, s)| (i, s.name.as_str()))
            .collect();
        if entries.is_empty() {
            return;
        }
        let top = plot.bottom as f32 + 110.0;
        let slots = layout_legend(
            &entries,
            |label| shaper.measure_width(label, TICK_SIZE, false),
            plot.left as f32,
            plot.right as f32,
            top,
        );
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        for LegendSlot { series_index, x, y, text_x } in slots {
            fill.set_color(theme.series_color(series_index));
            canvas.draw_rect(skia::Rect::from_xywh(x, y, SWATCH, SWATCH), &fill);
            let name = &self.series[series_index].name;
            shaper.draw(canvas, name, (text_x, y + SWATCH - 1.0), Anchor::Start, TICK_SIZE, theme.axis_label, false);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => b - a,
        _ => 1.0,
    }
}

fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    plot: RectI32,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (t, b) = (plot.top as f32, plot.bottom as f32);
    let (l, r) = (plot.left as f32, plot.right as f32);
    for &v in x_ticks {
        let x = xs.to_px(v);
        canvas.draw_line((x, t), (x, b), &paint);
    }
    for &v in y_ticks {
        let y = ys.to_px(v);
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_axis_lines(canvas: &skia::Canvas, theme: &Theme, plot: RectI32, secondary: bool) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
    if secondary {
        canvas.draw_line((r, t), (r, b), &axis_paint);
    }
}

fn draw_line_series(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, data: &[(f64, f64)], color: skia::Color) {
    let mut points = data
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&(x, y)| (xs.to_px(x), ys.to_px(y)));
    let Some(first) = points.next() else { return };

    let mut path = skia::Path::new();
    path.move_to(first);
    let mut segments = 0usize;
    for p in points {
        path.line_to(p);
        segments += 1;
    }

    if segments == 0 {
        // A lone event still deserves a visible mark.
        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_style(skia::paint::Style::Fill);
        dot.set_color(color);
        canvas.draw_circle(first, 3.5, &dot);
        return;
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color);
    canvas.draw_path(&path, &stroke);
}
