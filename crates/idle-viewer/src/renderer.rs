// File: crates/idle-viewer/src/renderer.rs
// Summary: Chart renderer: maps player series onto a dual-axis time chart and mounts it into a container.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use idle_chart::view::Y_MARGIN;
use idle_chart::{Axis, AxisBinding, Chart, RenderOptions, Series, TickFormat};
use idle_data::{ChartSeries, SeriesKind};
use tracing::info;

use crate::container::{Container, RenderedChart};

pub const TITLE: &str = "Idle Data Viewer";
pub const X_LABEL: &str = "Date time";
pub const Y_LABEL: &str = "Level";
pub const Y2_LABEL: &str = "Remaining time (days)";
pub const X_LABEL_ANGLE: f32 = -50.0;

/// Level on the left axis, remaining time on the right.
pub fn axis_for(kind: SeriesKind) -> AxisBinding {
    match kind {
        SeriesKind::Level => AxisBinding::Primary,
        SeriesKind::RemainingTime => AxisBinding::Secondary,
    }
}

fn epoch_seconds(dt: DateTime<Utc>) -> f64 {
    dt.timestamp_millis() as f64 / 1000.0
}

/// Build the chart for `series`, in order, with axes fitted to the data.
pub fn configure_chart(series: &[ChartSeries]) -> Chart {
    let mut chart = Chart::new();
    chart.title = TITLE.to_owned();
    chart.x_axis = Axis::new(X_LABEL, 0.0, 1.0)
        .with_format(TickFormat::DateTime)
        .with_label_angle(X_LABEL_ANGLE);
    chart.y_axis = Axis::new(Y_LABEL, 0.0, 1.0);
    chart.y2_axis = Axis::new(Y2_LABEL, 0.0, 1.0).with_min_clamp(0.0);
    chart.show_legend = true;
    chart.animation_enabled = true;
    chart.zoom_enabled = true;

    for s in series {
        let data = s.points.iter().map(|p| (epoch_seconds(p.x), p.y)).collect();
        chart.add_series(Series::with_data(s.legend_name(), data).on_axis(axis_for(s.kind)));
    }
    chart.autoscale_axes(Y_MARGIN);
    chart
}

/// Render `chart` to PNG bytes.
pub fn encode_chart(chart: &Chart, opts: &RenderOptions) -> Result<RenderedChart> {
    let png = chart.render_to_png_bytes(opts).context("rendering chart")?;
    Ok(RenderedChart {
        png,
        width: opts.width as u32,
        height: opts.height as u32,
        series: chart.series.len(),
    })
}

pub fn mount_chart(container: &mut dyn Container, rendered: RenderedChart) -> Result<()> {
    let id = container.id().to_owned();
    let series = rendered.series;
    container.mount(rendered).with_context(|| format!("mounting chart into #{id}"))?;
    info!(container = %id, series, "chart rendered");
    Ok(())
}

/// Render `chart` and mount it. The container is touched only once rendering has succeeded.
pub fn render_chart_into(container: &mut dyn Container, chart: &Chart, opts: &RenderOptions) -> Result<()> {
    mount_chart(container, encode_chart(chart, opts)?)
}

pub fn render_into(container: &mut dyn Container, series: &[ChartSeries], opts: &RenderOptions) -> Result<()> {
    render_chart_into(container, &configure_chart(series), opts)
}
