// File: crates/idle-chart/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape, background and series pixels.

use idle_chart::{Axis, Chart, RenderOptions, Series, TickFormat};

fn diagonal_chart() -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0).with_format(TickFormat::Number);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data("diag", vec![(0.0, 0.0), (4.0, 4.0)]));
    chart
}

#[test]
fn render_rgba8_buffer() {
    let chart = diagonal_chart();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque background
    let bg = opts.theme.background;
    assert_eq!(&px[0..4], &[bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn line_is_drawn_in_first_palette_color() {
    let chart = diagonal_chart();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, _w, _h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    // Midpoint of the diagonal: x=2, y=2 maps to the center of the plot rect.
    let (plot_w, plot_h) = opts.insets.plot_size(opts.width, opts.height);
    let cx = (opts.insets.left + plot_w / 2) as usize;
    let cy = (opts.insets.top + plot_h / 2) as usize;
    let line = opts.theme.series_color(0);
    let close = |a: u8, b: u8| (a as i32 - b as i32).abs() <= 24;
    // Anti-aliasing spreads the stroke; look for a fully covered pixel nearby.
    let hit = (cy - 2..=cy + 2).any(|y| {
        (cx - 2..=cx + 2).any(|x| {
            let i = y * stride + x * 4;
            close(px[i], line.r()) && close(px[i + 1], line.g()) && close(px[i + 2], line.b())
        })
    });
    assert!(hit, "expected a pixel near {:?} around ({cx}, {cy})", (line.r(), line.g(), line.b()));
}

#[test]
fn zero_progress_draws_no_series() {
    let chart = diagonal_chart();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (full, ..) = chart.render_to_rgba8(&opts).expect("full");
    opts.progress = 0.0;
    let (empty, ..) = chart.render_to_rgba8(&opts).expect("empty");
    let mut bare = chart.clone();
    bare.series.clear();
    opts.progress = 1.0;
    let (axes_only, ..) = bare.render_to_rgba8(&opts).expect("axes only");
    assert_eq!(empty, axes_only);
    assert_ne!(full, empty);
}
