use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use idle_chart::{Axis, AxisBinding, Chart, RenderOptions, Series};

/// `players` pairs of level / remaining-time series, `n` hourly points each.
fn build_chart(players: usize, n: usize) -> Chart {
    let t0 = 1_700_000_000.0;
    let mut ch = Chart::new();
    ch.y2_axis = Axis::new("Remaining time (days)", 0.0, 1.0).with_min_clamp(0.0);
    for p in 0..players {
        let level = (0..n).map(|i| (t0 + i as f64 * 3600.0, (p * 10 + i / 24) as f64)).collect();
        let remaining = (0..n)
            .map(|i| (t0 + i as f64 * 3600.0, ((n - i) % 24) as f64 / 24.0 + p as f64))
            .collect();
        ch.add_series(Series::with_data(format!("level p{p}"), level));
        ch.add_series(Series::with_data(format!("remaining time p{p}"), remaining).on_axis(AxisBinding::Secondary));
    }
    ch.autoscale_axes(0.02);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("players4_points{n}"), |b| {
            let ch = build_chart(4, n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
