// File: crates/idle-viewer/src/config.rs
// Summary: Command-line configuration for the viewer binaries.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use idle_chart::{theme, RenderOptions};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Options shared by every host that loads and draws the chart.
#[derive(Clone, Debug, ClapArgs)]
pub struct ChartArgs {
    /// Root of the server that serves /api/players.
    #[arg(long, env = "IDLE_VIEWER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value_t = idle_chart::types::WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = idle_chart::types::HEIGHT)]
    pub height: i32,

    /// Theme preset name (dark, light).
    #[arg(long, default_value = "dark")]
    pub theme: String,
}

impl ChartArgs {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width.max(1),
            height: self.height.max(1),
            theme: theme::find(&self.theme),
            ..RenderOptions::default()
        }
    }
}

/// Render the idle chart once into a file container.
#[derive(Clone, Debug, Parser)]
#[command(name = "idle-viewer", version, about)]
pub struct Args {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Directory holding the container; created when missing.
    #[arg(long, default_value = "target/out")]
    pub out_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["idle-viewer"]).expect("defaults parse");
        if std::env::var_os("IDLE_VIEWER_BASE_URL").is_none() {
            assert_eq!(args.chart.base_url, DEFAULT_BASE_URL);
        }
        assert_eq!(args.out_dir, PathBuf::from("target/out"));
        let opts = args.chart.render_options();
        assert_eq!((opts.width, opts.height), (1024, 640));
        assert_eq!(opts.theme.name, "dark");
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "idle-viewer",
            "--base-url",
            "http://10.0.0.2:8080",
            "--width",
            "800",
            "--height",
            "0",
            "--theme",
            "light",
            "--out-dir",
            "/tmp/charts",
        ])
        .expect("flags parse");
        assert_eq!(args.chart.base_url, "http://10.0.0.2:8080");
        let opts = args.chart.render_options();
        assert_eq!((opts.width, opts.height), (800, 1));
        assert_eq!(opts.theme.name, "light");
        assert_eq!(args.out_dir, PathBuf::from("/tmp/charts"));
    }
}
