// File: crates/idle-server/src/config.rs
// Summary: Command-line configuration for the HTTP service.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Serve idle-RPG level data and its chart.
#[derive(Clone, Debug, Parser)]
#[command(name = "idle-server", version, about)]
pub struct Args {
    /// IRC log to parse on every request.
    #[arg(long, env = "IDLE_DATA_FILE", default_value = "data/idle.txt")]
    pub data_file: PathBuf,

    #[arg(long, env = "IDLE_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Theme preset for /chart.png.
    #[arg(long, default_value = "dark")]
    pub theme: String,
}
