// File: crates/idle-viewer/src/logging.rs
// Summary: tracing subscriber setup shared by the viewer binaries.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a fmt subscriber honoring RUST_LOG, defaulting to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
