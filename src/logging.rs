//! Diagnostic tracing for the shim and the `pawp` tool.
//!
//! Reads `RUST_LOG`, defaulting to `warn`, and writes compact records to stderr.
//! The patch and restore commands may add a plain-text log file that always
//! receives `info` and above.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub fn init() {
    init_inner(None);
}

/// Like [`init`], plus a log file at `path` (truncated).
pub fn init_with_file(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    init_inner(Some(file));
    Ok(())
}

fn init_inner(file: Option<File>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).compact().with_filter(filter);
    let file_layer = file.map(|f| {
        fmt::layer().with_writer(Mutex::new(f)).with_ansi(false).with_target(false).with_filter(LevelFilter::INFO)
    });

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(stderr_layer).with(file_layer).try_init();
}
