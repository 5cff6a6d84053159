//! Logging Initialization
//!
//! A single stdout layer, pretty or JSON, behind an `EnvFilter`. `log`
//! macros used throughout the crate are redirected into `tracing` so the
//! request spans from `tower-http` and plain log lines share one output.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LogFormat;

/// `RUST_LOG` wins; otherwise the configured level, otherwise `info`.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Call once, before the server starts.
pub fn init(default_level: &str, format: LogFormat) {
    let filter = build_filter(default_level);

    let stdout_layer = match format {
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .pretty()
            .with_filter(filter)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .json()
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_filter(filter)
            .boxed(),
    };

    if let Err(e) = tracing_subscriber::registry().with(stdout_layer).try_init() {
        eprintln!("Failed to initialize logging: {}", e);
        return;
    }

    // Redirect standard `log` macros to `tracing`; the subscriber may have done this already
    if let Err(e) = tracing_log::LogTracer::init() {
        tracing::debug!("LogTracer not installed: {}", e);
    }

    log::debug!("Logging initialized ({:?})", format);
}
