//! Tracing subscriber setup

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Filter applied when `RUST_LOG` is unset or unparsable
pub const DEFAULT_DIRECTIVE: &str = "budget_planner=warn";

/// Install the global tracing subscriber, writing to stderr
///
/// Honours `RUST_LOG`; safe to call more than once.
pub fn init() {
    TRACING_INIT.call_once(|| {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

        fmt()
            .with_env_filter(build_filter(rust_log.as_deref()))
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

fn build_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|spec| !spec.trim().is_empty())
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
