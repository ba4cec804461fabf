//! Logging and tracing infrastructure for stscan.
//!
//! The library only emits `tracing` events; binaries, tests and benches call
//! one of the initializers below to see them.

use std::sync::Once;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber.
///
/// This should be called once at program startup.
/// Subsequent calls are ignored.
pub fn init_tracing() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let fmt_layer = fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        // try_init: another subscriber may already be installed by the host
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();

        info!("stscan tracing initialized");
    });
}

/// Initialize tracing with JSON output for structured logging.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let fmt_layer = fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_current_span(true);

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();

        info!("stscan tracing initialized (JSON mode)");
    });
}

/// Macro for creating spans around a detection call
#[macro_export]
macro_rules! span_trace {
    ($name:expr) => {
        tracing::debug_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::debug_span!($name, $($field)*)
    };
}
