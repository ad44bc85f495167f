//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! The library only emits events. Binaries and demos call [`init_tracing`]
//! once at startup.
//!
//! - `LOG_LEVEL` controls the filter (e.g. `"debug"` or
//!   `"info,math_drill_gen::session=debug"`).
//! - `LOG_FORMAT` selects `"pretty"` (default) or `"json"` structured logs.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,math_drill_gen=info";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true);

    // try_init: a second call (tests, embedding apps) must not panic.
    let _ = match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().try_init(),
        _ => builder.try_init(),
    };
}
