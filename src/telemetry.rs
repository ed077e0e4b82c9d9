//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! LOG_LEVEL controls the filter, either a bare level or full directives such as
//! "info,hints=debug,game=debug,numguess_backend=debug,tower_http=info".
//! LOG_FORMAT selects "pretty" (default) or "json" output.
//!
//! Targets used across the crate: `numguess_backend` for startup and transport,
//! `hints` for generation/caching/evaluation, `game` for session play.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,hints=debug,game=debug,numguess_backend=debug,tower_http=info,axum=info";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
