//! Logging setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
///
/// Driver chatter stays at warn so `--debug` shows this tool's own events.
pub fn default_directive(debug: bool) -> &'static str {
    if debug { "debug,sqlx=warn" } else { "info,sqlx=warn" }
}

/// Initialize the logging system.
///
/// Events go to stderr so the report on stdout stays clean. `RUST_LOG`
/// overrides the level chosen by `--debug`.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
