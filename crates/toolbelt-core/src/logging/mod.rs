//! Tracing setup and activity status vocabulary.

mod activity;

pub use activity::ActivityStatus;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when the configured level cannot be parsed.
pub const DEFAULT_LEVEL: &str = "debug";

/// ## Summary
/// Builds an `EnvFilter` from a level or directive string.
///
/// Falls back to [`DEFAULT_LEVEL`] and logs a warning if the directive is invalid.
#[must_use]
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|e| {
        tracing::warn!(level = %level, error = %e, "Invalid log level, keeping {DEFAULT_LEVEL}");
        EnvFilter::new(DEFAULT_LEVEL)
    })
}

/// ## Summary
/// Installs the global tracing subscriber with a formatted output layer.
///
/// ## Errors
/// Returns an error if a global subscriber has already been installed.
pub fn init_tracing(level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
}
