//! Tracing subscriber setup for binaries and tests that embed Pluginkey.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::LogConfig;

/// Environment variable that overrides the configured level.
pub const LOG_ENV: &str = "RUST_LOG";

/// Directive used when the configured one does not parse.
pub const FALLBACK_LEVEL: &str = "warn";

/// The filter directive in effect: `RUST_LOG` if set and non-empty,
/// otherwise the configured level.
pub fn directive(config: &LogConfig) -> String {
    match std::env::var(LOG_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => config.level.clone(),
    }
}

/// Parse a filter directive strictly.
pub fn parse_filter(directive: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(directive)
}

/// Install a global `fmt` subscriber.
///
/// An unparsable directive falls back to [`FALLBACK_LEVEL`] and is reported
/// as a warning once the subscriber is up. Returns `false` when a global
/// subscriber was already set.
pub fn init(config: &LogConfig) -> bool {
    let directive = directive(config);
    let (filter, invalid) = match parse_filter(&directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_LEVEL), Some(e)),
    };

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_target(config.with_target))
        .with(filter)
        .try_init()
        .is_ok();

    if let Some(error) = invalid {
        tracing::warn!(
            directive = %directive,
            error = %error,
            "Invalid log filter, using {}",
            FALLBACK_LEVEL
        );
    }

    installed
}
