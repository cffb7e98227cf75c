// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Process-wide `tracing` subscriber setup.
//!
//! The minimum level comes from `LOG_LEVEL`; `RUST_LOG` overrides it when
//! set. `pretty` output is colorized with a local timestamp and no target,
//! `json` output emits one object per line for log shippers.

use tracing_subscriber::{
    fmt::{self, time::ChronoLocal},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

use crate::config::{LogFormat, LogLevel};

/// Timestamp layout for pretty output, e.g. `2026-01-31 14:05:09.123 +0100`.
const PRETTY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %z";

#[derive(Debug, thiserror::Error)]
#[error("failed to initialize logging: {0}")]
pub struct LoggingError(#[from] TryInitError);

/// Filter directive for a configured level.
///
/// `tracing` has no fatal level, so `fatal` keeps only errors.
pub fn level_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Fatal | LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_directive(level)))
}

/// Install the global subscriber.
///
/// Returns an error instead of panicking if a subscriber is already set.
pub fn init(level: LogLevel, format: LogFormat) -> Result<(), LoggingError> {
    let (pretty, json) = match format {
        LogFormat::Pretty => (
            Some(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(false)
                    .with_timer(ChronoLocal::new(PRETTY_TIME_FORMAT.to_string())),
            ),
            None,
        ),
        LogFormat::Json => (None, Some(fmt::layer().json().with_current_span(false))),
    };

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(pretty)
        .with(json)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_maps_to_error_filter() {
        assert_eq!(level_directive(LogLevel::Fatal), "error");
        assert_eq!(level_directive(LogLevel::Error), "error");
    }

    #[test]
    fn levels_map_to_matching_directives() {
        assert_eq!(level_directive(LogLevel::Warn), "warn");
        assert_eq!(level_directive(LogLevel::Info), "info");
        assert_eq!(level_directive(LogLevel::Debug), "debug");
        assert_eq!(level_directive(LogLevel::Trace), "trace");
    }

    #[test]
    fn second_init_returns_error() {
        // Whichever call runs first may succeed; the second one must not panic.
        let _ = init(LogLevel::Info, LogFormat::Json);
        assert!(init(LogLevel::Debug, LogFormat::Pretty).is_err());
    }
}
