//! Log verbosity from `LOG_LEVEL`
//!
//! The library only emits `tracing` events. The binary builds one
//! subscriber at start-up from the filter computed here.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting log verbosity
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Level used when `LOG_LEVEL` is unset or empty
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Filter derived from a `LOG_LEVEL` value
#[derive(Debug)]
pub struct LogFilter {
    /// The filter to install
    pub filter: EnvFilter,
    /// Set when the value could not be parsed and the default was used
    pub rejected: Option<String>,
}

/// Build a filter from the raw `LOG_LEVEL` value.
///
/// Accepts the usual level names plus `fatal` (mapped to `error`) and
/// `silent` (mapped to `off`), case-insensitive. Anything else is tried as a
/// full `EnvFilter` directive before falling back to [`DEFAULT_LOG_LEVEL`].
pub fn log_filter(raw: Option<&str>) -> LogFilter {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return LogFilter {
            filter: EnvFilter::new(DEFAULT_LOG_LEVEL),
            rejected: None,
        };
    };

    let directive = match raw.to_ascii_lowercase().as_str() {
        "fatal" => "error".to_string(),
        "silent" => "off".to_string(),
        level @ ("trace" | "debug" | "info" | "warn" | "error" | "off") => level.to_string(),
        _ => raw.to_string(),
    };

    match EnvFilter::try_new(&directive) {
        Ok(filter) => LogFilter {
            filter,
            rejected: None,
        },
        Err(_) => LogFilter {
            filter: EnvFilter::new(DEFAULT_LOG_LEVEL),
            rejected: Some(raw.to_string()),
        },
    }
}
