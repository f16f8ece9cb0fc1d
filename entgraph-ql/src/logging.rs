//! Logging for entgraph.
//!
//! Predicate construction is pure, so the engine logs very little. Binding
//! a typed predicate emits a `trace` event. Building an edge traversal
//! (`trace`) and rejecting an empty n-ary construction (`debug`) are only
//! logged when debugging is enabled.
//!
//! # Environment Variables
//!
//! - `ENTGRAPH_DEBUG=true|1|yes` - Enable debug logging
//! - `ENTGRAPH_LOG_LEVEL=trace|debug|info|warn|error` - Set a specific level
//! - `ENTGRAPH_LOG_FORMAT=json|pretty|compact` - Output format (default: json)
//!
//! # Usage
//!
//! ```rust,no_run
//! use entgraph_ql::logging;
//!
//! // Call once at startup.
//! logging::init();
//!
//! // Or pick a level explicitly.
//! logging::init_with_level("trace");
//! ```
//!
//! Installing a subscriber requires the `tracing-subscriber` feature.
//! Without it, events go to whatever subscriber the application sets up.

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

const DEBUG_VAR: &str = "ENTGRAPH_DEBUG";
const LEVEL_VAR: &str = "ENTGRAPH_LOG_LEVEL";
const FORMAT_VAR: &str = "ENTGRAPH_LOG_FORMAT";

/// Check if debug logging is enabled via `ENTGRAPH_DEBUG`.
///
/// Returns `true` if it is set to "true", "1", or "yes" (case-insensitive).
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var(DEBUG_VAR)
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// The configured log level from `ENTGRAPH_LOG_LEVEL`.
///
/// Defaults to "debug" if `ENTGRAPH_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    let fallback = if is_debug_enabled() { "debug" } else { "warn" };
    match env::var(LEVEL_VAR) {
        Ok(level) => match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => fallback,
        },
        Err(_) => fallback,
    }
}

/// The configured log format from `ENTGRAPH_LOG_FORMAT`. Defaults to "json".
pub fn get_log_format() -> &'static str {
    env::var(FORMAT_VAR)
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize the entgraph logging system.
///
/// Subsequent calls are no-ops. Does nothing unless `ENTGRAPH_DEBUG` or
/// `ENTGRAPH_LOG_LEVEL` is set.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var(LEVEL_VAR).is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!("entgraph={},entgraph_ql={}", level, level))
                .unwrap_or_else(|_| EnvFilter::new("warn"));

            // `try_init` leaves an application-installed subscriber in place.
            let installed = match get_log_format() {
                "json" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().json())
                    .try_init(),
                "compact" => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().compact())
                    .try_init(),
                _ => tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().pretty())
                    .try_init(),
            };

            if installed.is_ok() {
                tracing::info!(level = level, format = get_log_format(), "entgraph logging initialized");
            }
        }
    });
}

/// Initialize logging with a specific level.
///
/// # Safety
///
/// This function modifies environment variables, which is unsafe in
/// multi-threaded programs. Call it early, before spawning threads.
pub fn init_with_level(level: &str) {
    // SAFETY: documented as a startup-only call.
    unsafe {
        env::set_var(LEVEL_VAR, level);
    }
    init();
}

/// Initialize debug logging. Equivalent to `ENTGRAPH_DEBUG=true` followed
/// by [`init`].
///
/// # Safety
///
/// Same caveat as [`init_with_level`].
pub fn init_debug() {
    // SAFETY: documented as a startup-only call.
    unsafe {
        env::set_var(DEBUG_VAR, "true");
    }
    init();
}

/// Debug logging, only when `ENTGRAPH_DEBUG` is enabled at runtime.
#[macro_export]
macro_rules! ql_debug {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            $crate::__tracing::debug!($($arg)*);
        }
    };
}

/// Trace logging, only when `ENTGRAPH_DEBUG` is enabled at runtime.
#[macro_export]
macro_rules! ql_trace {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            $crate::__tracing::trace!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_disabled_by_default() {
        // SAFETY: no other test in this crate sets these variables.
        unsafe {
            env::remove_var(DEBUG_VAR);
        }
        assert!(!is_debug_enabled());
    }

    #[test]
    fn test_log_level_default() {
        // SAFETY: no other test in this crate sets these variables.
        unsafe {
            env::remove_var(DEBUG_VAR);
            env::remove_var(LEVEL_VAR);
        }
        assert_eq!(get_log_level(), "warn");
    }

    #[test]
    fn test_log_format_default() {
        // SAFETY: no other test in this crate sets these variables.
        unsafe {
            env::remove_var(FORMAT_VAR);
        }
        assert_eq!(get_log_format(), "json");
    }

    #[test]
    fn test_macros_are_silent_when_disabled() {
        ql_debug!(field = "name", "not emitted");
        ql_trace!("not emitted");
    }
}
