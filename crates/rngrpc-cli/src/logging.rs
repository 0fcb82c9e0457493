//! Logging setup for the plugin binary
//!
//! Stdout carries the plugin protocol, so every log line goes to stderr. The
//! level filter sits behind a reload layer: the `log_level` option is only
//! known once the request has been decoded.

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use rngrpc_core::LogLevel;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::reload;

/// Environment variable holding the initial log level
pub const LOG_ENV: &str = "RNGRPC_LOG";

/// Handle for dynamically reloading the log level filter
pub struct ReloadHandle {
    handle: Mutex<Option<reload::Handle<LevelFilter, tracing_subscriber::Registry>>>,
}

impl ReloadHandle {
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    /// Get the global reload handle
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Set the reload handle (called during initialization)
    pub fn set_handle(&self, handle: reload::Handle<LevelFilter, tracing_subscriber::Registry>) {
        *self.handle.lock() = Some(handle);
    }

    /// Reload the filter to use a new log level
    pub fn reload_level(&self, level: LogLevel) -> Result<(), String> {
        let guard = self.handle.lock();
        match guard.as_ref() {
            Some(handle) => handle
                .reload(level_filter(level))
                .map_err(|e| format!("Failed to reload filter: {e}")),
            None => Err("Reload handle not initialized".to_string()),
        }
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert LogLevel to tracing LevelFilter
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

/// Level requested through [`LOG_ENV`]
///
/// Unset or unparsable values give `None`.
pub fn env_level(env_value: Option<&str>) -> Option<LogLevel> {
    env_value.and_then(|value| value.parse().ok())
}

/// Level to start with, before any options are read
pub fn initial_level(env: Option<LogLevel>) -> LogLevel {
    env.unwrap_or(LogLevel::Warn)
}

/// Level to switch to once the generator options are known
///
/// [`LOG_ENV`] overrides the `log_level` option when it is set.
pub fn effective_level(env: Option<LogLevel>, configured: LogLevel) -> LogLevel {
    env.unwrap_or(configured)
}

/// Install the stderr subscriber
///
/// Does nothing if a global subscriber is already set.
pub fn init_logging(level: LogLevel) {
    use tracing_subscriber::prelude::*;

    let (filter, handle) = reload::Layer::new(level_filter(level));
    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        ReloadHandle::global().set_handle(handle);
    }
}

/// Change the level of the installed subscriber
pub fn set_level(level: LogLevel) {
    if let Err(e) = ReloadHandle::global().reload_level(level) {
        tracing::debug!("{e}");
    }
}

#[cfg(test)]
#[path = "logging/logging_tests.rs"]
mod logging_tests;
