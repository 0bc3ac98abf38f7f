/// Galaxy3D spatial engine facade
///
/// Holds the process-wide logging state used by the spatial index:
/// the active Logger and the minimum severity that reaches it.
/// Thread-safe static storage with RwLock, as in the rest of the engine.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Global minimum severity (entries below it are dropped)
static LOG_LEVEL: OnceLock<RwLock<LogSeverity>> = OnceLock::new();

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

fn level_lock() -> &'static RwLock<LogSeverity> {
    LOG_LEVEL.get_or_init(|| RwLock::new(LogSeverity::Trace))
}

/// Engine facade for logging configuration
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_spatial::galaxy3d::Engine;
/// use galaxy_3d_spatial::galaxy3d::log::LogSeverity;
///
/// Engine::set_log_level(LogSeverity::Info);
/// Engine::log(LogSeverity::Info, "app", "scene loaded".to_string());
/// ```
pub struct Engine;

impl Engine {
    /// Replace the global logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset the global logger to DefaultLogger
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Set the minimum severity forwarded to the logger
    pub fn set_log_level(level: LogSeverity) {
        if let Ok(mut lock) = level_lock().write() {
            *lock = level;
        }
    }

    /// Current minimum severity
    pub fn log_level() -> LogSeverity {
        level_lock().read().map(|level| *level).unwrap_or(LogSeverity::Trace)
    }

    /// Whether an entry of this severity would reach the logger
    pub fn is_enabled(severity: LogSeverity) -> bool {
        severity >= Self::log_level()
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by spatial_trace!, spatial_debug!, spatial_info!, spatial_warn!.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None, None);
    }

    /// Internal logging method with file:line information
    ///
    /// Used by spatial_error!.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some(file), Some(line));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        if !Self::is_enabled(severity) {
            return;
        }
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file,
                line,
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
