#![deny(missing_docs)]
//! Shared logging utilities for the jobby workspace.
//!
//! This crate provides the `jobby_*` logging macros used across the codebase,
//! a helper for keeping bearer tokens out of log lines, and a minimal test
//! initializer for the global logger.

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! jobby_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! jobby_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! jobby_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! jobby_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! jobby_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Shortens a secret to a loggable form: the first four characters followed
/// by the total length. Short secrets are fully masked.
pub fn redact(secret: &str) -> String {
    let len = secret.chars().count();
    if len <= 8 {
        return format!("***({len})");
    }
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***({len})")
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
