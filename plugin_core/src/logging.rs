//! Logging functionality for plugins
//!
//! Re-exports the `liblogger` macros so plugins log through plugin_core and
//! share one logging setup. Without the `logging` feature the macros compile
//! to nothing.

#[cfg(feature = "logging")]
use std::path::Path;

#[cfg(feature = "logging")]
pub use liblogger::{log_debug, log_info, log_warn, log_error, Logger};

#[cfg(feature = "logging")]
pub use liblogger_macros::*;

/// Initialize the logger for plugin usage
///
/// Reads the `[logging]` table of `config_file` when one is given. A missing
/// file means console logging. A file that cannot be parsed also falls back to
/// console logging; the logger is usable either way, and the returned error
/// says why the file was not used.
///
/// # Arguments
///
/// * `plugin_name` - Name of the plugin (tags every log line)
/// * `config_file` - Optional TOML file holding the logger settings
///
/// # Example
///
/// ```
/// if let Err(e) = plugin_core::init_logger("my_plugin", None) {
///     eprintln!("Logging to the console: {}", e);
/// }
/// plugin_core::shutdown_logger();
/// ```
#[cfg(feature = "logging")]
pub fn init_logger(plugin_name: &str, config_file: Option<&Path>) -> Result<(), String> {
    let Some(path) = config_file else {
        Logger::init(plugin_name);
        return Ok(());
    };

    match Logger::init_with_config_file(path, plugin_name) {
        Ok(()) => Ok(()),
        Err(e) => {
            Logger::init(plugin_name);
            Err(format!("invalid logger config {}: {}", path.display(), e))
        }
    }
}

/// Flush pending log lines and stop the logger's background runtime.
///
/// Call this last in a plugin's shutdown; the host may unload the library
/// right after.
#[cfg(feature = "logging")]
pub fn shutdown_logger() {
    if let Err(e) = Logger::shutdown() {
        eprintln!("Logger shutdown failed: {}", e);
    }
}

// No-op versions of the macros when logging is disabled.
// #[macro_export] places them at the crate root.
#[cfg(not(feature = "logging"))]
mod no_op_macros {
    #[macro_export]
    macro_rules! log_debug {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! log_info {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! log_warn {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! log_error {
        ($($arg:tt)*) => {};
    }
}

#[cfg(not(feature = "logging"))]
pub fn init_logger(_plugin_name: &str, _config_file: Option<&std::path::Path>) -> Result<(), String> {
    Ok(())
}

#[cfg(not(feature = "logging"))]
pub fn shutdown_logger() {}
