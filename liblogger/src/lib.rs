/*
 * Main library entry point that exposes the public API
 *
 * This file defines the public interface for the logging library, including:
 * - Re-exporting the Logger struct for initialization and shutdown
 * - Re-exporting LogConfig, LogLevel and LogType for custom configuration
 * - Defining logging macros (log_debug, log_info, log_warn, log_error)
 *
 * The macros take format! style arguments and automatically capture file,
 * line, and module information.
 */

mod config;
mod outputs;
mod logger;

pub use logger::Logger;
pub use config::LogConfig;
pub use config::LogLevel;
pub use config::LogType;

#[cfg(feature = "proc_macros")]
pub use liblogger_macros::{log_args, log_entry_exit, measure_time};

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::Logger::debug(&format!($($arg)+), file!(), line!(), module_path!())
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::Logger::info(&format!($($arg)+), file!(), line!(), module_path!())
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        $crate::Logger::warn(&format!($($arg)+), file!(), line!(), module_path!())
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::Logger::error(&format!($($arg)+), file!(), line!(), module_path!())
    };
}
