/*
 * Configuration management for the plugin logger
 *
 * This module handles:
 * - Parsing configuration from a TOML file that sits next to the host's
 *   own configuration (advanced_info.toml and friends)
 * - Defining the LogType enum for output destinations (Console, File)
 * - Defining the LogLevel enum for severity levels (Debug, Info, Warn, Error)
 * - Providing default configuration values for all settings
 *
 * A plugin never owns its configuration directory, so a missing file is not
 * an error: the logger falls back to console output at INFO.
 */

 use serde::{Deserialize, Serialize};
 use std::fs;
 use std::path::{Path, PathBuf};

 /// Log severity levels
 #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
 pub enum LogLevel {
     Debug,
     Info,
     Warn,
     Error,
 }

 // Separate implementation of Deserialize to handle case-insensitive values
 impl<'de> Deserialize<'de> for LogLevel {
     fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
     where
         D: serde::Deserializer<'de>,
     {
         let s = String::deserialize(deserializer)?;
         match s.to_lowercase().as_str() {
             "debug" => Ok(LogLevel::Debug),
             "info" => Ok(LogLevel::Info),
             "warn" | "warning" => Ok(LogLevel::Warn),
             "error" => Ok(LogLevel::Error),
             _ => Err(serde::de::Error::unknown_variant(
                 &s,
                 &["debug", "info", "warn", "warning", "error"],
             )),
         }
     }
 }

 impl LogLevel {
     pub fn as_str(&self) -> &'static str {
         match self {
             LogLevel::Debug => "DEBUG",
             LogLevel::Info => "INFO",
             LogLevel::Warn => "WARN",
             LogLevel::Error => "ERROR",
         }
     }
 }

 /// Supported output types for logging
 #[derive(Debug, Clone, PartialEq, Serialize)]
 pub enum LogType {
     Console,
     File,
 }

 impl<'de> Deserialize<'de> for LogType {
     fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
     where
         D: serde::Deserializer<'de>,
     {
         let s = String::deserialize(deserializer)?;
         match s.to_lowercase().as_str() {
             "console" => Ok(LogType::Console),
             "file" => Ok(LogType::File),
             _ => Err(serde::de::Error::unknown_variant(&s, &["console", "file"])),
         }
     }
 }

 /// Configuration for the logger
 #[derive(Debug, Clone, Serialize, Deserialize)]
 pub struct LogConfig {
     /// Type of output (console, file)
     #[serde(rename = "type")]
     pub log_type: LogType,

     /// Minimum log level to record
     pub threshold: LogLevel,

     /// File name (or path) for file-based logging
     #[serde(default)]
     pub file_path: Option<String>,

     /// Folder for log files
     #[serde(default)]
     pub log_folder: Option<String>,

     /// Whether to hand entries to a background writer (default: true)
     #[serde(default = "default_async_logging")]
     pub async_logging: bool,

     /// Whether to force flush after every write (default: false)
     #[serde(default = "default_force_flush")]
     pub force_flush: bool,

     /// Tag written into every line, usually the plugin name.
     /// Set by the caller, never read from the file.
     #[serde(skip)]
     pub source: Option<String>,

     /// Directory relative log paths are resolved against; the directory of
     /// the file the configuration was read from.
     #[serde(skip)]
     pub base_dir: Option<PathBuf>,
 }

 fn default_async_logging() -> bool {
     true
 }

 fn default_force_flush() -> bool {
     false
 }

 impl Default for LogConfig {
     fn default() -> Self {
         LogConfig {
             log_type: LogType::Console,
             threshold: LogLevel::Info,
             file_path: None,
             log_folder: None,
             async_logging: true,
             force_flush: false,
             source: None,
             base_dir: None,
         }
     }
 }

 /// Configuration wrapper to handle the [logging] section in TOML
 #[derive(Debug, Clone, Deserialize)]
 struct ConfigWrapper {
     logging: LogConfig,
 }

 impl LogConfig {
     /// Create configuration from a TOML file.
     ///
     /// Returns the defaults when the file cannot be read and an error when it
     /// can be read but not parsed. Relative `log_folder` and `file_path`
     /// values resolve against the file's directory.
     pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Self, String> {
         let file_path = file_path.as_ref();
         let config_str = match fs::read_to_string(file_path) {
             Ok(content) => content,
             Err(e) => {
                 eprintln!(
                     "Warning: Could not read config file '{}': {}. Using defaults.",
                     file_path.display(),
                     e
                 );
                 return Ok(LogConfig::default());
             }
         };

         let mut config = Self::from_toml_str(&config_str)?;
         config.base_dir = file_path
             .parent()
             .filter(|dir| !dir.as_os_str().is_empty())
             .map(Path::to_path_buf);
         Ok(config)
     }

     /// Parse configuration from TOML text, accepting either a `[logging]`
     /// table or a bare table of logger keys.
     pub fn from_toml_str(config_str: &str) -> Result<Self, String> {
         match toml::from_str::<ConfigWrapper>(config_str) {
             Ok(wrapper) => Ok(wrapper.logging),
             Err(e) => toml::from_str::<LogConfig>(config_str)
                 .map_err(|_| format!("Failed to parse config file: {}", e)),
         }
     }

     /// Tag every line with `source`.
     pub fn with_source(mut self, source: &str) -> Self {
         self.source = Some(source.to_string());
         self
     }

     /// Full path of the log file, joining `log_folder` when present and
     /// `base_dir` when the result is still relative.
     pub fn resolved_file_path(&self) -> Result<PathBuf, String> {
         let file_path = self
             .file_path
             .as_ref()
             .ok_or_else(|| "File path not specified in configuration".to_string())?;

         let path = match &self.log_folder {
             Some(folder) => Path::new(folder).join(file_path),
             None => PathBuf::from(file_path),
         };
         Ok(match &self.base_dir {
             Some(base) if path.is_relative() => base.join(path),
             _ => path,
         })
     }
 }
