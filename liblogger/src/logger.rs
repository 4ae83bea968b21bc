/*
 * Logger implementation module
 *
 * This file implements the core Logger functionality which includes:
 * - Creation and initialization of the global logger instance
 * - Configuration of the logger from TOML files or programmatically
 * - Asynchronous logging through a private Tokio runtime with message passing
 * - Automatic fallback to synchronous logging when the channel is full
 * - A shutdown path that drains the writer and stops the runtime, so the
 *   shared library hosting the logger can be unloaded without live threads
 *
 * The Logger uses a singleton pattern with lazy initialization via OnceCell
 * to ensure there's only one logger instance per loaded library.
 */

 use once_cell::sync::OnceCell;
 use std::sync::{Arc, Mutex, atomic::{AtomicU64, Ordering}};
 use std::path::Path;
 use chrono::Utc;
 use std::io::{self, Write};
 use tokio::sync::{mpsc::{self, Sender, Receiver}, oneshot};
 use tokio::runtime::{Builder, Runtime};
 use tokio::time::{timeout, Duration as TokioDuration};

 use crate::config::{LogConfig, LogLevel};
 use crate::outputs::{LogOutput, AsyncLogOutput, AsyncLogOutputTrait, create_outputs};

 static LOGGER_INSTANCE: OnceCell<Arc<Mutex<LoggerInner>>> = OnceCell::new();

 const CHANNEL_CAPACITY: usize = 100;
 const DROP_REPORT_INTERVAL: u64 = 100;
 const SHUTDOWN_TIMEOUT_SECS: u64 = 5;

 struct LogMessage {
     timestamp: String,
     level: LogLevel,
     message: String,
     file: String,
     line: u32,
     module: String,
 }

 enum LogCommand {
     Entry(LogMessage),
     Shutdown(oneshot::Sender<()>),
 }

 struct LoggerInner {
     config: Option<LogConfig>,
     output: Option<Box<dyn LogOutput>>,
     async_sender: Option<Sender<LogCommand>>,
     runtime: Option<Runtime>,
     /// Counter for messages dropped due to channel backpressure
     dropped_logs: AtomicU64,
     log_counter: AtomicU64,
 }

 impl LoggerInner {
     fn new() -> Self {
         LoggerInner {
             config: None,
             output: None,
             async_sender: None,
             runtime: None,
             dropped_logs: AtomicU64::new(0),
             log_counter: AtomicU64::new(0),
         }
     }

     fn init_with_config(&mut self, config: LogConfig) -> Result<(), String> {
         // Re-initialising replaces the writer; the old runtime must not outlive it.
         if let Some(runtime) = self.runtime.take() {
             self.async_sender = None;
             runtime.shutdown_background();
         }

         let (output, async_output) = create_outputs(&config, config.async_logging)?;
         self.output = Some(output);

         if let Some(async_output) = async_output {
             let runtime = Builder::new_multi_thread()
                 .worker_threads(1)
                 .thread_name("plugin-logger")
                 .enable_time()
                 .build()
                 .map_err(|e| format!("Failed to create logger runtime: {}", e))?;

             let (tx, rx) = mpsc::channel::<LogCommand>(CHANNEL_CAPACITY);
             let source = config.source.clone();
             runtime.spawn(async move {
                 process_log_commands(rx, async_output, source).await
                     .unwrap_or_else(|e| eprintln!("Async logging failed: {}", e));
             });

             self.async_sender = Some(tx);
             self.runtime = Some(runtime);
         }

         self.config = Some(config);
         Ok(())
     }

     fn source(&self) -> Option<&str> {
         self.config.as_ref().and_then(|c| c.source.as_deref())
     }

     fn log(&mut self, level: LogLevel, message: &str, file: &str, line: u32, module: &str) {
         let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

         let threshold = match self.config {
             Some(ref config) => config.threshold,
             None => {
                 self.log_sync(&timestamp, level, message, file, line, module);
                 return;
             }
         };
         if level < threshold {
             return;
         }

         let count = self.log_counter.fetch_add(1, Ordering::Relaxed) + 1;
         if count % DROP_REPORT_INTERVAL == 0 {
             self.report_dropped_logs();
         }

         // Channel full or closed: count the drop and write synchronously instead
         let queued = match self.async_sender {
             Some(ref sender) => {
                 let entry = LogCommand::Entry(LogMessage {
                     timestamp: timestamp.clone(),
                     level,
                     message: message.to_string(),
                     file: file.to_string(),
                     line,
                     module: module.to_string(),
                 });
                 let queued = sender.try_send(entry).is_ok();
                 if !queued {
                     self.dropped_logs.fetch_add(1, Ordering::Relaxed);
                 }
                 queued
             }
             None => false,
         };

         if !queued {
             self.log_sync(&timestamp, level, message, file, line, module);
         }
     }

     fn report_dropped_logs(&mut self) {
         let dropped = self.dropped_logs.swap(0, Ordering::Relaxed);
         if dropped > 0 {
             let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
             let warning_message = format!(
                 "{} log messages were written synchronously due to backpressure",
                 dropped
             );
             self.log_sync(&timestamp, LogLevel::Warn, &warning_message, "logger.rs", 0, "liblogger");
         }
     }

     fn log_sync(&mut self, timestamp: &str, level: LogLevel, message: &str,
                 file: &str, line: u32, module: &str) {
         let formatted_message =
             format_log_message(timestamp, level, self.source(), message, file, line, module);

         match self.output.as_mut() {
             Some(output) => {
                 if let Err(e) = output.write_log(&formatted_message) {
                     eprintln!("Failed to write log: {}", e);
                 }
             }
             None => {
                 let _ = writeln!(io::stderr(), "{}", formatted_message);
             }
         }
     }
 }

 /// Format a log line.
 pub(crate) fn format_log_message(timestamp: &str, level: LogLevel, source: Option<&str>,
                                  message: &str, file: &str, line: u32, module: &str) -> String {
     let level_str = level.as_str();
     match source {
         Some(source) => format!("{} [{}] [{}] [{}:{}] [{}] {}",
             timestamp, level_str, source, file, line, module, message),
         None => format!("{} [{}] [{}:{}] [{}] {}",
             timestamp, level_str, file, line, module, message),
     }
 }

 async fn process_log_commands(mut receiver: Receiver<LogCommand>, mut output: AsyncLogOutput,
                               source: Option<String>) -> Result<(), String> {
     while let Some(cmd) = receiver.recv().await {
         match cmd {
             LogCommand::Entry(msg) => {
                 let formatted_message = format_log_message(
                     &msg.timestamp, msg.level, source.as_deref(), &msg.message,
                     &msg.file, msg.line, &msg.module);

                 if let Err(e) = output.write_log_async(&formatted_message).await {
                     eprintln!("Async logging error: {}", e);
                 }
             }
             LogCommand::Shutdown(completion_sender) => {
                 let _ = completion_sender.send(());
                 break;
             }
         }
     }

     Ok(())
 }

 fn instance() -> &'static Arc<Mutex<LoggerInner>> {
     LOGGER_INSTANCE.get_or_init(|| Arc::new(Mutex::new(LoggerInner::new())))
 }

 pub struct Logger;

 impl Logger {
     /// Initialize the logger from a configuration file, tagging lines with `source`.
     pub fn init_with_config_file<P: AsRef<Path>>(config_path: P, source: &str) -> Result<(), String> {
         let config = LogConfig::from_file(config_path)?.with_source(source);
         Self::init_with_config(config)
     }

     /// Initialize the logger with the default console configuration.
     pub fn init(source: &str) {
         let _ = Self::init_with_config(LogConfig::default().with_source(source));
     }

     pub fn init_with_config(config: LogConfig) -> Result<(), String> {
         let mut logger_guard = match instance().lock() {
             Ok(guard) => guard,
             Err(poisoned) => poisoned.into_inner(),
         };
         logger_guard.init_with_config(config)
     }

     /// Whether `init*` has completed since the last shutdown.
     pub fn is_initialized() -> bool {
         LOGGER_INSTANCE
             .get()
             .and_then(|logger| logger.lock().ok().map(|inner| inner.config.is_some()))
             .unwrap_or(false)
     }

     pub fn debug(message: &str, file: &'static str, line: u32, module: &'static str) {
         Self::log_with_metadata(LogLevel::Debug, message, file, line, module)
     }

     pub fn info(message: &str, file: &'static str, line: u32, module: &'static str) {
         Self::log_with_metadata(LogLevel::Info, message, file, line, module)
     }

     pub fn warn(message: &str, file: &'static str, line: u32, module: &'static str) {
         Self::log_with_metadata(LogLevel::Warn, message, file, line, module)
     }

     pub fn error(message: &str, file: &'static str, line: u32, module: &'static str) {
         Self::log_with_metadata(LogLevel::Error, message, file, line, module)
     }

     fn log_with_metadata(level: LogLevel, message: &str, file: &str, line: u32, module: &str) {
         let file_name = Path::new(file)
             .file_name()
             .and_then(|n| n.to_str())
             .unwrap_or(file);

         match instance().lock() {
             Ok(mut logger) => logger.log(level, message, file_name, line, module),
             Err(_) => {
                 let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
                 let log_line = format_log_message(&timestamp, level, None, message, file_name, line, module);
                 let _ = writeln!(io::stderr(), "{} | MUTEX POISONED", log_line);
             }
         }
     }

     /// Drain the background writer, stop its runtime and flush the output.
     ///
     /// Must not be called from inside a Tokio runtime.
     pub fn shutdown() -> Result<(), String> {
         let Some(logger) = LOGGER_INSTANCE.get() else {
             return Ok(());
         };

         let (sender, runtime) = {
             let mut guard = match logger.lock() {
                 Ok(guard) => guard,
                 Err(poisoned) => poisoned.into_inner(),
             };
             guard.report_dropped_logs();
             (guard.async_sender.take(), guard.runtime.take())
         };

         let mut result = Ok(());
         if let (Some(sender), Some(runtime)) = (sender, runtime) {
             let (completion_tx, completion_rx) = oneshot::channel();
             result = runtime.block_on(async move {
                 sender
                     .send(LogCommand::Shutdown(completion_tx))
                     .await
                     .map_err(|e| format!("Failed to send shutdown command: {}", e))?;

                 match timeout(TokioDuration::from_secs(SHUTDOWN_TIMEOUT_SECS), completion_rx).await {
                     Ok(Ok(())) => Ok(()),
                     Ok(Err(_)) => Err("Shutdown completion channel was closed".to_string()),
                     Err(_) => Err(format!("Logger shutdown timed out after {} seconds", SHUTDOWN_TIMEOUT_SECS)),
                 }
             });
             runtime.shutdown_background();
         }

         let mut guard = match logger.lock() {
             Ok(guard) => guard,
             Err(poisoned) => poisoned.into_inner(),
         };
         if let Some(ref mut output) = guard.output {
             let _ = output.flush();
         }
         guard.output = None;
         guard.config = None;

         result
     }

     /// Configuration the logger is currently running with.
     pub fn active_config() -> Option<LogConfig> {
         LOGGER_INSTANCE
             .get()
             .and_then(|logger| logger.lock().ok().and_then(|inner| inner.config.clone()))
     }
 }
