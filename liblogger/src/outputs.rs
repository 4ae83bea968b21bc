/*
 * Log output implementations
 *
 * This module defines the logging backends:
 * - ConsoleOutput: Writes logs to stdout (the host's console window)
 * - FileOutput: Appends logs to a file, optionally flushing every line
 *
 * Each output implements the synchronous LogOutput trait and the
 * AsyncLogOutputTrait used by the background writer. The file variants share
 * one handle so sync fallbacks and async writes never interleave mid-line.
 */

 use std::fs::{File, OpenOptions};
 use std::io::{self, Write};
 use std::path::Path;
 use std::sync::{Arc, Mutex};
 use tokio::io::{AsyncWriteExt, stdout};
 use async_trait::async_trait;
 use crate::config::{LogConfig, LogType};

 pub trait LogOutput: Send + Sync {
     fn write_log(&mut self, formatted_message: &str) -> Result<(), String>;

     fn flush(&mut self) -> Result<(), String> {
         Ok(())
     }
 }

 #[async_trait]
 pub trait AsyncLogOutputTrait: Send + Sync {
     async fn write_log_async(&mut self, formatted_message: &str) -> Result<(), String>;
 }

 // Enum to hold all possible async output types
 pub enum AsyncLogOutput {
     Console(ConsoleOutput),
     File(FileOutput),
 }

 pub struct ConsoleOutput;

 impl ConsoleOutput {
     pub fn new() -> Self {
         ConsoleOutput {}
     }
 }

 impl LogOutput for ConsoleOutput {
     fn write_log(&mut self, formatted_message: &str) -> Result<(), String> {
         writeln!(io::stdout(), "{}", formatted_message)
             .map_err(|e| format!("Failed to write to console: {}", e))
     }
 }

 #[async_trait]
 impl AsyncLogOutputTrait for ConsoleOutput {
     async fn write_log_async(&mut self, formatted_message: &str) -> Result<(), String> {
         let mut stdout = stdout();
         let mut log_bytes = formatted_message.as_bytes().to_vec();
         log_bytes.push(b'\n');

         stdout
             .write_all(&log_bytes)
             .await
             .map_err(|e| format!("Failed to write to console: {}", e))?;
         stdout
             .flush()
             .await
             .map_err(|e| format!("Failed to flush console output: {}", e))
     }
 }

 pub struct FileOutput {
     file_handle: Arc<Mutex<File>>,
     force_flush: bool,
 }

 impl FileOutput {
     pub fn open(file_path: &Path, force_flush: bool) -> Result<Self, String> {
         if let Some(parent) = file_path.parent() {
             if !parent.as_os_str().is_empty() && !parent.exists() {
                 std::fs::create_dir_all(parent)
                     .map_err(|e| format!("Failed to create log directory: {}", e))?;
             }
         }

         let file = OpenOptions::new()
             .create(true)
             .append(true)
             .open(file_path)
             .map_err(|e| format!("Failed to open log file: {}", e))?;

         Ok(FileOutput {
             file_handle: Arc::new(Mutex::new(file)),
             force_flush,
         })
     }

     fn write_line(&self, formatted_message: &str) -> Result<(), String> {
         let mut file = self
             .file_handle
             .lock()
             .map_err(|_| "Failed to lock file mutex".to_string())?;

         file.write_all(formatted_message.as_bytes())
             .map_err(|e| format!("Failed to write to log file: {}", e))?;
         file.write_all(b"\n")
             .map_err(|e| format!("Failed to write newline to log file: {}", e))?;

         if self.force_flush {
             file.flush()
                 .map_err(|e| format!("Failed to flush log file: {}", e))?;
         }

         Ok(())
     }
 }

 impl Clone for FileOutput {
     fn clone(&self) -> Self {
         FileOutput {
             file_handle: Arc::clone(&self.file_handle),
             force_flush: self.force_flush,
         }
     }
 }

 impl LogOutput for FileOutput {
     fn write_log(&mut self, formatted_message: &str) -> Result<(), String> {
         self.write_line(formatted_message)
     }

     fn flush(&mut self) -> Result<(), String> {
         let mut file = self
             .file_handle
             .lock()
             .map_err(|_| "Failed to lock file mutex".to_string())?;
         file.flush().map_err(|e| format!("Failed to flush log file: {}", e))
     }
 }

 #[async_trait]
 impl AsyncLogOutputTrait for FileOutput {
     async fn write_log_async(&mut self, formatted_message: &str) -> Result<(), String> {
         self.write_line(formatted_message)
     }
 }

 #[async_trait]
 impl AsyncLogOutputTrait for AsyncLogOutput {
     async fn write_log_async(&mut self, formatted_message: &str) -> Result<(), String> {
         match self {
             AsyncLogOutput::Console(output) => output.write_log_async(formatted_message).await,
             AsyncLogOutput::File(output) => output.write_log_async(formatted_message).await,
         }
     }
 }

 /// Creates the synchronous output and, when requested, its async twin.
 /// File outputs share one handle between the two.
 pub fn create_outputs(
     config: &LogConfig,
     with_async: bool,
 ) -> Result<(Box<dyn LogOutput>, Option<AsyncLogOutput>), String> {
     match config.log_type {
         LogType::Console => {
             let async_output = with_async.then(|| AsyncLogOutput::Console(ConsoleOutput::new()));
             Ok((Box::new(ConsoleOutput::new()), async_output))
         }
         LogType::File => {
             let full_path = config.resolved_file_path()?;
             let file_output = FileOutput::open(&full_path, config.force_flush)?;
             let async_output = with_async.then(|| AsyncLogOutput::File(file_output.clone()));
             Ok((Box::new(file_output), async_output))
         }
     }
 }

 #[cfg(test)]
 mod tests {
     use super::*;

     #[test]
     fn file_output_appends_lines_and_creates_folder() {
         let dir = tempfile::tempdir().unwrap();
         let path = dir.path().join("nested").join("plugin.log");

         let mut output = FileOutput::open(&path, true).unwrap();
         output.write_log("first").unwrap();
         output.write_log("second").unwrap();

         let contents = std::fs::read_to_string(&path).unwrap();
         assert_eq!(contents, "first\nsecond\n");
     }

     #[test]
     fn file_outputs_share_a_handle() {
         let dir = tempfile::tempdir().unwrap();
         let config = LogConfig {
             log_type: LogType::File,
             file_path: Some("shared.log".to_string()),
             log_folder: Some(dir.path().to_string_lossy().into_owned()),
             force_flush: true,
             ..LogConfig::default()
         };

         let (mut sync_output, async_output) = create_outputs(&config, true).unwrap();
         sync_output.write_log("from sync").unwrap();
         match async_output {
             Some(AsyncLogOutput::File(file)) => file.write_line("from async").unwrap(),
             _ => panic!("expected a file output"),
         }

         let contents = std::fs::read_to_string(dir.path().join("shared.log")).unwrap();
         assert_eq!(contents, "from sync\nfrom async\n");
     }

     #[test]
     fn console_config_skips_async_output_when_not_requested() {
         let (_, async_output) = create_outputs(&LogConfig::default(), false).unwrap();
         assert!(async_output.is_none());
     }
 }
