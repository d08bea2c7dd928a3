use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

enum LogSink {
    Stderr,
    File(Mutex<File>),
}

pub struct Logger {
    prefix: Option<String>,
    sink: LogSink,
}

impl Logger {
    fn new(prefix: Option<String>, sink: LogSink) -> Self {
        Self { prefix, sink }
    }

    fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, message: &str) {
        let line = self.format_line(message);
        match &self.sink {
            LogSink::Stderr => eprintln!("{}", line),
            LogSink::File(file) => {
                if let Ok(mut file) = file.lock() {
                    let _ = writeln!(file, "{}", line);
                }
            }
        }
    }
}

/// Installs the process-wide logger. With `log_file` set, lines are appended to
/// that file so they do not interleave with the board drawn on the terminal.
/// Later calls keep the first logger.
pub fn init_logger(prefix: Option<String>, log_file: Option<&Path>) -> Result<(), String> {
    let sink = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("Failed to open log file {}: {}", path.display(), e))?;
            LogSink::File(Mutex::new(file))
        }
        None => LogSink::Stderr,
    };
    LOGGER.get_or_init(|| Logger::new(prefix, sink));
    Ok(())
}

/// Does nothing until `init_logger` has run, so library code and tests can log freely.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
