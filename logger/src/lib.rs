use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum LogLevel {
    Info(Color),
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
}

impl Color {
    fn to_ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
            Color::Magenta => "\x1b[35m",
            Color::White => "\x1b[37m",
        }
    }
}

/// Appends timestamped, leveled lines to a log file, optionally echoing
/// them to the console with ANSI colors.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: PathBuf,
}

impl Logger {
    /// Creates a new `Logger` instance.
    ///
    /// # Parameters
    /// - `log_dir`: Directory for the log file; created if it does not exist.
    /// - `tag`: Base name of the log file, without extension.
    ///
    /// # Returns
    /// A new `Logger` writing to `{tag}.log`, truncating any previous run.
    pub fn new(log_dir: &Path, tag: &str) -> Result<Self, LoggerError> {
        if tag.is_empty() || tag.contains(['/', '\\']) {
            return Err(LoggerError::InvalidTag(tag.to_string()));
        }

        fs::create_dir_all(log_dir).map_err(LoggerError::from)?;

        let log_file = log_dir.join(format!("{}.log", tag));

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)
            .map_err(LoggerError::from)?;

        Ok(Logger { log_file })
    }

    // Generic method for writing log messages
    fn log(&self, level: LogLevel, message: &str, to_console: bool) -> Result<(), LoggerError> {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let log_message = match &level {
            LogLevel::Info(_) => format!("[INFO] [{}]: {}\n", timestamp, message),
            LogLevel::Warn => format!("[WARN] [{}]: {}\n", timestamp, message),
            LogLevel::Error => format!("[ERROR] [{}]: {}\n", timestamp, message),
        };

        // Console output gets colors, the file keeps the plain line.
        if to_console {
            let colored_message = match &level {
                LogLevel::Info(color) => format!("{}{}\x1b[0m", color.to_ansi_code(), log_message),
                LogLevel::Warn => format!("\x1b[93m{}\x1b[0m", log_message),
                LogLevel::Error => format!("\x1b[91m{}\x1b[0m", log_message),
            };
            print!("{}", colored_message);
            io::stdout().flush().map_err(LoggerError::from)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
            .map_err(LoggerError::from)?;
        file.write_all(log_message.as_bytes())
            .map_err(LoggerError::from)?;
        file.flush().map_err(LoggerError::from)?;

        Ok(())
    }

    /// Logs an informational message.
    ///
    /// # Parameters
    /// - `message`: The informational message to log.
    /// - `color`: The color to use for the console output.
    /// - `to_console`: Whether to log the message to the console as well.
    pub fn info(&self, message: &str, color: Color, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Info(color), message, to_console)
    }

    /// Logs a warning message.
    ///
    /// # Parameters
    /// - `message`: The warning message to log.
    /// - `to_console`: Whether to log the message to the console as well.
    pub fn warn(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Warn, message, to_console)
    }

    /// Logs an error message.
    ///
    /// # Parameters
    /// - `message`: The error message to log.
    /// - `to_console`: Whether to log the message to the console as well.
    pub fn error(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Error, message, to_console)
    }
}

#[derive(Debug)]
pub enum LoggerError {
    IoError(std::io::Error),
    InvalidTag(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::IoError(e) => write!(f, "I/O Error: {}", e),
            LoggerError::InvalidTag(tag) => write!(f, "Invalid log tag: {}", tag),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::IoError(e) => Some(e),
            LoggerError::InvalidTag(_) => None,
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        LoggerError::IoError(err)
    }
}
