//! Logging primitives for boost-logger.
//!
//! This module holds everything the global facade in `logger/mod.rs` is built
//! from, and can be used on its own when a caller prefers to own its logging
//! state instead of going through the process-wide configurator.
//!
//! Responsibilities:
//! - Define the `Level` and `FileNameMode` tags
//! - Hold the enabled-level set in `Configuration`
//! - Format a message into a console line (`format_line`)
//! - Route formatted lines through a `Sink`
//!
//! A message whose level is not enabled is dropped before formatting. Nothing
//! in this module returns an error on the logging path; only parsing of levels
//! and modes from text is fallible.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Category of a log message.
///
/// Use `HttpResponse` for responses of API requests, `Error` for critical
/// failures and `Debug` during development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Level {
    HttpResponse,
    Error,
    Debug,
}

impl Level {
    /// Every level, in declaration order.
    pub const ALL: [Level; 3] = [Level::HttpResponse, Level::Error, Level::Debug];

    /// Raw name, as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::HttpResponse => "httpResponse",
            Level::Error => "error",
            Level::Debug => "debug",
        }
    }

    /// Human readable label.
    pub fn description(&self) -> &'static str {
        match self {
            Level::HttpResponse => "HTTP Response",
            Level::Error => "Error",
            Level::Debug => "Debug",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts the raw name in any case, plus `http_response` and `http-response`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "httpresponse" => Ok(Level::HttpResponse),
            "error" => Ok(Level::Error),
            "debug" => Ok(Level::Debug),
            _ => Err(ParseLevelError::new(s)),
        }
    }
}

/// Returned when text does not name a `Level`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    pub input: String,
}

impl ParseLevelError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown log level '{}' (expected httpResponse, error or debug)",
            self.input
        )
    }
}

impl std::error::Error for ParseLevelError {}

/// Whether the originating file name is appended to each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileNameMode {
    #[default]
    Show,
    Hide,
}

impl FileNameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileNameMode::Show => "show",
            FileNameMode::Hide => "hide",
        }
    }
}

impl fmt::Display for FileNameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileNameMode {
    type Err = ParseFileNameModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "show" => Ok(FileNameMode::Show),
            "hide" => Ok(FileNameMode::Hide),
            _ => Err(ParseFileNameModeError {
                input: s.to_string(),
            }),
        }
    }
}

/// Returned when text does not name a `FileNameMode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFileNameModeError {
    pub input: String,
}

impl fmt::Display for ParseFileNameModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown file name mode '{}' (expected show or hide)",
            self.input
        )
    }
}

impl std::error::Error for ParseFileNameModeError {}

/// Enabled levels plus the file name display mode.
///
/// The default value enables nothing, so an unconfigured logger stays silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    levels: BTreeSet<Level>,
    file_name_mode: FileNameMode,
}

impl Configuration {
    /// No levels enabled, file names shown.
    pub const fn new() -> Self {
        Self {
            levels: BTreeSet::new(),
            file_name_mode: FileNameMode::Show,
        }
    }

    pub fn with_levels<I>(levels: I, file_name_mode: FileNameMode) -> Self
    where
        I: IntoIterator<Item = Level>,
    {
        Self {
            levels: levels.into_iter().collect(),
            file_name_mode,
        }
    }

    /// Every level enabled.
    pub fn all(file_name_mode: FileNameMode) -> Self {
        Self::with_levels(Level::ALL, file_name_mode)
    }

    pub fn levels(&self) -> &BTreeSet<Level> {
        &self.levels
    }

    pub fn file_name_mode(&self) -> FileNameMode {
        self.file_name_mode
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.levels.contains(&level)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a message into the line written to the console.
///
/// One trailing `.` is stripped and a single `.` appended, so `"Done"` and
/// `"Done."` produce the same line. With `FileNameMode::Show` the last path
/// component of `file_path` follows in brackets; a path without one (empty,
/// `..`, `/`) is shown as given.
///
/// ```
/// use boost_logger::logger::{format_line, FileNameMode};
///
/// let line = format_line("Disk full", "a/b.swift", FileNameMode::Show);
/// assert_eq!(line, "Disk full. [b.swift]");
/// ```
pub fn format_line(message: &str, file_path: &str, file_name_mode: FileNameMode) -> String {
    let message = message.strip_suffix('.').unwrap_or(message);

    let mut line = String::with_capacity(message.len() + file_path.len() + 4);
    line.push_str(message);
    line.push('.');

    if file_name_mode == FileNameMode::Show {
        line.push_str(" [");
        line.push_str(file_name(file_path));
        line.push(']');
    }
    line
}

fn file_name(file_path: &str) -> &str {
    Path::new(file_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file_path)
}

/// Destination for formatted lines.
///
/// Implementations must not panic; write failures are swallowed since
/// logging never reports errors to its caller.
pub trait Sink: Send + Sync + 'static {
    /// Write one line. The implementation adds the line terminator.
    fn write_line(&self, line: &str);

    /// Flush any buffered lines.
    fn flush(&self) {}
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line);
    }

    fn flush(&self) {
        (**self).flush();
    }
}

/// Writes each line to the process stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", line);
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

/// Keeps lines in memory.
///
/// Clones share the same buffer, so a test can hand one clone to a logger
/// and read the output through another.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
    }
}

/// A logger that owns its configuration and sink.
///
/// This is the explicit-state counterpart of the global facade: nothing is
/// shared unless the caller shares it.
///
/// ```
/// use boost_logger::logger::{Configuration, FileNameMode, Level, Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::with_sink(
///     Configuration::with_levels([Level::Error], FileNameMode::Hide),
///     sink.clone(),
/// );
/// logger.debug("dropped", file!());
/// logger.error("Disk full", file!());
/// assert_eq!(sink.lines(), vec!["Disk full.".to_string()]);
/// ```
#[derive(Debug)]
pub struct Logger<S: Sink = StdoutSink> {
    configuration: Configuration,
    sink: S,
}

impl Logger<StdoutSink> {
    pub fn new(configuration: Configuration) -> Self {
        Self::with_sink(configuration, StdoutSink)
    }
}

impl<S: Sink> Logger<S> {
    pub fn with_sink(configuration: Configuration, sink: S) -> Self {
        Self {
            configuration,
            sink,
        }
    }

    /// Replace the configuration. Last call wins.
    pub fn configure<I>(&mut self, levels: I, file_name_mode: FileNameMode)
    where
        I: IntoIterator<Item = Level>,
    {
        self.configuration = Configuration::with_levels(levels, file_name_mode);
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.configuration.is_enabled(level)
    }

    pub fn log(&self, level: Level, message: &str, file_path: &str) {
        if !self.is_enabled(level) {
            return;
        }
        let line = format_line(message, file_path, self.configuration.file_name_mode());
        self.sink.write_line(&line);
    }

    pub fn http_response(&self, message: &str, file_path: &str) {
        self.log(Level::HttpResponse, message, file_path);
    }

    pub fn error(&self, message: &str, file_path: &str) {
        self.log(Level::Error, message, file_path);
    }

    pub fn debug(&self, message: &str, file_path: &str) {
        self.log(Level::Debug, message, file_path);
    }

    pub fn flush(&self) {
        self.sink.flush();
    }
}
