//! Top-level logger exports and the process-wide facade.
//!
//! This module re-exports the core logging primitives and exposes a global
//! facade for programs that prefer a single process-wide configuration.
//!
//! - `Level`: message category (`HttpResponse`, `Error`, `Debug`)
//! - `FileNameMode`: show or hide the originating file name
//! - `Configuration`: enabled levels plus the file name mode
//! - `Logger`: owned configuration + sink, for callers avoiding global state
//! - `Sink`: output seam (`StdoutSink`, `MemorySink`)
//!
//! The global configuration starts with no levels enabled, so every message is
//! dropped until `configure` is called.
//!
//! ```rust,no_run
//! use boost_logger::logger::{self, FileNameMode, Level};
//!
//! logger::configure([Level::Error, Level::Debug], FileNameMode::Show);
//! logger::error("Can't save data, error: disk full", file!());
//! boost_logger::debug!("loaded {} items", 3);
//! ```

pub mod core;

#[cfg(test)]
pub mod tests;

pub use self::core::{
    format_line, Configuration, FileNameMode, Level, Logger, MemorySink, ParseFileNameModeError,
    ParseLevelError, Sink, StdoutSink,
};

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-wide configuration.
///
/// `configure` takes the write lock and `log` the read lock. A poisoned lock
/// is recovered rather than propagated, so logging never panics.
static CONFIGURATOR: RwLock<Configuration> = RwLock::new(Configuration::new());

/// Destination of the global facade. `None` writes to stdout.
static SINK: RwLock<Option<Box<dyn Sink>>> = RwLock::new(None);

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Replace the global configuration. Last call wins.
pub fn configure<I>(levels: I, file_name_mode: FileNameMode)
where
    I: IntoIterator<Item = Level>,
{
    install(Configuration::with_levels(levels, file_name_mode));
}

/// Enable every level.
pub fn configure_all(file_name_mode: FileNameMode) {
    install(Configuration::all(file_name_mode));
}

/// Replace the global configuration with a prepared value.
pub fn install(configuration: Configuration) {
    *write(&CONFIGURATOR) = configuration;
}

/// Snapshot of the global configuration.
pub fn configuration() -> Configuration {
    read(&CONFIGURATOR).clone()
}

pub fn is_enabled(level: Level) -> bool {
    read(&CONFIGURATOR).is_enabled(level)
}

/// Redirect global output, e.g. to a `MemorySink` in tests.
pub fn set_sink<S: Sink>(sink: S) {
    *write(&SINK) = Some(Box::new(sink));
}

/// Send global output back to stdout.
pub fn reset_sink() {
    *write(&SINK) = None;
}

/// Log through the global configuration. Disabled levels are a no-op.
pub fn log(level: Level, message: &str, file_path: &str) {
    let line = {
        let configuration = read(&CONFIGURATOR);
        if !configuration.is_enabled(level) {
            return;
        }
        format_line(message, file_path, configuration.file_name_mode())
    };

    match read(&SINK).as_ref() {
        Some(sink) => sink.write_line(&line),
        None => StdoutSink.write_line(&line),
    }
}

/// Flush the global sink.
pub fn flush() {
    match read(&SINK).as_ref() {
        Some(sink) => sink.flush(),
        None => StdoutSink.flush(),
    }
}

/// Convenience functions
pub fn http_response(message: &str, file_path: &str) {
    log(Level::HttpResponse, message, file_path);
}

pub fn error(message: &str, file_path: &str) {
    log(Level::Error, message, file_path);
}

pub fn debug(message: &str, file_path: &str) {
    log(Level::Debug, message, file_path);
}

/// Log at `Level::Error` through the global facade, tagged with the caller's file.
///
/// Accepts `format!` arguments.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::logger::error(&::std::format!($($arg)+), ::std::file!())
    };
}

/// Log at `Level::Debug` through the global facade, tagged with the caller's file.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::logger::debug(&::std::format!($($arg)+), ::std::file!())
    };
}

/// Log at `Level::HttpResponse` through the global facade, tagged with the caller's file.
#[macro_export]
macro_rules! http_response {
    ($($arg:tt)+) => {
        $crate::logger::http_response(&::std::format!($($arg)+), ::std::file!())
    };
}
