//! Shared helpers for tests that touch process-wide state.
//!
//! The global logger configuration, the global sink, environment variables and
//! file descriptor 1 are shared by every test thread. Tests that use any of
//! them hold the guard returned by `isolate_global_logger` for their whole
//! body.

use crate::logger::{self, Configuration};
use std::sync::{Mutex, MutexGuard};

static GLOBAL_STATE: Mutex<()> = Mutex::new(());

/// Holds the global-state lock and resets the facade on both ends.
pub struct GlobalLoggerGuard {
    _lock: MutexGuard<'static, ()>,
}

impl Drop for GlobalLoggerGuard {
    fn drop(&mut self) {
        logger::install(Configuration::new());
        logger::reset_sink();
    }
}

/// Serialize access to the global facade and start from the unconfigured state.
pub fn isolate_global_logger() -> GlobalLoggerGuard {
    // A failed test poisons the lock; the state is reset below anyway.
    let lock = GLOBAL_STATE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    logger::install(Configuration::new());
    logger::reset_sink();
    GlobalLoggerGuard { _lock: lock }
}

/// Run `f` with stdout redirected to a temporary file and return what it wrote.
///
/// The test harness prints its own progress to the same descriptor, so callers
/// should look for their lines rather than compare the whole output.
#[cfg(unix)]
pub fn capture_stdout<F: FnOnce()>(f: F) -> String {
    use std::io::{Read, Seek, SeekFrom, Write};
    use std::os::fd::{AsFd, AsRawFd};

    let mut reader = tempfile::tempfile().unwrap();
    let writer = reader.try_clone().unwrap();

    std::io::stdout().flush().unwrap();
    let saved = unsafe { libc::dup(libc::STDOUT_FILENO) };
    unsafe { libc::dup2(writer.as_fd().as_raw_fd(), libc::STDOUT_FILENO) };

    f();

    std::io::stdout().flush().unwrap();
    unsafe { libc::dup2(saved, libc::STDOUT_FILENO) };
    unsafe { libc::close(saved) };

    reader.seek(SeekFrom::Start(0)).unwrap();
    let mut output = String::new();
    reader.read_to_string(&mut output).unwrap();
    output
}

/// Lines of captured output, for exact per-line matching.
pub fn output_lines(output: &str) -> Vec<&str> {
    output.lines().collect()
}
