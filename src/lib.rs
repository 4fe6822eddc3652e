//! Process-wide, level-filtered console logging.
//!
//! See [`logger`] for the facade and [`config`] for file and environment
//! configuration.

pub mod config;
pub mod logger;

#[cfg(test)]
mod test_utilities;
