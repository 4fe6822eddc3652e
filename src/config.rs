//! Logger configuration loaded from JSON and the environment.
//!
//! ```json
//! { "levels": ["error", "debug"], "fileNameMode": "hide" }
//! ```
//!
//! A missing `levels` key enables every level; an explicit empty list enables
//! none. A missing `fileNameMode` shows file names.

use crate::logger::{self, Configuration, FileNameMode, Level, Logger};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Comma-separated level list, or `all` / `none`.
pub const LEVELS_ENV: &str = "BOOST_LOGGER_LEVELS";
/// `show` or `hide`.
pub const FILE_NAME_ENV: &str = "BOOST_LOGGER_FILE_NAME";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
    #[serde(default = "all_levels")]
    pub levels: Vec<Level>,
    #[serde(default)]
    pub file_name_mode: FileNameMode,
}

fn all_levels() -> Vec<Level> {
    Level::ALL.to_vec()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            levels: all_levels(),
            file_name_mode: FileNameMode::default(),
        }
    }
}

impl LoggerConfig {
    pub fn to_configuration(&self) -> Configuration {
        Configuration::with_levels(self.levels.iter().copied(), self.file_name_mode)
    }

    /// Install into the global configurator.
    pub fn apply(&self) {
        logger::install(self.to_configuration());
    }

    /// Build a stdout logger that owns this configuration.
    pub fn into_logger(self) -> Logger {
        Logger::new(self.to_configuration())
    }

    /// Apply textual overrides on top of this config.
    ///
    /// `levels` is a comma list of level names, `all`, or `none` / empty.
    pub fn with_overrides(
        mut self,
        levels: Option<&str>,
        file_name_mode: Option<&str>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(levels) = levels {
            self.levels = parse_level_list(levels)?;
        }
        if let Some(mode) = file_name_mode {
            self.file_name_mode = mode.parse()?;
        }
        Ok(self)
    }

    /// Apply `BOOST_LOGGER_LEVELS` and `BOOST_LOGGER_FILE_NAME` when set.
    pub fn with_env_overrides(self) -> Result<Self, Box<dyn std::error::Error>> {
        let levels = std::env::var(LEVELS_ENV).ok();
        let mode = std::env::var(FILE_NAME_ENV).ok();
        self.with_overrides(levels.as_deref(), mode.as_deref())
    }
}

/// Parse `error,debug`, `all`, or `none`.
pub fn parse_level_list(text: &str) -> Result<Vec<Level>, crate::logger::ParseLevelError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }
    if trimmed.eq_ignore_ascii_case("all") {
        return Ok(all_levels());
    }

    let mut levels = Vec::new();
    for part in trimmed.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        let level: Level = part.parse()?;
        if !levels.contains(&level) {
            levels.push(level);
        }
    }
    Ok(levels)
}

pub fn load_config(path: &Path) -> Result<LoggerConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(Into::into)
}
