//! # Configuration
//!
//! There is no config file. Settings resolve from the environment, falling
//! back to defaults: env vars → defaults. A `.env` file in the working
//! directory is loaded before resolution, so it can set the same variables.

use std::env;
use std::path::PathBuf;

/// `DEBUG=true` mirrors log records to the console.
pub const DEBUG_ENV: &str = "DEBUG";
/// Overrides the directory the log file is created in.
pub const LOG_DIR_ENV: &str = "MIDAS_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub console_output: bool,
    pub directory: PathBuf,
}

impl LoggerConfig {
    pub fn from_env() -> Self {
        Self::resolve(
            env::var(DEBUG_ENV).ok().as_deref(),
            env::var_os(LOG_DIR_ENV).map(PathBuf::from),
        )
    }

    /// Only the exact value `"true"` enables the console mirror.
    pub fn resolve(debug: Option<&str>, directory: Option<PathBuf>) -> Self {
        Self {
            console_output: debug == Some("true"),
            directory: directory
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(env::temp_dir),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}
