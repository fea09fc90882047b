//! Configuration management for the waymark application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. The only setting is the
//! entries directory.
//!
//! # Environment Variables
//!
//! - `WAYMARK_DIR`: Path to the entries directory (defaults to
//!   `~/Documents/waymark`)
//! - `HOME`: Used for expanding the default directory path

use crate::constants::{DEFAULT_ENTRIES_SUBDIR, ENV_VAR_WAYMARK_DIR};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the waymark application.
///
/// Holds the directory where entry records are stored. Load from the
/// environment with [`Config::load`], then check it with
/// [`Config::validate`] before use.
pub struct Config {
    /// Directory where entry records are stored.
    ///
    /// Loaded from the `WAYMARK_DIR` environment variable with a fallback to
    /// `~/Documents/waymark`.
    pub entries_dir: PathBuf,
}

impl fmt::Debug for Config {
    // The entries path reveals the user's home layout; keep it out of logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("entries_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// An unset or empty `WAYMARK_DIR` falls back to the default directory
    /// under the user's home. Tildes are expanded in either case.
    pub fn load() -> AppResult<Self> {
        let setting = env::var(ENV_VAR_WAYMARK_DIR)
            .ok()
            .filter(|value| !value.is_empty());
        Ok(Self::from_dir_setting(setting.as_deref()))
    }

    /// Builds a config from an explicit `WAYMARK_DIR` value, or the default
    /// when `None`. Factored out of [`Config::load`] so it can be exercised
    /// without mutating process environment.
    fn from_dir_setting(setting: Option<&str>) -> Self {
        let raw = match setting {
            Some(dir) => dir.to_string(),
            None => format!("~/{}", DEFAULT_ENTRIES_SUBDIR),
        };
        let expanded = shellexpand::tilde(&raw).into_owned();
        Config {
            entries_dir: PathBuf::from(expanded),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the entries directory is not an
    /// absolute path (a relative path would silently depend on the process
    /// working directory).
    pub fn validate(&self) -> AppResult<()> {
        if !self.entries_dir.is_absolute() {
            return Err(AppError::Config(format!(
                "Entries directory must be an absolute path: {}",
                self.entries_dir.display()
            )));
        }
        Ok(())
    }
}
