//! Logger configuration.
//!
//! [`LoggerConfig`] holds the construction parameters of a [`Logger`] so
//! they can come from code, environment variables, or (with the
//! `config-file` feature) a TOML file.
//!
//! ```toml
//! prefix = "svc "
//! level = "warning"
//! flags = ["std", "shortfile"]
//! ```
//!
//! `level` takes a name or a numeric rank; ranks out of range clamp to
//! `fatal` or `debug`, the same as `LEVELOG_LEVEL`.

use crate::error::ConfigError;
use crate::flags::Flags;
use crate::level::Severity;
use crate::logger::Logger;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Environment variable overriding the prefix.
pub const ENV_PREFIX: &str = "LEVELOG_PREFIX";
/// Environment variable overriding the threshold.
pub const ENV_LEVEL: &str = "LEVELOG_LEVEL";
/// Environment variable overriding the flags (comma separated names).
pub const ENV_FLAGS: &str = "LEVELOG_FLAGS";

/// Construction parameters for a [`Logger`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Text written at the start of every line.
    pub prefix: String,
    /// Least critical severity emitted.
    pub level: Severity,
    /// Line decorations.
    pub flags: Flags,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            level: Severity::Info,
            flags: Flags::STD,
        }
    }
}

impl LoggerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the threshold.
    #[must_use]
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Sets the flags.
    #[must_use]
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Default configuration with process environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env()
    }

    /// Applies overrides from the process environment.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Applies overrides read through `lookup`.
    ///
    /// Unset variables leave the field unchanged.
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(prefix) = lookup(ENV_PREFIX) {
            self.prefix = prefix;
        }
        if let Some(level) = lookup(ENV_LEVEL) {
            self.level = level
                .parse::<Severity>()
                .map_err(|source| ConfigError::InvalidLevel {
                    var: ENV_LEVEL,
                    source,
                })?;
        }
        if let Some(flags) = lookup(ENV_FLAGS) {
            self.flags = flags
                .parse::<Flags>()
                .map_err(|source| ConfigError::InvalidFlags {
                    var: ENV_FLAGS,
                    source,
                })?;
        }
        Ok(self)
    }

    /// Parses a TOML document.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses a TOML file.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Builds a logger writing to `writer` (`None` discards).
    pub fn build<W>(&self, writer: Option<W>) -> Logger
    where
        W: Write + Send + 'static,
    {
        Logger::new(writer, self.prefix.clone(), self.level, self.flags)
    }

    /// Builds a logger that discards every line.
    pub fn build_discarding(&self) -> Logger {
        Logger::discarding(self.prefix.clone(), self.level, self.flags)
    }
}
