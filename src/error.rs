//! Error types.
//!
//! Logging calls never return these. Write and flush failures are built as
//! [`Error`] values only to be reported on standard error; the parse and
//! configuration errors surface from `FromStr` impls and [`crate::config`].

use crate::level::Severity;
use std::io::{self, Write};
use thiserror::Error;

/// A failure inside the logging path.
#[derive(Debug, Error)]
pub enum Error {
    /// The sink rejected a line.
    #[error("levelog: failed to write {severity} line: {source}")]
    Write {
        /// Severity of the line being written.
        severity: Severity,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The sink failed to flush.
    #[error("levelog: failed to flush sink: {0}")]
    Flush(#[source] io::Error),
}

impl Error {
    /// Prints this error to standard error.
    pub(crate) fn report(&self) {
        self.report_to(&mut io::stderr().lock());
    }

    /// Writes this error as one line to `out`, ignoring any failure.
    pub(crate) fn report_to<W: Write + ?Sized>(&self, out: &mut W) {
        let _ = writeln!(out, "{self}");
    }
}

/// A severity name that matched no level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity `{input}` (expected fatal, error, warn, config, info or debug)")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A formatting-flag name that matched no flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown flag `{input}` (expected date, time, microseconds, longfile, shortfile or std)"
)]
pub struct ParseFlagError {
    input: String,
}

impl ParseFlagError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Errors produced while loading a [`crate::LoggerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held an invalid severity.
    #[error("invalid {var}: {source}")]
    InvalidLevel {
        /// Variable name.
        var: &'static str,
        /// Parse failure.
        #[source]
        source: ParseSeverityError,
    },
    /// An environment variable held an invalid flag list.
    #[error("invalid {var}: {source}")]
    InvalidFlags {
        /// Variable name.
        var: &'static str,
        /// Parse failure.
        #[source]
        source: ParseFlagError,
    },
    /// Config file could not be read.
    #[cfg(feature = "config-file")]
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    /// Config file contents were not valid TOML for a logger config.
    #[cfg(feature = "config-file")]
    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}
