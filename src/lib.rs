//! levelog: a leveled logging facade over any `io::Write` sink.
//!
//! # Overview
//!
//! A [`Logger`] holds a threshold [`Severity`], a line prefix, a set of
//! decoration [`Flags`], and a [`Sink`]. Each call is gated against the
//! threshold; enabled calls write one line of the form
//!
//! ```text
//! <prefix>[<Tag>] [date ][time ][file:line: ]<message>
//! ```
//!
//! Severities, most critical first: `Fatal`, `Error`, `Warn`, `Config`,
//! `Info`, `Debug`. A fatal line is never filtered and ends the process
//! with exit status 1 after it is written.
//!
//! # Guarantees
//!
//! - **No surfaced write errors**: sink failures are printed to standard
//!   error and swallowed
//! - **Clamped thresholds**: out-of-range raw levels coerce to the nearest
//!   severity; Fatal can never be disabled
//! - **Caller locations**: file/line decoration reports the call site
//! - **Injectable termination**: tests swap the process exit for a
//!   [`PanicTerminator`]
//!
//! # Module Structure
//!
//! - [`level`]: Severity levels and the tag table
//! - [`flags`]: Line decoration flags
//! - [`sink`]: Writer and discard sinks
//! - [`terminate`]: Process termination capability
//! - [`logger`]: The logger and its per-severity operations
//! - [`config`]: Serde/env/TOML configuration
//! - [`error`](mod@error): Error types
//!
//! # Example
//!
//! ```
//! use levelog::{Flags, Logger, MemorySink, Severity};
//!
//! let out = MemorySink::new();
//! let log = Logger::new(Some(out.clone()), "app ", Severity::Info, Flags::NONE);
//!
//! levelog::info!(log, "listening on ", "0.0.0.0:", 8080);
//! levelog::debugf!(log, "hidden {}", 1);
//! levelog::errorf!(log, "lost {} peers", 2);
//!
//! assert_eq!(out.lines(), vec!["app [Info] listening on 0.0.0.0:8080", "app [Error] lost 2 peers"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod error;
pub mod flags;
mod format;
pub mod level;
pub mod logger;
mod macros;
pub mod sink;
pub mod terminate;
mod tracing_compat;

// ── Test-only modules ───────────────────────────────────────────────────
#[cfg(any(test, feature = "test-internals"))]
pub mod test_utils;

pub use config::LoggerConfig;
pub use error::{ConfigError, Error, ParseFlagError, ParseSeverityError};
pub use flags::Flags;
pub use level::Severity;
pub use logger::Logger;
pub use sink::{MemorySink, NullSink, Sink};
pub use terminate::{
    FATAL_EXIT_CODE, PanicTerminator, ProcessExit, TerminationRequested, Terminator,
    catch_termination,
};

#[doc(hidden)]
pub mod __private {
    pub use crate::format::Concat;
}
