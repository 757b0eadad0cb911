//! The leveled logger.
//!
//! A [`Logger`] compares each call's severity against its threshold, renders
//! enabled lines through one shared formatter, and writes them to its
//! [`Sink`]. Sink failures go to standard error and never reach the caller.
//! A fatal line terminates through the logger's [`Terminator`] once the
//! write has been attempted.

use crate::error::Error;
use crate::flags::Flags;
use crate::format::LineFormatter;
use crate::level::Severity;
use crate::sink::Sink;
use crate::terminate::{ExitGuard, FATAL_EXIT_CODE, ProcessExit, Terminator};
use crate::tracing_compat;
use chrono::Local;
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::sync::Arc;

/// Severity-gated line logger over a byte sink.
///
/// # Example
///
/// ```
/// use levelog::{Flags, Logger, MemorySink, Severity};
///
/// let out = MemorySink::new();
/// let log = Logger::new(Some(out.clone()), "app", Severity::Warn, Flags::NONE);
///
/// levelog::warn!(log, "disk ", 92, "% full");
/// levelog::infof!(log, "suppressed {}", 1);
///
/// assert_eq!(out.output(), "app[Warning] disk 92% full\n");
/// ```
pub struct Logger {
    threshold: Severity,
    formatter: LineFormatter,
    sink: Mutex<Sink>,
    terminator: Arc<dyn Terminator>,
}

impl Logger {
    /// Creates a logger writing to `writer`, or discarding everything when
    /// `writer` is `None`.
    pub fn new<W>(writer: Option<W>, prefix: impl Into<String>, level: Severity, flags: Flags) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_sink(Sink::from(writer), prefix, level, flags)
    }

    /// Creates a logger from a raw level rank, clamping it into
    /// `Fatal..=Debug`.
    pub fn from_raw_level<W>(
        writer: Option<W>,
        prefix: impl Into<String>,
        level: i64,
        flags: Flags,
    ) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::new(writer, prefix, Severity::from_raw(level), flags)
    }

    /// Creates a logger that discards every line.
    pub fn discarding(prefix: impl Into<String>, level: Severity, flags: Flags) -> Self {
        Self::with_sink(Sink::discard(), prefix, level, flags)
    }

    /// Creates a logger over a prepared [`Sink`].
    pub fn with_sink(sink: Sink, prefix: impl Into<String>, level: Severity, flags: Flags) -> Self {
        tracing_compat::debug!(
            threshold = %level,
            flags = %flags,
            discard = sink.is_discard(),
            "levelog logger constructed"
        );
        Self {
            threshold: level,
            formatter: LineFormatter::new(prefix.into(), flags),
            sink: Mutex::new(sink),
            terminator: Arc::new(ProcessExit),
        }
    }

    /// Replaces the capability used to end the process after a fatal line.
    #[must_use]
    pub fn with_terminator(mut self, terminator: Arc<dyn Terminator>) -> Self {
        self.terminator = terminator;
        self
    }

    /// Least critical severity this logger emits.
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Text written at the start of every line.
    pub fn prefix(&self) -> &str {
        self.formatter.prefix()
    }

    /// Line decorations.
    pub const fn flags(&self) -> Flags {
        self.formatter.flags()
    }

    /// Returns true if lines of `severity` are written.
    pub const fn enabled(&self, severity: Severity) -> bool {
        severity.is_enabled_at(self.threshold)
    }

    /// Logs at [`Severity::Debug`].
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Debug, Location::caller(), args);
    }

    /// Logs at [`Severity::Info`].
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Info, Location::caller(), args);
    }

    /// Logs at [`Severity::Config`].
    #[track_caller]
    pub fn config(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Config, Location::caller(), args);
    }

    /// Logs at [`Severity::Warn`].
    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Warn, Location::caller(), args);
    }

    /// Logs at [`Severity::Error`].
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Error, Location::caller(), args);
    }

    /// Logs at [`Severity::Fatal`], then terminates with exit status 1.
    ///
    /// Fatal lines are never filtered. Termination happens whether or not
    /// the write succeeded.
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        let exit = ExitGuard::arm(&*self.terminator, FATAL_EXIT_CODE);
        self.emit(Severity::Fatal, Location::caller(), args);
        exit.fire()
    }

    /// Logs at `severity`. A [`Severity::Fatal`] line terminates.
    #[track_caller]
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if severity.is_fatal() {
            self.fatal(args);
        }
        self.emit(severity, Location::caller(), args);
    }

    /// Flushes the sink, reporting any failure on standard error.
    pub fn flush(&self) {
        if let Err(source) = self.sink.lock().flush() {
            let err = Error::Flush(source);
            tracing_compat::warn!(error = %err, "levelog flush failed");
            err.report();
        }
    }

    fn emit(&self, severity: Severity, location: &Location<'_>, args: fmt::Arguments<'_>) {
        if !self.enabled(severity) {
            return;
        }

        let mut line = String::new();
        self.formatter
            .render(&mut line, severity, &Local::now(), location, args);

        let written = self.sink.lock().write_all(line.as_bytes());
        if let Err(source) = written {
            let err = Error::Write { severity, source };
            tracing_compat::warn!(error = %err, "levelog write failed");
            err.report();
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("prefix", &self.formatter.prefix())
            .field("flags", &self.formatter.flags())
            .field("sink", &*self.sink.lock())
            .field("terminator", &self.terminator.terminator_id())
            .finish()
    }
}
