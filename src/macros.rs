//! Logging macros.
//!
//! Each severity has two forms. The plain form concatenates the `Display`
//! output of its arguments with no separator:
//!
//! ```
//! # use levelog::{Flags, Logger, MemorySink, Severity};
//! # let out = MemorySink::new();
//! # let log = Logger::new(Some(out.clone()), "", Severity::Debug, Flags::NONE);
//! levelog::info!(log, "worker ", 3, " ready");
//! # assert_eq!(out.output(), "[Info] worker 3 ready\n");
//! ```
//!
//! The `f` form takes a format string:
//!
//! ```
//! # use levelog::{Flags, Logger, MemorySink, Severity};
//! # let out = MemorySink::new();
//! # let log = Logger::new(Some(out.clone()), "", Severity::Debug, Flags::NONE);
//! levelog::infof!(log, "worker {} ready in {:.1}s", 3, 1.5);
//! # assert_eq!(out.output(), "[Info] worker 3 ready in 1.5s\n");
//! ```
//!
//! Both forms report the macro call site as the line's source location.

#[doc(hidden)]
#[macro_export]
macro_rules! __levelog_concat {
    ($logger:expr, $method:ident $(, $arg:expr)*) => {
        $logger.$method(::core::format_args!(
            "{}",
            $crate::__private::Concat(&[$(&$arg as &dyn ::core::fmt::Display),*])
        ))
    };
}

/// Logs the concatenated arguments at [`Severity::Debug`](crate::Severity::Debug).
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__levelog_concat!($logger, debug $(, $arg)*)
    };
}

/// Logs a formatted message at [`Severity::Debug`](crate::Severity::Debug).
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($fmt:tt)+) => {
        $logger.debug(::core::format_args!($($fmt)+))
    };
}

/// Logs the concatenated arguments at [`Severity::Info`](crate::Severity::Info).
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__levelog_concat!($logger, info $(, $arg)*)
    };
}

/// Logs a formatted message at [`Severity::Info`](crate::Severity::Info).
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($fmt:tt)+) => {
        $logger.info(::core::format_args!($($fmt)+))
    };
}

/// Logs the concatenated arguments at [`Severity::Config`](crate::Severity::Config).
#[macro_export]
macro_rules! config {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__levelog_concat!($logger, config $(, $arg)*)
    };
}

/// Logs a formatted message at [`Severity::Config`](crate::Severity::Config).
#[macro_export]
macro_rules! configf {
    ($logger:expr, $($fmt:tt)+) => {
        $logger.config(::core::format_args!($($fmt)+))
    };
}

/// Logs the concatenated arguments at [`Severity::Warn`](crate::Severity::Warn).
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__levelog_concat!($logger, warn $(, $arg)*)
    };
}

/// Logs a formatted message at [`Severity::Warn`](crate::Severity::Warn).
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($fmt:tt)+) => {
        $logger.warn(::core::format_args!($($fmt)+))
    };
}

/// Logs the concatenated arguments at [`Severity::Error`](crate::Severity::Error).
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__levelog_concat!($logger, error $(, $arg)*)
    };
}

/// Logs a formatted message at [`Severity::Error`](crate::Severity::Error).
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($fmt:tt)+) => {
        $logger.error(::core::format_args!($($fmt)+))
    };
}

/// Logs the concatenated arguments at [`Severity::Fatal`](crate::Severity::Fatal),
/// then terminates the process with exit status 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__levelog_concat!($logger, fatal $(, $arg)*)
    };
}

/// Logs a formatted message at [`Severity::Fatal`](crate::Severity::Fatal),
/// then terminates the process with exit status 1.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($fmt:tt)+) => {
        $logger.fatal(::core::format_args!($($fmt)+))
    };
}
