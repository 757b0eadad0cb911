//! Shared helpers for levelog integration tests.

#![allow(dead_code)]

use levelog::{Flags, Logger, MemorySink, PanicTerminator, Severity};
use std::sync::{Arc, Once};
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a test-writer subscriber honoring `RUST_LOG` (default `debug`).
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Logger over an in-memory buffer with a non-exiting terminator.
pub fn test_logger(
    prefix: &str,
    level: Severity,
    flags: Flags,
) -> (Logger, MemorySink, Arc<PanicTerminator>) {
    let out = MemorySink::new();
    let terminator = Arc::new(PanicTerminator::new());
    let logger = Logger::new(Some(out.clone()), prefix, level, flags)
        .with_terminator(terminator.clone());
    (logger, out, terminator)
}

#[allow(unused_macros)]
macro_rules! test_phase {
    ($name:expr) => {
        tracing::info!(test = $name, "test phase started")
    };
}

#[allow(unused_macros)]
macro_rules! test_complete {
    ($name:expr) => {
        tracing::info!(test = $name, "test completed")
    };
}

#[allow(unused_macros)]
macro_rules! assert_with_log {
    ($cond:expr, $what:expr, $expected:expr, $actual:expr $(,)?) => {{
        let passed = $cond;
        if passed {
            tracing::debug!(check = $what, expected = ?$expected, actual = ?$actual, "assertion passed");
        } else {
            tracing::error!(check = $what, expected = ?$expected, actual = ?$actual, "assertion failed");
        }
        assert!(passed, "{}: expected {:?}, got {:?}", $what, $expected, $actual);
    }};
}
