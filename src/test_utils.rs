//! Test helpers: tracing setup and phase/assertion macros.
//!
//! Available to unit tests and, with the `test-internals` feature, to
//! integration tests of downstream crates.

use std::fmt::Debug;
use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a test-writer `tracing` subscriber once per process.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

#[doc(hidden)]
pub fn log_phase(name: &str) {
    tracing::info!(test = name, "test phase started");
}

#[doc(hidden)]
pub fn log_complete(name: &str) {
    tracing::info!(test = name, "test completed");
}

#[doc(hidden)]
pub fn log_assertion<E: Debug + ?Sized, A: Debug + ?Sized>(
    passed: bool,
    what: &str,
    expected: &E,
    actual: &A,
) {
    if passed {
        tracing::debug!(check = what, ?expected, ?actual, "assertion passed");
    } else {
        tracing::error!(check = what, ?expected, ?actual, "assertion failed");
    }
}

/// Marks the start of a test in the trace output.
#[macro_export]
macro_rules! test_phase {
    ($name:expr) => {
        $crate::test_utils::log_phase($name)
    };
}

/// Marks the end of a test in the trace output.
#[macro_export]
macro_rules! test_complete {
    ($name:expr) => {
        $crate::test_utils::log_complete($name)
    };
}

/// Asserts `cond`, logging the expected and actual values either way.
#[macro_export]
macro_rules! assert_with_log {
    ($cond:expr, $what:expr, $expected:expr, $actual:expr $(,)?) => {{
        let passed = $cond;
        $crate::test_utils::log_assertion(passed, $what, &$expected, &$actual);
        assert!(
            passed,
            "{}: expected {:?}, got {:?}",
            $what, $expected, $actual
        );
    }};
}
