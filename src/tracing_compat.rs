//! Optional tracing integration for the facade's own diagnostics.
//!
//! With the `tracing-integration` feature these are the `tracing` macros.
//! Without it they expand to nothing, so diagnostics cost nothing.

#[cfg(feature = "tracing-integration")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing-integration"))]
macro_rules! noop_debug {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing-integration"))]
macro_rules! noop_warn {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing-integration"))]
pub(crate) use {noop_debug as debug, noop_warn as warn};
