//! Process termination capability.
//!
//! Fatal lines end the process. The logger does so only through a
//! [`Terminator`], so test suites can install [`PanicTerminator`] and
//! observe the request instead of losing the test process.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

/// Exit status used after a fatal line.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Ends the current execution path.
pub trait Terminator: Send + Sync + 'static {
    /// Terminates with the given exit status. Never returns.
    fn terminate(&self, code: i32) -> !;

    /// Stable identifier for diagnostics.
    fn terminator_id(&self) -> &'static str;
}

/// Exits the process with [`std::process::exit`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, code: i32) -> ! {
        std::process::exit(code)
    }

    fn terminator_id(&self) -> &'static str {
        "process-exit"
    }
}

/// Payload carried by the unwind a [`PanicTerminator`] starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminationRequested {
    /// Requested exit status.
    pub code: i32,
}

/// Records termination requests and unwinds instead of exiting.
///
/// The unwind keeps the "nothing after a fatal call runs" guarantee while
/// leaving the process alive. Catch it with [`catch_termination`].
#[derive(Debug)]
pub struct PanicTerminator {
    requests: AtomicUsize,
    last_code: AtomicI32,
}

impl PanicTerminator {
    /// Creates a terminator with no recorded requests.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            requests: AtomicUsize::new(0),
            last_code: AtomicI32::new(0),
        }
    }

    /// Number of termination requests so far.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::Acquire)
    }

    /// Exit status of the most recent request, if any.
    #[must_use]
    pub fn last_code(&self) -> Option<i32> {
        (self.requests() > 0).then(|| self.last_code.load(Ordering::Acquire))
    }
}

impl Default for PanicTerminator {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminator for PanicTerminator {
    fn terminate(&self, code: i32) -> ! {
        self.last_code.store(code, Ordering::Release);
        self.requests.fetch_add(1, Ordering::AcqRel);
        panic::panic_any(TerminationRequested { code })
    }

    fn terminator_id(&self) -> &'static str {
        "panic"
    }
}

/// Runs `f`, returning the termination request it raised, if any.
///
/// Panics that are not termination requests are resumed.
pub fn catch_termination<F>(f: F) -> Option<TerminationRequested>
where
    F: FnOnce(),
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => None,
        Err(payload) => match payload.downcast::<TerminationRequested>() {
            Ok(request) => Some(*request),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// Terminates when dropped unless [`ExitGuard::fire`] consumed it first.
///
/// Armed before a fatal line is written, so termination still happens if
/// the write path returns early or unwinds.
pub(crate) struct ExitGuard<'a> {
    terminator: &'a dyn Terminator,
    code: i32,
    armed: bool,
}

impl<'a> ExitGuard<'a> {
    pub(crate) fn arm(terminator: &'a dyn Terminator, code: i32) -> Self {
        Self {
            terminator,
            code,
            armed: true,
        }
    }

    pub(crate) fn fire(mut self) -> ! {
        self.armed = false;
        self.terminator.terminate(self.code)
    }
}

impl Drop for ExitGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.armed = false;
            self.terminator.terminate(self.code);
        }
    }
}
