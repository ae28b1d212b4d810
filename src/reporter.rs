//! Reporting surfaces: where failure messages go.
//!
//! An assertion never decides on its own what a failure does. It hands the
//! formatted message to a [`Reporter`], which records it and either lets the
//! test continue ([`Reporter::report_and_continue`]) or stops it
//! ([`Reporter::report_and_abort`]).
//!
//! Any type implementing the two methods can be passed to the assertions. Two
//! implementations are provided:
//!
//! - [`Tester`] for the built-in Rust test harness.
//! - [`Recorder`] for inspecting messages, e.g. when testing custom assertion
//!   helpers.
//!
//! # Custom reporters
//!
//! ```
//! use std::cell::RefCell;
//!
//! use ghost::Reporter;
//!
//! #[derive(Default)]
//! struct Log(RefCell<Vec<String>>);
//!
//! impl Reporter for Log {
//!     fn report_and_continue(&self, message: &str) {
//!         self.0.borrow_mut().push(message.to_owned());
//!     }
//!
//!     fn report_and_abort(&self, message: &str) -> ! {
//!         panic!("{message}");
//!     }
//! }
//!
//! let log = Log::default();
//! ghost::expect(&log, 1, 2);
//! assert_eq!(log.0.borrow().len(), 1);
//! ```

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::{Mutex, MutexGuard, PoisonError},
    thread,
};

/// The capability assertions report failures through.
///
/// Implementations decide how a failure is recorded. They must honor the
/// control-flow contract of each method: `report_and_continue` returns to the
/// caller, `report_and_abort` never does.
pub trait Reporter {
    /// Records a failure and lets the current test keep running.
    fn report_and_continue(&self, message: &str);

    /// Records a failure and stops the current test. Nothing after this call
    /// in the same test runs.
    fn report_and_abort(&self, message: &str) -> !;
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report_and_continue(&self, message: &str) {
        (**self).report_and_continue(message);
    }

    fn report_and_abort(&self, message: &str) -> ! {
        (**self).report_and_abort(message)
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report_and_continue(&self, message: &str) {
        (**self).report_and_continue(message);
    }

    fn report_and_abort(&self, message: &str) -> ! {
        (**self).report_and_abort(message)
    }
}

/// Locks `mutex`, recovering the data if another thread panicked while
/// holding it. A panic inside a test is an expected event here.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Reporter for tests run by the built-in Rust test harness.
///
/// - Continue-mode failures are written to stderr right away (the harness
///   shows captured output of failing tests) and remembered.
/// - Abort-mode failures panic with the message, failing the test at once.
/// - When a `Tester` holding continue-mode failures is dropped, it panics with
///   all of them, failing the test at the end.
///
/// ```
/// use ghost::{Tester, expect};
///
/// let t = Tester::new();
/// expect(&t, 6 * 7, 42);
/// ```
///
/// ```should_panic
/// use ghost::{Tester, expect};
///
/// let t = Tester::new();
/// expect(&t, 1, 2);
/// expect(&t, "still", "running");
/// // `t` is dropped here and fails the test
/// ```
#[derive(Debug, Default)]
pub struct Tester {
    failures: Mutex<Vec<String>>,
}

impl Tester {
    /// Creates a reporter with no recorded failures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a failure was reported.
    #[must_use]
    pub fn failed(&self) -> bool {
        !lock(&self.failures).is_empty()
    }

    /// Messages of the continue-mode failures reported so far.
    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        lock(&self.failures).clone()
    }

    /// Ends the test, panicking if any failure was reported.
    ///
    /// Dropping the `Tester` has the same effect; calling `finish` makes the
    /// point at which the test fails explicit.
    #[track_caller]
    pub fn finish(self) {
        let failures = core::mem::take(&mut *lock(&self.failures));
        if !failures.is_empty() {
            panic!("{}", summary(&failures));
        }
    }
}

impl Reporter for Tester {
    fn report_and_continue(&self, message: &str) {
        eprintln!("{message}");
        lock(&self.failures).push(message.to_owned());
    }

    fn report_and_abort(&self, message: &str) -> ! {
        panic!("{message}");
    }
}

impl Drop for Tester {
    fn drop(&mut self) {
        let failures = core::mem::take(
            self.failures
                .get_mut()
                .unwrap_or_else(PoisonError::into_inner),
        );
        if !failures.is_empty() && !thread::panicking() {
            panic!("{}", summary(&failures));
        }
    }
}

/// Panic message listing every continue-mode failure.
fn summary(failures: &[String]) -> String {
    let noun = if failures.len() == 1 {
        "expectation"
    } else {
        "expectations"
    };
    format!("{} {noun} failed:{}", failures.len(), failures.concat())
}

/// Panic payload used by [`Recorder::report_and_abort`].
#[derive(Debug)]
struct Aborted;

/// Reporter that records messages instead of failing anything.
///
/// Continue-mode messages are appended to [`continued`](Recorder::continued).
/// Abort-mode messages are stored in [`aborted`](Recorder::aborted) and then
/// the current closure passed to [`run`](Recorder::run) is unwound, without
/// printing a panic message.
///
/// ```
/// use ghost::{Recorder, assert, expect};
///
/// let r = Recorder::new();
/// let completed = r.run(|r| {
///     expect(r, 1, 2);
///     assert(r, "a", "b");
///     unreachable!();
/// });
///
/// assert!(!completed);
/// assert_eq!(r.continued().len(), 1);
/// assert!(r.aborted().is_some());
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    continued: Mutex<Vec<String>>,
    aborted: Mutex<Option<String>>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `body`, returning `true` if it ran to completion and `false` if
    /// it was stopped by an abort-mode failure reported to this recorder.
    ///
    /// Panics that did not come from an abort are propagated unchanged.
    pub fn run<F>(&self, body: F) -> bool
    where
        F: FnOnce(&Self),
    {
        match panic::catch_unwind(AssertUnwindSafe(|| body(self))) {
            Ok(()) => true,
            Err(payload) if is_abort(payload.as_ref()) => false,
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    /// Messages reported through [`Reporter::report_and_continue`], in order.
    #[must_use]
    pub fn continued(&self) -> Vec<String> {
        lock(&self.continued).clone()
    }

    /// The message of the most recent abort-mode failure, if any.
    #[must_use]
    pub fn aborted(&self) -> Option<String> {
        lock(&self.aborted).clone()
    }

    /// Total number of failures reported in either mode.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        lock(&self.continued).len() + usize::from(lock(&self.aborted).is_some())
    }

    /// Returns `true` if nothing was reported.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failure_count() == 0
    }
}

impl Reporter for Recorder {
    fn report_and_continue(&self, message: &str) {
        lock(&self.continued).push(message.to_owned());
    }

    fn report_and_abort(&self, message: &str) -> ! {
        *lock(&self.aborted) = Some(message.to_owned());
        panic::resume_unwind(Box::new(Aborted))
    }
}

fn is_abort(payload: &(dyn Any + Send)) -> bool {
    payload.is::<Aborted>()
}
