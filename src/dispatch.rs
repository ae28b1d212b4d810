//! The four assertions.
//!
//! Every public function here is `#[track_caller]`, as is [`check`], the one
//! internal frame they all share. [`caller`] relies on that chain to name the
//! user's line; see the [`call_site`](crate::call_site) module.

use crate::{
    call_site::caller,
    equality::{Comparable, equal},
    message::{Operand, Polarity, Violation, example_num},
    reporter::Reporter,
};

/// What a violation does to the running test.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    Continue,
    Abort,
}

/// Compares, and on a polarity mismatch reports a formatted [`Violation`].
#[track_caller]
fn check<R, A, E>(
    t: &R,
    mode: Mode,
    polarity: Polarity,
    actual: &A,
    expected: &E,
    index: &[usize],
) where
    R: Reporter + ?Sized,
    A: Comparable,
    E: Comparable,
{
    let is_equal = equal(actual, expected);
    if polarity.is_satisfied_by(is_equal) {
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "ghost", %polarity, "comparison held");
        return;
    }

    let violation = Violation {
        call_site: caller(),
        polarity,
        example: example_num(index),
        actual: Operand::new(actual),
        expected: Operand::new(expected),
    };

    #[cfg(feature = "tracing")]
    tracing::warn!(
        target: "ghost",
        file = %violation.call_site.file,
        line = violation.call_site.line,
        %polarity,
        mode = ?mode,
        "comparison failed"
    );

    let message = violation.to_string();
    match mode {
        Mode::Continue => t.report_and_continue(&message),
        Mode::Abort => t.report_and_abort(&message),
    }
}

/// Reports through [`Reporter::report_and_continue`] when `actual` is not
/// equal to `expected`.
///
/// Equality is decided by [`equal`](crate::equal()): same type, and equal
/// under that type's `PartialEq`.
///
/// ```
/// use ghost::{Recorder, expect};
///
/// let r = Recorder::new();
/// expect(&r, vec![1, 2], vec![1, 2]);
/// expect(&r, 1, 2);
/// assert_eq!(r.continued().len(), 1);
/// ```
#[track_caller]
pub fn expect<R, A, E>(t: &R, actual: A, expected: E)
where
    R: Reporter + ?Sized,
    A: Comparable,
    E: Comparable,
{
    check(t, Mode::Continue, Polarity::Equal, &actual, &expected, &[]);
}

/// Like [`expect`], labelling the message with the one-based ordinal of the
/// zero-based example `index` of a table-driven test.
#[track_caller]
pub fn expect_example<R, A, E>(t: &R, actual: A, expected: E, index: usize)
where
    R: Reporter + ?Sized,
    A: Comparable,
    E: Comparable,
{
    check(t, Mode::Continue, Polarity::Equal, &actual, &expected, &[index]);
}

/// Reports through [`Reporter::report_and_continue`] when `actual` is equal
/// to `expected`.
///
/// ```
/// use ghost::{Recorder, reject};
///
/// let r = Recorder::new();
/// reject(&r, 42, 42i64);
/// reject(&r, 42, 7 * 6);
/// assert_eq!(r.continued().len(), 1);
/// ```
#[track_caller]
pub fn reject<R, A, E>(t: &R, actual: A, expected: E)
where
    R: Reporter + ?Sized,
    A: Comparable,
    E: Comparable,
{
    check(t, Mode::Continue, Polarity::Unequal, &actual, &expected, &[]);
}

/// Like [`reject`], labelling the message with the one-based ordinal of the
/// zero-based example `index` of a table-driven test.
#[track_caller]
pub fn reject_example<R, A, E>(t: &R, actual: A, expected: E, index: usize)
where
    R: Reporter + ?Sized,
    A: Comparable,
    E: Comparable,
{
    check(t, Mode::Continue, Polarity::Unequal, &actual, &expected, &[index]);
}

/// Reports through [`Reporter::report_and_abort`], ending the test, when
/// `actual` is not equal to `expected`.
///
/// There is no indexed form: an aborting assertion stops at the first
/// violated condition.
///
/// ```should_panic
/// use ghost::{Tester, assert};
///
/// let t = Tester::new();
/// assert(&t, 1, 2);
/// unreachable!("the test stops above");
/// ```
#[track_caller]
pub fn assert<R, A, E>(t: &R, actual: A, expected: E)
where
    R: Reporter + ?Sized,
    A: Comparable,
    E: Comparable,
{
    check(t, Mode::Abort, Polarity::Equal, &actual, &expected, &[]);
}

/// Reports through [`Reporter::report_and_abort`], ending the test, when
/// `actual` is equal to `expected`.
#[track_caller]
pub fn refute<R, A, E>(t: &R, actual: A, expected: E)
where
    R: Reporter + ?Sized,
    A: Comparable,
    E: Comparable,
{
    check(t, Mode::Abort, Polarity::Unequal, &actual, &expected, &[]);
}

/// Backs the [`expect!`](crate::expect!) macro.
#[doc(hidden)]
#[track_caller]
pub fn expect_with<R, A, E>(t: &R, actual: A, expected: E, index: &[usize])
where
    R: Reporter + ?Sized,
    A: Comparable,
    E: Comparable,
{
    check(t, Mode::Continue, Polarity::Equal, &actual, &expected, index);
}

/// Backs the [`reject!`](crate::reject!) macro.
#[doc(hidden)]
#[track_caller]
pub fn reject_with<R, A, E>(t: &R, actual: A, expected: E, index: &[usize])
where
    R: Reporter + ?Sized,
    A: Comparable,
    E: Comparable,
{
    check(t, Mode::Continue, Polarity::Unequal, &actual, &expected, index);
}
