/// Checks that two values are equal, letting the test continue on failure.
///
/// This macro can be invoked in two ways:
///
/// - `expect!(t, actual, expected)` behaves like [`expect`](crate::expect()).
/// - `expect!(t, actual, expected, index)` behaves like
///   [`expect_example`](crate::expect_example()): the message is prefixed
///   with the one-based ordinal of the zero-based loop `index`.
///
/// Like the functions, the macro attributes failures to the line where it is
/// invoked.
///
/// # Examples
///
/// ```
/// use ghost::{Recorder, expect};
///
/// let r = Recorder::new();
/// for (i, (word, length)) in [("one", 3usize), ("three", 4)].into_iter().enumerate() {
///     expect!(&r, word.len(), length, i);
/// }
///
/// let failures = r.continued();
/// assert_eq!(failures.len(), 1);
/// assert!(failures[0].contains("\n2. \thave (usize): 5"));
/// ```
#[macro_export]
macro_rules! expect {
    ($t:expr, $actual:expr, $expected:expr $(,)?) => {
        $crate::__private::expect_with($t, $actual, $expected, &[])
    };
    ($t:expr, $actual:expr, $expected:expr, $index:expr $(,)?) => {
        $crate::__private::expect_with($t, $actual, $expected, &[$index])
    };
}

/// Checks that two values are not equal, letting the test continue on
/// failure.
///
/// The counterpart of [`expect!`]: `reject!(t, actual, expected)` behaves
/// like [`reject`](crate::reject()) and the four-argument form like
/// [`reject_example`](crate::reject_example()).
///
/// # Examples
///
/// ```
/// use ghost::{Recorder, reject};
///
/// let r = Recorder::new();
/// reject!(&r, "a", "A");
/// reject!(&r, 7, 7, 0);
///
/// let failures = r.continued();
/// assert_eq!(failures.len(), 1);
/// assert!(failures[0].contains("actual should != expected\n1. \thave (i32): 7"));
/// ```
#[macro_export]
macro_rules! reject {
    ($t:expr, $actual:expr, $expected:expr $(,)?) => {
        $crate::__private::reject_with($t, $actual, $expected, &[])
    };
    ($t:expr, $actual:expr, $expected:expr, $index:expr $(,)?) => {
        $crate::__private::reject_with($t, $actual, $expected, &[$index])
    };
}

#[cfg(test)]
mod tests {
    use crate::reporter::Recorder;

    #[test]
    fn test_macros_attribute_the_invoking_line() {
        let r = Recorder::new();
        let (_, line) = (expect!(&r, 1, 2), line!());
        let failures = r.continued();
        assert_eq!(failures.len(), 1);
        assert!(
            failures[0].starts_with(&format!("\nmacros.rs:{line}: ")),
            "{}",
            failures[0]
        );
    }

    #[test]
    fn test_macro_index_forms() {
        let r = Recorder::new();
        expect!(&r, 'a', 'b', 0);
        reject!(&r, 'a', 'a', 4,);
        reject!(&r, 'a', 'a');
        let failures = r.continued();
        assert_eq!(failures.len(), 3);
        assert!(failures[0].contains("\n1. \thave (char): 'a'\n\twant (char): 'b'"));
        assert!(failures[1].contains("\n5. \thave (char): 'a'\n\tand  (char): 'a'"));
        assert!(failures[2].contains("\n \thave (char): 'a'"));
    }
}
