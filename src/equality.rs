use core::fmt;

pub use ghost_internals::Comparable;
use ghost_internals::strict_eq;

/// The untyped absence of a value.
///
/// `Nil` carries no declared type, which makes it different from every typed
/// absent value: `None::<String>`, an empty `Vec<u8>` and a `Nil` are three
/// unequal things.
///
/// ```
/// use ghost::{Nil, equal};
///
/// assert!(equal(&Nil, &Nil));
/// assert!(!equal(&None::<String>, &Nil));
/// assert!(!equal(&Vec::<u8>::new(), &Nil));
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Nil;

impl fmt::Debug for Nil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("nil")
    }
}

/// Reports whether `actual` and `expected` are equal.
///
/// The values are equal when:
///
/// 1. they have the same Rust type (so `42i32` never equals `42i64`, `T` never
///    equals `Box<T>` or `Rc<T>`, and a newtype never equals the type it
///    wraps), and
/// 2. `actual == expected` under that type's `PartialEq`. Collections compare
///    by content, so two `HashSet`s or `HashMap`s with the same entries are
///    equal whatever order they iterate in, and floats use IEEE semantics.
///
/// Both sides must be `'static`. Borrowed operands are compared through an
/// owned value or a smart pointer instead.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
///
/// use ghost::equal;
///
/// let a: HashSet<u32> = (0..16).collect();
/// let b: HashSet<u32> = (0..16).rev().collect();
/// assert!(equal(&a, &b));
///
/// assert!(!equal(&42, &42u64));
/// assert!(!equal(&"a", &String::from("a")));
/// ```
#[must_use]
pub fn equal<A, E>(actual: &A, expected: &E) -> bool
where
    A: Comparable,
    E: Comparable,
{
    strict_eq(actual, expected)
}
