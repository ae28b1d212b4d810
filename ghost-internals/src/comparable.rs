//! Equality between values whose types are only known at run time.
//!
//! [`Comparable`] is the object-safe face of `PartialEq + Debug`: it lets two
//! values of unrelated static types be compared through `&dyn Comparable`.
//! The comparison first checks that both values have the same concrete type
//! and only then defers to that type's `PartialEq` impl.

use core::{
    any::{Any, TypeId},
    fmt,
};

/// A value that can be compared against a value of any other type.
///
/// This trait is implemented for every `'static` type that implements
/// `PartialEq` and `Debug`. It is not meant to be implemented by hand.
///
/// `&dyn Comparable` values also compare with `==`:
///
/// ```
/// use ghost_internals::Comparable;
///
/// let a: &dyn Comparable = &42i32;
/// let b: &dyn Comparable = &42i64;
/// assert!(a == a);
/// assert!(a != b);
/// ```
pub trait Comparable: Any + fmt::Debug {
    /// Returns `self` as [`Any`], for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// The [`TypeId`] of the concrete type.
    fn concrete_type_id(&self) -> TypeId;

    /// The [`type_name`](core::any::type_name) of the concrete type.
    fn concrete_type_name(&self) -> &'static str;

    /// Returns `true` if `other` has the same concrete type as `self` and the
    /// type's `PartialEq` impl considers the two equal.
    fn eq_dyn(&self, other: &dyn Comparable) -> bool;
}

impl<T> Comparable for T
where
    T: Any + PartialEq + fmt::Debug,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn concrete_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn concrete_type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }

    fn eq_dyn(&self, other: &dyn Comparable) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

impl PartialEq for dyn Comparable {
    fn eq(&self, other: &Self) -> bool {
        self.eq_dyn(other)
    }
}

/// Reports whether `actual` and `expected` have the same concrete type and are
/// equal under that type's `PartialEq`.
///
/// `actual`'s impl decides. Values of different types are never equal, even
/// when one would convert losslessly into the other.
///
/// # Examples
///
/// ```
/// use ghost_internals::strict_eq;
///
/// assert!(strict_eq(&vec![1, 2], &vec![1, 2]));
/// assert!(!strict_eq(&42i32, &42i64));
/// assert!(!strict_eq(&"a", &String::from("a")));
/// ```
#[must_use]
pub fn strict_eq(actual: &dyn Comparable, expected: &dyn Comparable) -> bool {
    actual.eq_dyn(expected)
}

#[cfg(test)]
mod tests {
    use alloc::{
        boxed::Box,
        collections::{BTreeMap, BTreeSet},
        string::String,
        vec,
        vec::Vec,
    };

    use super::*;

    #[test]
    fn test_comparable_is_object_safe() {
        static_assertions::assert_obj_safe!(Comparable);
        static_assertions::assert_impl_all!(Box<dyn Comparable>: Comparable, PartialEq);
    }

    #[test]
    fn test_same_type() {
        assert!(strict_eq(&42, &42));
        assert!(!strict_eq(&42, &7));
        assert!(strict_eq(&"a", &"a"));
        assert!(strict_eq(&'x', &'x'));
        assert!(strict_eq(&(), &()));
        assert!(strict_eq(&None::<u8>, &None::<u8>));
    }

    #[test]
    fn test_type_strictness() {
        assert!(!strict_eq(&42i32, &42i64));
        assert!(!strict_eq(&42i32, &42u32));
        assert!(!strict_eq(&42, &42.0));
        assert!(!strict_eq(&42, &"42"));
        assert!(!strict_eq(&String::from("a"), &"a"));
        assert!(!strict_eq(&None::<u8>, &None::<i8>));
        assert!(!strict_eq(&b'a', &'a'));
    }

    #[test]
    fn test_floats() {
        assert!(strict_eq(&0.5f64, &0.5f64));
        assert!(strict_eq(&0.0f64, &-0.0f64));
        assert!(!strict_eq(&f64::NAN, &f64::NAN));
        assert!(!strict_eq(&1.0f32, &1.0f64));
    }

    #[test]
    fn test_composites() {
        assert!(strict_eq(&vec![1, 2, 3], &vec![1, 2, 3]));
        assert!(!strict_eq(&vec![1, 2, 3], &vec![3, 2, 1]));
        assert!(!strict_eq(&vec![1, 2, 3], &[1, 2, 3]));

        let a: BTreeSet<u8> = [3, 1, 2].into_iter().collect();
        let b: BTreeSet<u8> = [1, 2, 3].into_iter().collect();
        assert!(strict_eq(&a, &b));

        let nested_a = vec![BTreeMap::from([(1u8, vec!["p"])])];
        let nested_b = vec![BTreeMap::from([(1u8, vec!["p"])])];
        assert!(strict_eq(&nested_a, &nested_b));
        assert!(!strict_eq(&nested_a, &Vec::<BTreeMap<u8, Vec<&str>>>::new()));
    }

    #[test]
    fn test_trait_objects() {
        let mixed: Vec<Box<dyn Comparable>> = vec![Box::new(1u8), Box::new("one")];
        let same: Vec<Box<dyn Comparable>> = vec![Box::new(1u8), Box::new("one")];
        let other: Vec<Box<dyn Comparable>> = vec![Box::new(1i8), Box::new("one")];
        assert!(strict_eq(&mixed, &same));
        assert!(!strict_eq(&mixed, &other));
    }

    #[test]
    fn test_concrete_type() {
        let value: &dyn Comparable = &7u16;
        assert_eq!(value.concrete_type_id(), TypeId::of::<u16>());
        assert_eq!(value.concrete_type_name(), "u16");
        assert_eq!(value.as_any().downcast_ref::<u16>(), Some(&7));
    }
}
