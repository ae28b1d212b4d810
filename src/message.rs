//! Formatting of failure messages.
//!
//! A message names the call site, states which relationship was wanted, and
//! shows both operands with their types:
//!
//! ```text
//!
//! login_test.rs:14: actual should == expected
//!  	have (i32): 1
//! 	want (i32): 2
//! ```
//!
//! For table-driven tests the second line starts with the one-based example
//! ordinal produced by [`example_num`], e.g. `3. \thave ...`.
//!
//! `have` always shows the actual value and `want` (or `and`) the expected
//! one. Go's `st` package prints them the other way round, so messages from
//! code ported from `st` read with the operands swapped.

use core::{any::type_name, fmt};
use std::sync::OnceLock;

use regex::Regex;

use crate::call_site::CallSite;

/// The relationship an assertion wants between actual and expected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// Actual should equal expected.
    Equal,
    /// Actual should not equal expected.
    Unequal,
}

impl Polarity {
    /// Whether a comparison result satisfies this polarity.
    #[must_use]
    pub const fn is_satisfied_by(self, equal: bool) -> bool {
        match self {
            Polarity::Equal => equal,
            Polarity::Unequal => !equal,
        }
    }

    /// The operator shown in the headline.
    #[must_use]
    pub const fn operator(self) -> &'static str {
        match self {
            Polarity::Equal => "==",
            Polarity::Unequal => "!=",
        }
    }

    /// Label for the expected operand: `want` or `and `.
    const fn expected_label(self) -> &'static str {
        match self {
            Polarity::Equal => "want",
            Polarity::Unequal => "and ",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operator())
    }
}

/// Formats the optional zero-based loop index as a one-based ordinal prefix.
///
/// An empty slice produces no prefix. Exactly one index `n` produces
/// `"{n + 1}."`. Longer slices are not a supported input and also produce no
/// prefix.
///
/// ```
/// use ghost::example_num;
///
/// assert_eq!(example_num(&[]), "");
/// assert_eq!(example_num(&[0]), "1.");
/// assert_eq!(example_num(&[2]), "3.");
/// ```
#[must_use]
pub fn example_num(index: &[usize]) -> String {
    match index {
        [n] => format!("{}.", n + 1),
        _ => String::new(),
    }
}

/// Type name of `T` as shown in messages.
///
/// Standard library module paths are dropped (`alloc::vec::Vec<alloc::string::String>`
/// becomes `Vec<String>`); paths of other crates are kept, so two types that
/// share a name but live in different modules remain distinguishable.
#[must_use]
pub fn display_type_name<T: ?Sized>() -> String {
    shorten_type_name(type_name::<T>())
}

fn shorten_type_name(name: &str) -> String {
    static STD_PATH: OnceLock<Regex> = OnceLock::new();
    let std_path = STD_PATH.get_or_init(|| {
        // Matches `core::`, `alloc::` or `std::` followed by any lowercase
        // module segments, when not preceded by an identifier character.
        Regex::new(r"(^|[^A-Za-z0-9_])(?:core|alloc|std)::(?:[a-z_][a-z0-9_]*::)*")
            .expect("built-in regex pattern for std paths should be valid")
    });
    std_path.replace_all(name, "$1").into_owned()
}

/// One side of a comparison, ready to print.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operand {
    /// Display form of the operand's type.
    pub type_name: String,
    /// `Debug` representation of the operand.
    pub repr: String,
}

impl Operand {
    /// Describes `value`.
    #[must_use]
    pub fn new<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self {
            type_name: display_type_name::<T>(),
            repr: format!("{value:?}"),
        }
    }
}

/// A violated assertion, rendered through [`Display`](fmt::Display).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Where the assertion was called.
    pub call_site: CallSite,
    /// What the assertion wanted.
    pub polarity: Polarity,
    /// Example prefix from [`example_num`], possibly empty.
    pub example: String,
    /// The actual value.
    pub actual: Operand,
    /// The expected value.
    pub expected: Operand,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n{}:{}: actual should {} expected\n{} \thave ({}): {}\n\t{} ({}): {}",
            self.call_site.file,
            self.call_site.line,
            self.polarity.operator(),
            self.example,
            self.actual.type_name,
            self.actual.repr,
            self.polarity.expected_label(),
            self.expected.type_name,
            self.expected.repr,
        )
    }
}
