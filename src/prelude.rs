//! Commonly used items for convenient importing.
//!
//! ```
//! use ghost::prelude::*;
//!
//! let t = Tester::new();
//! expect(&t, vec![1, 2], vec![1, 2]);
//! reject!(&t, Some("a"), None::<&str>);
//! ```
//!
//! This brings in the four assertions, the [`expect!`] and [`reject!`]
//! macros, [`equal`], [`Nil`] and the reporters.

pub use crate::{
    Nil, Recorder, Reporter, Tester, assert, equal, expect, expect_example, refute, reject,
    reject_example,
};
