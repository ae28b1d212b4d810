#![deny(
    missing_docs,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Short, useful assertions for Rust tests.
//!
//! ## Overview
//!
//! `ghost` compares an actual value against an expected value under strict structural
//! equality and, when the comparison does not go the way the test wanted,
//! reports a message naming the line of *your* test, both values and both of
//! their types.
//!
//! ## Quick Example
//!
//! ```
//! use ghost::prelude::*;
//!
//! let t = Tester::new();
//! expect(&t, "a", "a");
//! reject(&t, 42, 42i64);
//!
//! assert(&t, "t", "t");
//! refute(&t, 99, 99i64);
//! ```
//!
//! ## The four assertions
//!
//! |                      | should be equal | should differ |
//! |----------------------|-----------------|---------------|
//! | report and continue  | [`expect`]      | [`reject`]    |
//! | report and abort     | [`assert`]      | [`refute`]    |
//!
//! The continue-mode pair reports through [`Reporter::report_and_continue`]
//! and lets the rest of the test run. The abort-mode pair reports through
//! [`Reporter::report_and_abort`], which never returns.
//!
//! ## Table-driven tests
//!
//! Pass the loop index to the continue-mode assertions and the message is
//! prefixed with its one-based ordinal:
//!
//! ```
//! use ghost::prelude::*;
//!
//! let t = Tester::new();
//! let examples = [("first", "first"), ("second", "second")];
//! for (i, (a, b)) in examples.into_iter().enumerate() {
//!     expect!(&t, a, b, i);
//!     expect_example(&t, a, b, i);
//! }
//! ```
//!
//! The abort-mode assertions take no index: they stop at the first violated
//! condition.
//!
//! ## Strict structural equality
//!
//! Any `'static` type with `PartialEq` and `Debug` can be compared (see
//! [`Comparable`]); the two sides do not need to share a type. Two values are
//! equal only if they have the same Rust type *and* that type's `PartialEq`
//! says they are equal:
//!
//! ```
//! use ghost::{Nil, equal};
//!
//! assert!(equal(&vec!["a", "b"], &vec!["a", "b"]));
//! assert!(!equal(&42i32, &42i64));
//! assert!(!equal(&42, &"42"));
//! assert!(!equal(&None::<&str>, &Nil));
//! ```
//!
//! See [`equal`] for the full rule.
//!
//! ## Reporters
//!
//! Assertions do not decide what a failure does; the [`Reporter`] you pass
//! does. Two are included:
//!
//! - [`Tester`] adapts the built-in test harness: continue-mode failures are
//!   printed and collected, and fail the test when the `Tester` is dropped;
//!   abort-mode failures panic at once.
//! - [`Recorder`] silently keeps every message for inspection, which is how
//!   this crate tests itself.
//!
//! ## Features
//!
//! - `tracing` (default): every violation emits a `WARN` event on the `ghost`
//!   target through [`tracing`](https://docs.rs/tracing).

#[macro_use]
mod macros;

pub mod call_site;
mod dispatch;
mod equality;
pub mod message;
pub mod prelude;
pub mod reporter;

pub use self::{
    call_site::{CallSite, caller},
    dispatch::{assert, expect, expect_example, refute, reject, reject_example},
    equality::{Comparable, Nil, equal},
    message::example_num,
    reporter::{Recorder, Reporter, Tester},
};

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    pub use crate::dispatch::{expect_with, reject_with};
}
