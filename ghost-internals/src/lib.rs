#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_docs_in_private_items,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![allow(rustdoc::private_intra_doc_links)]
//! Internal implementation crate for [`ghost`].
//!
//! # Overview
//!
//! This crate contains the strict equality rule behind the [`ghost`]
//! assertion library. It has no knowledge of call sites, messages or
//! reporters; it only answers the question "do these two values have the same
//! type, and are they equal?".
//!
//! **This crate is an implementation detail.** No semantic versioning guarantees
//! are provided. Users should depend on the [`ghost`] crate, not this one.
//!
//! # Architecture
//!
//! - **[`comparable`]**: the object-safe [`Comparable`] trait, implemented for
//!   every `'static` type with `PartialEq` and `Debug`, and [`strict_eq`],
//!   which compares two `&dyn Comparable` values.
//!
//! Type strictness is decided by [`TypeId`](core::any::TypeId): values of
//! different types never reach a `PartialEq` impl. Once the types agree the
//! verdict is the type's own `PartialEq`, so hashed collections compare by
//! content and every field the type compares is taken into account.
//!
//! [`ghost`]: https://docs.rs/ghost/latest/ghost/

#[cfg(test)]
extern crate alloc;

pub mod comparable;

pub use comparable::{Comparable, strict_eq};
