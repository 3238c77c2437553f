//! hask base library
//!
//! The foundation the hask prelude is built on: Haskell's type classes
//! expressed as Rust traits, the runtime type registry used by dynamically
//! typed values, the `Ordering` type and the shared error taxonomy.
//!
//! # Overview
//!
//! - [`classes`] - `Eq`/`Ord` dispatch, `Monoid`, `Functor`, `Applicative`,
//!   `Monad`, `Foldable` and `Traversable`
//! - [`registry`] - type tags, method sets and capability predicates
//! - [`ordering`] - the three-valued comparison result
//! - [`tuple`] - pair operations and tuple instances
//! - [`show`] - canonical string rendering and printing
//! - [`function`] / [`curried`] - combinators and partial application
//! - [`error`] - the error type returned by every partial operation

#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod classes;
pub mod curried;
pub mod error;
pub mod function;
pub mod ordering;
pub mod registry;
pub mod show;
pub mod tuple;

pub use error::{Error, Result};
pub use ordering::Ordering;
pub use registry::{Capability, Methods, TypeSig, TypeTag, Typed};
pub use show::Show;
