//! hask prelude
//!
//! Haskell's everyday data types as persistent Rust values, built on the
//! classes in [`hask_base`].
//!
//! # Overview
//!
//! - [`list`] - persistent cons lists with shared tails, lazy infinite
//!   lists and the full `Data.List` vocabulary
//! - [`maybe`] - the optional value and its instances
//! - [`tuple`] - tuples whose arity is known only at run time
//! - [`value`] - the dynamically typed universe whose class operations
//!   dispatch through the runtime type registry
//!
//! Everything a client usually needs is in [`prelude`]:
//!
//! ```
//! use hask_prelude::prelude::*;
//!
//! let xs = list![3, 1, 2];
//! assert_eq!(sort(&xs), list![1, 2, 3]);
//! assert_eq!(show(&just(5)), "Just 5");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod list;
pub mod maybe;
pub mod tuple;
pub mod value;

pub use hask_base;

/// Glob-importable re-exports of the prelude and its base classes.
///
/// Static tuple functions (`fst`, `snd`, ...) come from
/// [`hask_base::tuple`]; their dynamic counterparts stay in [`crate::tuple`].
pub mod prelude {
    pub use hask_base::classes::{
        ap, chain, compare, do_block, flat_map, fmap, fold, fold_map, greater_than,
        greater_than_or_equal, is_eq, is_not_eq, join, less_than, less_than_or_equal, lift_a,
        lift_a2, lift_a3, lift_m, map_m, mappend, max, mconcat, mempty, mempty_like, min, pure,
        sequence, skip, then, to_list_vec, traverse, Applicative, DoBlock, Foldable, Functor,
        HigherKinded, Monad, Monoid, Traversable,
    };
    pub use hask_base::function::*;
    pub use hask_base::ordering::{Ordering, EQ, GT, LT};
    pub use hask_base::registry::{data_type, defines, satisfies, type_check};
    pub use hask_base::show::{print, print_to, show, Show};
    pub use hask_base::tuple::{curry, fst, snd, swap, uncurry};
    pub use hask_base::{tuple, Capability, Error, Methods, Result, TypeSig, TypeTag, Typed};

    pub use crate::list;
    pub use crate::list::*;
    pub use crate::maybe::*;
    pub use crate::value::Value;
}
