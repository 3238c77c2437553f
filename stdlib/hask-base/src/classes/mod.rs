//! Type classes.
//!
//! `Eq` and `Ord` are Rust's own `PartialEq` and `PartialOrd`; the modules
//! here add Haskell's free functions on top. The remaining classes are
//! traits over [`HigherKinded`] types, which name their element type and
//! how to rebuild themselves around a different one.
//!
//! | Class       | Required           | Derived                                   |
//! |-------------|--------------------|-------------------------------------------|
//! | Monoid      | `mempty`, `mappend`| `mconcat`                                 |
//! | Functor     | `fmap`             | `lift_a`                                  |
//! | Applicative | `pure`, `lift_a2`  | `ap`, `lift_a3`, `then`, `skip`           |
//! | Monad       | `flat_map`         | `chain`, `join`, `lift_m`, `DoBlock`      |
//! | Foldable    | `foldr`            | `fold`, `fold_map`, `to_list_vec`, `length`, `elem` |
//! | Traversable | `traverse`         | `map_m`, `sequence`                       |

pub mod applicative;
pub mod eq;
pub mod foldable;
pub mod functor;
pub mod monad;
pub mod monoid;
pub mod ord;
pub mod traversable;

pub use applicative::{ap, lift_a, lift_a2, lift_a3, pure, skip, then, Applicative};
pub use eq::{is_eq, is_not_eq};
pub use foldable::{fold, fold_map, foldr, length, to_list_vec, Foldable};
pub use functor::{fmap, Functor, HigherKinded};
pub use monad::{chain, do_block, flat_map, join, lift_m, DoBlock, Monad};
pub use monoid::{mappend, mconcat, mempty, mempty_like, Monoid};
pub use ord::{
    compare, greater_than, greater_than_or_equal, less_than, less_than_or_equal, max, min,
};
pub use traversable::{map_m, sequence, traverse, Traversable};
