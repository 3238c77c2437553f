//! The result of a three-way comparison.
//!
//! The `Ordering` type is the result of every comparison. It is also a
//! monoid: `EQ` is the identity and `mappend` keeps the leftmost non-`EQ`
//! value, which is what makes lexicographic comparison a fold.

use std::cmp::Ordering as StdOrdering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classes::monoid::Monoid;
use crate::registry::{TypeSig, TypeTag, Typed};
use crate::show::Show;

/// `LT`, `EQ` or `GT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Ordering {
    /// The left operand is smaller.
    LT = -1,
    /// The operands compare equal.
    EQ = 0,
    /// The left operand is larger.
    GT = 1,
}

pub use Ordering::{EQ, GT, LT};

impl Ordering {
    /// Swaps `LT` and `GT`.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Ordering::LT => Ordering::GT,
            Ordering::EQ => Ordering::EQ,
            Ordering::GT => Ordering::LT,
        }
    }

    /// `mappend` on orderings: `other` decides only when `self` is `EQ`.
    #[inline]
    #[must_use]
    pub const fn then(self, other: Self) -> Self {
        match self {
            Ordering::EQ => other,
            _ => self,
        }
    }

    /// [`Ordering::then`] with a lazily computed tie-breaker.
    #[inline]
    pub fn then_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Ordering::EQ => f(),
            _ => self,
        }
    }

    /// `self == LT`.
    #[inline]
    #[must_use]
    pub const fn is_lt(self) -> bool {
        matches!(self, Ordering::LT)
    }

    /// `self == EQ`.
    #[inline]
    #[must_use]
    pub const fn is_eq(self) -> bool {
        matches!(self, Ordering::EQ)
    }

    /// `self == GT`.
    #[inline]
    #[must_use]
    pub const fn is_gt(self) -> bool {
        matches!(self, Ordering::GT)
    }

    /// Not `GT`.
    #[inline]
    #[must_use]
    pub const fn is_le(self) -> bool {
        !self.is_gt()
    }

    /// Not `LT`.
    #[inline]
    #[must_use]
    pub const fn is_ge(self) -> bool {
        !self.is_lt()
    }
}

impl From<StdOrdering> for Ordering {
    #[inline]
    fn from(cmp: StdOrdering) -> Self {
        match cmp {
            StdOrdering::Less => Ordering::LT,
            StdOrdering::Equal => Ordering::EQ,
            StdOrdering::Greater => Ordering::GT,
        }
    }
}

impl From<Ordering> for StdOrdering {
    #[inline]
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::LT => StdOrdering::Less,
            Ordering::EQ => StdOrdering::Equal,
            Ordering::GT => StdOrdering::Greater,
        }
    }
}

impl Monoid for Ordering {
    fn mempty() -> Self {
        Ordering::EQ
    }

    fn mappend(self, other: Self) -> Self {
        self.then(other)
    }
}

impl Show for Ordering {
    fn show(&self) -> String {
        format!("{self:?}")
    }
}

impl Typed for Ordering {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Ordering
    }

    fn type_sig(&self) -> TypeSig {
        TypeSig::Ordering
    }
}
