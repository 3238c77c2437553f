//! Monoid class.

use crate::classes::foldable::Foldable;

/// Types with an associative append and an identity for it.
///
/// Laws: `mempty().mappend(x) == x`, `x.mappend(mempty()) == x`, and
/// `mappend` is associative.
pub trait Monoid: Sized {
    /// The identity element.
    fn mempty() -> Self;

    /// The associative operation.
    fn mappend(self, other: Self) -> Self;
}

/// The identity element of `M`.
#[inline]
pub fn mempty<M: Monoid>() -> M {
    M::mempty()
}

/// The identity element of the type of `_witness`.
#[inline]
pub fn mempty_like<M: Monoid>(_witness: &M) -> M {
    M::mempty()
}

/// Appends two monoidal values.
#[inline]
pub fn mappend<M: Monoid>(a: M, b: M) -> M {
    a.mappend(b)
}

/// Folds a structure of monoidal values with `mappend`, starting from
/// `mempty`.
pub fn mconcat<T>(xs: T) -> T::Item
where
    T: Foldable,
    T::Item: Monoid,
{
    xs.foldr(mempty(), mappend)
}

impl Monoid for String {
    fn mempty() -> Self {
        String::new()
    }

    fn mappend(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Monoid for () {
    fn mempty() -> Self {}

    fn mappend(self, _other: Self) -> Self {}
}

impl<T> Monoid for Vec<T> {
    fn mempty() -> Self {
        Vec::new()
    }

    fn mappend(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}
