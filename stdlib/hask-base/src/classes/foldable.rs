//! Foldable class.

use super::functor::HigherKinded;
use super::monoid::Monoid;

/// Structures that can be reduced to a summary value.
///
/// `foldr` is the primitive; `fold` and `fold_map` are derived from it.
pub trait Foldable: HigherKinded {
    /// Right-associative fold: `f(x1, f(x2, ... f(xn, init)))`.
    fn foldr<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(Self::Item, B) -> B;

    /// Maps every element into a monoid and combines the results.
    fn fold_map<M, F>(self, mut f: F) -> M
    where
        Self: Sized,
        M: Monoid,
        F: FnMut(Self::Item) -> M,
    {
        self.foldr(M::mempty(), |x, acc| f(x).mappend(acc))
    }

    /// Combines the elements with their own monoid.
    fn fold(self) -> Self::Item
    where
        Self: Sized,
        Self::Item: Monoid,
    {
        self.fold_map(|x| x)
    }

    /// The elements in order.
    fn to_list_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut items = self.foldr(Vec::new(), |x, mut acc| {
            acc.push(x);
            acc
        });
        items.reverse();
        items
    }

    /// Number of elements.
    fn length(self) -> usize
    where
        Self: Sized,
    {
        self.foldr(0, |_, n| n + 1)
    }

    /// Whether some element equals `x`.
    fn elem(self, x: &Self::Item) -> bool
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        self.foldr(false, |y, found| found || y == *x)
    }
}

/// Right fold of `t` with `f`, starting from `init`.
#[inline]
pub fn foldr<T, B, F>(f: F, init: B, t: T) -> B
where
    T: Foldable,
    F: FnMut(T::Item, B) -> B,
{
    t.foldr(init, f)
}

/// Combines the elements of `t` with their monoid.
#[inline]
pub fn fold<T>(t: T) -> T::Item
where
    T: Foldable,
    T::Item: Monoid,
{
    t.fold()
}

/// Maps the elements of `t` into a monoid and combines them.
#[inline]
pub fn fold_map<T, M, F>(f: F, t: T) -> M
where
    T: Foldable,
    M: Monoid,
    F: FnMut(T::Item) -> M,
{
    t.fold_map(f)
}

/// The elements of `t` in order.
#[inline]
pub fn to_list_vec<T: Foldable>(t: T) -> Vec<T::Item> {
    t.to_list_vec()
}

/// Number of elements in `t`.
#[inline]
pub fn length<T: Foldable>(t: T) -> usize {
    t.length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_helpers_on_pairs() {
        let pair = ("env", 3);
        assert_eq!(to_list_vec(pair), vec![3]);
        assert_eq!(length(pair), 1);
        assert!(pair.elem(&3));
        assert!(!pair.elem(&4));
    }
}
