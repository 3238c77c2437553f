//! Functor class.

/// A type constructor applied to an element type.
///
/// `Item` is the element type; `Target<B>` is the same constructor applied
/// to `B`. For `List<T>`, `Item = T` and `Target<B> = List<B>`; for a pair
/// `(A, T)`, `Item = T` and `Target<B> = (A, B)`.
pub trait HigherKinded {
    /// The element type.
    type Item;

    /// The same constructor around a different element type.
    type Target<B>;
}

/// Structures that can be mapped over without changing their shape.
///
/// Laws: `x.fmap(|a| a) == x` and
/// `x.fmap(|a| f(g(a))) == x.fmap(g).fmap(f)`.
pub trait Functor: HigherKinded {
    /// Applies `f` to every element.
    fn fmap<B, F>(self, f: F) -> Self::Target<B>
    where
        F: FnMut(Self::Item) -> B;
}

/// Maps `f` over `fa`.
#[inline]
pub fn fmap<FA, B, F>(f: F, fa: FA) -> FA::Target<B>
where
    FA: Functor,
    F: FnMut(FA::Item) -> B,
{
    fa.fmap(f)
}
