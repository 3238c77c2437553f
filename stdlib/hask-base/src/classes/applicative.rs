//! Applicative class.
//!
//! The required methods are `pure` and `lift_a2`; `ap` (Haskell's `<*>`)
//! is derived from `lift_a2` by applying the function on the left to the
//! value on the right, which keeps the left-to-right effect order.

use super::functor::Functor;

/// Functors with effects that can be combined.
pub trait Applicative: Functor {
    /// Lifts a plain value into the structure.
    fn pure(value: Self::Item) -> Self;

    /// Combines two structures element-wise with `f`. The effects of `self`
    /// come before those of `other`.
    fn lift_a2<B, C, F>(self, other: Self::Target<B>, f: F) -> Self::Target<C>
    where
        B: Clone,
        F: FnMut(Self::Item, B) -> C;
}

/// Lifts `value` into the applicative `FA`.
#[inline]
pub fn pure<FA: Applicative>(value: FA::Item) -> FA {
    FA::pure(value)
}

/// Applies the functions in `fs` to the values in `xs` (`fs <*> xs`).
pub fn ap<FF, A, B>(fs: FF, xs: FF::Target<A>) -> FF::Target<B>
where
    FF: Applicative,
    FF::Item: FnMut(A) -> B,
    A: Clone,
{
    fs.lift_a2(xs, |mut f, x| f(x))
}

/// Lifts a unary function; the same as `fmap`.
#[inline]
pub fn lift_a<FA, B, F>(f: F, fa: FA) -> FA::Target<B>
where
    FA: Applicative,
    F: FnMut(FA::Item) -> B,
{
    fa.fmap(f)
}

/// Lifts a binary function over two structures.
#[inline]
pub fn lift_a2<FA, B, C, F>(f: F, fa: FA, fb: FA::Target<B>) -> FA::Target<C>
where
    FA: Applicative,
    B: Clone,
    F: FnMut(FA::Item, B) -> C,
{
    fa.lift_a2(fb, f)
}

/// Lifts a ternary function over three structures.
pub fn lift_a3<FA, B, C, D, F>(
    mut f: F,
    fa: FA,
    fb: FA::Target<B>,
    fc: FA::Target<C>,
) -> FA::Target<D>
where
    FA: Applicative,
    FA::Target<(FA::Item, B)>: Applicative<
        Item = (FA::Item, B),
        Target<C> = FA::Target<C>,
        Target<D> = FA::Target<D>,
    >,
    B: Clone,
    C: Clone,
    F: FnMut(FA::Item, B, C) -> D,
{
    fa.lift_a2(fb, |a, b| (a, b))
        .lift_a2(fc, move |(a, b), c| f(a, b, c))
}

/// Sequences two structures, keeping the values of the second (`*>`).
pub fn then<FA, B>(fa: FA, fb: FA::Target<B>) -> FA::Target<B>
where
    FA: Applicative,
    B: Clone,
{
    fa.lift_a2(fb, |_, b| b)
}

/// Sequences two structures, keeping the values of the first (`<*`).
pub fn skip<FA, B>(fa: FA, fb: FA::Target<B>) -> FA::Target<FA::Item>
where
    FA: Applicative,
    B: Clone,
{
    fa.lift_a2(fb, |a, _| a)
}
