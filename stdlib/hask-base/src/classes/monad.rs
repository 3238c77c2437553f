//! Monad class and do-block sequencing.

use super::applicative::Applicative;
use super::functor::HigherKinded;

/// Applicatives whose next computation can depend on the previous result.
///
/// Laws: `M::pure(a).flat_map(f) == f(a)`, `m.flat_map(M::pure) == m`, and
/// `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`.
pub trait Monad: Applicative {
    /// Monadic bind (`>>=`).
    fn flat_map<B, F>(self, f: F) -> Self::Target<B>
    where
        B: Clone,
        F: FnMut(Self::Item) -> Self::Target<B>;
}

/// Monadic bind: feeds the result of `m` to `f`.
#[inline]
pub fn flat_map<M, B, F>(m: M, f: F) -> M::Target<B>
where
    M: Monad,
    B: Clone,
    F: FnMut(M::Item) -> M::Target<B>,
{
    m.flat_map(f)
}

/// Bind with the arguments flipped (`=<<`).
#[inline]
pub fn chain<M, B, F>(f: F, m: M) -> M::Target<B>
where
    M: Monad,
    B: Clone,
    F: FnMut(M::Item) -> M::Target<B>,
{
    m.flat_map(f)
}

/// Removes one level of monadic structure.
pub fn join<M, N>(m: M) -> N
where
    N: HigherKinded,
    N::Item: Clone,
    M: Monad<Item = N, Target<N::Item> = N>,
{
    m.flat_map::<N::Item, _>(|inner| inner)
}

/// Lifts a plain function into a monad.
pub fn lift_m<M, B, F>(mut f: F, m: M) -> M::Target<B>
where
    M: Monad,
    M::Target<B>: Applicative<Item = B>,
    B: Clone,
    F: FnMut(M::Item) -> B,
{
    m.flat_map(move |x| Applicative::pure(f(x)))
}

/// Imperative-style sequencing of monadic steps.
///
/// Each [`DoBlock::flat_map`] is one `x <- m` line. `hask_prelude::maybe`
/// has a worked example over `Maybe`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoBlock<M> {
    value: M,
}

/// Starts a do-block from a monadic value.
#[inline]
pub fn do_block<M: Monad>(m: M) -> DoBlock<M> {
    DoBlock { value: m }
}

impl<M: Monad> DoBlock<M> {
    /// Binds the current result to the next step.
    pub fn flat_map<B, F>(self, f: F) -> DoBlock<M::Target<B>>
    where
        B: Clone,
        F: FnMut(M::Item) -> M::Target<B>,
    {
        DoBlock {
            value: self.value.flat_map(f),
        }
    }

    /// Runs `next` after the current step, discarding the current result
    /// (`>>`).
    pub fn chain<B>(self, next: M::Target<B>) -> DoBlock<M::Target<B>>
    where
        B: Clone,
    {
        DoBlock {
            value: self.value.lift_a2(next, |_, b| b),
        }
    }

    /// Replaces the current result with a plain value while keeping the
    /// current step's effects (`m >> pure value`).
    pub fn inject<B>(self, value: B) -> DoBlock<M::Target<B>>
    where
        B: Clone,
    {
        DoBlock {
            value: self.value.fmap(move |_| value.clone()),
        }
    }

    /// Borrows the current monadic value.
    pub fn value(&self) -> &M {
        &self.value
    }

    /// Ends the block, returning the monadic value.
    pub fn into_inner(self) -> M {
        self.value
    }
}
