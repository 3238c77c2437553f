//! Partially applied class functions.
//!
//! Each function fixes the first argument of its namesake in
//! [`classes`](crate::classes) and returns the rest as a closure.

use crate::classes::foldable::Foldable;
use crate::classes::functor::Functor;
use crate::classes::monad::Monad;
use crate::classes::monoid::Monoid;
use crate::classes::ord::compare;
use crate::ordering::Ordering;

/// `is_eq(a, _)`.
pub fn is_eq_to<T: PartialEq>(a: T) -> impl Fn(&T) -> bool {
    move |b| a == *b
}

/// `compare(a, _)`.
pub fn compare_with<T: PartialOrd>(a: T) -> impl Fn(&T) -> Ordering {
    move |b| compare(&a, b)
}

/// `mappend(a, _)`.
pub fn mappend_with<M: Monoid + Clone>(a: M) -> impl Fn(M) -> M {
    move |b| a.clone().mappend(b)
}

/// `fmap(f, _)`.
pub fn fmap_with<FA, B, F>(f: F) -> impl Fn(FA) -> FA::Target<B>
where
    FA: Functor,
    F: FnMut(FA::Item) -> B + Clone,
{
    move |fa| fa.fmap(f.clone())
}

/// `flat_map(_, f)`: the bind step is fixed, the monadic value is supplied
/// later.
pub fn flat_map_with<M, B, F>(f: F) -> impl Fn(M) -> M::Target<B>
where
    M: Monad,
    B: Clone,
    F: FnMut(M::Item) -> M::Target<B> + Clone,
{
    move |m| m.flat_map(f.clone())
}

/// `foldr(f, init, _)`.
pub fn foldr_with<T, B, F>(f: F, init: B) -> impl Fn(T) -> B
where
    T: Foldable,
    B: Clone,
    F: FnMut(T::Item, B) -> B + Clone,
{
    move |t| t.foldr(init.clone(), f.clone())
}
