//! Traversable class.

use super::applicative::Applicative;
use super::foldable::Foldable;
use super::functor::Functor;

/// Structures that can be walked left to right, running an applicative
/// action at every element and rebuilding the structure inside it.
pub trait Traversable: Functor + Foldable {
    /// Runs `f` on every element and collects the results.
    fn traverse<App, B, F>(self, f: F) -> App::Target<Self::Target<B>>
    where
        App: Applicative<Item = B>,
        App::Target<Self::Target<B>>: Applicative<Item = Self::Target<B>>,
        Self::Target<B>: Clone,
        F: FnMut(Self::Item) -> App;
}

/// Runs `f` on every element of `t` and collects the results.
#[inline]
pub fn traverse<T, App, B, F>(f: F, t: T) -> App::Target<T::Target<B>>
where
    T: Traversable,
    App: Applicative<Item = B>,
    App::Target<T::Target<B>>: Applicative<Item = T::Target<B>>,
    T::Target<B>: Clone,
    F: FnMut(T::Item) -> App,
{
    t.traverse(f)
}

/// [`traverse`] under its monadic name.
#[inline]
pub fn map_m<T, App, B, F>(f: F, t: T) -> App::Target<T::Target<B>>
where
    T: Traversable,
    App: Applicative<Item = B>,
    App::Target<T::Target<B>>: Applicative<Item = T::Target<B>>,
    T::Target<B>: Clone,
    F: FnMut(T::Item) -> App,
{
    t.traverse(f)
}

/// Turns a structure of actions into an action producing a structure.
pub fn sequence<T, App>(t: T) -> App::Target<T::Target<App::Item>>
where
    T: Traversable<Item = App>,
    App: Applicative,
    App::Target<T::Target<App::Item>>: Applicative<Item = T::Target<App::Item>>,
    T::Target<App::Item>: Clone,
{
    t.traverse(|action| action)
}
