//! Class instances for `List`.
//!
//! The list monad is the nondeterminism monad: `lift_a2` pairs every
//! element of the left list with every element of the right one, and
//! `flat_map` concatenates the lists produced for each element.

use hask_base::classes::{Applicative, Foldable, Functor, HigherKinded, Monad, Monoid, Traversable};

use super::basic::{append, singleton};
use super::fold::{concat_map, foldr_ref};
use super::transform::map_ref;
use super::List;

impl<T: Clone> Monoid for List<T> {
    fn mempty() -> Self {
        List::empty()
    }

    fn mappend(self, other: Self) -> Self {
        append(&self, &other)
    }
}

impl<T> HigherKinded for List<T> {
    type Item = T;
    type Target<B> = List<B>;
}

impl<T: Clone> Functor for List<T> {
    fn fmap<B, F>(self, mut f: F) -> List<B>
    where
        F: FnMut(T) -> B,
    {
        map_ref(&mut |x: &T| f(x.clone()), &self)
    }
}

impl<T: Clone> Applicative for List<T> {
    fn pure(value: T) -> Self {
        singleton(value)
    }

    fn lift_a2<B, C, F>(self, other: List<B>, mut f: F) -> List<C>
    where
        B: Clone,
        F: FnMut(T, B) -> C,
    {
        self.iter()
            .flat_map(|x| other.iter().map(move |y| (x, y)))
            .map(|(x, y)| f(x.clone(), y.clone()))
            .collect()
    }
}

impl<T: Clone> Monad for List<T> {
    fn flat_map<B, F>(self, mut f: F) -> List<B>
    where
        B: Clone,
        F: FnMut(T) -> List<B>,
    {
        concat_map(|x: &T| f(x.clone()), &self)
    }
}

impl<T: Clone> Foldable for List<T> {
    fn foldr<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        foldr_ref(&mut |x: &T, acc| f(x.clone(), acc), init, &self)
    }
}

impl<T: Clone> Traversable for List<T> {
    fn traverse<App, B, F>(self, mut f: F) -> App::Target<List<B>>
    where
        App: Applicative<Item = B>,
        App::Target<List<B>>: Applicative<Item = List<B>>,
        List<B>: Clone,
        F: FnMut(T) -> App,
    {
        let init = <App::Target<List<B>> as Applicative>::pure(List::empty());
        foldr_ref(
            &mut |x: &T, acc| f(x.clone()).lift_a2(acc, List::cons_unchecked),
            init,
            &self,
        )
    }
}
