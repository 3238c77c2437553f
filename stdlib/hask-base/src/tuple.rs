//! Tuple operations and instances
//!
//! Tuples are Rust's own. This module adds the Haskell pair functions and
//! the class instances:
//!
//! - arities 2 to 6: `Monoid` (component-wise), `Typed`, `Show`
//! - pairs `(A, T)`: `Functor`, `Applicative`, `Foldable` and `Traversable`
//!   over the second component, with the first as a fixed environment
//!
//! The [`tuple!`](crate::tuple!) macro collapses arities the way the
//! dynamic tuple constructor does: no arguments give unit and one argument
//! gives the argument itself.

use crate::classes::applicative::Applicative;
use crate::classes::foldable::Foldable;
use crate::classes::functor::{Functor, HigherKinded};
use crate::classes::monoid::Monoid;
use crate::classes::traversable::Traversable;
use crate::registry::{TypeSig, TypeTag, Typed};
use crate::show::Show;

/// Builds a tuple, collapsing arities below two.
///
/// ```
/// use hask_base::tuple;
///
/// let unit: () = tuple!();
/// assert_eq!(tuple!(1), 1);
/// assert_eq!(tuple!(1, 'a'), (1, 'a'));
/// # let _ = unit;
/// ```
#[macro_export]
macro_rules! tuple {
    () => {
        ()
    };
    ($x:expr $(,)?) => {
        $x
    };
    ($($x:expr),+ $(,)?) => {
        ($($x),+)
    };
}

/// Extract the first component of a pair.
#[inline]
pub fn fst<A, B>((a, _): (A, B)) -> A {
    a
}

/// Extract the second component of a pair.
#[inline]
pub fn snd<A, B>((_, b): (A, B)) -> B {
    b
}

/// Swap the components of a pair.
#[inline]
pub fn swap<A, B>((a, b): (A, B)) -> (B, A) {
    (b, a)
}

/// Converts a function on pairs into a function of two arguments.
#[inline]
pub fn curry<A, B, C, F>(f: F) -> impl Fn(A, B) -> C
where
    F: Fn((A, B)) -> C,
{
    move |a, b| f((a, b))
}

/// Converts a function of two arguments into a function on pairs.
#[inline]
pub fn uncurry<A, B, C, F>(f: F) -> impl Fn((A, B)) -> C
where
    F: Fn(A, B) -> C,
{
    move |(a, b)| f(a, b)
}

macro_rules! tuple_instances {
    ($(($($name:ident : $idx:tt),+))+) => {
        $(
            impl<$($name: Monoid),+> Monoid for ($($name,)+) {
                fn mempty() -> Self {
                    ($($name::mempty(),)+)
                }

                fn mappend(self, other: Self) -> Self {
                    ($(self.$idx.mappend(other.$idx),)+)
                }
            }

            impl<$($name: Typed),+> Typed for ($($name,)+) {
                fn type_tag(&self) -> TypeTag {
                    TypeTag::Tuple
                }

                fn type_sig(&self) -> TypeSig {
                    TypeSig::Tuple(vec![$(self.$idx.type_sig()),+])
                }
            }

            impl<$($name: Show),+> Show for ($($name,)+) {
                fn show(&self) -> String {
                    let slots: Vec<String> = vec![$(self.$idx.show()),+];
                    format!("({})", slots.join(","))
                }
            }
        )+
    };
}

tuple_instances! {
    (A: 0, B: 1)
    (A: 0, B: 1, C: 2)
    (A: 0, B: 1, C: 2, D: 3)
    (A: 0, B: 1, C: 2, D: 3, E: 4)
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5)
}

impl<A, T> HigherKinded for (A, T) {
    type Item = T;
    type Target<B> = (A, B);
}

impl<A, T> Functor for (A, T) {
    fn fmap<B, F>(self, mut f: F) -> (A, B)
    where
        F: FnMut(T) -> B,
    {
        (self.0, f(self.1))
    }
}

impl<A: Monoid, T> Applicative for (A, T) {
    fn pure(value: T) -> Self {
        (A::mempty(), value)
    }

    fn lift_a2<B, C, F>(self, other: (A, B), mut f: F) -> (A, C)
    where
        B: Clone,
        F: FnMut(T, B) -> C,
    {
        (self.0.mappend(other.0), f(self.1, other.1))
    }
}

impl<A, T> Foldable for (A, T) {
    fn foldr<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        f(self.1, init)
    }
}

impl<A: Clone, T> Traversable for (A, T) {
    fn traverse<App, B, F>(self, mut f: F) -> App::Target<Self::Target<B>>
    where
        App: Applicative<Item = B>,
        App::Target<Self::Target<B>>: Applicative<Item = Self::Target<B>>,
        Self::Target<B>: Clone,
        F: FnMut(T) -> App,
    {
        let (env, value) = self;
        f(value).fmap(move |b| (env.clone(), b))
    }
}
