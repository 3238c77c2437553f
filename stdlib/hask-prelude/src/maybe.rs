//! Optional values.
//!
//! [`just`] is the smart constructor: it refuses to wrap a value that
//! already means "absent" (see [`Presence`]) and gives `Nothing` instead.
//!
//! `Nothing` orders below every `Just`, is the identity of the monoid, and
//! short-circuits the functor, applicative and monad instances.
//!
//! A do-block over `Maybe` stops at the first `Nothing`:
//!
//! ```
//! use hask_prelude::prelude::*;
//!
//! let step = |x: i32| if x > 3 { just(x * 2) } else { Maybe::Nothing };
//! let result = do_block(just(3))
//!     .flat_map(|x| just(x + 1))
//!     .flat_map(step)
//!     .into_inner();
//! assert_eq!(result, just(8));
//!
//! let stopped = do_block(just(1)).flat_map(step).inject('z').into_inner();
//! assert_eq!(stopped, Maybe::Nothing);
//! ```

use hask_base::classes::{Applicative, Foldable, Functor, HigherKinded, Monad, Monoid, Traversable};
use hask_base::registry::data_type;
use hask_base::{Error, Ordering, Result, Show, TypeSig, TypeTag, Typed};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::list::List;

/// A value that may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Maybe<T> {
    /// Absent.
    Nothing,
    /// Present.
    Just(T),
}

impl<T> Maybe<T> {
    /// Whether a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// Whether the value is missing.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Applies `f` to the payload, if any.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Nothing => Maybe::Nothing,
            Maybe::Just(x) => Maybe::Just(f(x)),
        }
    }

    /// The payload, or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Just(x) => x,
            Maybe::Nothing => default,
        }
    }

    /// The payload, or whatever `f` produces.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Just(x) => x,
            Maybe::Nothing => f(),
        }
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match *self {
            Maybe::Nothing => Maybe::Nothing,
            Maybe::Just(ref x) => Maybe::Just(x),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Maybe::Nothing, Maybe::Just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(m: Maybe<T>) -> Self {
        match m {
            Maybe::Just(x) => Some(x),
            Maybe::Nothing => None,
        }
    }
}

/// Values that may stand for "no value".
///
/// [`just`] turns absent values into `Nothing` instead of wrapping them.
/// Only NaN and `Option::None` are absent; everything else is present.
pub trait Presence {
    /// Whether the value is a "no value" sentinel.
    fn is_absent(&self) -> bool {
        false
    }
}

impl Presence for f32 {
    fn is_absent(&self) -> bool {
        self.is_nan()
    }
}

impl Presence for f64 {
    fn is_absent(&self) -> bool {
        self.is_nan()
    }
}

impl<T> Presence for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

macro_rules! present {
    ($($ty:ty),* $(,)?) => {
        $(impl Presence for $ty {})*
    };
}

present!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
present!(bool, char, String, &str, (), Ordering);

impl<T> Presence for List<T> {}
impl<T> Presence for Maybe<T> {}
impl<T> Presence for Vec<T> {}
impl<T: Presence + ?Sized> Presence for Box<T> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}
impl<A, B> Presence for (A, B) {}
impl<A, B, C> Presence for (A, B, C) {}
impl<A, B, C, D> Presence for (A, B, C, D) {}

/// Wraps `a` in `Just`, or gives `Nothing` if `a` is absent (NaN or
/// `None`).
pub fn just<T: Presence>(a: T) -> Maybe<T> {
    if a.is_absent() {
        Maybe::Nothing
    } else {
        Maybe::Just(a)
    }
}

/// `f` applied to the contained value, or `default` for `Nothing`.
pub fn maybe<T, B, F>(default: B, f: F, m: Maybe<T>) -> B
where
    F: FnOnce(T) -> B,
{
    match m {
        Maybe::Just(x) => f(x),
        Maybe::Nothing => default,
    }
}

/// Whether `value` is a Maybe at run time.
pub fn is_maybe<T: Typed + ?Sized>(value: &T) -> bool {
    data_type(value) == TypeTag::Maybe
}

/// Whether `m` is `Just`.
#[inline]
pub fn is_just<T>(m: &Maybe<T>) -> bool {
    m.is_just()
}

/// Whether `m` is `Nothing`.
#[inline]
pub fn is_nothing<T>(m: &Maybe<T>) -> bool {
    m.is_nothing()
}

/// The contained value.
///
/// # Errors
///
/// [`Error::Nothing`] for `Nothing`.
pub fn from_just<T>(m: Maybe<T>) -> Result<T> {
    match m {
        Maybe::Just(x) => Ok(x),
        Maybe::Nothing => Err(Error::nothing(&Maybe::<()>::Nothing, "from_just")),
    }
}

/// The contained value, or `default` for `Nothing`.
#[inline]
pub fn from_maybe<T>(default: T, m: Maybe<T>) -> T {
    m.unwrap_or(default)
}

/// The head of the list, or `Nothing` if it is empty.
pub fn list_to_maybe<T: Clone>(xs: &List<T>) -> Maybe<T> {
    xs.head_ref().cloned().into()
}

/// A singleton list for `Just`, the empty list for `Nothing`.
pub fn maybe_to_list<T>(m: Maybe<T>) -> List<T> {
    match m {
        Maybe::Just(x) => List::cons_unchecked(x, List::empty()),
        Maybe::Nothing => List::empty(),
    }
}

/// The contents of every `Just`, in order.
pub fn cat_maybes<T: Clone>(xs: &List<Maybe<T>>) -> List<T> {
    map_maybe(|m: &Maybe<T>| m.clone(), xs)
}

/// Maps `f` over `xs`, keeping the `Just` results.
pub fn map_maybe<T, B, F>(mut f: F, xs: &List<T>) -> List<B>
where
    F: FnMut(&T) -> Maybe<B>,
{
    match xs.uncons_ref() {
        Some((head, tail)) => match f(head) {
            Maybe::Just(y) => List::cons_unchecked(y, map_maybe(f, tail)),
            Maybe::Nothing => map_maybe(f, tail),
        },
        None => List::empty(),
    }
}

impl<T: Monoid> Monoid for Maybe<T> {
    fn mempty() -> Self {
        Maybe::Nothing
    }

    fn mappend(self, other: Self) -> Self {
        match (self, other) {
            (Maybe::Just(a), Maybe::Just(b)) => Maybe::Just(a.mappend(b)),
            (Maybe::Nothing, m) | (m, Maybe::Nothing) => m,
        }
    }
}

impl<T> HigherKinded for Maybe<T> {
    type Item = T;
    type Target<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    fn fmap<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(f)
    }
}

impl<T> Applicative for Maybe<T> {
    fn pure(value: T) -> Self {
        Maybe::Just(value)
    }

    fn lift_a2<B, C, F>(self, other: Maybe<B>, mut f: F) -> Maybe<C>
    where
        B: Clone,
        F: FnMut(T, B) -> C,
    {
        match (self, other) {
            (Maybe::Just(a), Maybe::Just(b)) => Maybe::Just(f(a, b)),
            _ => Maybe::Nothing,
        }
    }
}

impl<T> Monad for Maybe<T> {
    fn flat_map<B, F>(self, mut f: F) -> Maybe<B>
    where
        B: Clone,
        F: FnMut(T) -> Maybe<B>,
    {
        match self {
            Maybe::Just(x) => f(x),
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> Foldable for Maybe<T> {
    fn foldr<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Maybe::Just(x) => f(x, init),
            Maybe::Nothing => init,
        }
    }
}

impl<T> Traversable for Maybe<T> {
    fn traverse<App, B, F>(self, mut f: F) -> App::Target<Maybe<B>>
    where
        App: Applicative<Item = B>,
        App::Target<Maybe<B>>: Applicative<Item = Maybe<B>>,
        Maybe<B>: Clone,
        F: FnMut(T) -> App,
    {
        match self {
            Maybe::Just(x) => f(x).fmap(Maybe::Just),
            Maybe::Nothing => Applicative::pure(Maybe::Nothing),
        }
    }
}

impl<T: Show> Show for Maybe<T> {
    fn show(&self) -> String {
        match self {
            Maybe::Just(x) => format!("Just {}", x.show_atom()),
            Maybe::Nothing => "Nothing".to_string(),
        }
    }

    fn show_atom(&self) -> String {
        match self {
            Maybe::Just(_) => format!("({})", self.show()),
            Maybe::Nothing => self.show(),
        }
    }
}

impl<T: Typed> Typed for Maybe<T> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Maybe
    }

    fn type_sig(&self) -> TypeSig {
        let payload = match self {
            Maybe::Just(x) => x.type_sig(),
            Maybe::Nothing => TypeSig::Any,
        };
        TypeSig::Maybe(Box::new(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use hask_base::classes::{
        chain, do_block, fold, lift_a, lift_a2, lift_a3, lift_m, map_m, mconcat, sequence, skip,
        then, traverse,
    };

    #[test]
    fn test_presence_predicates() {
        assert!(is_just(&just(42)));
        assert!(is_nothing(&Maybe::<i32>::Nothing));
        assert!(!just('x').is_nothing());
    }

    #[test]
    fn test_just_collapses_absent_values() {
        assert_eq!(just(f64::NAN), Maybe::Nothing);
        assert_eq!(just(None::<i32>), Maybe::Nothing);
        assert_eq!(just(Some(1)), Maybe::Just(Some(1)));
        assert!(is_just(&just(5)));
        assert_eq!(from_just(just(5)).unwrap(), 5);
    }

    #[test]
    fn test_from_just_nothing() {
        let err = from_just(Maybe::<i32>::Nothing).unwrap_err();
        assert_eq!(err.to_string(), "Nothing is Nothing in from_just");
    }

    #[test]
    fn test_maybe_and_from_maybe() {
        assert_eq!(maybe(0, |x| x * 2, just(4)), 8);
        assert_eq!(maybe(0, |x: i32| x * 2, Maybe::Nothing), 0);
        assert_eq!(from_maybe(1, Maybe::Nothing), 1);
    }

    #[test]
    fn test_list_conversions() {
        assert_eq!(list_to_maybe(&list![3, 4]), just(3));
        assert_eq!(list_to_maybe(&List::<i32>::empty()), Maybe::Nothing);
        assert_eq!(maybe_to_list(just('x')), list!['x']);
        assert!(maybe_to_list(Maybe::<char>::Nothing).is_empty());
    }

    #[test]
    fn test_cat_and_map_maybes() {
        let xs = list![just(1), Maybe::Nothing, just(3)];
        assert_eq!(cat_maybes(&xs), list![1, 3]);

        let halve = |x: &i32| if x % 2 == 0 { just(x / 2) } else { Maybe::Nothing };
        assert_eq!(map_maybe(halve, &list![1, 2, 3, 4]), list![1, 2]);
    }

    #[test]
    fn test_nothing_is_minimum() {
        assert!(Maybe::Nothing < just(i64::MIN));
        assert!(just(1) < just(2));
    }

    #[test]
    fn test_monoid() {
        let a = just("ab".to_string());
        assert_eq!(a.clone().mappend(Maybe::Nothing), a);
        assert_eq!(a.mappend(just("c".to_string())), just("abc".to_string()));
        let parts = list![just(list![1]), Maybe::Nothing, just(list![2])];
        assert_eq!(mconcat(parts), just(list![1, 2]));
    }

    #[test]
    fn test_short_circuit() {
        assert_eq!(lift_a2(|a, b| a + b, just(1), just(2)), just(3));
        let missing = lift_a2(|a: i32, b: i32| a + b, just(1), Maybe::Nothing);
        assert_eq!(missing, Maybe::Nothing);
        assert_eq!(Maybe::<i32>::Nothing.flat_map(|x| just(x + 1)), Maybe::Nothing);
        assert_eq!(fold(just("s".to_string())), "s");
    }

    #[test]
    fn test_derived_combinators() {
        assert_eq!(lift_a(|x: i32| x + 1, just(1)), just(2));
        let sum3 = |a: i32, b: i32, c: i32| a + b + c;
        assert_eq!(lift_a3(sum3, just(1), just(2), just(3)), just(6));
        assert_eq!(lift_a3(sum3, just(1), Maybe::<i32>::Nothing, just(3)), Maybe::Nothing);

        assert_eq!(then(just(1), just('a')), just('a'));
        assert_eq!(then(Maybe::<i32>::Nothing, just('a')), Maybe::Nothing);
        assert_eq!(skip(just(1), just('a')), just(1));
        assert_eq!(skip(just(1), Maybe::<char>::Nothing), Maybe::Nothing);

        let half = |x: i32| if x % 2 == 0 { just(x / 2) } else { Maybe::Nothing };
        assert_eq!(chain(half, just(8)), just(4));
        assert_eq!(chain(half, just(3)), Maybe::Nothing);
        assert_eq!(lift_m(|x: i32| x * 2, just(4)), just(8));
        assert_eq!(lift_m(|x: i32| x * 2, Maybe::<i32>::Nothing), Maybe::Nothing);

        assert_eq!(map_m(|x: i32| list![x, x + 1], just(1)), list![just(1), just(2)]);
    }

    #[test]
    fn test_do_block() {
        let result = do_block(just(3))
            .flat_map(|x| just(x + 1))
            .flat_map(|x| if x > 3 { just(x * 2) } else { Maybe::Nothing })
            .into_inner();
        assert_eq!(result, just(8));

        let replaced = do_block(just(1)).inject('k').into_inner();
        assert_eq!(replaced, just('k'));
        let skipped = do_block(Maybe::<i32>::Nothing).chain(just(2)).into_inner();
        assert_eq!(skipped, Maybe::Nothing);
    }

    #[test]
    fn test_traverse() {
        let t = traverse(|x: i32| list![x, -x], just(5));
        assert_eq!(t, list![just(5), just(-5)]);
        assert_eq!(sequence(just(list![1, 2])), list![just(1), just(2)]);
    }

    #[test]
    fn test_show() {
        assert_eq!(just(5).show(), "Just 5");
        assert_eq!(just(just(5)).show(), "Just (Just 5)");
        assert_eq!(just(-3).show(), "Just (-3)");
        assert_eq!(Maybe::<i32>::Nothing.show(), "Nothing");
    }

    #[test]
    fn test_typed() {
        assert!(is_maybe(&just(1)));
        assert_eq!(
            Maybe::<i32>::Nothing.type_sig(),
            TypeSig::Maybe(Box::new(TypeSig::Any))
        );
        assert!(hask_base::registry::type_check(&just(1), &Maybe::<i32>::Nothing));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Maybe::from(Some(1)), just(1));
        assert_eq!(Option::from(just(2)), Some(2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let m = just(list![1, 2]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"Just":[1,2]}"#);
        let back: Maybe<List<i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        let none: Maybe<i32> = serde_json::from_str(r#""Nothing""#).unwrap();
        assert_eq!(none, Maybe::Nothing);
    }
}
