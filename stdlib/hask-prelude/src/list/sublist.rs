//! Prefixes, suffixes and splits.

use super::transform::reverse;
use super::List;
use crate::maybe::Maybe;

/// The first `n` elements, or all of them if there are fewer.
///
/// Only the cells that end up in the result are generated, so this is the
/// way to look at an infinite list.
pub fn take<T: Clone>(n: usize, xs: &List<T>) -> List<T> {
    if n == 0 {
        return List::empty();
    }
    let Some(head) = xs.head_ref() else {
        return List::empty();
    };
    // the last kept cell's tail stays unforced
    let rest = match n {
        1 => List::empty(),
        _ => xs.tail_ref().map_or_else(List::empty, |tail| take(n - 1, tail)),
    };
    List::cons_unchecked(head.clone(), rest)
}

/// Everything after the first `n` elements. The result shares cells with
/// `xs`.
pub fn drop<T>(n: usize, xs: &List<T>) -> List<T> {
    match xs.tail_ref() {
        Some(tail) if n > 0 => drop(n - 1, tail),
        _ => xs.clone(),
    }
}

/// `(take(n, xs), drop(n, xs))`.
pub fn split_at<T: Clone>(n: usize, xs: &List<T>) -> (List<T>, List<T>) {
    (take(n, xs), drop(n, xs))
}

/// The longest prefix whose elements satisfy `p`.
pub fn take_while<T, P>(mut p: P, xs: &List<T>) -> List<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    match xs.uncons_ref() {
        Some((head, tail)) if p(head) => List::cons_unchecked(head.clone(), take_while(p, tail)),
        _ => List::empty(),
    }
}

/// What is left after [`take_while`].
pub fn drop_while<T, P>(mut p: P, xs: &List<T>) -> List<T>
where
    P: FnMut(&T) -> bool,
{
    match xs.uncons_ref() {
        Some((head, tail)) if p(head) => drop_while(p, tail),
        _ => xs.clone(),
    }
}

/// `(take_while(p, xs), drop_while(p, xs))`, in one pass.
pub fn span<T, P>(mut p: P, xs: &List<T>) -> (List<T>, List<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    span_ref(&mut p, xs)
}

fn span_ref<T, P>(p: &mut P, xs: &List<T>) -> (List<T>, List<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    match xs.uncons_ref() {
        Some((head, tail)) if p(head) => {
            let (prefix, rest) = span_ref(p, tail);
            (List::cons_unchecked(head.clone(), prefix), rest)
        }
        _ => (List::empty(), xs.clone()),
    }
}

/// [`span`] with the predicate negated (Haskell's `break`).
pub fn span_not<T, P>(mut p: P, xs: &List<T>) -> (List<T>, List<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    span(move |x| !p(x), xs)
}

/// `xs` without `prefix`, or `Nothing` if it does not start with it.
pub fn strip_prefix<T: PartialEq>(prefix: &List<T>, xs: &List<T>) -> Maybe<List<T>> {
    match (prefix.uncons_ref(), xs.uncons_ref()) {
        (None, _) => Maybe::Just(xs.clone()),
        (Some((p, ps)), Some((x, rest))) if p == x => strip_prefix(ps, rest),
        _ => Maybe::Nothing,
    }
}

/// Splits into runs of equal adjacent elements.
pub fn group<T: Clone + PartialEq>(xs: &List<T>) -> List<List<T>> {
    group_by(|a, b| a == b, xs)
}

/// Splits into runs where every element is `eq` to the run's first.
pub fn group_by<T, F>(mut eq: F, xs: &List<T>) -> List<List<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    fn go<T: Clone, F: FnMut(&T, &T) -> bool>(eq: &mut F, xs: &List<T>) -> List<List<T>> {
        let Some((head, tail)) = xs.uncons_ref() else {
            return List::empty();
        };
        let (run, rest) = span_ref(&mut |x: &T| eq(head, x), tail);
        List::cons_unchecked(List::cons_unchecked(head.clone(), run), go(eq, &rest))
    }
    go(&mut eq, xs)
}

/// Whether `xs` starts with `prefix`.
pub fn is_prefix_of<T: PartialEq>(prefix: &List<T>, xs: &List<T>) -> bool {
    strip_prefix(prefix, xs).is_just()
}

/// Whether `xs` ends with `suffix`.
pub fn is_suffix_of<T: Clone + PartialEq>(suffix: &List<T>, xs: &List<T>) -> bool {
    is_prefix_of(&reverse(suffix), &reverse(xs))
}

/// Whether `needle` occurs contiguously anywhere in `haystack`.
pub fn is_infix_of<T: PartialEq>(needle: &List<T>, haystack: &List<T>) -> bool {
    is_prefix_of(needle, haystack)
        || haystack
            .tail_ref()
            .is_some_and(|rest| is_infix_of(needle, rest))
}
