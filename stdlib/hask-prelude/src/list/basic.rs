//! Construction, access and conversion.

use hask_base::registry::type_check;
use hask_base::{Error, Result, Show, Typed};

use super::{List, Nil};
use crate::maybe::Maybe;

/// Prepends `x` to `xs`.
///
/// The element types must agree: if `xs` is non-empty, `x` must have the
/// same type signature as its head.
///
/// # Errors
///
/// [`Error::TypeMismatch`] when `x` and the head of `xs` differ in type.
pub fn cons<T>(x: T, xs: List<T>) -> Result<List<T>>
where
    T: Typed + Show,
{
    if let Some(head) = xs.head_ref() {
        if !type_check(&x, head) {
            return Err(Error::type_mismatch(&x, head, "cons"));
        }
    }
    Ok(List::cons_unchecked(x, xs))
}

/// Concatenates two lists of the same element type.
///
/// When either list is empty the other is returned as is, sharing its
/// cells.
///
/// # Errors
///
/// [`Error::TypeMismatch`] when the heads of both lists differ in type.
pub fn list_append<T>(xs: &List<T>, ys: &List<T>) -> Result<List<T>>
where
    T: Clone + Typed + Show,
{
    match (xs.head_ref(), ys.head_ref()) {
        (None, _) => Ok(ys.clone()),
        (_, None) => Ok(xs.clone()),
        (Some(x), Some(y)) if !type_check(x, y) => Err(Error::type_mismatch(xs, ys, "list_append")),
        _ => Ok(append(xs, ys)),
    }
}

/// `xs ++ ys` without the type check. `ys` is shared, not copied.
pub(crate) fn append<T: Clone>(xs: &List<T>, ys: &List<T>) -> List<T> {
    match xs.uncons_ref() {
        Some((head, tail)) => List::cons_unchecked(head.clone(), append(tail, ys)),
        None => ys.clone(),
    }
}

/// The list holding just `x`.
#[inline]
pub fn singleton<T>(x: T) -> List<T> {
    List::cons_unchecked(x, List::empty())
}

/// The first element.
///
/// # Errors
///
/// [`Error::EmptyList`] on `[]`.
pub fn head<T: Clone>(xs: &List<T>) -> Result<T> {
    xs.head_ref()
        .cloned()
        .ok_or_else(|| Error::empty_list(&Nil, "head"))
}

/// The last element.
///
/// # Errors
///
/// [`Error::EmptyList`] on `[]`.
pub fn last<T: Clone>(xs: &List<T>) -> Result<T> {
    match xs.uncons_ref() {
        None => Err(Error::empty_list(&Nil, "last")),
        Some((x, rest)) if rest.is_empty() => Ok(x.clone()),
        Some((_, rest)) => last(rest),
    }
}

/// Everything after the first element. The result is the original tail,
/// not a copy.
///
/// # Errors
///
/// [`Error::EmptyList`] on `[]`.
pub fn tail<T>(xs: &List<T>) -> Result<List<T>> {
    xs.tail_ref()
        .cloned()
        .ok_or_else(|| Error::empty_list(&Nil, "tail"))
}

/// Everything but the last element.
///
/// # Errors
///
/// [`Error::EmptyList`] on `[]`.
pub fn init<T: Clone>(xs: &List<T>) -> Result<List<T>> {
    match xs.uncons_ref() {
        None => Err(Error::empty_list(&Nil, "init")),
        Some((_, rest)) if rest.is_empty() => Ok(List::empty()),
        Some((x, rest)) => Ok(List::cons_unchecked(x.clone(), init(rest)?)),
    }
}

/// Splits off the head: `Nothing` for `[]`, otherwise `Just((head, tail))`.
pub fn uncons<T: Clone>(xs: &List<T>) -> Maybe<(T, List<T>)> {
    match xs.uncons_ref() {
        Some((head, tail)) => Maybe::Just((head.clone(), tail.clone())),
        None => Maybe::Nothing,
    }
}

/// Whether `xs` is `[]`.
#[inline]
pub fn is_empty<T>(xs: &List<T>) -> bool {
    xs.is_empty()
}

/// Haskell's name for [`is_empty`].
#[inline]
pub fn null<T>(xs: &List<T>) -> bool {
    xs.is_empty()
}

/// Number of elements.
pub fn length<T>(xs: &List<T>) -> usize {
    match xs.tail_ref() {
        Some(rest) => 1 + length(rest),
        None => 0,
    }
}

/// Builds a list from a slice.
pub fn from_array_to_list<T: Clone>(items: &[T]) -> List<T> {
    match items.split_first() {
        Some((first, rest)) => List::cons_unchecked(first.clone(), from_array_to_list(rest)),
        None => List::empty(),
    }
}

/// Collects the elements into a vector.
pub fn from_list_to_array<T: Clone>(xs: &List<T>) -> Vec<T> {
    xs.iter().cloned().collect()
}

/// The characters of `s` as a list.
pub fn from_string_to_list(s: &str) -> List<char> {
    s.chars().collect()
}

/// Joins a list of characters back into a string.
pub fn from_list_to_string(xs: &List<char>) -> String {
    xs.iter().collect()
}
