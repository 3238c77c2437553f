//! Sorting.
//!
//! Two independent algorithms with one contract: [`sort_by`] is insertion
//! sort (a right fold of [`insert_by`]) and [`merge_sort_by`] is a
//! bottom-up natural merge sort. Both are stable.

use hask_base::classes::compare;
use hask_base::ordering::Ordering;
use hask_base::{Error, Result};

use super::fold::foldr;
use super::transform::map;
use super::{List, Nil};

/// Inserts `x` before the first element that is not smaller.
pub fn insert<T: Clone + PartialOrd>(x: T, xs: &List<T>) -> List<T> {
    insert_by(compare, x, xs)
}

/// [`insert`] with a custom comparison. The cells after the insertion
/// point are shared with `xs`.
pub fn insert_by<T, F>(mut cmp: F, x: T, xs: &List<T>) -> List<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    insert_ref(&mut cmp, x, xs)
}

fn insert_ref<T, F>(cmp: &mut F, x: T, xs: &List<T>) -> List<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    match xs.uncons_ref() {
        Some((head, tail)) if cmp(&x, head).is_gt() => {
            List::cons_unchecked(head.clone(), insert_ref(cmp, x, tail))
        }
        _ => List::cons_unchecked(x, xs.clone()),
    }
}

/// Sorts in ascending order.
pub fn sort<T: Clone + PartialOrd>(xs: &List<T>) -> List<T> {
    sort_by(compare, xs)
}

/// Insertion sort with a custom comparison.
pub fn sort_by<T, F>(mut cmp: F, xs: &List<T>) -> List<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    foldr(
        |x, sorted| insert_ref(&mut cmp, x.clone(), &sorted),
        List::empty(),
        xs,
    )
}

/// Sorts by a key computed once per element.
pub fn sort_on<T, K, F>(mut key: F, xs: &List<T>) -> List<T>
where
    T: Clone,
    K: Clone + PartialOrd,
    F: FnMut(&T) -> K,
{
    let decorated = map(|x| (key(x), x.clone()), xs);
    let sorted = sort_by(|a, b| compare(&a.0, &b.0), &decorated);
    map(|(_, x)| x.clone(), &sorted)
}

/// Sorts in ascending order with natural merge sort.
pub fn merge_sort<T: Clone + PartialOrd>(xs: &List<T>) -> List<T> {
    merge_sort_by(compare, xs)
}

/// Natural merge sort with a custom comparison.
///
/// The input is cut into maximal runs (strictly descending runs are
/// reversed), then adjacent runs are merged pairwise until one is left.
pub fn merge_sort_by<T, F>(mut cmp: F, xs: &List<T>) -> List<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut runs = sequences(&mut cmp, xs);
    tracing::trace!(runs = runs.len(), "merge sort runs built");
    let mut passes = 0_usize;
    while runs.len() > 1 {
        runs = merge_pairs(&mut cmp, runs);
        passes += 1;
    }
    tracing::trace!(passes, "merge sort finished");
    runs.pop().unwrap_or_default()
}

fn sequences<T, F>(cmp: &mut F, xs: &List<T>) -> Vec<List<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut runs = Vec::new();
    let mut rest = xs.clone();
    while let Some((first, tail)) = rest.uncons_ref() {
        let mut run = vec![first.clone()];
        let mut cursor = tail.clone();
        let descending = cursor.head_ref().is_some_and(|next| cmp(first, next).is_gt());
        while let Some((next, after)) = cursor.uncons_ref() {
            let Some(prev) = run.last() else { break };
            let extends = if descending {
                cmp(prev, next).is_gt()
            } else {
                !cmp(prev, next).is_gt()
            };
            if !extends {
                break;
            }
            run.push(next.clone());
            let after = after.clone();
            cursor = after;
        }
        if descending {
            run.reverse();
        }
        runs.push(List::from_vec(run));
        rest = cursor;
    }
    runs
}

fn merge_pairs<T, F>(cmp: &mut F, runs: Vec<List<T>>) -> Vec<List<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(runs.len().div_ceil(2));
    let mut runs = runs.into_iter();
    while let Some(left) = runs.next() {
        match runs.next() {
            Some(right) => merged.push(merge(cmp, &left, &right)),
            None => merged.push(left),
        }
    }
    merged
}

fn merge<T, F>(cmp: &mut F, xs: &List<T>, ys: &List<T>) -> List<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    match (xs.uncons_ref(), ys.uncons_ref()) {
        (None, _) => ys.clone(),
        (_, None) => xs.clone(),
        (Some((x, xs_rest)), Some((y, ys_rest))) => {
            if cmp(x, y).is_gt() {
                List::cons_unchecked(y.clone(), merge(cmp, xs, ys_rest))
            } else {
                List::cons_unchecked(x.clone(), merge(cmp, xs_rest, ys))
            }
        }
    }
}

/// The largest element by `cmp`; the last one among equals.
///
/// # Errors
///
/// [`Error::EmptyList`] on `[]`.
pub fn maximum_by<T, F>(mut cmp: F, xs: &List<T>) -> Result<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let (first, rest) = xs
        .uncons_ref()
        .ok_or_else(|| Error::empty_list(&Nil, "maximum_by"))?;
    let best = rest.iter().fold(first, |best, x| {
        if cmp(best, x).is_gt() {
            best
        } else {
            x
        }
    });
    Ok(best.clone())
}

/// The smallest element by `cmp`; the first one among equals.
///
/// # Errors
///
/// [`Error::EmptyList`] on `[]`.
pub fn minimum_by<T, F>(mut cmp: F, xs: &List<T>) -> Result<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let (first, rest) = xs
        .uncons_ref()
        .ok_or_else(|| Error::empty_list(&Nil, "minimum_by"))?;
    let best = rest.iter().fold(first, |best, x| {
        if cmp(best, x).is_gt() {
            x
        } else {
            best
        }
    });
    Ok(best.clone())
}
