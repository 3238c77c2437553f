//! Membership, lookup and indexing.

use hask_base::{Error, Result};

use super::List;
use crate::maybe::Maybe;

/// Whether `x` occurs in `xs`.
pub fn elem<T: PartialEq>(x: &T, xs: &List<T>) -> bool {
    match xs.uncons_ref() {
        Some((head, tail)) => head == x || elem(x, tail),
        None => false,
    }
}

/// Whether `x` does not occur in `xs`.
pub fn not_elem<T: PartialEq>(x: &T, xs: &List<T>) -> bool {
    !elem(x, xs)
}

/// The value paired with the first occurrence of `key` in an association
/// list.
pub fn lookup<K, V>(key: &K, pairs: &List<(K, V)>) -> Maybe<V>
where
    K: PartialEq,
    V: Clone,
{
    match pairs.uncons_ref() {
        Some(((k, v), _)) if k == key => Maybe::Just(v.clone()),
        Some((_, rest)) => lookup(key, rest),
        None => Maybe::Nothing,
    }
}

/// The elements satisfying `p`, in order.
pub fn filter<T, P>(mut p: P, xs: &List<T>) -> List<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    match xs.uncons_ref() {
        Some((head, tail)) => {
            if p(head) {
                List::cons_unchecked(head.clone(), filter(p, tail))
            } else {
                filter(p, tail)
            }
        }
        None => List::empty(),
    }
}

/// `(filter(p, xs), filter(!p, xs))`, in one pass.
pub fn partition<T, P>(mut p: P, xs: &List<T>) -> (List<T>, List<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    fn go<T: Clone, P: FnMut(&T) -> bool>(p: &mut P, xs: &List<T>) -> (List<T>, List<T>) {
        let Some((head, tail)) = xs.uncons_ref() else {
            return (List::empty(), List::empty());
        };
        let keep = p(head);
        let (yes, no) = go(p, tail);
        if keep {
            (List::cons_unchecked(head.clone(), yes), no)
        } else {
            (yes, List::cons_unchecked(head.clone(), no))
        }
    }
    go(&mut p, xs)
}

/// The element at zero-based position `n`.
///
/// # Errors
///
/// [`Error::Range`] when `n` is negative or not less than the length.
pub fn index<T: Clone>(xs: &List<T>, n: isize) -> Result<T> {
    fn go<T: Clone>(xs: &List<T>, remaining: usize) -> Option<T> {
        let (head, tail) = xs.uncons_ref()?;
        match remaining {
            0 => Some(head.clone()),
            _ => go(tail, remaining - 1),
        }
    }
    usize::try_from(n)
        .ok()
        .and_then(|position| go(xs, position))
        .ok_or_else(|| Error::range_error(n as i64, "index"))
}

/// Position of the first element equal to `x`.
pub fn elem_index<T: PartialEq>(x: &T, xs: &List<T>) -> Maybe<usize> {
    find_index(|y| y == x, xs)
}

/// Positions of every element equal to `x`.
pub fn elem_indices<T: PartialEq>(x: &T, xs: &List<T>) -> List<usize> {
    find_indices(|y| y == x, xs)
}

/// The first element satisfying `p`.
pub fn find<T, P>(mut p: P, xs: &List<T>) -> Maybe<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    match xs.uncons_ref() {
        Some((head, _)) if p(head) => Maybe::Just(head.clone()),
        Some((_, tail)) => find(p, tail),
        None => Maybe::Nothing,
    }
}

/// Position of the first element satisfying `p`.
pub fn find_index<T, P>(mut p: P, xs: &List<T>) -> Maybe<usize>
where
    P: FnMut(&T) -> bool,
{
    fn go<T, P: FnMut(&T) -> bool>(p: &mut P, xs: &List<T>, at: usize) -> Maybe<usize> {
        match xs.uncons_ref() {
            Some((head, _)) if p(head) => Maybe::Just(at),
            Some((_, tail)) => go(p, tail, at + 1),
            None => Maybe::Nothing,
        }
    }
    go(&mut p, xs, 0)
}

/// Positions of every element satisfying `p`.
pub fn find_indices<T, P>(mut p: P, xs: &List<T>) -> List<usize>
where
    P: FnMut(&T) -> bool,
{
    fn go<T, P: FnMut(&T) -> bool>(p: &mut P, xs: &List<T>, at: usize) -> List<usize> {
        let Some((head, tail)) = xs.uncons_ref() else {
            return List::empty();
        };
        let hit = p(head);
        let rest = go(p, tail, at + 1);
        if hit {
            List::cons_unchecked(at, rest)
        } else {
            rest
        }
    }
    go(&mut p, xs, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elem() {
        let xs = list![1, 2, 3];
        assert!(elem(&2, &xs));
        assert!(not_elem(&4, &xs));
    }

    #[test]
    fn test_lookup() {
        let table = list![(1, "one"), (2, "two"), (1, "uno")];
        assert_eq!(lookup(&1, &table), Maybe::Just("one"));
        assert_eq!(lookup(&3, &table), Maybe::Nothing);
    }

    #[test]
    fn test_filter_and_partition() {
        let xs = list![1, 2, 3, 4, 5];
        assert_eq!(filter(|x| x % 2 == 1, &xs), list![1, 3, 5]);
        assert_eq!(
            partition(|x| x % 2 == 1, &xs),
            (list![1, 3, 5], list![2, 4])
        );
    }

    #[test]
    fn test_index() {
        let xs = list!['a', 'b', 'c'];
        assert_eq!(index(&xs, 0).unwrap(), 'a');
        assert_eq!(index(&xs, 2).unwrap(), 'c');

        let err = index(&xs, 3).unwrap_err();
        assert_eq!(err.to_string(), "index 3 is out of range in index");
        let err = index(&xs, -1).unwrap_err();
        assert_eq!(err, Error::Range { index: -1, function: "index" });
    }

    #[test]
    fn test_positions() {
        let xs = list![3, 1, 3, 2];
        assert_eq!(elem_index(&3, &xs), Maybe::Just(0));
        assert_eq!(elem_indices(&3, &xs), list![0, 2]);
        assert_eq!(find(|x| *x < 3, &xs), Maybe::Just(1));
        assert_eq!(find_index(|x| *x == 2, &xs), Maybe::Just(3));
        assert_eq!(find_indices(|x| *x > 1, &xs), list![0, 2, 3]);
        assert_eq!(find_index(|x| *x > 9, &xs), Maybe::Nothing);
    }
}
