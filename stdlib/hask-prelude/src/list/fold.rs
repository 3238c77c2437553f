//! Folds, scans and reductions.

use std::ops::{Add, Mul};

use hask_base::classes::{max, min};
use hask_base::{Error, Result};
use num_traits::{One, Zero};

use super::basic::{append, last};
use super::{List, Nil};

/// Right fold: `f(x1, f(x2, ... f(xn, init)))`.
pub fn foldr<T, B, F>(mut f: F, init: B, xs: &List<T>) -> B
where
    F: FnMut(&T, B) -> B,
{
    foldr_ref(&mut f, init, xs)
}

pub(crate) fn foldr_ref<T, B, F>(f: &mut F, init: B, xs: &List<T>) -> B
where
    F: FnMut(&T, B) -> B,
{
    match xs.uncons_ref() {
        Some((head, tail)) => {
            let rest = foldr_ref(f, init, tail);
            f(head, rest)
        }
        None => init,
    }
}

/// Left fold, taken as the final state of [`scanl`].
pub fn foldl<T, B, F>(f: F, init: B, xs: &List<T>) -> B
where
    B: Clone,
    F: FnMut(&B, &T) -> B,
{
    let states = scanl(f, init.clone(), xs);
    last(&states).unwrap_or(init)
}

/// [`foldl`] seeded with the first element.
///
/// # Errors
///
/// [`Error::EmptyList`] on `[]`.
pub fn foldl1<T, F>(f: F, xs: &List<T>) -> Result<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> T,
{
    match xs.uncons_ref() {
        Some((head, tail)) => Ok(foldl(f, head.clone(), tail)),
        None => Err(Error::empty_list(&Nil, "foldl1")),
    }
}

/// [`foldr`] seeded with the last element.
///
/// # Errors
///
/// [`Error::EmptyList`] on `[]`.
pub fn foldr1<T, F>(mut f: F, xs: &List<T>) -> Result<T>
where
    T: Clone,
    F: FnMut(&T, T) -> T,
{
    fn go<T: Clone, F: FnMut(&T, T) -> T>(f: &mut F, head: &T, tail: &List<T>) -> T {
        match tail.uncons_ref() {
            Some((next, rest)) => {
                let folded = go(f, next, rest);
                f(head, folded)
            }
            None => head.clone(),
        }
    }
    match xs.uncons_ref() {
        Some((head, tail)) => Ok(go(&mut f, head, tail)),
        None => Err(Error::empty_list(&Nil, "foldr1")),
    }
}

/// Every intermediate state of a left fold, starting with `init`.
pub fn scanl<T, B, F>(mut f: F, init: B, xs: &List<T>) -> List<B>
where
    F: FnMut(&B, &T) -> B,
{
    fn go<T, B, F: FnMut(&B, &T) -> B>(f: &mut F, acc: B, xs: &List<T>) -> List<B> {
        let rest = match xs.uncons_ref() {
            Some((head, tail)) => {
                let next = f(&acc, head);
                go(f, next, tail)
            }
            None => List::empty(),
        };
        List::cons_unchecked(acc, rest)
    }
    go(&mut f, init, xs)
}

/// [`scanl`] seeded with the first element.
pub fn scanl1<T, F>(f: F, xs: &List<T>) -> List<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> T,
{
    match xs.uncons_ref() {
        Some((head, tail)) => scanl(f, head.clone(), tail),
        None => List::empty(),
    }
}

/// Every intermediate state of a right fold, ending with `init`.
pub fn scanr<T, B, F>(mut f: F, init: B, xs: &List<T>) -> List<B>
where
    F: FnMut(&T, &B) -> B,
{
    fn go<T, B, F: FnMut(&T, &B) -> B>(f: &mut F, init: B, xs: &List<T>) -> List<B> {
        match xs.uncons_ref() {
            Some((head, tail)) => {
                let states = go(f, init, tail);
                let state = match states.head_ref() {
                    Some(prev) => f(head, prev),
                    None => return states,
                };
                List::cons_unchecked(state, states)
            }
            None => List::cons_unchecked(init, List::empty()),
        }
    }
    go(&mut f, init, xs)
}

/// [`scanr`] seeded with the last element.
pub fn scanr1<T, F>(mut f: F, xs: &List<T>) -> List<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> T,
{
    fn go<T: Clone, F: FnMut(&T, &T) -> T>(f: &mut F, xs: &List<T>) -> List<T> {
        let Some((head, tail)) = xs.uncons_ref() else {
            return List::empty();
        };
        let states = go(f, tail);
        let state = match states.head_ref() {
            Some(prev) => f(head, prev),
            None => head.clone(),
        };
        List::cons_unchecked(state, states)
    }
    go(&mut f, xs)
}

/// Flattens a list of lists.
pub fn concat<T: Clone>(xss: &List<List<T>>) -> List<T> {
    foldr(|xs, acc| append(xs, &acc), List::empty(), xss)
}

/// Maps every element to a list and flattens the results.
pub fn concat_map<T, B, F>(mut f: F, xs: &List<T>) -> List<B>
where
    B: Clone,
    F: FnMut(&T) -> List<B>,
{
    match xs.uncons_ref() {
        Some((head, tail)) => {
            let front = f(head);
            append(&front, &concat_map(f, tail))
        }
        None => List::empty(),
    }
}

/// Whether every element is `true`.
pub fn and(xs: &List<bool>) -> bool {
    foldr(|x, acc| *x && acc, true, xs)
}

/// Whether any element is `true`.
pub fn or(xs: &List<bool>) -> bool {
    foldr(|x, acc| *x || acc, false, xs)
}

/// Whether `p` holds for some element. Stops at the first match.
pub fn any<T, P>(mut p: P, xs: &List<T>) -> bool
where
    P: FnMut(&T) -> bool,
{
    match xs.uncons_ref() {
        Some((head, tail)) => p(head) || any(p, tail),
        None => false,
    }
}

/// Whether `p` holds for every element. Stops at the first failure.
pub fn all<T, P>(mut p: P, xs: &List<T>) -> bool
where
    P: FnMut(&T) -> bool,
{
    !any(move |x| !p(x), xs)
}

/// Sum of the elements; zero for `[]`.
pub fn sum<T>(xs: &List<T>) -> T
where
    T: Clone + Zero + Add<Output = T>,
{
    foldr(|x, acc| x.clone() + acc, T::zero(), xs)
}

/// Product of the elements; one for `[]`.
pub fn product<T>(xs: &List<T>) -> T
where
    T: Clone + One + Mul<Output = T>,
{
    foldr(|x, acc| x.clone() * acc, T::one(), xs)
}

/// The largest element.
///
/// # Errors
///
/// [`Error::EmptyList`] on `[]`.
pub fn maximum<T: Clone + PartialOrd>(xs: &List<T>) -> Result<T> {
    if xs.is_empty() {
        return Err(Error::empty_list(&Nil, "maximum"));
    }
    foldr1(|x, acc| max(x.clone(), acc), xs)
}

/// The smallest element.
///
/// # Errors
///
/// [`Error::EmptyList`] on `[]`.
pub fn minimum<T: Clone + PartialOrd>(xs: &List<T>) -> Result<T> {
    if xs.is_empty() {
        return Err(Error::empty_list(&Nil, "minimum"));
    }
    foldr1(|x, acc| min(x.clone(), acc), xs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foldr_and_foldl_associate_differently() {
        let xs = list![1, 2, 3];
        assert_eq!(foldr(|x, acc| x - acc, 0, &xs), 2);
        assert_eq!(foldl(|acc, x| acc - x, 0, &xs), -6);
        assert_eq!(foldl(|acc: &i32, x| acc + x, 7, &List::<i32>::empty()), 7);
    }

    #[test]
    fn test_fold1() {
        let xs = list![1, 2, 3];
        assert_eq!(foldl1(|a, b| a - b, &xs).unwrap(), -4);
        assert_eq!(foldr1(|a, b| a - b, &xs).unwrap(), 2);
        assert_eq!(
            foldr1(|a: &i32, b| a + b, &List::empty()).unwrap_err().function(),
            "foldr1"
        );
    }

    #[test]
    fn test_scans() {
        let xs = list![1, 2, 3];
        assert_eq!(scanl(|acc, x| acc + x, 0, &xs), list![0, 1, 3, 6]);
        assert_eq!(scanr(|x, acc| x + acc, 0, &xs), list![6, 5, 3, 0]);
        assert_eq!(scanl1(|a, b| a + b, &xs), list![1, 3, 6]);
        assert_eq!(scanr1(|a, b| a + b, &xs), list![6, 5, 3]);
        assert_eq!(scanr1(|a: &i32, b| a + b, &List::empty()), List::empty());
    }

    #[test]
    fn test_concat() {
        let xss = list![list![1], List::empty(), list![2, 3]];
        assert_eq!(concat(&xss), list![1, 2, 3]);
        assert_eq!(concat_map(|x: &i32| list![*x, *x], &list![1, 2]), list![1, 1, 2, 2]);
    }

    #[test]
    fn test_boolean_folds() {
        assert!(and(&list![true, true]));
        assert!(!and(&list![true, false]));
        assert!(or(&list![false, true]));
        assert!(and(&List::empty()));
        assert!(any(|x: &i32| *x > 2, &list![1, 3]));
        assert!(all(|x: &i32| *x > 0, &list![1, 3]));
    }

    #[test]
    fn test_numeric_folds() {
        assert_eq!(sum(&list![1, 2, 3, 4]), 10);
        assert_eq!(product(&list![1, 2, 3, 4]), 24);
        assert_eq!(sum(&List::<f64>::empty()), 0.0);
        assert_eq!(maximum(&list![3, 9, 2]).unwrap(), 9);
        assert_eq!(minimum(&list![3, 9, 2]).unwrap(), 2);
        assert!(maximum(&List::<i32>::empty()).is_err());
    }
}
