//! Partially applied list operations.
//!
//! Each function takes every argument of its namesake except the list and
//! returns a reusable closure that takes the list.
//!
//! ```
//! use hask_prelude::list;
//! use hask_prelude::list::curried;
//!
//! let firsts = curried::take(2);
//! assert_eq!(firsts(&list![1, 2, 3]), list![1, 2]);
//! assert_eq!(firsts(&list![9]), list![9]);
//! ```

use hask_base::ordering::Ordering;

use super::List;
use crate::maybe::Maybe;

/// `map(f, _)`.
pub fn map<T, B, F>(f: F) -> impl Fn(&List<T>) -> List<B>
where
    F: Fn(&T) -> B,
{
    move |xs| super::map(&f, xs)
}

/// `filter(p, _)`.
pub fn filter<T, P>(p: P) -> impl Fn(&List<T>) -> List<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    move |xs| super::filter(&p, xs)
}

/// `foldr(f, init, _)`.
pub fn foldr<T, B, F>(f: F, init: B) -> impl Fn(&List<T>) -> B
where
    B: Clone,
    F: Fn(&T, B) -> B,
{
    move |xs| super::foldr(&f, init.clone(), xs)
}

/// `foldl(f, init, _)`.
pub fn foldl<T, B, F>(f: F, init: B) -> impl Fn(&List<T>) -> B
where
    B: Clone,
    F: Fn(&B, &T) -> B,
{
    move |xs| super::foldl(&f, init.clone(), xs)
}

/// `take(n, _)`.
pub fn take<T: Clone>(n: usize) -> impl Fn(&List<T>) -> List<T> {
    move |xs| super::take(n, xs)
}

/// `drop(n, _)`.
pub fn drop<T>(n: usize) -> impl Fn(&List<T>) -> List<T> {
    move |xs| super::drop(n, xs)
}

/// `take_while(p, _)`.
pub fn take_while<T, P>(p: P) -> impl Fn(&List<T>) -> List<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    move |xs| super::take_while(&p, xs)
}

/// `drop_while(p, _)`.
pub fn drop_while<T, P>(p: P) -> impl Fn(&List<T>) -> List<T>
where
    P: Fn(&T) -> bool,
{
    move |xs| super::drop_while(&p, xs)
}

/// `elem(x, _)`.
pub fn elem<T: PartialEq>(x: T) -> impl Fn(&List<T>) -> bool {
    move |xs| super::elem(&x, xs)
}

/// `find(p, _)`.
pub fn find<T, P>(p: P) -> impl Fn(&List<T>) -> Maybe<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    move |xs| super::find(&p, xs)
}

/// `concat_map(f, _)`.
pub fn concat_map<T, B, F>(f: F) -> impl Fn(&List<T>) -> List<B>
where
    B: Clone,
    F: Fn(&T) -> List<B>,
{
    move |xs| super::concat_map(&f, xs)
}

/// `zip_with(f, xs, _)`: the first list is fixed.
pub fn zip_with<A, B, C, F>(f: F, xs: List<A>) -> impl Fn(&List<B>) -> List<C>
where
    F: Fn(&A, &B) -> C,
{
    move |ys| super::zip_with(&f, &xs, ys)
}

/// `sort_by(cmp, _)`.
pub fn sort_by<T, F>(cmp: F) -> impl Fn(&List<T>) -> List<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    move |xs| super::sort_by(&cmp, xs)
}

/// `intersperse(sep, _)`.
pub fn intersperse<T: Clone>(sep: T) -> impl Fn(&List<T>) -> List<T> {
    move |xs| super::intersperse(sep.clone(), xs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hask_base::classes::compare;

    #[test]
    fn test_partial_application_is_reusable() {
        let double = map(|x: &i32| x * 2);
        assert_eq!(double(&list![1, 2]), list![2, 4]);
        assert_eq!(double(&list![5]), list![10]);

        let evens = filter(|x: &i32| x % 2 == 0);
        assert_eq!(evens(&list![1, 2, 3, 4]), list![2, 4]);
    }

    #[test]
    fn test_folds() {
        let total = foldr(|x: &i32, acc: i32| x + acc, 0);
        assert_eq!(total(&list![1, 2, 3]), 6);
        let countdown = foldl(|acc: &i32, x: &i32| acc - x, 10);
        assert_eq!(countdown(&list![1, 2, 3]), 4);
    }

    #[test]
    fn test_sublists() {
        assert_eq!(drop(1)(&list![1, 2, 3]), list![2, 3]);
        assert_eq!(take_while(|x: &i32| *x < 3)(&list![1, 2, 3]), list![1, 2]);
        assert_eq!(drop_while(|x: &i32| *x < 3)(&list![1, 2, 3]), list![3]);
        assert_eq!(intersperse(',')(&list!['a', 'b']), list!['a', ',', 'b']);
    }

    #[test]
    fn test_search_and_zip() {
        assert!(elem(2)(&list![1, 2]));
        assert_eq!(find(|x: &i32| *x > 1)(&list![1, 2, 3]), Maybe::Just(2));
        let add_to = zip_with(|a: &i32, b: &i32| a + b, list![10, 20]);
        assert_eq!(add_to(&list![1, 2, 3]), list![11, 22]);
        assert_eq!(
            concat_map(|x: &i32| list![*x, *x])(&list![1]),
            list![1, 1]
        );
    }

    #[test]
    fn test_sort_by() {
        let descending = sort_by(|a: &i32, b: &i32| compare(b, a));
        assert_eq!(descending(&list![2, 3, 1]), list![3, 2, 1]);
    }
}
