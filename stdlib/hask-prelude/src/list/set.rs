//! Lists as multisets.
//!
//! Every operation has a `_by` form taking the equality to use; the plain
//! form uses `==`.

use super::basic::append;
use super::fold::any;
use super::List;

/// Removes duplicates, keeping the first occurrence of each element.
pub fn nub<T: Clone + PartialEq>(xs: &List<T>) -> List<T> {
    nub_by(|a, b| a == b, xs)
}

/// [`nub`] with a custom equality.
pub fn nub_by<T, F>(mut eq: F, xs: &List<T>) -> List<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    fn go<T: Clone, F: FnMut(&T, &T) -> bool>(eq: &mut F, xs: &List<T>, seen: &[T]) -> List<T> {
        let Some((head, tail)) = xs.uncons_ref() else {
            return List::empty();
        };
        if seen.iter().any(|s| eq(s, head)) {
            return go(eq, tail, seen);
        }
        let mut seen = seen.to_vec();
        seen.push(head.clone());
        List::cons_unchecked(head.clone(), go(eq, tail, &seen))
    }
    go(&mut eq, xs, &[])
}

/// Removes the first occurrence of `x`.
pub fn delete_l<T: Clone + PartialEq>(x: &T, xs: &List<T>) -> List<T> {
    delete_l_by(|a, b| a == b, x, xs)
}

/// Removes the first element `y` with `eq(x, y)`. The cells after it are
/// shared with `xs`.
pub fn delete_l_by<T, F>(mut eq: F, x: &T, xs: &List<T>) -> List<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    delete_ref(&mut eq, x, xs)
}

fn delete_ref<T, F>(eq: &mut F, x: &T, xs: &List<T>) -> List<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    match xs.uncons_ref() {
        Some((head, tail)) if eq(x, head) => tail.clone(),
        Some((head, tail)) => List::cons_unchecked(head.clone(), delete_ref(eq, x, tail)),
        None => List::empty(),
    }
}

/// Multiset difference (`xs \\ ys`): removes one occurrence from `xs` for
/// every element of `ys`.
pub fn delete_firsts<T: Clone + PartialEq>(xs: &List<T>, ys: &List<T>) -> List<T> {
    delete_firsts_by(|a, b| a == b, xs, ys)
}

/// [`delete_firsts`] with a custom equality.
pub fn delete_firsts_by<T, F>(mut eq: F, xs: &List<T>, ys: &List<T>) -> List<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    ys.iter()
        .fold(xs.clone(), |acc, y| delete_ref(&mut eq, y, &acc))
}

/// `xs` followed by the elements of `ys` not already in `xs`. Duplicates
/// within `xs` are kept; those within `ys` are not.
pub fn union<T: Clone + PartialEq>(xs: &List<T>, ys: &List<T>) -> List<T> {
    union_by(|a, b| a == b, xs, ys)
}

/// [`union`] with a custom equality.
pub fn union_by<T, F>(mut eq: F, xs: &List<T>, ys: &List<T>) -> List<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let extra = nub_by(&mut eq, ys);
    let extra = xs
        .iter()
        .fold(extra, |acc, x| delete_ref(&mut eq, x, &acc));
    append(xs, &extra)
}

/// The elements of `xs` that also occur in `ys`.
pub fn intersect<T: Clone + PartialEq>(xs: &List<T>, ys: &List<T>) -> List<T> {
    intersect_by(|a, b| a == b, xs, ys)
}

/// [`intersect`] with a custom equality.
pub fn intersect_by<T, F>(mut eq: F, xs: &List<T>, ys: &List<T>) -> List<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    match xs.uncons_ref() {
        Some((head, tail)) => {
            let keep = any(|y| eq(head, y), ys);
            let rest = intersect_by(eq, tail, ys);
            if keep {
                List::cons_unchecked(head.clone(), rest)
            } else {
                rest
            }
        }
        None => List::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nub() {
        assert_eq!(nub(&list![1, 2, 1, 3, 2]), list![1, 2, 3]);
        assert_eq!(
            nub_by(|a: &i32, b: &i32| a % 3 == b % 3, &list![1, 2, 4, 6]),
            list![1, 2, 6]
        );
    }

    #[test]
    fn test_delete_l() {
        let xs = list![1, 2, 3, 2];
        assert_eq!(delete_l(&2, &xs), list![1, 3, 2]);
        assert_eq!(delete_l(&9, &xs), xs);
        assert!(delete_l(&1, &xs).ptr_eq(xs.tail_ref().unwrap()));
    }

    #[test]
    fn test_delete_firsts() {
        let xs = list![1, 2, 3, 2, 1];
        assert_eq!(delete_firsts(&xs, &list![2, 1, 5]), list![3, 2, 1]);
    }

    #[test]
    fn test_union() {
        assert_eq!(
            union(&list![1, 2, 2], &list![2, 3, 3, 4]),
            list![1, 2, 2, 3, 4]
        );
    }

    #[test]
    fn test_intersect() {
        assert_eq!(intersect(&list![1, 2, 3, 4], &list![2, 4, 6]), list![2, 4]);
        assert_eq!(intersect(&list![1, 1, 2], &list![1]), list![1, 1]);
    }
}
