//! Element-wise and structural transformations.

use super::fold::concat;
use super::List;

/// Applies `f` to every element, building a new list.
pub fn map<T, B, F>(mut f: F, xs: &List<T>) -> List<B>
where
    F: FnMut(&T) -> B,
{
    map_ref(&mut f, xs)
}

pub(crate) fn map_ref<T, B, F>(f: &mut F, xs: &List<T>) -> List<B>
where
    F: FnMut(&T) -> B,
{
    match xs.uncons_ref() {
        Some((head, tail)) => {
            let mapped = f(head);
            List::cons_unchecked(mapped, map_ref(f, tail))
        }
        None => List::empty(),
    }
}

/// The elements in reverse order.
pub fn reverse<T: Clone>(xs: &List<T>) -> List<T> {
    fn go<T: Clone>(xs: &List<T>, acc: List<T>) -> List<T> {
        match xs.uncons_ref() {
            Some((head, tail)) => go(tail, List::cons_unchecked(head.clone(), acc)),
            None => acc,
        }
    }
    go(xs, List::empty())
}

/// Puts `sep` between every two elements.
pub fn intersperse<T: Clone>(sep: T, xs: &List<T>) -> List<T> {
    match xs.uncons_ref() {
        None => List::empty(),
        Some((head, tail)) if tail.is_empty() => List::cons_unchecked(head.clone(), List::empty()),
        Some((head, tail)) => {
            let rest = List::cons_unchecked(sep.clone(), intersperse(sep, tail));
            List::cons_unchecked(head.clone(), rest)
        }
    }
}

/// Joins the lists in `xss` with `sep` between them.
pub fn intercalate<T: Clone>(sep: &List<T>, xss: &List<List<T>>) -> List<T> {
    concat(&intersperse(sep.clone(), xss))
}

/// Turns rows into columns. Rows may have different lengths; short rows
/// are skipped once they run out.
pub fn transpose<T: Clone>(xss: &List<List<T>>) -> List<List<T>> {
    let Some((first, rest)) = xss.uncons_ref() else {
        return List::empty();
    };
    let Some((x, xs)) = first.uncons_ref() else {
        return transpose(rest);
    };
    let heads = rest
        .iter()
        .filter_map(|row| row.head_ref().cloned())
        .collect::<List<T>>();
    let tails = rest
        .iter()
        .filter_map(|row| row.tail_ref().cloned())
        .collect::<List<List<T>>>();
    let column = List::cons_unchecked(x.clone(), heads);
    List::cons_unchecked(column, transpose(&List::cons_unchecked(xs.clone(), tails)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_does_not_touch_source() {
        let xs = list![1, 2, 3];
        let ys = map(|x| x * 10, &xs);
        assert_eq!(ys, list![10, 20, 30]);
        assert_eq!(xs, list![1, 2, 3]);
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse(&list![1, 2, 3]), list![3, 2, 1]);
        assert_eq!(reverse(&List::<i32>::empty()), List::empty());
    }

    #[test]
    fn test_intersperse_and_intercalate() {
        assert_eq!(intersperse(0, &list![1, 2, 3]), list![1, 0, 2, 0, 3]);
        assert_eq!(intersperse(0, &list![1]), list![1]);

        let words = list![list!['a', 'b'], list!['c']];
        assert_eq!(intercalate(&list![','], &words), list!['a', 'b', ',', 'c']);
    }

    #[test]
    fn test_transpose() {
        let rows = list![list![1, 2, 3], list![4, 5], list![6]];
        assert_eq!(
            transpose(&rows),
            list![list![1, 4, 6], list![2, 5], list![3]]
        );
        assert_eq!(transpose(&List::<List<i32>>::empty()), List::empty());
    }
}
