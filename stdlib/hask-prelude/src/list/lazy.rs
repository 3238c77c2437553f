//! Lazily generated lists.
//!
//! A deferred tail is a [`Suspension`]: a generator plus a write-once slot.
//! The first access runs the generator and stores its result; later
//! accesses read the slot. Infinite lists are chains of suspensions, so
//! only the cells that are actually walked ever exist.

use std::cell::{Cell, OnceCell};
use std::ops::Add;
use std::rc::Rc;

use hask_base::{Error, Result, Show};
use num_traits::{One, Zero};

use super::{List, Nil};

type Generator<T> = Box<dyn FnOnce() -> List<T>>;

/// A tail that has not been generated yet.
pub(crate) struct Suspension<T> {
    value: OnceCell<List<T>>,
    generator: Cell<Option<Generator<T>>>,
}

impl<T> Suspension<T> {
    pub(crate) fn new<G>(generator: G) -> Self
    where
        G: FnOnce() -> List<T> + 'static,
    {
        Suspension {
            value: OnceCell::new(),
            generator: Cell::new(Some(Box::new(generator))),
        }
    }

    /// Generates the tail on first call; returns the cached tail afterwards.
    pub(crate) fn force(&self) -> &List<T> {
        self.value.get_or_init(|| match self.generator.take() {
            Some(generate) => {
                tracing::trace!("generating deferred list tail");
                generate()
            }
            None => List::empty(),
        })
    }

    pub(crate) fn is_forced(&self) -> bool {
        self.value.get().is_some()
    }

    /// The generated tail, if it was ever forced. The generator is dropped.
    pub(crate) fn into_forced(self) -> Option<List<T>> {
        self.value.into_inner()
    }
}

/// The infinite list `[start, start + 1, ...]`.
pub fn list_inf<T>(start: T) -> List<T>
where
    T: Clone + Add<Output = T> + One + 'static,
{
    list_inf_by(start, T::one())
}

/// The infinite list `[start, start + step, start + 2 * step, ...]`.
pub fn list_inf_by<T>(start: T, step: T) -> List<T>
where
    T: Clone + Add<Output = T> + 'static,
{
    let next = start.clone();
    List::cons_lazy(start, move || {
        let following = next + step.clone();
        list_inf_by(following, step)
    })
}

/// The finite list `[start ..= end]`, built eagerly.
pub fn list_range<T>(start: T, end: T) -> List<T>
where
    T: Clone + PartialOrd + Add<Output = T> + One,
{
    if start > end {
        return List::empty();
    }
    let next = start.clone() + T::one();
    List::cons_unchecked(start, list_range(next, end))
}

/// The finite list from `start` towards `end` in steps of `step`, built
/// eagerly. A negative step counts down. A zero step is rejected.
pub fn list_range_by<T>(start: T, end: T, step: T) -> Result<List<T>>
where
    T: Clone + PartialOrd + Add<Output = T> + Zero + Show,
{
    let ascending = check_step(&step, "list_range_by")?;
    Ok(range_eager(start, &end, &step, ascending))
}

fn range_eager<T>(start: T, end: &T, step: &T, ascending: bool) -> List<T>
where
    T: Clone + PartialOrd + Add<Output = T>,
{
    if past_end(&start, end, ascending) {
        return List::empty();
    }
    let next = start.clone() + step.clone();
    List::cons_unchecked(start, range_eager(next, end, step, ascending))
}

/// `[start ..= end]`, generated one cell at a time.
pub fn list_range_lazy<T>(start: T, end: T) -> List<T>
where
    T: Clone + PartialOrd + Add<Output = T> + One + 'static,
{
    range_lazy(start, end, T::one(), true)
}

/// The lazy counterpart of [`list_range_by`].
pub fn list_range_lazy_by<T>(start: T, end: T, step: T) -> Result<List<T>>
where
    T: Clone + PartialOrd + Add<Output = T> + Zero + Show + 'static,
{
    let ascending = check_step(&step, "list_range_lazy_by")?;
    Ok(range_lazy(start, end, step, ascending))
}

fn range_lazy<T>(start: T, end: T, step: T, ascending: bool) -> List<T>
where
    T: Clone + PartialOrd + Add<Output = T> + 'static,
{
    if past_end(&start, &end, ascending) {
        return List::empty();
    }
    let next = start.clone();
    List::cons_lazy(start, move || {
        let following = next + step.clone();
        range_lazy(following, end, step, ascending)
    })
}

fn check_step<T>(step: &T, function: &'static str) -> Result<bool>
where
    T: PartialOrd + Zero + Show,
{
    let zero = T::zero();
    if *step > zero {
        Ok(true)
    } else if *step < zero {
        Ok(false)
    } else {
        Err(Error::type_error(step, function))
    }
}

fn past_end<T: PartialOrd>(value: &T, end: &T, ascending: bool) -> bool {
    if ascending {
        value > end
    } else {
        value < end
    }
}

/// The infinite list `[x, f(x), f(f(x)), ...]`.
pub fn iterate<T, F>(f: F, x: T) -> List<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> T + 'static,
{
    iterate_shared(Rc::new(f), x)
}

fn iterate_shared<T: Clone + 'static>(f: Rc<dyn Fn(&T) -> T>, x: T) -> List<T> {
    let seed = x.clone();
    List::cons_lazy(x, move || {
        let next = f(&seed);
        iterate_shared(f, next)
    })
}

/// The infinite list `[x, x, x, ...]`.
pub fn repeat<T: Clone + 'static>(x: T) -> List<T> {
    let again = x.clone();
    List::cons_lazy(x, move || repeat(again))
}

/// `n` copies of `x`.
pub fn replicate<T: Clone>(n: usize, x: T) -> List<T> {
    if n == 0 {
        return List::empty();
    }
    let rest = replicate(n - 1, x.clone());
    List::cons_unchecked(x, rest)
}

/// Repeats `xs` forever.
///
/// Fails on the empty list, which has nothing to repeat.
pub fn cycle<T: Clone + 'static>(xs: &List<T>) -> Result<List<T>> {
    if xs.is_empty() {
        return Err(Error::empty_list(&Nil, "cycle"));
    }
    Ok(cycle_from(xs.clone(), xs.clone()))
}

fn cycle_from<T: Clone + 'static>(original: List<T>, current: List<T>) -> List<T> {
    match current.uncons_ref() {
        Some((head, tail)) => {
            let rest = tail.clone();
            List::cons_lazy(head.clone(), move || cycle_from(original, rest))
        }
        None => cycle_from(original.clone(), original),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{take, take_while};

    #[test]
    fn test_list_inf() {
        assert_eq!(take(5, &list_inf(1)), list![1, 2, 3, 4, 5]);
        assert_eq!(take(3, &list_inf_by(0.5, 0.25)), list![0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_only_walked_cells_are_generated() {
        let xs = list_inf(1_u64);
        let _ = take(3, &xs);
        let third = xs.tail_ref().unwrap().tail_ref().unwrap();
        assert!(third.is_tail_deferred());
    }

    #[test]
    fn test_ranges() {
        assert_eq!(list_range(1, 4), list![1, 2, 3, 4]);
        assert_eq!(list_range(4, 1), List::empty());
        assert_eq!(list_range_by(10, 1, -3).unwrap(), list![10, 7, 4, 1]);
        assert_eq!(list_range_lazy(1, 3), list![1, 2, 3]);
        assert_eq!(list_range_lazy_by(0, 10, 5).unwrap(), list![0, 5, 10]);
    }

    #[test]
    fn test_zero_step_is_rejected() {
        let err = list_range_by(1, 5, 0).unwrap_err();
        assert_eq!(err.function(), "list_range_by");
        assert!(list_range_lazy_by(1, 5, 0).is_err());
    }

    #[test]
    fn test_iterate_and_repeat() {
        assert_eq!(take(4, &iterate(|x: &i32| x * 2, 1)), list![1, 2, 4, 8]);
        assert_eq!(take(3, &repeat('z')), list!['z', 'z', 'z']);
        assert_eq!(
            take_while(|x: &i32| *x < 20, &iterate(|x: &i32| x + 7, 0)),
            list![0, 7, 14]
        );
    }

    #[test]
    fn test_replicate() {
        assert_eq!(replicate(3, "a"), list!["a", "a", "a"]);
        assert!(replicate(0, 1).is_empty());
    }

    #[test]
    fn test_cycle() {
        let xs = cycle(&list![1, 2, 3]).unwrap();
        assert_eq!(take(7, &xs), list![1, 2, 3, 1, 2, 3, 1]);

        let empty: List<i32> = List::empty();
        assert_eq!(cycle(&empty).unwrap_err().kind(), "empty-list");
    }
}
