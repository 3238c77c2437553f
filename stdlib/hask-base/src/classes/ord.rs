//! Ord class functions.
//!
//! [`compare`] is the only primitive; every other function here is derived
//! from it, mirroring Haskell's minimal complete definition.

use crate::ordering::Ordering;

/// Three-way comparison.
///
/// Pairs `PartialOrd` cannot order (NaN against anything) are neither equal
/// nor less, so they compare `GT`. Infinities need no special casing: IEEE
/// ordering already puts them above and below every finite value.
/// `compare(inf, inf)` is `EQ`, not `GT`, so that `compare` stays reflexive.
pub fn compare<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    match a.partial_cmp(b) {
        Some(ord) => ord.into(),
        None => Ordering::GT,
    }
}

/// `a < b`.
#[inline]
pub fn less_than<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    compare(a, b).is_lt()
}

/// `a <= b`.
#[inline]
pub fn less_than_or_equal<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    compare(a, b).is_le()
}

/// `a > b`.
#[inline]
pub fn greater_than<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    compare(a, b).is_gt()
}

/// `a >= b`.
#[inline]
pub fn greater_than_or_equal<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    compare(a, b).is_ge()
}

/// The larger of two values, preferring `b` when they are equal.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if less_than_or_equal(&a, &b) {
        b
    } else {
        a
    }
}

/// The smaller of two values, preferring `a` when they are equal.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if less_than_or_equal(&a, &b) {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::{EQ, GT, LT};

    #[test]
    fn test_compare() {
        assert_eq!(compare(&1, &2), LT);
        assert_eq!(compare(&2, &2), EQ);
        assert_eq!(compare("b", "a"), GT);
    }

    #[test]
    fn test_infinities() {
        assert_eq!(compare(&f64::INFINITY, &1e300), GT);
        assert_eq!(compare(&f64::NEG_INFINITY, &-1e300), LT);
        assert_eq!(compare(&f64::NAN, &1.0), GT);
        assert_eq!(compare(&f64::INFINITY, &f64::INFINITY), EQ);
        assert_eq!(compare(&f64::NEG_INFINITY, &f64::NEG_INFINITY), EQ);
    }

    #[test]
    fn test_derived() {
        assert!(less_than(&1, &2));
        assert!(less_than_or_equal(&2, &2));
        assert!(greater_than(&3, &2));
        assert!(greater_than_or_equal(&3, &3));
        assert_eq!(max(1, 2), 2);
        assert_eq!(min(1, 2), 1);
    }
}
