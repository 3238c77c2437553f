//! Eq class functions.
//!
//! Equality is `PartialEq`. Statically typed arguments always share a type,
//! so the mismatch failure of the dynamic world cannot occur here; the
//! prelude's `Value::is_eq` is the checked counterpart.

/// Structural equality.
#[inline]
pub fn is_eq<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

/// Structural inequality, the negation of [`is_eq`].
#[inline]
pub fn is_not_eq<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    !is_eq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_eq() {
        assert!(is_eq(&1, &1));
        assert!(is_not_eq("a", "b"));
        assert!(!is_eq(&f64::NAN, &f64::NAN));
    }
}
