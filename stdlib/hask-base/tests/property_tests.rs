//! Property tests for hask-base
//!
//! These tests verify the algebraic laws of the base instances and the
//! consistency of the comparison functions.

use hask_base::classes::{
    compare, greater_than, less_than, less_than_or_equal, max, min, Foldable, Functor, Monoid,
};
use hask_base::ordering::Ordering;
use hask_base::registry::{type_check, Capability, Methods, TypeTag};
use hask_base::show::Show;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn ordering() -> impl Strategy<Value = Ordering> {
    prop_oneof![Just(Ordering::LT), Just(Ordering::EQ), Just(Ordering::GT)]
}

// ============================================================
// Ordering properties
// ============================================================

proptest! {
    #[test]
    fn ordering_monoid_identity(o in ordering()) {
        prop_assert_eq!(Ordering::mempty().mappend(o), o);
        prop_assert_eq!(o.mappend(Ordering::mempty()), o);
    }

    #[test]
    fn ordering_monoid_associativity(a in ordering(), b in ordering(), c in ordering()) {
        prop_assert_eq!(a.mappend(b).mappend(c), a.mappend(b.mappend(c)));
    }

    #[test]
    fn ordering_reverse_involution(o in ordering()) {
        prop_assert_eq!(o.reverse().reverse(), o);
    }

    #[test]
    fn compare_is_antisymmetric(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    }

    #[test]
    fn derived_comparisons_agree(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(less_than(&a, &b), a < b);
        prop_assert_eq!(less_than_or_equal(&a, &b), a <= b);
        prop_assert_eq!(greater_than(&a, &b), a > b);
        prop_assert_eq!(max(a, b), a.max(b));
        prop_assert_eq!(min(a, b), a.min(b));
    }

    #[test]
    fn compare_floats_never_panics(a in any::<f64>(), b in any::<f64>()) {
        let ord = compare(&a, &b);
        if a.is_nan() || b.is_nan() {
            prop_assert_eq!(ord, Ordering::GT);
        } else {
            prop_assert_eq!(Some(std::cmp::Ordering::from(ord)), a.partial_cmp(&b));
        }
    }
}

// ============================================================
// Tuple instances
// ============================================================

proptest! {
    #[test]
    fn tuple_monoid_is_componentwise(a in ".{0,8}", b in ".{0,8}", o in ordering(), p in ordering()) {
        let left = (a.clone(), o).mappend((b.clone(), p));
        prop_assert_eq!(left, (format!("{a}{b}"), o.mappend(p)));
    }

    #[test]
    fn pair_functor_keeps_environment(env in any::<i32>(), x in any::<i32>()) {
        let mapped = (env, x).fmap(|v: i32| v.wrapping_add(1));
        prop_assert_eq!(mapped, (env, x.wrapping_add(1)));
    }

    #[test]
    fn pair_folds_second_slot(env in any::<u8>(), x in any::<i32>()) {
        prop_assert_eq!((env, x).length(), 1);
        prop_assert_eq!((env, x).to_list_vec(), vec![x]);
    }

    #[test]
    fn tuple_show_matches_components(a in any::<i16>(), c in any::<char>()) {
        prop_assert_eq!((a, c).show(), format!("({},{})", a.show(), c.show()));
    }
}

// ============================================================
// Registry
// ============================================================

#[test]
fn every_capability_of_list_and_maybe() {
    let all = [
        Capability::Eq,
        Capability::Ord,
        Capability::Monoid,
        Capability::Functor,
        Capability::Applicative,
        Capability::Monad,
        Capability::Foldable,
        Capability::Traversable,
    ];
    for capability in all {
        assert!(TypeTag::List.methods().contains(capability.required()));
        assert!(TypeTag::Maybe.methods().contains(capability.required()));
    }
    assert!(!TypeTag::Tuple.methods().contains(Capability::Monad.required()));
    assert_eq!(TypeTag::Int.methods(), Methods::empty());
}

#[test]
fn type_check_on_tuples() {
    assert!(type_check(&(1, 2), &(3, 4)));
    assert!(!type_check(&(1, 2), &('a', 2)));
    assert!(!type_check(&(1, 2), &(1, 2, 3)));
}
