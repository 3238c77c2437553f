//! Property tests for hask-prelude
//!
//! These tests verify the algebraic laws of List and Maybe and the
//! behavioural contracts of the list operations.

use hask_base::classes::{Applicative, Functor, Monad, Monoid};
use hask_prelude::list;
use hask_prelude::list::{
    from_array_to_list, from_list_to_array, length, list_append, list_inf, merge_sort,
    reverse, sort, take, List,
};
use hask_prelude::maybe::{from_just, just, Maybe};
use hask_prelude::tuple::{curry, fst, snd, tuple, uncurry};
use hask_prelude::value::Value;
use proptest::prelude::*;

fn small_list() -> impl Strategy<Value = List<i32>> {
    prop::collection::vec(-1000..1000_i32, 0..40).prop_map(List::from_vec)
}

fn small_maybe() -> impl Strategy<Value = Maybe<i32>> {
    prop::option::of(-1000..1000_i32).prop_map(Maybe::from)
}

// ============================================================
// List properties
// ============================================================

proptest! {
    #[test]
    fn list_array_round_trip(xs in small_list()) {
        let items = from_list_to_array(&xs);
        prop_assert_eq!(from_list_to_array(&from_array_to_list(&items)), items);
    }

    #[test]
    fn list_append_adds_lengths(xs in small_list(), ys in small_list()) {
        let both = list_append(&xs, &ys).unwrap();
        prop_assert_eq!(length(&both), length(&xs) + length(&ys));
    }

    #[test]
    fn list_reverse_is_an_involution(xs in small_list()) {
        prop_assert_eq!(reverse(&reverse(&xs)), xs);
    }

    #[test]
    fn list_take_drop_recombine(xs in small_list(), seed in any::<usize>()) {
        let n = seed % (length(&xs) + 1);
        let rebuilt = list_append(&take(n, &xs), &list::drop(n, &xs)).unwrap();
        prop_assert_eq!(rebuilt, xs);
    }

    #[test]
    fn list_sorts_agree(xs in small_list()) {
        let sorted = sort(&xs);
        prop_assert_eq!(&merge_sort(&xs), &sorted);

        let mut expected = from_list_to_array(&xs);
        expected.sort_unstable();
        prop_assert_eq!(from_list_to_array(&sorted), expected);
    }

    #[test]
    fn list_infinite_prefix(start in -1000..1000_i64, n in 0..50_usize) {
        let prefix = take(n, &list_inf(start));
        let expected: Vec<i64> = (start..).take(n).collect();
        prop_assert_eq!(from_list_to_array(&prefix), expected);
    }

    // Functor laws for List
    #[test]
    fn list_functor_identity(xs in small_list()) {
        prop_assert_eq!(xs.clone().fmap(|x| x), xs);
    }

    #[test]
    fn list_functor_composition(xs in small_list()) {
        let f = |a: i32| a.wrapping_add(1);
        let g = |a: i32| a.wrapping_mul(2);
        prop_assert_eq!(xs.clone().fmap(|a| f(g(a))), xs.fmap(g).fmap(f));
    }

    // Monad laws for List
    #[test]
    fn list_monad_left_identity(x in -1000..1000_i32) {
        let f = |a: i32| list![a, a + 1];
        prop_assert_eq!(List::pure(x).flat_map(f), f(x));
    }

    #[test]
    fn list_monad_right_identity(xs in small_list()) {
        prop_assert_eq!(xs.clone().flat_map(|a| list![a]), xs);
    }

    #[test]
    fn list_monad_associativity(xs in small_list()) {
        let f = |a: i32| list![a, -a];
        let g = |a: i32| if a > 0 { list![a] } else { List::empty() };
        let left = xs.clone().flat_map(f).flat_map(g);
        let right = xs.flat_map(|a| f(a).flat_map(g));
        prop_assert_eq!(left, right);
    }

    // Monoid laws for List
    #[test]
    fn list_monoid_identity(xs in small_list()) {
        prop_assert_eq!(List::mempty().mappend(xs.clone()), xs.clone());
        prop_assert_eq!(xs.clone().mappend(List::mempty()), xs);
    }

    #[test]
    fn list_monoid_associativity(xs in small_list(), ys in small_list(), zs in small_list()) {
        let left = xs.clone().mappend(ys.clone()).mappend(zs.clone());
        let right = xs.mappend(ys.mappend(zs));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn list_ord_matches_vec(xs in small_list(), ys in small_list()) {
        let expected = from_list_to_array(&xs).cmp(&from_list_to_array(&ys));
        prop_assert_eq!(xs.cmp(&ys), expected);
    }
}

// ============================================================
// Maybe properties
// ============================================================

proptest! {
    #[test]
    fn maybe_functor_identity(m in small_maybe()) {
        prop_assert_eq!(m.fmap(|x| x), m);
    }

    #[test]
    fn maybe_monad_associativity(m in small_maybe()) {
        let f = |a: i32| if a > 0 { Maybe::Just(a + 1) } else { Maybe::Nothing };
        let g = |a: i32| if a < 100 { Maybe::Just(a * 2) } else { Maybe::Nothing };
        let left = m.flat_map(f).flat_map(g);
        let right = m.flat_map(|a| f(a).flat_map(g));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn maybe_just_round_trip(x in any::<i32>()) {
        prop_assert!(just(x).is_just());
        prop_assert_eq!(from_just(just(x)).unwrap(), x);
    }

    #[test]
    fn maybe_nothing_less_than_just(x in any::<i32>()) {
        prop_assert!(Maybe::Nothing < Maybe::Just(x));
    }
}

// ============================================================
// Dynamic tuple properties
// ============================================================

proptest! {
    #[test]
    fn tuple_curry_uncurry_round_trip(a in -1000..1000_i64, b in -1000..1000_i64) {
        let sub = |p: &Value| -> hask_base::Result<Value> {
            match (fst(p)?, snd(p)?) {
                (Value::Int(x), Value::Int(y)) => Ok(Value::Int(x - y)),
                _ => Ok(Value::Unit),
            }
        };
        let f = uncurry(curry(sub));
        let pair = tuple(vec![Value::Int(a), Value::Int(b)]);
        prop_assert_eq!(f(&pair).unwrap(), Value::Int(a - b));
    }
}
