//! End-to-end scenarios across lists, tuples, Maybe and dynamic values.

use hask_base::classes::{do_block, sequence, traverse, Monad};
use hask_base::show::{print_to, show};
use hask_base::Ordering;
use hask_prelude::list::{
    self, cons, cycle, group, head, iterate, lookup, span, tail, take, take_while, zip, List,
};
use hask_prelude::list::curried;
use hask_prelude::maybe::{from_just, is_just, just, Maybe};
use hask_prelude::tuple::{fst, is_tuple, snd, tuple};
use hask_prelude::value::{self, Value};
use pretty_assertions::assert_eq;

#[test]
fn cons_then_deconstruct() {
    let xs = cons(1, List::empty()).unwrap();
    assert_eq!(head(&xs).unwrap(), 1);
    assert_eq!(tail(&xs).unwrap(), List::empty());

    let chars = hask_prelude::list![Value::Char('a')];
    let err = cons(Value::Int(1), chars).unwrap_err();
    assert_eq!(err.kind(), "type-mismatch");
    assert_eq!(err.function(), "cons");
}

#[test]
fn zip_truncates_and_renders() {
    let pairs = zip(
        &hask_prelude::list![1, 2, 3],
        &hask_prelude::list!['a', 'b'],
    );
    assert_eq!(show(&pairs), "[(1,'a'):(2,'b'):[]]");
    assert_eq!(lookup(&2, &pairs), Maybe::Just('b'));
}

#[test]
fn infinite_lists_are_sliced_lazily() {
    let naturals = list::list_inf(1);
    assert_eq!(take(5, &naturals), hask_prelude::list![1, 2, 3, 4, 5]);

    let powers = iterate(|x: &u64| x * 2, 1);
    let small = take_while(|x: &u64| *x < 100, &powers);
    assert_eq!(show(&small), "[1:2:4:8:16:32:64:[]]");

    let abc = cycle(&hask_prelude::list!['a', 'b', 'c']).unwrap();
    assert_eq!(list::from_list_to_string(&take(7, &abc)), "abcabca");
}

#[test]
fn span_returns_both_halves() {
    let (small, rest) = span(|x: &i32| *x < 3, &hask_prelude::list![1, 2, 3, 1]);
    assert_eq!(small, hask_prelude::list![1, 2]);
    assert_eq!(rest, hask_prelude::list![3, 1]);

    let runs = group(&list::from_string_to_list("aabccc"));
    let lengths: Vec<usize> = runs.iter().map(list::length).collect();
    assert_eq!(lengths, vec![2, 1, 3]);
}

#[test]
fn tuple_arity_rules() {
    assert_eq!(tuple(vec![Value::Int(1)]), Value::Int(1));
    assert_eq!(tuple(vec![]), Value::Unit);
    assert!(!is_tuple(&Value::Unit));

    let p = tuple(vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(fst(&p).unwrap(), Value::Int(1));
    assert_eq!(snd(&p).unwrap(), Value::Int(2));
    assert_eq!(show(&p), "(1,2)");
}

#[test]
fn just_collapses_missing_values() {
    assert_eq!(just(f64::NAN), Maybe::Nothing);
    assert_eq!(just(None::<i32>), Maybe::Nothing);
    assert!(is_just(&just(5)));
    assert_eq!(from_just(just(5)).unwrap(), 5);
    assert_eq!(
        from_just(Maybe::<i32>::Nothing).unwrap_err().to_string(),
        "Nothing is Nothing in from_just"
    );
}

#[test]
fn traversals_short_circuit() {
    let parse = |c: char| just(c).flat_map(|c| c.to_digit(10).into());
    let digits = list::from_string_to_list("123");
    assert_eq!(traverse(parse, digits), just(hask_prelude::list![1, 2, 3]));
    let broken = list::from_string_to_list("1x3");
    assert_eq!(traverse(parse, broken), Maybe::Nothing);

    let all = hask_prelude::list![just(1), just(2)];
    assert_eq!(sequence(all), just(hask_prelude::list![1, 2]));
}

#[test]
fn do_block_threads_the_monad() {
    let result = do_block(just(3))
        .flat_map(|x| just(x + 1))
        .flat_map(|x| if x > 3 { just(x * 10) } else { Maybe::Nothing })
        .into_inner();
    assert_eq!(result, just(40));
}

#[test]
fn curried_pipeline() {
    let firsts = curried::take(3);
    let evens = curried::filter(|x: &i64| x % 2 == 0);
    let xs = evens(&firsts(&list::list_inf(10)));
    assert_eq!(xs, hask_prelude::list![10, 12]);
}

#[test]
fn dynamic_values_dispatch_through_the_registry() {
    let xs = Value::List(hask_prelude::list![Value::Int(3), Value::Int(1)]);
    let ys = Value::List(hask_prelude::list![Value::Int(3), Value::Int(2)]);
    assert_eq!(xs.compare(&ys).unwrap(), Ordering::LT);

    let joined = xs.mappend(&ys).unwrap();
    assert_eq!(show(&joined), "[3:1:3:2:[]]");

    let odd = value::filter(
        |v| Value::Bool(matches!(v, Value::Int(n) if n % 2 == 1)),
        &joined,
    )
    .unwrap();
    assert_eq!(show(&odd), "[3:1:3:[]]");

    let err = value::find(|_| Value::Int(0), &joined).unwrap_err();
    assert_eq!(
        err.to_string(),
        "predicate must return a Bool when called by find"
    );
}

#[test]
fn print_writes_canonical_form() {
    let mut out = Vec::new();
    print_to(&mut out, &just(hask_prelude::list![1, 2])).unwrap();
    print_to(&mut out, &Ordering::GT).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Just [1:2:[]]\nGT\n");
}
