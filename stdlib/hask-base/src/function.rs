//! Plain function plumbing.
//!
//! Partial application and currying. Closures capture the supplied
//! arguments; the returned function can be called any number of times.

use std::rc::Rc;

/// Returns its argument.
#[inline]
pub fn id<A>(x: A) -> A {
    x
}

/// Ignores the second argument.
///
/// The returned closure clones `x` on every call.
#[inline]
pub fn const_<A, B>(x: A) -> impl Fn(B) -> A
where
    A: Clone,
{
    move |_| x.clone()
}

/// Right-to-left composition.
///
/// `compose(f, g)(x)` is `f(g(x))`.
#[inline]
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}

/// Swaps argument order.
#[inline]
pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |b, a| f(a, b)
}

/// Fixes the first argument of a binary function.
#[inline]
pub fn partial<A, B, C, F>(f: F, a: A) -> impl Fn(B) -> C
where
    F: Fn(A, B) -> C,
    A: Clone,
{
    move |b| f(a.clone(), b)
}

/// Fixes the first two arguments of a ternary function.
#[inline]
pub fn partial2<A, B, C, D, F>(f: F, a: A, b: B) -> impl Fn(C) -> D
where
    F: Fn(A, B, C) -> D,
    A: Clone,
    B: Clone,
{
    move |c| f(a.clone(), b.clone(), c)
}

/// Curries a binary function: `curry2(f)(a)(b) == f(a, b)`.
pub fn curry2<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    F: Fn(A, B) -> C + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    let f = Rc::new(f);
    move |a: A| -> Box<dyn Fn(B) -> C> {
        let f = Rc::clone(&f);
        Box::new(move |b| f(a.clone(), b))
    }
}

/// Curries a ternary function: `curry3(f)(a)(b)(c) == f(a, b, c)`.
#[allow(clippy::type_complexity)]
pub fn curry3<A, B, C, D, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> D>>
where
    F: Fn(A, B, C) -> D + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    D: 'static,
{
    let f = Rc::new(f);
    move |a: A| -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> D>> {
        let f = Rc::clone(&f);
        Box::new(move |b: B| -> Box<dyn Fn(C) -> D> {
            let f = Rc::clone(&f);
            let a = a.clone();
            Box::new(move |c| f(a.clone(), b.clone(), c))
        })
    }
}

/// Combines two arguments after projecting both through `f`.
///
/// `on(op, f)(x, y)` is `op(f(x), f(y))`.
#[inline]
pub fn on<A, B, C, F, G>(op: F, f: G) -> impl Fn(A, A) -> C
where
    F: Fn(B, B) -> C,
    G: Fn(A) -> B,
{
    move |x, y| op(f(x), f(y))
}
