//! Zipping and unzipping. Zips stop at the end of the shortest input.

use super::List;

/// Pairs up corresponding elements.
pub fn zip<A: Clone, B: Clone>(xs: &List<A>, ys: &List<B>) -> List<(A, B)> {
    zip_with(|a, b| (a.clone(), b.clone()), xs, ys)
}

/// Triples up corresponding elements.
pub fn zip3<A, B, C>(xs: &List<A>, ys: &List<B>, zs: &List<C>) -> List<(A, B, C)>
where
    A: Clone,
    B: Clone,
    C: Clone,
{
    zip_with3(|a, b, c| (a.clone(), b.clone(), c.clone()), xs, ys, zs)
}

/// Combines corresponding elements with `f`.
pub fn zip_with<A, B, C, F>(mut f: F, xs: &List<A>, ys: &List<B>) -> List<C>
where
    F: FnMut(&A, &B) -> C,
{
    match (xs.uncons_ref(), ys.uncons_ref()) {
        (Some((a, xs)), Some((b, ys))) => {
            let c = f(a, b);
            List::cons_unchecked(c, zip_with(f, xs, ys))
        }
        _ => List::empty(),
    }
}

/// Combines corresponding elements of three lists with `f`.
pub fn zip_with3<A, B, C, D, F>(mut f: F, xs: &List<A>, ys: &List<B>, zs: &List<C>) -> List<D>
where
    F: FnMut(&A, &B, &C) -> D,
{
    match (xs.uncons_ref(), ys.uncons_ref(), zs.uncons_ref()) {
        (Some((a, xs)), Some((b, ys)), Some((c, zs))) => {
            let d = f(a, b, c);
            List::cons_unchecked(d, zip_with3(f, xs, ys, zs))
        }
        _ => List::empty(),
    }
}

/// Splits a list of pairs into a pair of lists.
pub fn unzip<A: Clone, B: Clone>(pairs: &List<(A, B)>) -> (List<A>, List<B>) {
    match pairs.uncons_ref() {
        Some(((a, b), rest)) => {
            let (xs, ys) = unzip(rest);
            (
                List::cons_unchecked(a.clone(), xs),
                List::cons_unchecked(b.clone(), ys),
            )
        }
        None => (List::empty(), List::empty()),
    }
}

/// Splits a list of triples into a triple of lists.
pub fn unzip3<A, B, C>(triples: &List<(A, B, C)>) -> (List<A>, List<B>, List<C>)
where
    A: Clone,
    B: Clone,
    C: Clone,
{
    match triples.uncons_ref() {
        Some(((a, b, c), rest)) => {
            let (xs, ys, zs) = unzip3(rest);
            (
                List::cons_unchecked(a.clone(), xs),
                List::cons_unchecked(b.clone(), ys),
                List::cons_unchecked(c.clone(), zs),
            )
        }
        None => (List::empty(), List::empty(), List::empty()),
    }
}
