//! Chains: repeated application of a binary operator parsed between operand parsers, folded
//! left- or right-associatively.
//!
//! Every combinator here is built on top of [`sep_by`](crate::combinator::sep_by): a chain is
//! just a separated list that gets folded instead of collected.

use crate::combinator::core::map;
use crate::combinator::separated::sep_by;
use crate::parser::Parser;
use crate::stream::Stream;

/// Parses one or more `p`, separated by `sep`, and folds them left-associatively with `f`,
/// using the first `p` as the initial accumulator. `f` has the same input and output type,
/// the "uniform type" variant of [`chainl`].
///
/// Requires at least one `p`; propagates `p`'s own `Failure`/`Error` when there isn't one. See
/// [`chainl`] for a variant that falls back to a caller-supplied seed instead.
pub fn chainl1<S, R, P, Sep, U, F>(p: P, sep: Sep, f: F) -> impl Parser<S, R>
where
    S: Stream,
    P: Parser<S, R>,
    Sep: Parser<S, U>,
    F: Fn(R, R) -> R,
{
    map(sep_by(p, 1, sep), move |mut items: crate::lib::vec::Vec<R>| {
        let head = items.remove(0);
        items.into_iter().fold(head, &f)
    })
}

/// Like [`chainl1`], but `p` may match zero times: when it does, the chain succeeds without
/// consuming, yielding `seed` directly. Otherwise folds left-associatively starting from
/// `f(seed, head)` over the rest.
pub fn chainl<S, R, P, Sep, Uv, V, F>(p: P, sep: Sep, seed: V, f: F) -> impl Parser<S, V>
where
    S: Stream,
    P: Parser<S, R>,
    Sep: Parser<S, Uv>,
    V: Clone,
    F: Fn(V, R) -> V,
{
    map(sep_by(p, 0, sep), move |items: crate::lib::vec::Vec<R>| {
        items.into_iter().fold(seed.clone(), &f)
    })
}

/// Like [`chainl`], but the initial accumulator is derived from the first `p` via
/// `seed_selector` instead of supplied as a constant. Requires at least one `p`.
pub fn chainl_with<S, R, P, Sep, Uv, V, Sel, F>(p: P, sep: Sep, seed_selector: Sel, f: F) -> impl Parser<S, V>
where
    S: Stream,
    P: Parser<S, R>,
    Sep: Parser<S, Uv>,
    Sel: Fn(R) -> V,
    F: Fn(V, R) -> V,
{
    map(sep_by(p, 1, sep), move |mut items: crate::lib::vec::Vec<R>| {
        let head = items.remove(0);
        let seed = seed_selector(head);
        items.into_iter().fold(seed, &f)
    })
}

/// Parses one or more `p`, separated by `sep`, and folds them right-associatively with `f`
/// (same input and output type), using the last `p` as the initial accumulator: the rightmost
/// element combines with it first.
///
/// Requires at least one `p`; propagates `p`'s own `Failure`/`Error` when there isn't one.
pub fn chainr1<S, R, P, Sep, U, F>(p: P, sep: Sep, f: F) -> impl Parser<S, R>
where
    S: Stream,
    P: Parser<S, R>,
    Sep: Parser<S, U>,
    F: Fn(R, R) -> R,
{
    map(sep_by(p, 1, sep), move |items: crate::lib::vec::Vec<R>| {
        let mut it = items.into_iter().rev();
        let last = it.next().expect("sep_by(.., 1, ..) yields at least one item");
        it.fold(last, |acc, item| f(item, acc))
    })
}

/// Like [`chainr1`], but `p` may match zero times: when it does, the chain succeeds without
/// consuming, yielding `seed` directly. Otherwise folds right-associatively, with `seed`
/// combining with the rightmost element first.
pub fn chainr<S, R, P, Sep, Uv, V, F>(p: P, sep: Sep, seed: V, f: F) -> impl Parser<S, V>
where
    S: Stream,
    P: Parser<S, R>,
    Sep: Parser<S, Uv>,
    V: Clone,
    F: Fn(R, V) -> V,
{
    map(sep_by(p, 0, sep), move |items: crate::lib::vec::Vec<R>| {
        items
            .into_iter()
            .rev()
            .fold(seed.clone(), |acc, item| f(item, acc))
    })
}

/// Like [`chainr`], but the initial accumulator is derived from the last `p` (the rightmost
/// operand, where a right-associative fold begins) via `seed_selector` instead of supplied as
/// a constant. Requires at least one `p`.
pub fn chainr_with<S, R, P, Sep, Uv, V, Sel, F>(p: P, sep: Sep, seed_selector: Sel, f: F) -> impl Parser<S, V>
where
    S: Stream,
    P: Parser<S, R>,
    Sep: Parser<S, Uv>,
    Sel: Fn(R) -> V,
    F: Fn(R, V) -> V,
{
    map(sep_by(p, 1, sep), move |items: crate::lib::vec::Vec<R>| {
        let mut it = items.into_iter().rev();
        let last = it.next().expect("sep_by(.., 1, ..) yields at least one item");
        let seed = seed_selector(last);
        it.fold(seed, |acc, item| f(item, acc))
    })
}
