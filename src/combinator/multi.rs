//! Repetition: applying one parser, or a sequence of distinct ones, more than once.

use crate::lib::vec::Vec;
use crate::parser::{BoxedParser, Parser};
use crate::reply::Reply;
use crate::stream::Stream;
use crate::trace::trace;
use core::marker::PhantomData;

/// Applies `p` repeatedly, collecting successes into a `Vec`.
///
/// `p` must succeed at least `n` times: if fewer than `n` successes occur before the first
/// non-success, `many` fails with that outcome (`Failure` if the last attempt was a `Failure`,
/// `Error` if it was an `Error`). Once `n` successes have accumulated, `many` greedily consumes
/// further successes until the first non-success, then returns `Success` with everything
/// collected so far — a trailing `Failure` is absorbed silently (it is how the repetition knows
/// to stop); a trailing `Error` still aborts the whole combinator.
///
/// Implemented as a loop, not recursion, so arbitrarily long repetitions don't grow the stack.
pub fn many<S, R, P>(p: P, n: usize) -> impl Parser<S, Vec<R>>
where
    S: Stream,
    P: Parser<S, R>,
{
    trace("many", move |input: S| {
        let mut stream = input;
        let mut results = Vec::new();
        let mut all_msgs = Vec::new();
        loop {
            let attempt = stream.clone();
            match p.parse(attempt) {
                Reply::Success(next, v, msgs) => {
                    all_msgs.extend(msgs);
                    results.push(v);
                    stream = next;
                }
                Reply::Failure(fail_stream, msgs) => {
                    all_msgs.extend(msgs);
                    if results.len() >= n {
                        return Reply::Success(stream, results, all_msgs);
                    }
                    return Reply::Failure(fail_stream, all_msgs);
                }
                Reply::Error(err_stream, e, msgs) => {
                    all_msgs.extend(msgs);
                    return Reply::Error(err_stream, e, all_msgs);
                }
            }
        }
    })
}

/// `many(p, 0)`: zero or more.
pub fn many0<S, R, P>(p: P) -> impl Parser<S, Vec<R>>
where
    S: Stream,
    P: Parser<S, R>,
{
    many(p, 0)
}

/// `many(p, 1)`: one or more.
pub fn many1<S, R, P>(p: P) -> impl Parser<S, Vec<R>>
where
    S: Stream,
    P: Parser<S, R>,
{
    many(p, 1)
}

/// Applies a *sequence of distinct* parsers, in order, stopping greedily at the first
/// `Failure` (returning `Success` of the prefix collected so far) or aborting on the first
/// `Error`. The heterogeneous-collection analogue of [`many`], where each position in the list
/// may be a different parser rather than the same one repeated.
pub fn greed<S, R>(parsers: Vec<BoxedParser<S, R>>) -> impl Parser<S, Vec<R>>
where
    S: Stream,
{
    move |input: S| {
        let mut stream = input;
        let mut results = Vec::new();
        let mut all_msgs = Vec::new();
        for p in &parsers {
            let attempt = stream.clone();
            match p.parse(attempt) {
                Reply::Success(next, v, msgs) => {
                    all_msgs.extend(msgs);
                    results.push(v);
                    stream = next;
                }
                Reply::Failure(_, msgs) => {
                    all_msgs.extend(msgs);
                    return Reply::Success(stream, results, all_msgs);
                }
                Reply::Error(s, e, msgs) => {
                    all_msgs.extend(msgs);
                    return Reply::Error(s, e, all_msgs);
                }
            }
        }
        Reply::Success(stream, results, all_msgs)
    }
}

/// Applies every parser in `parsers`, in order; all must succeed. Any `Failure` or `Error` is
/// propagated, with the stream reset to `sequence`'s own input on `Failure` (the same commit
/// rule as [`bind`](crate::combinator::bind)).
pub fn sequence<S, R>(parsers: Vec<BoxedParser<S, R>>) -> impl Parser<S, Vec<R>>
where
    S: Stream,
{
    move |input: S| {
        let original = input.clone();
        let mut stream = input;
        let mut results = Vec::with_capacity(parsers.len());
        let mut all_msgs = Vec::new();
        for p in &parsers {
            match p.parse(stream) {
                Reply::Success(next, v, msgs) => {
                    all_msgs.extend(msgs);
                    results.push(v);
                    stream = next;
                }
                Reply::Failure(_, msgs) => {
                    all_msgs.extend(msgs);
                    return Reply::Failure(original, all_msgs);
                }
                Reply::Error(s, e, msgs) => {
                    all_msgs.extend(msgs);
                    return Reply::Error(s, e, all_msgs);
                }
            }
        }
        Reply::Success(stream, results, all_msgs)
    }
}

/// A lazy, unbounded sequence of attempts at `p` against successive stream positions, stopping
/// (as a Rust iterator) the first time `p` does not succeed. Pairs with [`partition`], which
/// forces a fixed prefix off the front of one of these and leaves the rest lazy.
pub struct Replicate<S, R, P> {
    parser: P,
    stream: Option<S>,
    _marker: PhantomData<R>,
}

impl<S, R, P> Replicate<S, R, P>
where
    S: Stream,
    P: Parser<S, R>,
{
    /// Builds the lazy sequence, starting at `stream`.
    pub fn new(parser: P, stream: S) -> Self {
        Self {
            parser,
            stream: Some(stream),
            _marker: PhantomData,
        }
    }
}

impl<S, R, P> Iterator for Replicate<S, R, P>
where
    S: Stream,
    P: Parser<S, R>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let stream = self.stream.take()?;
        match self.parser.parse(stream) {
            Reply::Success(next, v, _msgs) => {
                self.stream = Some(next);
                Some(v)
            }
            Reply::Failure(..) | Reply::Error(..) => None,
        }
    }
}

/// The result of forcing the first `n` elements off a [`Replicate`] sequence.
pub enum Partition<S, R, P>
where
    S: Stream,
    P: Parser<S, R> + Clone,
{
    /// At least `n` elements of `p` matched. `prefix` holds exactly the first `n`; `tail` is the
    /// still-lazy sequence of any further matches, starting right after the prefix.
    Success {
        prefix: Vec<R>,
        tail: Replicate<S, R, P>,
    },
    /// Fewer than `n` elements matched before a `Failure`.
    Failure(S),
    /// Fewer than `n` elements matched before an `Error`.
    Error(S),
}

/// Forces the first `n` matches of `parser` off the front of `stream` into a fixed `Vec`,
/// leaving the remainder as a lazy [`Replicate`] tail. `parser` must be `Clone` so the tail can
/// own its own copy independent of the one used to build the prefix.
pub fn partition<S, R, P>(parser: P, stream: S, n: usize) -> Partition<S, R, P>
where
    S: Stream,
    P: Parser<S, R> + Clone,
{
    let mut prefix = Vec::with_capacity(n);
    let mut cur = stream;
    for _ in 0..n {
        let attempt = cur.clone();
        match parser.parse(attempt) {
            Reply::Success(next, v, _msgs) => {
                prefix.push(v);
                cur = next;
            }
            Reply::Failure(s, _) => return Partition::Failure(s),
            Reply::Error(s, _, _) => return Partition::Error(s),
        }
    }
    Partition::Success {
        prefix,
        tail: Replicate::new(parser, cur),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::core::{error, satisfy, token};
    use crate::stream::CharStream;

    #[test]
    fn many_requires_minimum_occurrences() {
        let input = CharStream::new("42x");
        let digit = satisfy::<CharStream<'_>, _>(|c: &char| c.is_ascii_digit());
        let reply = many(digit, 1).parse(input);
        assert_eq!(reply.value(), Some(&vec!['4', '2']));
        assert_eq!(reply.stream().position(), 2);
    }

    #[test]
    fn many_zero_on_immediate_miss() {
        let input = CharStream::new("x");
        let digit = satisfy::<CharStream<'_>, _>(|c: &char| c.is_ascii_digit());
        let reply = many(digit, 0).parse(input.clone());
        assert_eq!(reply.value(), Some(&Vec::new()));
        assert_eq!(reply.stream().position(), input.position());
    }

    #[test]
    fn replicate_stops_at_first_miss() {
        let input = CharStream::new("aaab");
        let a = crate::combinator::core::token::<CharStream<'_>>('a');
        let seq = Replicate::new(a, input);
        let collected: Vec<char> = seq.collect();
        assert_eq!(collected, vec!['a', 'a', 'a']);
    }

    #[test]
    fn partition_splits_prefix_and_lazy_tail() {
        let input = CharStream::new("aaab");
        let a = crate::combinator::core::token::<CharStream<'_>>('a');
        match partition(a, input, 2) {
            Partition::Success { prefix, tail } => {
                assert_eq!(prefix, vec!['a', 'a']);
                let rest: Vec<char> = tail.collect();
                assert_eq!(rest, vec!['a']);
            }
            _ => panic!("expected Success"),
        }
    }

    #[test]
    fn greed_stops_at_first_failure_and_returns_prefix() {
        let input = CharStream::new("ab!");
        let p = greed(Vec::from([
            token::<CharStream<'_>>('a').boxed(),
            token::<CharStream<'_>>('b').boxed(),
            token::<CharStream<'_>>('c').boxed(),
        ]));
        let reply = p.parse(input);
        assert_eq!(reply.value(), Some(&vec!['a', 'b']));
        assert_eq!(reply.stream().position(), 2);
    }

    #[test]
    fn greed_aborts_on_error() {
        let input = CharStream::new("ab!");
        let p = greed(Vec::from([
            token::<CharStream<'_>>('a').boxed(),
            error::<CharStream<'_>, char>("boom").boxed(),
            token::<CharStream<'_>>('c').boxed(),
        ]));
        let reply = p.parse(input);
        assert!(reply.is_error());
        assert_eq!(reply.fatal().unwrap().text, "boom");
    }

    #[test]
    fn sequence_propagates_mid_list_failure_with_stream_reset() {
        let input = CharStream::new("ab!");
        let p = sequence(Vec::from([
            token::<CharStream<'_>>('a').boxed(),
            token::<CharStream<'_>>('z').boxed(),
            token::<CharStream<'_>>('c').boxed(),
        ]));
        let reply = p.parse(input.clone());
        assert!(reply.is_failure());
        assert_eq!(reply.stream().position(), input.position());
    }

    #[test]
    fn sequence_requires_every_parser_to_succeed() {
        let input = CharStream::new("abc");
        let p = sequence(Vec::from([
            token::<CharStream<'_>>('a').boxed(),
            token::<CharStream<'_>>('b').boxed(),
            token::<CharStream<'_>>('c').boxed(),
        ]));
        let reply = p.parse(input);
        assert_eq!(reply.value(), Some(&vec!['a', 'b', 'c']));
        assert_eq!(reply.stream().position(), 3);
    }
}
