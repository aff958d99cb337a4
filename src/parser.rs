//! The [`Parser`] trait: a value that maps a [`Stream`] to a [`Reply`].

use crate::lib::boxed::Box;
use crate::reply::Reply;
use crate::stream::Stream;

/// A parser over token streams of type `S`, producing values of type `R`.
///
/// A `Parser` is a pure function from a stream to a [`Reply`]: applying it does not mutate the
/// stream it was given (streams are immutable handles, see [`Stream`]) and does not depend on
/// any state outside its own closed-over values. The same parser value can therefore be applied
/// any number of times, from any number of call sites, without the results of one application
/// influencing another.
///
/// Most parsers are built by combinator functions in [`crate::combinator`] and never need a
/// named type: they are ordinary closures, covered by the blanket impl below. Implement this
/// trait by hand only when a combinator doesn't fit as a closure (for example, a struct that
/// needs to borrow auxiliary state).
pub trait Parser<S: Stream, R> {
    /// Applies this parser to `input`, producing a [`Reply`].
    fn parse(&self, input: S) -> Reply<S, R>;

    /// Boxes this parser for storage in a heterogeneous collection (e.g. a `Vec` passed to
    /// [`choice_many`](crate::combinator::choice_many)).
    fn boxed(self) -> BoxedParser<S, R>
    where
        Self: Sized + 'static,
        S: 'static,
    {
        BoxedParser::new(self)
    }
}

impl<S, R, F> Parser<S, R> for F
where
    S: Stream,
    F: Fn(S) -> Reply<S, R>,
{
    fn parse(&self, input: S) -> Reply<S, R> {
        self(input)
    }
}

/// Applies `parser` to `stream`. A free-function equivalent of [`Parser::parse`], mirroring the
/// source specification's `run(parser, stream)`.
pub fn run<S, R>(parser: &impl Parser<S, R>, stream: S) -> Reply<S, R>
where
    S: Stream,
{
    parser.parse(stream)
}

/// A type-erased [`Parser`], for collections of parsers that don't share a single closure type
/// (e.g. the `Vec` argument to [`choice_many`](crate::combinator::choice_many),
/// [`greed`](crate::combinator::greed), or [`sequence`](crate::combinator::sequence)).
///
/// Closures are preferred everywhere a single concrete type will do; reach for `BoxedParser`
/// only at the seams where heterogeneous parsers must live in the same collection.
pub struct BoxedParser<S, R> {
    inner: Box<dyn Fn(S) -> Reply<S, R>>,
}

impl<S, R> BoxedParser<S, R>
where
    S: Stream + 'static,
{
    /// Boxes `parser`.
    pub fn new(parser: impl Parser<S, R> + 'static) -> Self {
        Self {
            inner: Box::new(move |input: S| parser.parse(input)),
        }
    }
}

impl<S, R> Parser<S, R> for BoxedParser<S, R>
where
    S: Stream,
{
    fn parse(&self, input: S) -> Reply<S, R> {
        (self.inner)(input)
    }
}
