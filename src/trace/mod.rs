//! Parser execution tracing, gated behind the `debug` feature.
//!
//! [`trace`] wraps a parser so its entry, input position, and resulting [`Reply`] variant are
//! printed to stderr, colorized when stderr is a terminal. It never changes parsing semantics
//! and is a no-op pass-through when the `debug` feature is disabled: the wrapped parser is
//! returned unchanged and the label is never even formatted.

#[cfg(feature = "debug")]
mod internals;

use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;

#[cfg(all(feature = "debug", not(feature = "std")))]
compile_error!("`debug` requires `std`");

/// Traces `parser`'s entry and exit under `name` when the `debug` feature is enabled; otherwise
/// returns `parser` unchanged.
#[cfg_attr(not(feature = "debug"), allow(unused_variables))]
pub fn trace<S, R>(name: impl core::fmt::Display + 'static, parser: impl Parser<S, R>) -> impl Parser<S, R>
where
    S: Stream,
{
    #[cfg(feature = "debug")]
    {
        move |input: S| {
            let depth = internals::Depth::enter();
            internals::enter(*depth, &name, &input);
            let reply = parser.parse(input);
            internals::exit(*depth, &name, &reply);
            reply
        }
    }
    #[cfg(not(feature = "debug"))]
    {
        move |input: S| parser.parse(input)
    }
}
