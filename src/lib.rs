//! `percolate` is a monadic parser-combinator library over arbitrary token streams.
//!
//! Unlike byte- or `&str`-oriented combinator crates, `percolate` does not assume anything
//! about the token type or the stream implementation: a [`Stream`](stream::Stream) is any
//! immutable, repeatable view over a sequence of tokens, and a [`Parser`](parser::Parser) is a
//! pure function from a stream to a [`Reply`](reply::Reply). Parsers are ordinary values: they
//! hold no interior mutable state, may be invoked any number of times, and may be shared freely
//! across threads.
//!
//! # Three-way results
//!
//! Where many combinator libraries collapse "no match" and "malformed match" into a single
//! error type, `percolate` keeps them apart in [`Reply`](reply::Reply):
//!
//! - [`Success`](reply::Reply::Success) — the parser matched and produced a value.
//! - [`Failure`](reply::Reply::Failure) — the parser did not match, but nothing is
//!   irrecoverably wrong; [`choice`](combinator::choice::choice) is free to try another
//!   alternative.
//! - [`Error`](reply::Reply::Error) — the parser matched enough to know the input is
//!   malformed; alternation must not paper over this with a different branch.
//!
//! # Feature flags
//!
//! - `std` (default) — pulls in `std::error::Error` impls and enables the `debug` tracing
//!   combinator's terminal-aware behavior.
//! - `alloc` — the minimum needed to build: [`Reply`](reply::Reply) and
//!   [`ErrorMessage`](error::ErrorMessage) carry heap-allocated message lists. Implied by
//!   `std`.
//! - `debug` — enables [`trace`](trace::trace), a combinator that prints a parser's
//!   entry/exit to the terminal, colorized when connected to one.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Re-exports of `alloc`/`std` items used uniformly across the crate regardless of which of
/// the two is active. Keeps every other module free of `#[cfg(feature = "std")]` noise.
///
/// Building with neither `alloc` nor `std` is not supported: message lists need a growable
/// heap-allocated collection, so `alloc` is the real floor underneath `no_std`.
pub(crate) mod lib {
    pub mod string {
        #[cfg(not(feature = "std"))]
        pub use alloc::string::String;
        #[cfg(feature = "std")]
        pub use std::string::String;
    }

    pub mod vec {
        #[cfg(not(feature = "std"))]
        pub use alloc::vec::Vec;
        #[cfg(feature = "std")]
        pub use std::vec::Vec;
    }

    pub mod boxed {
        #[cfg(not(feature = "std"))]
        pub use alloc::boxed::Box;
        #[cfg(feature = "std")]
        pub use std::boxed::Box;
    }
}

pub mod combinator;
pub mod error;
pub mod parser;
pub mod position;
pub mod reply;
pub mod stream;

pub mod trace;

pub use error::{ErrorMessage, Severity};
pub use parser::{run, BoxedParser, Parser};
pub use position::{Position, Span};
pub use reply::Reply;
pub use stream::{CharStream, SliceStream, Stream};

/// Re-exports the names most programs built on `percolate` will want in scope.
pub mod prelude {
    pub use crate::combinator::*;
    pub use crate::error::{ErrorMessage, Severity};
    pub use crate::parser::{run, BoxedParser, Parser};
    pub use crate::position::{Position, Span};
    pub use crate::reply::Reply;
    pub use crate::stream::{CharStream, SliceStream, Stream};
}
