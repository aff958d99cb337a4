//! The combinator surface: primitive constructors plus every derived composition pattern
//! (alternation, lookahead, repetition, sequencing, separated lists, chains, and error
//! annotation) built on top of them.
//!
//! Submodules are organized by concern, mirroring §4 of this crate's design: [`core`] has the
//! primitives and the two monadic operations everything else reduces to, [`choice`] has
//! alternation, [`lookahead`] has lookahead, [`multi`] has repetition, [`sequence`] has
//! sequencing helpers, [`separated`] has separated lists, [`chain`] has left/right chains, and
//! [`annotate`] has message annotation and error-severity rescue. Every public name from every
//! submodule is re-exported here so `use percolate::combinator::*` (or `percolate::prelude::*`)
//! is enough for ordinary grammar code; reach into a submodule path directly only when two
//! names collide.

pub mod annotate;
pub mod chain;
pub mod choice;
pub mod core;
pub mod lookahead;
pub mod multi;
pub mod sequence;
pub mod separated;

pub use annotate::{
    annotate, error_when_error, error_when_failure, error_when_success, message_when_error,
    message_when_failure, message_when_success, rescue, rescue_matching, warn_when_error,
    warn_when_failure, warn_when_success,
};
pub use chain::{chainl, chainl1, chainl_with, chainr, chainr1, chainr_with};
pub use choice::{choice, choice_many, or};
pub use core::{any, bind, eof, error, fail, map, message, satisfy, succeed, token, warn};
pub use lookahead::{followed_by, maybe, not, not_followed_by};
pub use multi::{greed, many, many0, many1, partition, sequence, Partition, Replicate};
pub use separated::{end_by, sep_by, sep_end_by};
pub use sequence::{between, both, left, pipe2, pipe3, pipe4, pipe5, pipe6, pipe7, pipe8, right};
