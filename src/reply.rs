//! [`Reply`], the three-way result of applying a [`Parser`](crate::parser::Parser) to a
//! [`Stream`].

use crate::error::ErrorMessage;
use crate::lib::vec::Vec;
use crate::stream::Stream;
use core::fmt;

/// The result of applying a parser to a stream.
///
/// Unlike a two-armed `Result`, `Reply` keeps "this alternative didn't match" ([`Failure`])
/// separate from "the input is malformed" ([`Error`]): [`choice`](crate::combinator::choice)
/// backtracks over the former but never the latter. See the crate-level docs for the full
/// rationale.
///
/// [`Failure`]: Reply::Failure
/// [`Error`]: Reply::Error
pub enum Reply<S: Stream, R> {
    /// The parser matched. `S` is the stream advanced past whatever was consumed, `R` is the
    /// produced value, and the message list carries any diagnostics accumulated along the way.
    Success(S, R, Vec<ErrorMessage<S::Position>>),
    /// The parser did not match. The stream is the position alternation should resume from;
    /// per the commit rule (see [`bind`](crate::combinator::bind)), this is not necessarily
    /// the stream a failing primitive itself was handed.
    Failure(S, Vec<ErrorMessage<S::Position>>),
    /// The input is malformed; alternation must not paper over this by trying another branch.
    /// `fatal` is the principal diagnostic; the message list carries any surrounding ones.
    Error(S, ErrorMessage<S::Position>, Vec<ErrorMessage<S::Position>>),
}

impl<S: Stream, R> Reply<S, R> {
    /// True for [`Reply::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Reply::Success(..))
    }

    /// True for [`Reply::Failure`].
    pub fn is_failure(&self) -> bool {
        matches!(self, Reply::Failure(..))
    }

    /// True for [`Reply::Error`].
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(..))
    }

    /// The stream carried by whichever variant this is.
    pub fn stream(&self) -> &S {
        match self {
            Reply::Success(s, ..) => s,
            Reply::Failure(s, ..) => s,
            Reply::Error(s, ..) => s,
        }
    }

    /// The produced value, if this is a [`Reply::Success`].
    pub fn value(&self) -> Option<&R> {
        match self {
            Reply::Success(_, v, _) => Some(v),
            _ => None,
        }
    }

    /// The produced value, if this is a [`Reply::Success`]; consumes the reply.
    pub fn into_value(self) -> Option<R> {
        match self {
            Reply::Success(_, v, _) => Some(v),
            _ => None,
        }
    }

    /// The principal diagnostic, if this is a [`Reply::Error`].
    pub fn fatal(&self) -> Option<&ErrorMessage<S::Position>> {
        match self {
            Reply::Error(_, fatal, _) => Some(fatal),
            _ => None,
        }
    }

    /// The accumulated message list, regardless of variant.
    pub fn messages(&self) -> &[ErrorMessage<S::Position>] {
        match self {
            Reply::Success(_, _, m) => m,
            Reply::Failure(_, m) => m,
            Reply::Error(_, _, m) => m,
        }
    }
}

impl<S, R> fmt::Debug for Reply<S, R>
where
    S: Stream + fmt::Debug,
    S::Position: fmt::Debug,
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Success(s, v, m) => f
                .debug_tuple("Success")
                .field(s)
                .field(v)
                .field(m)
                .finish(),
            Reply::Failure(s, m) => f.debug_tuple("Failure").field(s).field(m).finish(),
            Reply::Error(s, e, m) => f.debug_tuple("Error").field(s).field(e).field(m).finish(),
        }
    }
}

impl<S, R> Clone for Reply<S, R>
where
    S: Stream,
    R: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Reply::Success(s, v, m) => Reply::Success(s.clone(), v.clone(), m.clone()),
            Reply::Failure(s, m) => Reply::Failure(s.clone(), m.clone()),
            Reply::Error(s, e, m) => Reply::Error(s.clone(), e.clone(), m.clone()),
        }
    }
}

impl<S, R> PartialEq for Reply<S, R>
where
    S: Stream + PartialEq,
    R: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Reply::Success(s1, v1, m1), Reply::Success(s2, v2, m2)) => {
                s1 == s2 && v1 == v2 && m1 == m2
            }
            (Reply::Failure(s1, m1), Reply::Failure(s2, m2)) => s1 == s2 && m1 == m2,
            (Reply::Error(s1, e1, m1), Reply::Error(s2, e2, m2)) => {
                s1 == s2 && e1 == e2 && m1 == m2
            }
            _ => false,
        }
    }
}
