//! Lookahead: inspecting what comes next without committing to having consumed it.

use crate::error::{ErrorMessage, Severity};
use crate::lib::string::String;
use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use crate::trace::trace;

/// Runs `p` but discards any consumption: a [`Reply::Success`] keeps its value while the stream
/// is reset to the input. A [`Reply::Failure`] is promoted to [`Reply::Error`] (lookahead that
/// doesn't hold is considered malformed, not merely "try another branch"), carrying `message` as
/// the fatal diagnostic. A [`Reply::Error`] passes through unchanged.
pub fn followed_by<S, R, P>(p: P, message: impl Into<String>) -> impl Parser<S, R>
where
    S: Stream,
    P: Parser<S, R>,
{
    let message = message.into();
    trace("followed_by", move |input: S| {
        let original = input.clone();
        match p.parse(input) {
            Reply::Success(_, v, msgs) => Reply::Success(original, v, msgs),
            Reply::Failure(s, msgs) => {
                let fatal = ErrorMessage::at(Severity::ERROR, message.clone(), s.position());
                Reply::Error(s, fatal, msgs)
            }
            error @ Reply::Error(..) => error,
        }
    })
}

/// The boolean complement of [`followed_by`]: succeeds with `()` (without consuming) iff `p`
/// would *not* match here. A [`Reply::Success`] from `p` is promoted to [`Reply::Error`]
/// carrying `message`; a [`Reply::Failure`] becomes `Success(())`. A genuine [`Reply::Error`]
/// from `p` passes through unchanged — `p` being malformed is not evidence that it "did not
/// match". An `Error` that is itself a promotion from a nested `not_followed_by` is un-promoted
/// back to `Success` instead, so that double negation is involutive (Testable Property 9):
/// `not_followed_by` alone can't tell "`p` is malformed" apart from "`p` is itself a
/// `not_followed_by` whose own wrapped parser matched" without this distinction.
pub fn not_followed_by<S, R, P>(p: P, message: impl Into<String>) -> impl Parser<S, ()>
where
    S: Stream,
    P: Parser<S, R>,
{
    let message = message.into();
    trace("not_followed_by", move |input: S| {
        let original = input.clone();
        match p.parse(input) {
            Reply::Success(s, _v, msgs) => {
                let fatal = ErrorMessage::at(
                    Severity::ERROR.union(Severity::LOOKAHEAD_NEGATION),
                    message.clone(),
                    s.position(),
                );
                Reply::Error(original, fatal, msgs)
            }
            Reply::Failure(_, msgs) => Reply::Success(original, (), msgs),
            Reply::Error(_, e, msgs) if e.severity.contains(Severity::LOOKAHEAD_NEGATION) => {
                Reply::Success(original, (), msgs)
            }
            Reply::Error(s, e, msgs) => Reply::Error(s, e, msgs),
        }
    })
}

/// Alias for [`not_followed_by`] with a generic diagnostic, for callers that don't need a
/// bespoke message.
pub fn not<S, R, P>(p: P) -> impl Parser<S, ()>
where
    S: Stream,
    P: Parser<S, R>,
{
    not_followed_by(p, "unexpected match")
}

/// Runs `p`; a [`Reply::Failure`] becomes `Success(None)` without consuming input, a
/// [`Reply::Success`] becomes `Success(Some(_))`, and a [`Reply::Error`] passes through. Total
/// over `Failure`/`Success`: `maybe` never itself returns `Failure` (invariant 8).
pub fn maybe<S, R, P>(p: P) -> impl Parser<S, Option<R>>
where
    S: Stream,
    P: Parser<S, R>,
{
    trace("maybe", move |input: S| {
        let original = input.clone();
        match p.parse(input) {
            Reply::Success(s, v, msgs) => Reply::Success(s, Some(v), msgs),
            Reply::Failure(_, msgs) => Reply::Success(original, None, msgs),
            Reply::Error(s, e, msgs) => Reply::Error(s, e, msgs),
        }
    })
}
