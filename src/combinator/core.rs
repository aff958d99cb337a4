//! Primitive constructors and the two monadic operations ([`bind`], [`map`]) everything else in
//! [`crate::combinator`] is expressed in terms of.

use crate::error::{ErrorMessage, Severity};
use crate::lib::string::String;
use crate::lib::vec::Vec;
use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use crate::trace::trace;

/// A parser that consumes nothing and always succeeds with a clone of `value`.
pub fn succeed<S, R>(value: R) -> impl Parser<S, R>
where
    S: Stream,
    R: Clone,
{
    trace(
        "succeed",
        move |input: S| Reply::Success(input, value.clone(), Vec::new()),
    )
}

/// A parser that always fails without consuming input.
pub fn fail<S, R>() -> impl Parser<S, R>
where
    S: Stream,
{
    trace("fail", move |input: S| Reply::Failure(input, Vec::new()))
}

fn diagnostic<S, R>(severity: Severity, text: impl Into<String>) -> impl Parser<S, R>
where
    S: Stream,
{
    let text = text.into();
    move |input: S| {
        let pos = input.position();
        let fatal = ErrorMessage::at(severity, text.clone(), pos);
        Reply::Error(input, fatal, Vec::new())
    }
}

/// A parser that unconditionally raises an unrecoverable [`Severity::ERROR`] diagnostic.
///
/// This is the only primitive constructor that yields [`Reply::Error`] directly; it is how a
/// grammar says "stop trying alternatives, this input is malformed."
pub fn error<S, R>(text: impl Into<String>) -> impl Parser<S, R>
where
    S: Stream,
{
    trace("error", diagnostic(Severity::ERROR, text))
}

/// Like [`error`], but the raised diagnostic carries [`Severity::WARN`] instead.
///
/// Note this still produces [`Reply::Error`] — severity classifies how important the message
/// is to a human, not whether the control flow is recoverable. Pair with
/// [`rescue_matching`](crate::combinator::rescue_matching) to demote only warn-severity stops.
pub fn warn<S, R>(text: impl Into<String>) -> impl Parser<S, R>
where
    S: Stream,
{
    trace("warn", diagnostic(Severity::WARN, text))
}

/// Like [`error`], but the raised diagnostic carries [`Severity::MESSAGE`] instead.
pub fn message<S, R>(text: impl Into<String>) -> impl Parser<S, R>
where
    S: Stream,
{
    trace("message", diagnostic(Severity::MESSAGE, text))
}

/// Succeeds with `()` iff the stream has no more tokens.
pub fn eof<S>() -> impl Parser<S, ()>
where
    S: Stream,
{
    trace("eof", move |input: S| {
        if input.can_next() {
            Reply::Failure(input, Vec::new())
        } else {
            Reply::Success(input, (), Vec::new())
        }
    })
}

/// Consumes and returns the next token, failing only at end-of-input.
pub fn any<S>() -> impl Parser<S, S::Token>
where
    S: Stream,
{
    trace("any", move |input: S| match input.current() {
        Some(token) => {
            let rest = input.next();
            Reply::Success(rest, token, Vec::new())
        }
        None => Reply::Failure(input, Vec::new()),
    })
}

/// Consumes the next token if `predicate` holds for it; never raises [`Reply::Error`].
///
/// On a miss the returned stream is exactly the input stream (invariant 6 of the testable
/// properties): `satisfy` never advances unless it also succeeds.
pub fn satisfy<S, F>(predicate: F) -> impl Parser<S, S::Token>
where
    S: Stream,
    F: Fn(&S::Token) -> bool,
{
    trace("satisfy", move |input: S| match input.current() {
        Some(token) if predicate(&token) => {
            let rest = input.next();
            Reply::Success(rest, token, Vec::new())
        }
        _ => Reply::Failure(input, Vec::new()),
    })
}

/// Consumes the next token iff it equals `expected`.
pub fn token<S>(expected: S::Token) -> impl Parser<S, S::Token>
where
    S: Stream,
    S::Token: PartialEq,
{
    trace("token", satisfy(move |t: &S::Token| *t == expected))
}

/// Runs `p`, then threads its result through `k` to obtain a second parser, running that on the
/// remainder. The defining monadic operation of the library:
///
/// - On success, the messages of both steps concatenate and the result inherits the second
///   step's stream and variant.
/// - On [`Reply::Failure`] or [`Reply::Error`] from `p` itself, the stream is reset to `bind`'s
///   own input — a Failure never leaves a partial consumption behind (the "commit rule").
pub fn bind<S, A, B, P, K, Q>(p: P, k: K) -> impl Parser<S, B>
where
    S: Stream,
    P: Parser<S, A>,
    K: Fn(A) -> Q,
    Q: Parser<S, B>,
{
    move |input: S| {
        let original = input.clone();
        match p.parse(input) {
            Reply::Success(s1, a, mut msgs) => match k(a).parse(s1) {
                Reply::Success(s2, b, msgs2) => {
                    msgs.extend(msgs2);
                    Reply::Success(s2, b, msgs)
                }
                Reply::Failure(s2, msgs2) => {
                    msgs.extend(msgs2);
                    Reply::Failure(s2, msgs)
                }
                Reply::Error(s2, e, msgs2) => {
                    msgs.extend(msgs2);
                    Reply::Error(s2, e, msgs)
                }
            },
            Reply::Failure(_, msgs) => Reply::Failure(original, msgs),
            Reply::Error(_, e, msgs) => Reply::Error(original, e, msgs),
        }
    }
}

/// Runs `p` and, on success, projects its value through `f`. `Failure`/`Error` pass through
/// unchanged (modulo the same commit-rule reset as [`bind`]).
pub fn map<S, A, B, P, F>(p: P, f: F) -> impl Parser<S, B>
where
    S: Stream,
    P: Parser<S, A>,
    F: Fn(A) -> B,
{
    move |input: S| match p.parse(input) {
        Reply::Success(s, a, msgs) => Reply::Success(s, f(a), msgs),
        Reply::Failure(s, msgs) => Reply::Failure(s, msgs),
        Reply::Error(s, e, msgs) => Reply::Error(s, e, msgs),
    }
}
