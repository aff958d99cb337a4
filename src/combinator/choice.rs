//! Predictive alternation: try one parser, and only back off to another on [`Reply::Failure`].

use crate::lib::vec::Vec;
use crate::parser::{BoxedParser, Parser};
use crate::reply::Reply;
use crate::stream::Stream;
use crate::trace::trace;

/// Tries `p`; if it fails without consuming (a [`Reply::Failure`]), tries `q` against the
/// original stream instead. An [`Reply::Error`] from `p` short-circuits: `q` is never attempted.
///
/// This is the library's only alternation primitive — everything resolves to *first match
/// wins*, never a parallel or longest-match search.
pub fn choice<S, R, P, Q>(p: P, q: Q) -> impl Parser<S, R>
where
    S: Stream,
    P: Parser<S, R>,
    Q: Parser<S, R>,
{
    trace("choice", move |input: S| {
        let original = input.clone();
        match p.parse(input) {
            success @ Reply::Success(..) => success,
            Reply::Failure(_, mut msgs) => match q.parse(original) {
                Reply::Success(s, v, msgs2) => {
                    msgs.extend(msgs2);
                    Reply::Success(s, v, msgs)
                }
                Reply::Failure(s, msgs2) => {
                    msgs.extend(msgs2);
                    Reply::Failure(s, msgs)
                }
                Reply::Error(s, e, msgs2) => {
                    msgs.extend(msgs2);
                    Reply::Error(s, e, msgs)
                }
            },
            error @ Reply::Error(..) => error,
        }
    })
}

/// Alias for [`choice`], read left-to-right as "`p` or `q`".
pub fn or<S, R, P, Q>(p: P, q: Q) -> impl Parser<S, R>
where
    S: Stream,
    P: Parser<S, R>,
    Q: Parser<S, R>,
{
    choice(p, q)
}

/// Tries each parser in `parsers` in order, returning the first [`Reply::Success`] or
/// [`Reply::Error`]. An empty list behaves as [`fail`](crate::combinator::fail): `choice(empty)`
/// is `fail()`.
///
/// Implemented as a loop rather than a fold over [`choice`] so deep alternations don't add to
/// the call's stack depth.
pub fn choice_many<S, R>(parsers: Vec<BoxedParser<S, R>>) -> impl Parser<S, R>
where
    S: Stream,
{
    move |input: S| {
        let mut all_msgs = Vec::new();
        for p in &parsers {
            match p.parse(input.clone()) {
                Reply::Success(s, v, msgs) => {
                    all_msgs.extend(msgs);
                    return Reply::Success(s, v, all_msgs);
                }
                Reply::Failure(_, msgs) => all_msgs.extend(msgs),
                Reply::Error(s, e, msgs) => {
                    all_msgs.extend(msgs);
                    return Reply::Error(s, e, all_msgs);
                }
            }
        }
        Reply::Failure(input, all_msgs)
    }
}
