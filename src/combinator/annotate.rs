//! Annotating replies with extra diagnostics, and moving between the three severities of
//! "something is wrong" without changing the Reply variant wholesale.

use crate::error::{ErrorMessage, Severity};
use crate::lib::string::String;
use crate::lib::vec::Vec;
use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use crate::trace::trace;

/// Appends `extra` to whatever message list `p` produces, regardless of which variant it
/// returns. Named `annotate` rather than the source specification's overloaded `message(p,
/// msgs)` — Rust can't distinguish the one-argument diagnostic constructor
/// ([`message`](crate::combinator::message)) from this combinator by arity alone.
pub fn annotate<S, R, P>(p: P, extra: Vec<ErrorMessage<S::Position>>) -> impl Parser<S, R>
where
    S: Stream,
    P: Parser<S, R>,
{
    trace("annotate", move |input: S| match p.parse(input) {
        Reply::Success(s, v, mut msgs) => {
            msgs.extend(extra.clone());
            Reply::Success(s, v, msgs)
        }
        Reply::Failure(s, mut msgs) => {
            msgs.extend(extra.clone());
            Reply::Failure(s, msgs)
        }
        Reply::Error(s, e, mut msgs) => {
            msgs.extend(extra.clone());
            Reply::Error(s, e, msgs)
        }
    })
}

/// Converts an [`Reply::Error`] from `p` into a [`Reply::Failure`] whose message list gains the
/// demoted fatal diagnostic, restoring `p`'s own input stream (not wherever the error was
/// raised) so alternation can resume as if `p` had merely failed. `Success`/`Failure` pass
/// through unchanged. Demotes every severity; see [`rescue_matching`] to demote selectively.
pub fn rescue<S, R, P>(p: P) -> impl Parser<S, R>
where
    S: Stream,
    P: Parser<S, R>,
{
    rescue_matching(p, Severity::ALL)
}

/// Like [`rescue`], but only demotes an [`Reply::Error`] whose fatal message's severity
/// intersects `severities`; errors outside that set pass through unchanged. `severities` is a
/// bitmask — `Severity::WARN | Severity::MESSAGE` demotes only non-fatal-by-convention errors,
/// for example.
pub fn rescue_matching<S, R, P>(p: P, severities: Severity) -> impl Parser<S, R>
where
    S: Stream,
    P: Parser<S, R>,
{
    trace("rescue", move |input: S| {
        let original = input.clone();
        match p.parse(input) {
            Reply::Error(s, fatal, mut msgs) => {
                if severities.intersects(fatal.severity) {
                    msgs.push(fatal);
                    Reply::Failure(original, msgs)
                } else {
                    Reply::Error(s, fatal, msgs)
                }
            }
            other => other,
        }
    })
}

/// Which outcome of the wrapped parser a `*_when_*` combinator fires on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Outcome {
    Success,
    Failure,
    Error,
}

fn diagnostic_when<S, R, P>(p: P, outcome: Outcome, severity: Severity, text: String) -> impl Parser<S, R>
where
    S: Stream,
    P: Parser<S, R>,
{
    move |input: S| match p.parse(input) {
        Reply::Success(s, v, msgs) if outcome == Outcome::Success => {
            let fatal = ErrorMessage::at(severity, text.clone(), s.position());
            let _ = v;
            Reply::Error(s, fatal, msgs)
        }
        Reply::Failure(s, msgs) if outcome == Outcome::Failure => {
            let fatal = ErrorMessage::at(severity, text.clone(), s.position());
            Reply::Error(s, fatal, msgs)
        }
        Reply::Error(s, old_fatal, mut msgs) if outcome == Outcome::Error => {
            let fatal = ErrorMessage::new(
                severity,
                text.clone(),
                old_fatal.span.begin.clone(),
                old_fatal.span.end.clone(),
            );
            msgs.push(old_fatal);
            Reply::Error(s, fatal, msgs)
        }
        other => other,
    }
}

macro_rules! when_combinators {
    ($error_fn:ident, $warn_fn:ident, $message_fn:ident, $outcome:expr, $doc:literal) => {
        #[doc = $doc]
        #[doc = " Raises with [`Severity::ERROR`]."]
        pub fn $error_fn<S, R, P>(p: P, text: impl Into<String>) -> impl Parser<S, R>
        where
            S: Stream,
            P: Parser<S, R>,
        {
            trace(stringify!($error_fn), diagnostic_when(p, $outcome, Severity::ERROR, text.into()))
        }

        #[doc = $doc]
        #[doc = " Raises with [`Severity::WARN`]."]
        pub fn $warn_fn<S, R, P>(p: P, text: impl Into<String>) -> impl Parser<S, R>
        where
            S: Stream,
            P: Parser<S, R>,
        {
            trace(stringify!($warn_fn), diagnostic_when(p, $outcome, Severity::WARN, text.into()))
        }

        #[doc = $doc]
        #[doc = " Raises with [`Severity::MESSAGE`]."]
        pub fn $message_fn<S, R, P>(p: P, text: impl Into<String>) -> impl Parser<S, R>
        where
            S: Stream,
            P: Parser<S, R>,
        {
            trace(stringify!($message_fn), diagnostic_when(p, $outcome, Severity::MESSAGE, text.into()))
        }
    };
}

when_combinators!(
    error_when_success,
    warn_when_success,
    message_when_success,
    Outcome::Success,
    "Turns a `Success` from `p` into an `Error` carrying `text`, discarding the value."
);
when_combinators!(
    error_when_failure,
    warn_when_failure,
    message_when_failure,
    Outcome::Failure,
    "Turns a `Failure` from `p` into an `Error` carrying `text`."
);
when_combinators!(
    error_when_error,
    warn_when_error,
    message_when_error,
    Outcome::Error,
    "Re-annotates an existing `Error` from `p`, replacing its fatal message with `text` and preserving the old one in the message list."
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::core::{satisfy, token};
    use crate::combinator::sequence::right;
    use crate::stream::CharStream;

    #[test]
    fn error_when_failure_turns_miss_into_error() {
        let input = CharStream::new("[x");
        let digit = satisfy::<CharStream<'_>, _>(|c: &char| c.is_ascii_digit());
        let p = right(token::<CharStream<'_>>('['), error_when_failure(digit, "expected digit"));
        let reply = p.parse(input);
        assert!(reply.is_error());
        let fatal = reply.fatal().unwrap();
        assert_eq!(fatal.text, "expected digit");
        assert_eq!(fatal.severity, Severity::ERROR);
        assert_eq!(fatal.span.begin, 1);
    }

    #[test]
    fn rescue_demotes_error_to_failure() {
        let input = CharStream::new("x");
        let p = rescue(crate::combinator::core::error::<CharStream<'_>, char>("boom"));
        let reply = p.parse(input.clone());
        assert!(reply.is_failure());
        assert_eq!(reply.stream().position(), input.position());
        assert_eq!(reply.messages()[0].text, "boom");
    }

    #[test]
    fn rescue_matching_only_demotes_selected_severities() {
        let input = CharStream::new("x");
        let p = rescue_matching(
            crate::combinator::core::warn::<CharStream<'_>, char>("careful"),
            Severity::ERROR,
        );
        let reply = p.parse(input);
        assert!(reply.is_error());
    }
}
