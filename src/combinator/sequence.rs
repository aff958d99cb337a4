//! Sequencing helpers: running parsers one after another and keeping some subset of their
//! results.

use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use crate::trace::trace;

/// Runs `p` then `q`, keeping only `p`'s value.
pub fn left<S, A, B, P, Q>(p: P, q: Q) -> impl Parser<S, A>
where
    S: Stream,
    P: Parser<S, A>,
    Q: Parser<S, B>,
{
    trace("left", move |input: S| {
        let original = input.clone();
        match p.parse(input) {
            Reply::Success(s1, a, mut msgs1) => match q.parse(s1) {
                Reply::Success(s2, _b, msgs2) => {
                    msgs1.extend(msgs2);
                    Reply::Success(s2, a, msgs1)
                }
                Reply::Failure(s2, msgs2) => {
                    msgs1.extend(msgs2);
                    Reply::Failure(s2, msgs1)
                }
                Reply::Error(s2, e, msgs2) => {
                    msgs1.extend(msgs2);
                    Reply::Error(s2, e, msgs1)
                }
            },
            Reply::Failure(_, msgs1) => Reply::Failure(original, msgs1),
            Reply::Error(_, e, msgs1) => Reply::Error(original, e, msgs1),
        }
    })
}

/// Runs `p` then `q`, keeping only `q`'s value.
pub fn right<S, A, B, P, Q>(p: P, q: Q) -> impl Parser<S, B>
where
    S: Stream,
    P: Parser<S, A>,
    Q: Parser<S, B>,
{
    trace("right", move |input: S| {
        let original = input.clone();
        match p.parse(input) {
            Reply::Success(s1, _a, mut msgs1) => match q.parse(s1) {
                Reply::Success(s2, b, msgs2) => {
                    msgs1.extend(msgs2);
                    Reply::Success(s2, b, msgs1)
                }
                Reply::Failure(s2, msgs2) => {
                    msgs1.extend(msgs2);
                    Reply::Failure(s2, msgs1)
                }
                Reply::Error(s2, e, msgs2) => {
                    msgs1.extend(msgs2);
                    Reply::Error(s2, e, msgs1)
                }
            },
            Reply::Failure(_, msgs1) => Reply::Failure(original, msgs1),
            Reply::Error(_, e, msgs1) => Reply::Error(original, e, msgs1),
        }
    })
}

/// Runs `p` then `q`, keeping both results as a pair.
pub fn both<S, A, B, P, Q>(p: P, q: Q) -> impl Parser<S, (A, B)>
where
    S: Stream,
    P: Parser<S, A>,
    Q: Parser<S, B>,
{
    trace("both", move |input: S| {
        let original = input.clone();
        match p.parse(input) {
            Reply::Success(s1, a, mut msgs1) => match q.parse(s1) {
                Reply::Success(s2, b, msgs2) => {
                    msgs1.extend(msgs2);
                    Reply::Success(s2, (a, b), msgs1)
                }
                Reply::Failure(s2, msgs2) => {
                    msgs1.extend(msgs2);
                    Reply::Failure(s2, msgs1)
                }
                Reply::Error(s2, e, msgs2) => {
                    msgs1.extend(msgs2);
                    Reply::Error(s2, e, msgs1)
                }
            },
            Reply::Failure(_, msgs1) => Reply::Failure(original, msgs1),
            Reply::Error(_, e, msgs1) => Reply::Error(original, e, msgs1),
        }
    })
}

/// Runs `open`, then `p`, then `close`, keeping only `p`'s value. `between(p, open, close) =
/// right(open, left(p, close))`.
pub fn between<S, A, O, C, P, Open, Close>(p: P, open: Open, close: Close) -> impl Parser<S, A>
where
    S: Stream,
    P: Parser<S, A>,
    Open: Parser<S, O>,
    Close: Parser<S, C>,
{
    right(open, left(p, close))
}

macro_rules! pipe_n {
    ($name:ident, $arity:literal, $($p:ident: $o:ident),+) => {
        #[doc = concat!(
            "Sequences ", $arity, " parsers, projecting their results through `f` once all have succeeded."
        )]
        pub fn $name<S, $($o,)+ R, $($p,)+ F>(
            $($p: $p,)+
            f: F,
        ) -> impl Parser<S, R>
        where
            S: Stream,
            $($p: Parser<S, $o>,)+
            F: Fn($($o),+) -> R,
        {
            move |input: S| {
                let original = input.clone();
                let mut stream = input;
                let mut all_msgs = crate::lib::vec::Vec::new();
                $(
                    let $o = match $p.parse(stream) {
                        Reply::Success(next, v, msgs) => {
                            all_msgs.extend(msgs);
                            stream = next;
                            v
                        }
                        Reply::Failure(_, msgs) => {
                            all_msgs.extend(msgs);
                            return Reply::Failure(original, all_msgs);
                        }
                        Reply::Error(s, e, msgs) => {
                            all_msgs.extend(msgs);
                            return Reply::Error(s, e, all_msgs);
                        }
                    };
                )+
                Reply::Success(stream, f($($o),+), all_msgs)
            }
        }
    };
}

pipe_n!(pipe2, 2, p1: o1, p2: o2);
pipe_n!(pipe3, 3, p1: o1, p2: o2, p3: o3);
pipe_n!(pipe4, 4, p1: o1, p2: o2, p3: o3, p4: o4);
pipe_n!(pipe5, 5, p1: o1, p2: o2, p3: o3, p4: o4, p5: o5);
pipe_n!(pipe6, 6, p1: o1, p2: o2, p3: o3, p4: o4, p5: o5, p6: o6);
pipe_n!(pipe7, 7, p1: o1, p2: o2, p3: o3, p4: o4, p5: o5, p6: o6, p7: o7);
pipe_n!(pipe8, 8, p1: o1, p2: o2, p3: o3, p4: o4, p5: o5, p6: o6, p7: o7, p8: o8);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::core::token;
    use crate::stream::CharStream;

    #[test]
    fn between_parens() {
        let input = CharStream::new("(x)");
        let p = between(
            token::<CharStream<'_>>('x'),
            token::<CharStream<'_>>('('),
            token::<CharStream<'_>>(')'),
        );
        let reply = p.parse(input);
        assert_eq!(reply.value(), Some(&'x'));
        assert_eq!(reply.stream().position(), 3);
    }

    #[test]
    fn pipe3_projects_all_three() {
        let input = CharStream::new("abc");
        let p = pipe3(
            token::<CharStream<'_>>('a'),
            token::<CharStream<'_>>('b'),
            token::<CharStream<'_>>('c'),
            |a: char, b: char, c: char| format!("{a}{b}{c}"),
        );
        let reply = p.parse(input);
        assert_eq!(reply.value().map(|s| s.as_str()), Some("abc"));
    }

    #[test]
    fn pipe2_projects_both() {
        let input = CharStream::new("ab");
        let p = pipe2(
            token::<CharStream<'_>>('a'),
            token::<CharStream<'_>>('b'),
            |a: char, b: char| format!("{a}{b}"),
        );
        let reply = p.parse(input);
        assert_eq!(reply.value().map(|s| s.as_str()), Some("ab"));
    }

    #[test]
    fn pipe4_projects_all_four() {
        let input = CharStream::new("abcd");
        let p = pipe4(
            token::<CharStream<'_>>('a'),
            token::<CharStream<'_>>('b'),
            token::<CharStream<'_>>('c'),
            token::<CharStream<'_>>('d'),
            |a: char, b: char, c: char, d: char| format!("{a}{b}{c}{d}"),
        );
        let reply = p.parse(input);
        assert_eq!(reply.value().map(|s| s.as_str()), Some("abcd"));
    }

    #[test]
    fn pipe5_projects_all_five() {
        let input = CharStream::new("abcde");
        let p = pipe5(
            token::<CharStream<'_>>('a'),
            token::<CharStream<'_>>('b'),
            token::<CharStream<'_>>('c'),
            token::<CharStream<'_>>('d'),
            token::<CharStream<'_>>('e'),
            |a: char, b: char, c: char, d: char, e: char| format!("{a}{b}{c}{d}{e}"),
        );
        let reply = p.parse(input);
        assert_eq!(reply.value().map(|s| s.as_str()), Some("abcde"));
    }

    #[test]
    fn pipe6_projects_all_six() {
        let input = CharStream::new("abcdef");
        let p = pipe6(
            token::<CharStream<'_>>('a'),
            token::<CharStream<'_>>('b'),
            token::<CharStream<'_>>('c'),
            token::<CharStream<'_>>('d'),
            token::<CharStream<'_>>('e'),
            token::<CharStream<'_>>('f'),
            |a: char, b: char, c: char, d: char, e: char, f: char| format!("{a}{b}{c}{d}{e}{f}"),
        );
        let reply = p.parse(input);
        assert_eq!(reply.value().map(|s| s.as_str()), Some("abcdef"));
    }

    #[test]
    fn pipe7_projects_all_seven() {
        let input = CharStream::new("abcdefg");
        let p = pipe7(
            token::<CharStream<'_>>('a'),
            token::<CharStream<'_>>('b'),
            token::<CharStream<'_>>('c'),
            token::<CharStream<'_>>('d'),
            token::<CharStream<'_>>('e'),
            token::<CharStream<'_>>('f'),
            token::<CharStream<'_>>('g'),
            |a: char, b: char, c: char, d: char, e: char, f: char, g: char| {
                format!("{a}{b}{c}{d}{e}{f}{g}")
            },
        );
        let reply = p.parse(input);
        assert_eq!(reply.value().map(|s| s.as_str()), Some("abcdefg"));
    }

    #[test]
    fn pipe8_projects_all_eight() {
        let input = CharStream::new("abcdefgh");
        let p = pipe8(
            token::<CharStream<'_>>('a'),
            token::<CharStream<'_>>('b'),
            token::<CharStream<'_>>('c'),
            token::<CharStream<'_>>('d'),
            token::<CharStream<'_>>('e'),
            token::<CharStream<'_>>('f'),
            token::<CharStream<'_>>('g'),
            token::<CharStream<'_>>('h'),
            |a: char, b: char, c: char, d: char, e: char, f: char, g: char, h: char| {
                format!("{a}{b}{c}{d}{e}{f}{g}{h}")
            },
        );
        let reply = p.parse(input);
        assert_eq!(reply.value().map(|s| s.as_str()), Some("abcdefgh"));
    }
}
