//! Lists of values separated (and optionally terminated) by a separator parser.

use crate::combinator::lookahead::maybe;
use crate::combinator::sequence::left;
use crate::lib::vec::Vec;
use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;
use crate::trace::trace;

/// At least `n` occurrences of `p`, separated by `sep`.
///
/// `sepBy(p, 0, sep)` on an input where `p` immediately fails returns `Success([], stream)`
/// without consuming anything (invariant 12): with `n == 0` the head is allowed to miss.
pub fn sep_by<S, R, U, P, Sep>(p: P, n: usize, sep: Sep) -> impl Parser<S, Vec<R>>
where
    S: Stream,
    P: Parser<S, R>,
    Sep: Parser<S, U>,
{
    trace("sep_by", move |input: S| {
        let original = input.clone();
        match p.parse(input.clone()) {
            Reply::Success(mut stream, head, mut all_msgs) => {
                let mut results = Vec::new();
                results.push(head);
                loop {
                    let sep_attempt = stream.clone();
                    match sep.parse(sep_attempt) {
                        Reply::Success(after_sep, _sep_value, sep_msgs) => match p.parse(after_sep)
                        {
                            Reply::Success(next, v, msgs) => {
                                all_msgs.extend(sep_msgs);
                                all_msgs.extend(msgs);
                                results.push(v);
                                stream = next;
                            }
                            Reply::Failure(_, msgs) => {
                                all_msgs.extend(sep_msgs);
                                all_msgs.extend(msgs);
                                if results.len() >= n {
                                    break;
                                }
                                return Reply::Failure(original, all_msgs);
                            }
                            Reply::Error(s, e, msgs) => {
                                all_msgs.extend(sep_msgs);
                                all_msgs.extend(msgs);
                                return Reply::Error(s, e, all_msgs);
                            }
                        },
                        Reply::Failure(_, sep_msgs) => {
                            all_msgs.extend(sep_msgs);
                            if results.len() >= n {
                                break;
                            }
                            return Reply::Failure(original, all_msgs);
                        }
                        Reply::Error(s, e, sep_msgs) => {
                            all_msgs.extend(sep_msgs);
                            return Reply::Error(s, e, all_msgs);
                        }
                    }
                }
                Reply::Success(stream, results, all_msgs)
            }
            Reply::Failure(_, msgs) => {
                if n == 0 {
                    Reply::Success(original, Vec::new(), msgs)
                } else {
                    Reply::Failure(original, msgs)
                }
            }
            Reply::Error(s, e, msgs) => Reply::Error(s, e, msgs),
        }
    })
}

/// At least `n` occurrences of `p`, each one *followed* by `sep` (a trailing separator is
/// required after every element, not merely allowed). `endBy(p, n, sep) = many(left(p, sep),
/// n)`.
pub fn end_by<S, R, U, P, Sep>(p: P, n: usize, sep: Sep) -> impl Parser<S, Vec<R>>
where
    S: Stream,
    P: Parser<S, R>,
    Sep: Parser<S, U>,
{
    crate::combinator::multi::many(left(p, sep), n)
}

/// `sepBy(p, n, sep)` followed by an optional trailing `sep`. Accepts both `a,b,c` and
/// `a,b,c,` for `n <= 3`.
pub fn sep_end_by<S, R, U, P, Sep>(p: P, n: usize, sep: Sep) -> impl Parser<S, Vec<R>>
where
    S: Stream,
    P: Parser<S, R>,
    Sep: Parser<S, U> + Clone,
{
    left(sep_by(p, n, sep.clone()), maybe(sep))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::core::{satisfy, token};
    use crate::stream::CharStream;

    #[test]
    fn sep_by_collects_comma_separated_digits() {
        let input = CharStream::new("1,2,3");
        let digit = satisfy::<CharStream<'_>, _>(|c: &char| c.is_ascii_digit());
        let p = sep_by(digit, 1, token::<CharStream<'_>>(','));
        let reply = p.parse(input);
        assert_eq!(reply.value(), Some(&vec!['1', '2', '3']));
        assert_eq!(reply.stream().position(), 5);
    }

    #[test]
    fn sep_by_zero_on_immediate_miss() {
        let input = CharStream::new("x");
        let digit = satisfy::<CharStream<'_>, _>(|c: &char| c.is_ascii_digit());
        let reply = sep_by(digit, 0, token::<CharStream<'_>>(',')).parse(input.clone());
        assert_eq!(reply.value(), Some(&Vec::new()));
        assert_eq!(reply.stream().position(), input.position());
    }

    #[test]
    fn sep_by_fails_when_separator_runs_out_before_minimum() {
        let input = CharStream::new("1,2");
        let digit = satisfy::<CharStream<'_>, _>(|c: &char| c.is_ascii_digit());
        let reply = sep_by(digit, 3, token::<CharStream<'_>>(',')).parse(input);
        assert!(reply.is_failure());
    }

    #[test]
    fn sep_end_by_accepts_trailing_separator() {
        let input = CharStream::new("1,2,");
        let digit = satisfy::<CharStream<'_>, _>(|c: &char| c.is_ascii_digit());
        let reply = sep_end_by(digit, 1, token::<CharStream<'_>>(',')).parse(input);
        assert_eq!(reply.value(), Some(&vec!['1', '2']));
    }

    #[test]
    fn end_by_requires_a_trailing_separator_after_every_element() {
        let input = CharStream::new("1;2;3;");
        let digit = satisfy::<CharStream<'_>, _>(|c: &char| c.is_ascii_digit());
        let reply = end_by(digit, 1, token::<CharStream<'_>>(';')).parse(input);
        assert_eq!(reply.value(), Some(&vec!['1', '2', '3']));
        assert_eq!(reply.stream().position(), 6);
    }

    #[test]
    fn end_by_excludes_an_element_missing_its_trailing_separator() {
        let input = CharStream::new("1;2;3");
        let digit = satisfy::<CharStream<'_>, _>(|c: &char| c.is_ascii_digit());
        let reply = end_by(digit, 1, token::<CharStream<'_>>(';')).parse(input);
        assert_eq!(reply.value(), Some(&vec!['1', '2']));
        assert_eq!(reply.stream().position(), 4);
    }

    #[test]
    fn end_by_fails_below_minimum_when_separator_never_appears() {
        let input = CharStream::new("1");
        let digit = satisfy::<CharStream<'_>, _>(|c: &char| c.is_ascii_digit());
        let reply = end_by(digit, 1, token::<CharStream<'_>>(';')).parse(input.clone());
        assert!(reply.is_failure());
        assert_eq!(reply.stream().position(), input.position());
    }
}
