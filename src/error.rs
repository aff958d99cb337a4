//! Diagnostic severities and the [`ErrorMessage`] carried by every non-`Success` [`Reply`].
//!
//! [`Reply`]: crate::reply::Reply

use crate::lib::string::String;
use crate::lib::vec::Vec;
use crate::position::{Position, Span};
use core::fmt;

/// How important a diagnostic is to a human reading the parser's output.
///
/// Severity is orthogonal to control flow: it classifies a message's importance, it does not
/// decide whether parsing continues. [`rescue`](crate::combinator::annotate::rescue) is what
/// turns an `Error` reply back into a `Failure`, and it can be told to act only on messages of
/// a given severity (or combination of severities).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Severity(u8);

impl Severity {
    /// Informational note; does not usually indicate anything is wrong.
    pub const MESSAGE: Severity = Severity(0b001);
    /// Something suspicious but not necessarily fatal.
    pub const WARN: Severity = Severity(0b010);
    /// A hard error.
    pub const ERROR: Severity = Severity(0b100);
    /// The union of all three severities.
    pub const ALL: Severity = Severity(0b111);
    /// No severities at all; `contains` is false for every input but `NONE` itself.
    pub const NONE: Severity = Severity(0b000);

    /// Marks a fatal message as synthesized by lookahead promotion
    /// ([`followed_by`](crate::combinator::lookahead::followed_by)/
    /// [`not_followed_by`](crate::combinator::lookahead::not_followed_by)) rather than carried up
    /// from the wrapped parser's own `Error`. Not part of [`ALL`](Severity::ALL) and invisible to
    /// [`Debug`](core::fmt::Debug): it is plumbing for `not_followed_by` to tell its own
    /// promotion apart from a genuine malformed-input `Error` when it is itself wrapped in
    /// another `not_followed_by`, so double negation can un-promote back to `Success`.
    pub(crate) const LOOKAHEAD_NEGATION: Severity = Severity(0b1000);

    /// Combines two severities (or severity sets) into one flag set.
    pub const fn union(self, other: Severity) -> Severity {
        Severity(self.0 | other.0)
    }

    /// True when `self` has every bit set in `other`.
    pub const fn contains(self, other: Severity) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when `self` and `other` share at least one severity bit.
    pub const fn intersects(self, other: Severity) -> bool {
        self.0 & other.0 != 0
    }
}

impl core::ops::BitOr for Severity {
    type Output = Severity;
    fn bitor(self, rhs: Severity) -> Severity {
        self.union(rhs)
    }
}

impl fmt::Debug for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.contains(Severity::MESSAGE) {
            parts.push("MESSAGE");
        }
        if self.contains(Severity::WARN) {
            parts.push("WARN");
        }
        if self.contains(Severity::ERROR) {
            parts.push("ERROR");
        }
        if parts.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", parts.join("|"))
        }
    }
}

/// A single diagnostic: a severity, human-readable text, and the span of input it concerns.
///
/// Every non-`Success` [`Reply`](crate::reply::Reply) carries zero or more of these in its
/// message list, plus (for `Error`) exactly one more as the fatal message.
#[derive(Clone, PartialEq, Eq)]
pub struct ErrorMessage<P> {
    pub severity: Severity,
    pub text: String,
    pub span: Span<P>,
}

impl<P: Position> ErrorMessage<P> {
    pub fn new(severity: Severity, text: impl Into<String>, begin: P, end: P) -> Self {
        Self {
            severity,
            text: text.into(),
            span: Span::new(begin, end),
        }
    }

    pub fn at(severity: Severity, text: impl Into<String>, position: P) -> Self {
        Self {
            severity,
            text: text.into(),
            span: Span::point(position),
        }
    }
}

impl<P: Position> fmt::Debug for ErrorMessage<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorMessage")
            .field("severity", &self.severity)
            .field("text", &self.text)
            .field("span", &self.span)
            .finish()
    }
}

impl<P: Position> fmt::Display for ErrorMessage<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {} (at {:?})", self.severity, self.text, self.span.begin)
    }
}

#[cfg(feature = "std")]
impl<P: Position> std::error::Error for ErrorMessage<P> {}
