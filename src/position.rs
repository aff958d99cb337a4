//! Source positions and spans.
//!
//! A [`Position`] is whatever a [`Stream`](crate::stream::Stream) implementation uses to mark
//! "where" it is. The library places no constraints on its representation beyond total
//! ordering and the ability to print it for diagnostics; a byte offset, a `(line, column)`
//! pair, or an opaque cursor token are all valid choices.

use core::fmt;

/// A comparable, totally ordered source location.
///
/// Blanket-implemented for any type that is `Clone + Ord + Debug`, so concrete [`Stream`]
/// implementations rarely need to write an impl of this trait by hand.
///
/// [`Stream`]: crate::stream::Stream
pub trait Position: Clone + Ord + fmt::Debug {}

impl<T> Position for T where T: Clone + Ord + fmt::Debug {}

/// A half-open-by-convention range between two positions, `begin..=end`, with `begin <= end`.
///
/// Used to locate [`ErrorMessage`](crate::error::ErrorMessage)s and other diagnostics against
/// the stream that produced them.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span<P> {
    pub begin: P,
    pub end: P,
}

impl<P: Position> Span<P> {
    /// Builds a span, asserting the ordering invariant `begin <= end`.
    pub fn new(begin: P, end: P) -> Self {
        debug_assert!(begin <= end, "Span::new: begin must not be after end");
        Self { begin, end }
    }

    /// A zero-width span at a single position.
    pub fn point(position: P) -> Self {
        Self {
            begin: position.clone(),
            end: position,
        }
    }
}
