//! The cursor contract and the half-open `Span` built from two cursors.
//!
//! A cursor is a value type: cloning it duplicates the position. Adapters wrap
//! one or two inner cursors and are cursors themselves, so a query chain is a
//! single nested type resolved at compile time.

/// Position within a sequence.
///
/// Invariants:
/// - `get` is only called on a live cursor (one that does not compare equal to
///   the end cursor of its span). Calling it at the end panics.
/// - `advance` moves strictly forward; no cursor supports rewinding.
/// - Equality means "same logical position", not same storage address.
pub trait Cursor: Clone + PartialEq {
    type Item;

    /// Dereference the current position.
    fn get(&self) -> Self::Item;

    /// Step to the next position.
    fn advance(&mut self);
}

/// Half-open range `[begin, end)`. Never holds elements itself.
#[derive(Debug, Clone)]
pub struct Span<C> {
    pub begin: C,
    pub end: C,
}

impl<C: Cursor> Span<C> {
    pub fn new(begin: C, end: C) -> Self {
        Self { begin, end }
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Walk a copy of the span without consuming it.
    pub fn iter(&self) -> SpanIter<C> {
        SpanIter {
            current: self.begin.clone(),
            end: self.end.clone(),
        }
    }
}

impl<C: Cursor> IntoIterator for Span<C> {
    type Item = C::Item;
    type IntoIter = SpanIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        SpanIter {
            current: self.begin,
            end: self.end,
        }
    }
}

/// Std iterator bridge: yields every item from `begin` up to `end`.
#[derive(Debug, Clone)]
pub struct SpanIter<C> {
    current: C,
    end: C,
}

impl<C: Cursor> Iterator for SpanIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.end {
            return None;
        }
        let item = self.current.get();
        self.current.advance();
        Some(item)
    }
}

/// Anything that can be viewed as a span of cursors.
///
/// Borrowed containers yield clones of their elements; an owned `Vec<T>` is
/// moved into a shared buffer so that cursor copies never dangle.
pub trait IntoSpan {
    type Cursor: Cursor;

    fn into_span(self) -> Span<Self::Cursor>;
}

impl<C: Cursor> IntoSpan for Span<C> {
    type Cursor = C;

    fn into_span(self) -> Span<C> {
        self
    }
}
