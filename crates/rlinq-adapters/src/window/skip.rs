use rlinq_core::cursor::{Cursor, Span};

/// Cursor that starts past a prefix of its inner span.
///
/// Used for both `skip(n)` and `skip_while(pred)`: once construction has
/// moved past the prefix, the two behave identically.
#[derive(Debug, Clone, PartialEq)]
pub struct SkipCursor<C> {
    current: C,
}

impl<C: Cursor> SkipCursor<C> {
    /// Advance `count` times or until the end, whichever comes first.
    pub fn span(span: Span<C>, count: usize) -> Span<Self> {
        let mut current = span.begin;
        let mut remaining = count;
        while remaining > 0 && current != span.end {
            remaining -= 1;
            current.advance();
        }
        Span {
            begin: Self { current },
            end: Self { current: span.end },
        }
    }

    /// Advance while the predicate holds.
    pub fn span_while<F>(span: Span<C>, pred: F) -> Span<Self>
    where
        F: Fn(&C::Item) -> bool,
    {
        let mut current = span.begin;
        while current != span.end && pred(&current.get()) {
            current.advance();
        }
        Span {
            begin: Self { current },
            end: Self { current: span.end },
        }
    }
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    type Item = C::Item;

    fn get(&self) -> C::Item {
        self.current.get()
    }

    fn advance(&mut self) {
        self.current.advance();
    }
}
