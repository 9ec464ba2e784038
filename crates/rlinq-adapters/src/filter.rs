//! Filter adapter (`where`).
//!
//! Construction skips forward to the first match; `advance` repeats the skip.
//! A predicate that never holds leaves the begin cursor equal to the end.

use std::fmt;
use std::sync::Arc;

use rlinq_core::cursor::{Cursor, Span};

pub struct WhereCursor<C, F> {
    current: C,
    end: C,
    pred: Arc<F>,
}

impl<C, F> WhereCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    pub fn new(current: C, end: C, pred: Arc<F>) -> Self {
        let mut cursor = Self { current, end, pred };
        cursor.skip_rejected();
        cursor
    }

    pub fn span(span: Span<C>, pred: F) -> Span<Self> {
        let pred = Arc::new(pred);
        Span {
            begin: Self::new(span.begin, span.end.clone(), Arc::clone(&pred)),
            end: Self::new(span.end.clone(), span.end, pred),
        }
    }

    fn skip_rejected(&mut self) {
        while self.current != self.end && !(self.pred)(&self.current.get()) {
            self.current.advance();
        }
    }
}

impl<C: Clone, F> Clone for WhereCursor<C, F> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            end: self.end.clone(),
            pred: Arc::clone(&self.pred),
        }
    }
}

impl<C: PartialEq, F> PartialEq for WhereCursor<C, F> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<C: fmt::Debug, F> fmt::Debug for WhereCursor<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhereCursor")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl<C, F> Cursor for WhereCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn get(&self) -> C::Item {
        self.current.get()
    }

    fn advance(&mut self) {
        if self.current != self.end {
            self.current.advance();
            self.skip_rejected();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlinq_core::source::SliceCursor;

    #[test]
    fn keeps_matching_elements_in_order() {
        let data = [1, 2, 3, 4, 5, 6];
        let span = WhereCursor::span(SliceCursor::span(&data), |x: &i32| x % 2 == 0);
        assert_eq!(span.iter().collect::<Vec<_>>(), vec![2, 4, 6]);
    }

    #[test]
    fn never_true_predicate_starts_at_end() {
        let data = [1, 3, 5];
        let span = WhereCursor::span(SliceCursor::span(&data), |x: &i32| *x > 10);
        assert!(span.is_empty());
    }

    #[test]
    fn advancing_at_end_is_a_no_op() {
        let data = [2];
        let span = WhereCursor::span(SliceCursor::span(&data), |_: &i32| true);
        let mut cur = span.begin.clone();
        cur.advance();
        assert!(cur == span.end);
        cur.advance();
        assert!(cur == span.end);
    }
}
