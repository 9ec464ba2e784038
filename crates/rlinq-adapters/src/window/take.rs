use std::sync::Arc;

use rlinq_core::cursor::{Cursor, Span};

/// Yields at most `count` elements, then jumps to the end position.
#[derive(Debug, Clone)]
pub struct TakeCursor<C> {
    current: C,
    end: C,
    count: usize,
    taken: usize,
}

impl<C: Cursor> TakeCursor<C> {
    pub fn new(current: C, end: C, count: usize) -> Self {
        let current = if count == 0 { end.clone() } else { current };
        Self {
            current,
            end,
            count,
            taken: 0,
        }
    }

    pub fn span(span: Span<C>, count: usize) -> Span<Self> {
        Span {
            begin: Self::new(span.begin, span.end.clone(), count),
            end: Self::new(span.end.clone(), span.end, count),
        }
    }
}

impl<C: PartialEq> PartialEq for TakeCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn get(&self) -> C::Item {
        self.current.get()
    }

    fn advance(&mut self) {
        self.taken += 1;
        if self.taken >= self.count {
            self.current = self.end.clone();
        } else if self.current != self.end {
            self.current.advance();
        }
    }
}

/// Yields elements while the predicate holds; the first failure (including
/// on the very first element) moves the cursor to the end.
pub struct TakeWhileCursor<C, F> {
    current: C,
    end: C,
    pred: Arc<F>,
}

impl<C, F> TakeWhileCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    pub fn new(current: C, end: C, pred: Arc<F>) -> Self {
        let mut cursor = Self { current, end, pred };
        cursor.close_if_rejected();
        cursor
    }

    pub fn span(span: Span<C>, pred: F) -> Span<Self> {
        let pred = Arc::new(pred);
        Span {
            begin: Self::new(span.begin, span.end.clone(), Arc::clone(&pred)),
            end: Self::new(span.end.clone(), span.end, pred),
        }
    }

    fn close_if_rejected(&mut self) {
        if self.current != self.end && !(self.pred)(&self.current.get()) {
            self.current = self.end.clone();
        }
    }
}

impl<C: Clone, F> Clone for TakeWhileCursor<C, F> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            end: self.end.clone(),
            pred: Arc::clone(&self.pred),
        }
    }
}

impl<C: PartialEq, F> PartialEq for TakeWhileCursor<C, F> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<C, F> Cursor for TakeWhileCursor<C, F>
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
            self.close_if_rejected();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlinq_core::source::SliceCursor;

    #[test]
    fn take_keeps_prefix() {
        let data = [1, 2, 3, 4];
        let span = TakeCursor::span(SliceCursor::span(&data), 2);
        assert_eq!(span.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn take_zero_starts_at_end() {
        let data = [1, 2];
        assert!(TakeCursor::span(SliceCursor::span(&data), 0).is_empty());
    }

    #[test]
    fn take_more_than_len_yields_everything() {
        let data = [1, 2];
        let span = TakeCursor::span(SliceCursor::span(&data), 5);
        assert_eq!(span.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn take_while_stops_on_first_failure() {
        let data = [2, 4, 5, 6];
        let span = TakeWhileCursor::span(SliceCursor::span(&data), |x| x % 2 == 0);
        assert_eq!(span.iter().collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn take_while_failing_first_element_is_empty() {
        let data = [1, 2];
        assert!(TakeWhileCursor::span(SliceCursor::span(&data), |x| *x > 5).is_empty());
    }
}
