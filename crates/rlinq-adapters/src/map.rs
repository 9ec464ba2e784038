//! Map adapters (`select`, `select_indexed`).
//!
//! No construction-time work: `advance` steps the inner cursor and `get`
//! applies the transform to the current element, returning by value.

use std::sync::Arc;

use rlinq_core::cursor::{Cursor, Span};

pub struct SelectCursor<C, F> {
    current: C,
    func: Arc<F>,
}

impl<C, F> SelectCursor<C, F> {
    pub fn new(current: C, func: Arc<F>) -> Self {
        Self { current, func }
    }

    pub fn span(span: Span<C>, func: F) -> Span<Self> {
        let func = Arc::new(func);
        Span {
            begin: Self::new(span.begin, Arc::clone(&func)),
            end: Self::new(span.end, func),
        }
    }
}

impl<C: Clone, F> Clone for SelectCursor<C, F> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            func: Arc::clone(&self.func),
        }
    }
}

impl<C: PartialEq, F> PartialEq for SelectCursor<C, F> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<C, F, U> Cursor for SelectCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    fn get(&self) -> U {
        (self.func)(self.current.get())
    }

    fn advance(&mut self) {
        self.current.advance();
    }
}

/// Like `SelectCursor`, but the transform also receives the zero-based
/// position of the element.
pub struct SelectIndexedCursor<C, F> {
    current: C,
    index: usize,
    func: Arc<F>,
}

impl<C, F> SelectIndexedCursor<C, F> {
    pub fn span(span: Span<C>, func: F) -> Span<Self> {
        let func = Arc::new(func);
        Span {
            begin: Self {
                current: span.begin,
                index: 0,
                func: Arc::clone(&func),
            },
            end: Self {
                current: span.end,
                index: 0,
                func,
            },
        }
    }
}

impl<C: Clone, F> Clone for SelectIndexedCursor<C, F> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            index: self.index,
            func: Arc::clone(&self.func),
        }
    }
}

// The index is derived from the position, so equality only looks at the cursor.
impl<C: PartialEq, F> PartialEq for SelectIndexedCursor<C, F> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<C, F, U> Cursor for SelectIndexedCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item, usize) -> U,
{
    type Item = U;

    fn get(&self) -> U {
        (self.func)(self.current.get(), self.index)
    }

    fn advance(&mut self) {
        self.current.advance();
        self.index += 1;
    }
}
