//! Flatten adapter (`select_many`).
//!
//! Holds the outer cursor, the span produced for the current outer element,
//! and how far into that span we are. Outer elements whose produced span is
//! empty are skipped both at construction and on advance, so a live cursor
//! always has a live inner span.

use std::sync::Arc;

use rlinq_core::cursor::{Cursor, IntoSpan, Span};

pub struct SelectManyCursor<C, F, S: IntoSpan> {
    outer: C,
    outer_end: C,
    func: Arc<F>,
    inner: Option<Span<S::Cursor>>,
    index: usize,
}

impl<C, F, S> SelectManyCursor<C, F, S>
where
    C: Cursor,
    F: Fn(C::Item) -> S,
    S: IntoSpan,
{
    pub fn new(outer: C, outer_end: C, func: Arc<F>) -> Self {
        let mut cursor = Self {
            outer,
            outer_end,
            func,
            inner: None,
            index: 0,
        };
        cursor.settle();
        cursor
    }

    pub fn span(span: Span<C>, func: F) -> Span<Self> {
        let func = Arc::new(func);
        Span {
            begin: Self::new(span.begin, span.end.clone(), Arc::clone(&func)),
            end: Self::new(span.end.clone(), span.end, func),
        }
    }

    /// Position on the first outer element (from the current one) that
    /// produces a non-empty inner span.
    fn settle(&mut self) {
        self.inner = None;
        self.index = 0;
        while self.outer != self.outer_end {
            let inner = (self.func)(self.outer.get()).into_span();
            if !inner.is_empty() {
                self.inner = Some(inner);
                return;
            }
            self.outer.advance();
        }
    }
}

impl<C, F, S> Clone for SelectManyCursor<C, F, S>
where
    C: Clone,
    S: IntoSpan,
{
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            outer_end: self.outer_end.clone(),
            func: Arc::clone(&self.func),
            inner: self.inner.clone(),
            index: self.index,
        }
    }
}

impl<C, F, S> PartialEq for SelectManyCursor<C, F, S>
where
    C: PartialEq,
    S: IntoSpan,
{
    fn eq(&self, other: &Self) -> bool {
        self.outer == other.outer && self.index == other.index
    }
}

impl<C, F, S> Cursor for SelectManyCursor<C, F, S>
where
    C: Cursor,
    F: Fn(C::Item) -> S,
    S: IntoSpan,
{
    type Item = <S::Cursor as Cursor>::Item;

    fn get(&self) -> Self::Item {
        match &self.inner {
            Some(inner) => inner.begin.get(),
            None => panic!("SelectManyCursor dereferenced at end"),
        }
    }

    fn advance(&mut self) {
        let Some(inner) = self.inner.as_mut() else {
            return;
        };
        inner.begin.advance();
        self.index += 1;
        if inner.begin == inner.end {
            self.outer.advance();
            self.settle();
        }
    }
}
