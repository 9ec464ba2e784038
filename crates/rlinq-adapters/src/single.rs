//! Single-match adapter.
//!
//! Construction scans the source once and fails unless exactly one element
//! qualifies. The result is a one-element span whose begin dereferences the
//! match; advancing jumps straight to the end.

use rlinq_core::cursor::{Cursor, Span};
use rlinq_core::error::{Error, Result, MORE_THAN_ONE, NOT_SINGLE, NO_VALUE_FOUND};

#[derive(Debug, Clone)]
pub struct SingleCursor<C> {
    current: C,
    end: C,
    single: C,
}

impl<C: Cursor> SingleCursor<C> {
    /// The source itself must hold exactly one element.
    pub fn span(span: Span<C>) -> Result<Span<Self>> {
        if span.is_empty() {
            return Err(Error::empty());
        }
        let mut second = span.begin.clone();
        second.advance();
        if second != span.end {
            return Err(Error::cardinality(NOT_SINGLE));
        }
        let single = span.begin.clone();
        Ok(Self::wrap(span, single))
    }

    /// Exactly one element of a non-empty source must satisfy `pred`.
    pub fn span_by<F>(span: Span<C>, pred: F) -> Result<Span<Self>>
    where
        F: Fn(&C::Item) -> bool,
    {
        if span.is_empty() {
            return Err(Error::empty());
        }
        let mut found: Option<C> = None;
        let mut cur = span.begin.clone();
        while cur != span.end {
            if pred(&cur.get()) {
                if found.is_some() {
                    return Err(Error::cardinality(MORE_THAN_ONE));
                }
                found = Some(cur.clone());
            }
            cur.advance();
        }
        match found {
            Some(single) => Ok(Self::wrap(span, single)),
            None => Err(Error::cardinality(NO_VALUE_FOUND)),
        }
    }

    fn wrap(span: Span<C>, single: C) -> Span<Self> {
        Span {
            begin: Self {
                current: span.begin,
                end: span.end.clone(),
                single,
            },
            end: Self {
                current: span.end.clone(),
                end: span.end.clone(),
                single: span.end,
            },
        }
    }
}

impl<C: PartialEq> PartialEq for SingleCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<C: Cursor> Cursor for SingleCursor<C> {
    type Item = C::Item;

    fn get(&self) -> C::Item {
        self.single.get()
    }

    fn advance(&mut self) {
        self.current = self.end.clone();
    }
}
