//! Cast adapter: dereference converts the inner element with `CastFrom`.

use std::marker::PhantomData;

use rlinq_core::cast::CastFrom;
use rlinq_core::cursor::{Cursor, Span};

pub struct CastCursor<C, U> {
    current: C,
    _target: PhantomData<fn() -> U>,
}

impl<C, U> CastCursor<C, U> {
    pub fn span(span: Span<C>) -> Span<Self> {
        Span {
            begin: Self {
                current: span.begin,
                _target: PhantomData,
            },
            end: Self {
                current: span.end,
                _target: PhantomData,
            },
        }
    }
}

impl<C: Clone, U> Clone for CastCursor<C, U> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            _target: PhantomData,
        }
    }
}

impl<C: PartialEq, U> PartialEq for CastCursor<C, U> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<C, U> Cursor for CastCursor<C, U>
where
    C: Cursor,
    U: CastFrom<C::Item>,
{
    type Item = U;

    fn get(&self) -> U {
        U::cast_from(self.current.get())
    }

    fn advance(&mut self) {
        self.current.advance();
    }
}
