//! Concatenation adapter: the first span, then the second.
//!
//! The two spans may use different cursor types as long as they produce the
//! same item type.

use rlinq_core::cursor::{Cursor, Span};

#[derive(Debug, Clone)]
pub struct ConcatCursor<A, B> {
    first: A,
    first_end: A,
    second: B,
    second_end: B,
}

impl<A, B> ConcatCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    pub fn span(first: Span<A>, second: Span<B>) -> Span<Self> {
        Span {
            begin: Self {
                first: first.begin,
                first_end: first.end.clone(),
                second: second.begin,
                second_end: second.end.clone(),
            },
            end: Self {
                first: first.end.clone(),
                first_end: first.end,
                second: second.end.clone(),
                second_end: second.end,
            },
        }
    }

    fn in_first(&self) -> bool {
        self.first != self.first_end
    }
}

// Both sub-cursors must match, so a cursor still inside the first span never
// equals one that has moved on to the second.
impl<A: PartialEq, B: PartialEq> PartialEq for ConcatCursor<A, B> {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl<A, B> Cursor for ConcatCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn get(&self) -> A::Item {
        if self.in_first() {
            self.first.get()
        } else {
            self.second.get()
        }
    }

    fn advance(&mut self) {
        if self.in_first() {
            self.first.advance();
        } else if self.second != self.second_end {
            self.second.advance();
        }
    }
}
