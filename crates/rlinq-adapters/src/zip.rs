//! Zip adapter: positional pairs of two equal-length spans.
//!
//! Construction walks both spans once, storing the pairs in a shared buffer,
//! and fails if one side runs out before the other. Equality is decided by the
//! first span's cursor alone.

use std::sync::Arc;

use rlinq_core::cursor::{Cursor, Span};
use rlinq_core::error::{Error, Result, LENGTH_MISMATCH};
use rlinq_mem::{MaterializeBudget, SharedBuffer};

pub struct ZipCursor<A: Cursor, B: Cursor> {
    first: A,
    second: B,
    pairs: Arc<SharedBuffer<(A::Item, B::Item)>>,
    index: usize,
}

impl<A, B> ZipCursor<A, B>
where
    A: Cursor,
    B: Cursor,
{
    pub fn span(
        first: Span<A>,
        second: Span<B>,
        budget: &MaterializeBudget,
    ) -> Result<Span<Self>> {
        let mut pairs = Vec::new();
        let mut a = first.begin.clone();
        let mut b = second.begin.clone();
        loop {
            match (a == first.end, b == second.end) {
                (true, true) => break,
                (false, false) => {
                    pairs.push((a.get(), b.get()));
                    a.advance();
                    b.advance();
                }
                _ => return Err(Error::cardinality(LENGTH_MISMATCH)),
            }
        }

        let len = pairs.len();
        let pairs = Arc::new(SharedBuffer::new(budget, pairs, "zip")?);
        Ok(Span {
            begin: Self {
                first: first.begin,
                second: second.begin,
                pairs: Arc::clone(&pairs),
                index: 0,
            },
            end: Self {
                first: first.end,
                second: second.end,
                pairs,
                index: len,
            },
        })
    }

    /// The pair buffer shared by every copy of this cursor.
    pub fn buffer(&self) -> &SharedBuffer<(A::Item, B::Item)> {
        &self.pairs
    }
}

impl<A: Cursor, B: Cursor> Clone for ZipCursor<A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            pairs: Arc::clone(&self.pairs),
            index: self.index,
        }
    }
}

impl<A: Cursor, B: Cursor> PartialEq for ZipCursor<A, B> {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first
    }
}

impl<A, B> Cursor for ZipCursor<A, B>
where
    A: Cursor,
    B: Cursor,
    A::Item: Clone,
    B::Item: Clone,
{
    type Item = (A::Item, B::Item);

    fn get(&self) -> Self::Item {
        self.pairs[self.index].clone()
    }

    fn advance(&mut self) {
        self.index += 1;
        self.first.advance();
        self.second.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlinq_core::source::SliceCursor;

    #[test]
    fn pairs_positionally() {
        let a = [1, 2, 3];
        let b = ["x", "y", "z"];
        let budget = MaterializeBudget::unbounded();
        let span = ZipCursor::span(SliceCursor::span(&a), SliceCursor::span(&b), &budget).unwrap();
        assert_eq!(
            span.iter().collect::<Vec<_>>(),
            vec![(1, "x"), (2, "y"), (3, "z")]
        );
    }

    #[test]
    fn copies_share_one_pair_buffer() {
        let a = [1u16, 2, 3];
        let budget = MaterializeBudget::unbounded();
        let span = ZipCursor::span(SliceCursor::span(&a), SliceCursor::span(&a), &budget).unwrap();
        assert!(std::ptr::eq(span.begin.buffer(), span.end.buffer()));
        assert_eq!(span.begin.buffer().len(), 3);
        assert_eq!(span.begin.buffer().tag(), "zip");
        assert_eq!(budget.used_bytes_for("zip"), span.begin.buffer().bytes());
    }

    #[test]
    fn unequal_lengths_fail() {
        let a = [1, 2, 3];
        let b = [1, 2];
        let budget = MaterializeBudget::unbounded();
        let res = ZipCursor::span(SliceCursor::span(&a), SliceCursor::span(&b), &budget);
        assert_eq!(
            res.err().map(|e| e.message()),
            Some("Sequences have different lengths".to_string())
        );
    }

    #[test]
    fn pair_buffer_is_accounted() {
        let a = [1u32, 2];
        let budget = MaterializeBudget::new(4);
        let res = ZipCursor::span(SliceCursor::span(&a), SliceCursor::span(&a), &budget);
        assert!(matches!(res, Err(Error::BudgetExceeded { tag: "zip", .. })));
    }
}
