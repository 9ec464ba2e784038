//! Cursor over a materialized, budget-accounted buffer.
//!
//! Every cursor copy holds an `Arc` to the same `SharedBuffer`; its guard
//! returns the bytes to the budget when the last copy is dropped.

use std::fmt;
use std::sync::Arc;

use rlinq_core::cursor::{Cursor, Span};
use rlinq_core::error::Result;
use rlinq_mem::{MaterializeBudget, SharedBuffer};

pub struct MaterializedCursor<T> {
    buffer: Arc<SharedBuffer<T>>,
    pos: usize,
}

impl<T> MaterializedCursor<T> {
    pub fn span(buffer: SharedBuffer<T>) -> Span<Self> {
        let len = buffer.len();
        let buffer = Arc::new(buffer);
        Span {
            begin: Self {
                buffer: Arc::clone(&buffer),
                pos: 0,
            },
            end: Self { buffer, pos: len },
        }
    }

    /// Account `items` against `budget` and expose them as a span.
    pub fn from_vec(
        budget: &MaterializeBudget,
        items: Vec<T>,
        tag: &'static str,
    ) -> Result<Span<Self>> {
        Ok(Self::span(SharedBuffer::new(budget, items, tag)?))
    }

    pub fn buffer(&self) -> &SharedBuffer<T> {
        &self.buffer
    }
}

impl<T> Clone for MaterializedCursor<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: Arc::clone(&self.buffer),
            pos: self.pos,
        }
    }
}

impl<T> PartialEq for MaterializedCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T> fmt::Debug for MaterializedCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaterializedCursor")
            .field("pos", &self.pos)
            .field("buffer", &self.buffer)
            .finish()
    }
}

impl<T: Clone> Cursor for MaterializedCursor<T> {
    type Item = T;

    fn get(&self) -> T {
        self.buffer[self.pos].clone()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}
