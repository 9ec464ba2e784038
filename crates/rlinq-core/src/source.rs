//! Source cursors: the leaves every query chain starts from.
//!
//! - `SliceCursor` walks contiguous borrowed storage by index.
//! - `IterCursor` wraps any cloneable std iterator (sets, lists, ranges, ...).
//! - `OwnedCursor` walks a vector the query took ownership of.
//!
//! All three yield owned clones of the elements.

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::iter::Cloned;
use std::ops::{Range, RangeInclusive};
use std::sync::Arc;

use crate::cursor::{Cursor, IntoSpan, Span};

/// Index cursor over a borrowed slice.
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn span(items: &'a [T]) -> Span<Self> {
        Span {
            begin: Self { items, pos: 0 },
            end: Self {
                items,
                pos: items.len(),
            },
        }
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.items.len())
            .finish()
    }
}

impl<T: Clone> Cursor for SliceCursor<'_, T> {
    type Item = T;

    fn get(&self) -> T {
        self.items[self.pos].clone()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}

/// Cursor over a cloneable iterator.
///
/// The current element is pulled eagerly so that `get` needs no mutation.
/// The end cursor is the one whose current slot is empty; live cursors compare
/// by how many steps they have taken.
pub struct IterCursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
    pos: usize,
}

impl<I> IterCursor<I>
where
    I: Iterator + Clone,
{
    pub fn span(iter: I) -> Span<Self> {
        let mut rest = iter.clone();
        let current = rest.next();
        Span {
            begin: Self {
                iter: rest,
                current,
                pos: 0,
            },
            end: Self {
                iter,
                current: None,
                pos: 0,
            },
        }
    }
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            current: self.current.clone(),
            pos: self.pos,
        }
    }
}

impl<I: Iterator> PartialEq for IterCursor<I> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.current, &other.current) {
            (None, None) => true,
            (Some(_), Some(_)) => self.pos == other.pos,
            _ => false,
        }
    }
}

impl<I: Iterator> fmt::Debug for IterCursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterCursor")
            .field("pos", &self.pos)
            .field("live", &self.current.is_some())
            .finish()
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = I::Item;

    fn get(&self) -> I::Item {
        match &self.current {
            Some(item) => item.clone(),
            None => panic!("IterCursor dereferenced at end"),
        }
    }

    fn advance(&mut self) {
        if self.current.is_some() {
            self.current = self.iter.next();
            self.pos += 1;
        }
    }
}

/// Cursor over a vector owned by the query (shared across cursor copies).
pub struct OwnedCursor<T> {
    items: Arc<Vec<T>>,
    pos: usize,
}

impl<T> OwnedCursor<T> {
    pub fn span(items: Vec<T>) -> Span<Self> {
        let len = items.len();
        let items = Arc::new(items);
        Span {
            begin: Self {
                items: Arc::clone(&items),
                pos: 0,
            },
            end: Self { items, pos: len },
        }
    }
}

impl<T> Clone for OwnedCursor<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            pos: self.pos,
        }
    }
}

impl<T> PartialEq for OwnedCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T> fmt::Debug for OwnedCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedCursor")
            .field("pos", &self.pos)
            .field("len", &self.items.len())
            .finish()
    }
}

impl<T: Clone> Cursor for OwnedCursor<T> {
    type Item = T;

    fn get(&self) -> T {
        self.items[self.pos].clone()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}

// ----- IntoSpan impls -----

impl<'a, T: Clone> IntoSpan for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    fn into_span(self) -> Span<Self::Cursor> {
        SliceCursor::span(self)
    }
}

impl<'a, T: Clone> IntoSpan for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    fn into_span(self) -> Span<Self::Cursor> {
        SliceCursor::span(self.as_slice())
    }
}

impl<'a, T: Clone, const N: usize> IntoSpan for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    fn into_span(self) -> Span<Self::Cursor> {
        SliceCursor::span(self.as_slice())
    }
}

impl<T: Clone> IntoSpan for Vec<T> {
    type Cursor = OwnedCursor<T>;

    fn into_span(self) -> Span<Self::Cursor> {
        OwnedCursor::span(self)
    }
}

macro_rules! iter_span {
    ($container:ident, $module:ident) => {
        impl<'a, T: Clone> IntoSpan for &'a $container<T> {
            type Cursor = IterCursor<Cloned<std::collections::$module::Iter<'a, T>>>;

            fn into_span(self) -> Span<Self::Cursor> {
                IterCursor::span(self.iter().cloned())
            }
        }
    };
}

iter_span!(VecDeque, vec_deque);
iter_span!(LinkedList, linked_list);
iter_span!(BTreeSet, btree_set);
iter_span!(HashSet, hash_set);

impl<T: Clone> IntoSpan for Range<T>
where
    Range<T>: Iterator<Item = T> + Clone,
{
    type Cursor = IterCursor<Range<T>>;

    fn into_span(self) -> Span<Self::Cursor> {
        IterCursor::span(self)
    }
}

impl<T: Clone> IntoSpan for RangeInclusive<T>
where
    RangeInclusive<T>: Iterator<Item = T> + Clone,
{
    type Cursor = IterCursor<RangeInclusive<T>>;

    fn into_span(self) -> Span<Self::Cursor> {
        IterCursor::span(self)
    }
}
