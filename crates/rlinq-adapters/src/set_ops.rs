//! Materializing operators: set algebra, reversal and default-if-empty.
//!
//! Each function walks its input(s) once, stores the result in a budget
//! accounted buffer and returns a span of `MaterializedCursor`s over it.
//! Set results come out of a `BTreeSet`, so they are sorted; `except` is the
//! exception and keeps the receiver's order.

use std::collections::BTreeSet;

use rlinq_core::cursor::{Cursor, Span};
use rlinq_core::error::{Error, Result};
use rlinq_mem::MaterializeBudget;

use crate::concat::ConcatCursor;
use crate::materialize::MaterializedCursor;

type Materialized<T> = Result<Span<MaterializedCursor<T>>>;

/// Copy every element of `span` into a shared buffer.
pub fn copy<C: Cursor>(
    span: Span<C>,
    budget: &MaterializeBudget,
    tag: &'static str,
) -> Materialized<C::Item> {
    MaterializedCursor::from_vec(budget, span.into_iter().collect(), tag)
}

/// Unique elements in ascending order.
pub fn distinct<C>(
    span: Span<C>,
    budget: &MaterializeBudget,
) -> Materialized<C::Item>
where
    C: Cursor,
    C::Item: Ord,
{
    if span.is_empty() {
        return Err(Error::empty());
    }
    let set: BTreeSet<C::Item> = span.into_iter().collect();
    MaterializedCursor::from_vec(budget, set.into_iter().collect(), "distinct")
}

/// Elements of `span` absent from `other`, each at most once, in the order
/// they first appear in `span`.
pub fn except<C, D>(
    span: Span<C>,
    other: Span<D>,
    budget: &MaterializeBudget,
) -> Materialized<C::Item>
where
    C: Cursor,
    D: Cursor<Item = C::Item>,
    C::Item: Ord + Clone,
{
    if span.is_empty() {
        return Err(Error::empty());
    }
    let mut excluded: BTreeSet<C::Item> = other.into_iter().collect();
    let mut kept = Vec::new();
    for item in span {
        if excluded.insert(item.clone()) {
            kept.push(item);
        }
    }
    MaterializedCursor::from_vec(budget, kept, "except")
}

/// Elements present in both spans, unique and ascending.
pub fn intersect<C, D>(
    span: Span<C>,
    other: Span<D>,
    budget: &MaterializeBudget,
) -> Materialized<C::Item>
where
    C: Cursor,
    D: Cursor<Item = C::Item>,
    C::Item: Ord,
{
    if span.is_empty() {
        return Err(Error::empty());
    }
    let left: BTreeSet<C::Item> = span.into_iter().collect();
    let right: BTreeSet<C::Item> = other.into_iter().collect();
    let both = left.into_iter().filter(|item| right.contains(item)).collect();
    MaterializedCursor::from_vec(budget, both, "intersect")
}

/// `distinct` over the concatenation of both spans.
pub fn union<C, D>(
    span: Span<C>,
    other: Span<D>,
    budget: &MaterializeBudget,
) -> Materialized<C::Item>
where
    C: Cursor,
    D: Cursor<Item = C::Item>,
    C::Item: Ord,
{
    distinct(ConcatCursor::span(span, other), budget)
}

/// The source unchanged, or `fallback` alone when the source is empty.
pub fn default_if_empty<C: Cursor>(
    span: Span<C>,
    fallback: C::Item,
    budget: &MaterializeBudget,
) -> Materialized<C::Item> {
    let mut items: Vec<C::Item> = span.into_iter().collect();
    if items.is_empty() {
        items.push(fallback);
    }
    MaterializedCursor::from_vec(budget, items, "default_if_empty")
}

pub fn reverse<C: Cursor>(
    span: Span<C>,
    budget: &MaterializeBudget,
) -> Materialized<C::Item> {
    let mut items: Vec<C::Item> = span.into_iter().collect();
    items.reverse();
    MaterializedCursor::from_vec(budget, items, "reverse")
}
