//! Grouping and ordering by key.
//!
//! Grouping is one pass into an ordered `key -> values` map; each group keeps
//! encounter order. Ordering flattens those groups back into a materialized
//! buffer, which makes it a stable sort by key.

use std::collections::BTreeMap;

use rlinq_core::cursor::{Cursor, Span};
use rlinq_core::error::Result;
use rlinq_mem::MaterializeBudget;

use crate::materialize::MaterializedCursor;

/// Sort direction for [`order_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

pub fn group_by_key<C, K, V, FK, FV>(span: Span<C>, key: FK, value: FV) -> BTreeMap<K, Vec<V>>
where
    C: Cursor,
    K: Ord,
    FK: Fn(&C::Item) -> K,
    FV: Fn(C::Item) -> V,
{
    let mut groups: BTreeMap<K, Vec<V>> = BTreeMap::new();
    for item in span {
        groups.entry(key(&item)).or_default().push(value(item));
    }
    groups
}

/// Reorder `span` by `key`. Elements with equal keys keep encounter order in
/// both directions; only the order of the groups flips.
pub fn order_by<C, K, FK>(
    span: Span<C>,
    key: FK,
    direction: Direction,
    budget: &MaterializeBudget,
) -> Result<Span<MaterializedCursor<C::Item>>>
where
    C: Cursor,
    K: Ord,
    FK: Fn(&C::Item) -> K,
{
    let groups = group_by_key(span, key, |item| item);
    let items: Vec<C::Item> = match direction {
        Direction::Ascending => groups.into_values().flatten().collect(),
        Direction::Descending => groups.into_values().rev().flatten().collect(),
    };
    MaterializedCursor::from_vec(budget, items, "order_by")
}
