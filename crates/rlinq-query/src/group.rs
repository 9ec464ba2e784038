//! Grouping terminals. Groups come out in ascending key order and keep the
//! encounter order of their members.

use std::collections::BTreeMap;

use rlinq_adapters::sort::group_by_key;
use rlinq_core::cursor::Cursor;

use crate::query::Query;

impl<C: Cursor> Query<C> {
    pub fn group_by<K, F>(&self, key: F) -> Vec<Vec<C::Item>>
    where
        K: Ord,
        F: Fn(&C::Item) -> K,
    {
        self.group_by_with(key, |item| item)
    }

    pub fn group_by_with<K, V, FK, FV>(&self, key: FK, value: FV) -> Vec<Vec<V>>
    where
        K: Ord,
        FK: Fn(&C::Item) -> K,
        FV: Fn(C::Item) -> V,
    {
        self.to_lookup(key, value).into_values().collect()
    }

    /// The key -> members map behind `group_by_with`.
    pub fn to_lookup<K, V, FK, FV>(&self, key: FK, value: FV) -> BTreeMap<K, Vec<V>>
    where
        K: Ord,
        FK: Fn(&C::Item) -> K,
        FV: Fn(C::Item) -> V,
    {
        group_by_key(self.span.clone(), key, value)
    }
}
