//! Conversions into std containers.
//!
//! Map conversions keep the first entry seen for a duplicate key.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::Hash;

use rlinq_core::cursor::Cursor;

use crate::query::Query;

impl<C: Cursor> Query<C> {
    pub fn to_vec(&self) -> Vec<C::Item> {
        self.iter().collect()
    }

    pub fn to_list(&self) -> LinkedList<C::Item> {
        self.iter().collect()
    }

    pub fn to_deque(&self) -> VecDeque<C::Item> {
        self.iter().collect()
    }

    pub fn to_set(&self) -> BTreeSet<C::Item>
    where
        C::Item: Ord,
    {
        self.iter().collect()
    }

    pub fn to_hash_set(&self) -> HashSet<C::Item>
    where
        C::Item: Eq + Hash,
    {
        self.iter().collect()
    }

    pub fn to_map<K, F>(&self, key: F) -> BTreeMap<K, C::Item>
    where
        K: Ord,
        F: Fn(&C::Item) -> K,
    {
        self.to_map_with(key, |item| item)
    }

    pub fn to_map_with<K, V, FK, FV>(&self, key: FK, value: FV) -> BTreeMap<K, V>
    where
        K: Ord,
        FK: Fn(&C::Item) -> K,
        FV: Fn(C::Item) -> V,
    {
        let mut map = BTreeMap::new();
        for item in self.iter() {
            map.entry(key(&item)).or_insert_with(|| value(item));
        }
        map
    }

    pub fn to_hash_map<K, F>(&self, key: F) -> HashMap<K, C::Item>
    where
        K: Eq + Hash,
        F: Fn(&C::Item) -> K,
    {
        self.to_hash_map_with(key, |item| item)
    }

    pub fn to_hash_map_with<K, V, FK, FV>(&self, key: FK, value: FV) -> HashMap<K, V>
    where
        K: Eq + Hash,
        FK: Fn(&C::Item) -> K,
        FV: Fn(C::Item) -> V,
    {
        let mut map = HashMap::new();
        for item in self.iter() {
            map.entry(key(&item)).or_insert_with(|| value(item));
        }
        map
    }
}
