//! Terminal operators: counting, folding, element access, and comparison.
//!
//! All of them walk a copy of the span, so a handle can be queried repeatedly.

use std::ops::Add;

use rlinq_adapters::SingleCursor;
use rlinq_core::cast::CastFrom;
use rlinq_core::cursor::{Cursor, IntoSpan};
use rlinq_core::error::{Error, Result, NO_VALUE_FOUND};

use crate::query::Query;

impl<C: Cursor> Query<C> {
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn long_count(&self) -> u64 {
        self.iter().fold(0u64, |n, _| n + 1)
    }

    pub fn count_by<F>(&self, pred: F) -> usize
    where
        F: Fn(&C::Item) -> bool,
    {
        self.iter().filter(|item| pred(item)).count()
    }

    /// True when the sequence has at least one element.
    pub fn any(&self) -> bool {
        !self.span.is_empty()
    }

    pub fn any_by<F>(&self, pred: F) -> bool
    where
        F: Fn(&C::Item) -> bool,
    {
        self.iter().any(|item| pred(&item))
    }

    pub fn all<F>(&self, pred: F) -> bool
    where
        F: Fn(&C::Item) -> bool,
    {
        self.iter().all(|item| pred(&item))
    }

    pub fn contains(&self, value: &C::Item) -> bool
    where
        C::Item: PartialEq,
    {
        self.iter().any(|item| item == *value)
    }

    /// Left fold seeded with the first element.
    pub fn aggregate<F>(&self, func: F) -> Result<C::Item>
    where
        F: Fn(C::Item, C::Item) -> C::Item,
    {
        let mut iter = self.iter();
        let seed = iter.next().ok_or_else(Error::empty)?;
        Ok(iter.fold(seed, func))
    }

    /// Left fold from `seed`. An empty source is an error even though a seed
    /// is available.
    pub fn aggregate_seeded<A, F>(&self, seed: A, func: F) -> Result<A>
    where
        F: Fn(A, C::Item) -> A,
    {
        if self.span.is_empty() {
            return Err(Error::empty());
        }
        Ok(self.iter().fold(seed, func))
    }

    pub fn sum(&self) -> Result<C::Item>
    where
        C::Item: Add<Output = C::Item>,
    {
        self.aggregate(|acc, x| acc + x)
    }

    pub fn average(&self) -> Result<f64>
    where
        f64: CastFrom<C::Item>,
    {
        let (total, n) = self.aggregate_seeded((0.0f64, 0usize), |(total, n), x| {
            (total + f64::cast_from(x), n + 1)
        })?;
        Ok(total / n as f64)
    }

    pub fn max(&self) -> Result<C::Item>
    where
        C::Item: PartialOrd,
    {
        self.aggregate(|best, x| if x > best { x } else { best })
    }

    pub fn min(&self) -> Result<C::Item>
    where
        C::Item: PartialOrd,
    {
        self.aggregate(|best, x| if x < best { x } else { best })
    }

    /// Element with the largest key; the first one wins a tie.
    pub fn max_by_key<K, F>(&self, key: F) -> Result<C::Item>
    where
        K: Ord,
        F: Fn(&C::Item) -> K,
    {
        self.best_by_key(key, |candidate, best| candidate > best)
    }

    /// Element with the smallest key; the first one wins a tie.
    pub fn min_by_key<K, F>(&self, key: F) -> Result<C::Item>
    where
        K: Ord,
        F: Fn(&C::Item) -> K,
    {
        self.best_by_key(key, |candidate, best| candidate < best)
    }

    fn best_by_key<K, F, B>(&self, key: F, beats: B) -> Result<C::Item>
    where
        F: Fn(&C::Item) -> K,
        B: Fn(&K, &K) -> bool,
    {
        let mut iter = self.iter();
        let first = iter.next().ok_or_else(Error::empty)?;
        let first_key = key(&first);
        let (best, _) = iter.fold((first, first_key), |(best, best_key), item| {
            let k = key(&item);
            if beats(&k, &best_key) {
                (item, k)
            } else {
                (best, best_key)
            }
        });
        Ok(best)
    }

    // ----- element access -----

    pub fn first(&self) -> Result<C::Item> {
        self.iter().next().ok_or_else(Error::empty)
    }

    pub fn first_or_default(&self) -> C::Item
    where
        C::Item: Default,
    {
        self.iter().next().unwrap_or_default()
    }

    pub fn first_by<F>(&self, pred: F) -> Result<C::Item>
    where
        F: Fn(&C::Item) -> bool,
    {
        if self.span.is_empty() {
            return Err(Error::empty());
        }
        self.iter()
            .find(|item| pred(item))
            .ok_or_else(|| Error::cardinality(NO_VALUE_FOUND))
    }

    pub fn first_by_or_default<F>(&self, pred: F) -> C::Item
    where
        F: Fn(&C::Item) -> bool,
        C::Item: Default,
    {
        self.iter().find(|item| pred(item)).unwrap_or_default()
    }

    pub fn last(&self) -> Result<C::Item> {
        self.iter().last().ok_or_else(Error::empty)
    }

    pub fn last_or_default(&self) -> C::Item
    where
        C::Item: Default,
    {
        self.iter().last().unwrap_or_default()
    }

    pub fn last_by<F>(&self, pred: F) -> Result<C::Item>
    where
        F: Fn(&C::Item) -> bool,
    {
        if self.span.is_empty() {
            return Err(Error::empty());
        }
        self.iter()
            .filter(|item| pred(item))
            .last()
            .ok_or_else(|| Error::cardinality(NO_VALUE_FOUND))
    }

    pub fn last_by_or_default<F>(&self, pred: F) -> C::Item
    where
        F: Fn(&C::Item) -> bool,
        C::Item: Default,
    {
        self.iter().filter(|item| pred(item)).last().unwrap_or_default()
    }

    /// The sole element; fails on empty or longer sources.
    pub fn single(&self) -> Result<C::Item> {
        let span = SingleCursor::span(self.span.clone())?;
        Ok(span.begin.get())
    }

    /// Empty sources give the default; two or more elements still fail.
    pub fn single_or_default(&self) -> Result<C::Item>
    where
        C::Item: Default,
    {
        if self.span.is_empty() {
            return Ok(C::Item::default());
        }
        self.single()
    }

    pub fn single_by<F>(&self, pred: F) -> Result<C::Item>
    where
        F: Fn(&C::Item) -> bool,
    {
        let span = SingleCursor::span_by(self.span.clone(), pred)?;
        Ok(span.begin.get())
    }

    /// No match gives the default; several matches still fail.
    pub fn single_by_or_default<F>(&self, pred: F) -> Result<C::Item>
    where
        F: Fn(&C::Item) -> bool,
        C::Item: Default,
    {
        if self.span.is_empty() {
            return Ok(C::Item::default());
        }
        match self.single_by(pred) {
            Err(err) if err == Error::cardinality(NO_VALUE_FOUND) => Ok(C::Item::default()),
            res => res,
        }
    }

    /// Element at `index`; negative or past-the-end indexes fail.
    pub fn element_at(&self, index: isize) -> Result<C::Item> {
        let index = usize::try_from(index).map_err(|_| Error::out_of_range())?;
        self.iter().nth(index).ok_or_else(Error::out_of_range)
    }

    pub fn element_at_or_default(&self, index: isize) -> C::Item
    where
        C::Item: Default,
    {
        self.element_at(index).unwrap_or_default()
    }

    /// Pairwise equality; sequences of different lengths are unequal.
    pub fn sequence_equal<S>(&self, other: S) -> bool
    where
        S: IntoSpan,
        S::Cursor: Cursor<Item = C::Item>,
        C::Item: PartialEq,
    {
        self.iter().eq(other.into_span())
    }
}

#[cfg(test)]
mod tests {
    use crate::query::from;
    use rlinq_core::error::Error;

    #[test]
    fn counting_and_predicates() {
        let data = [1, 2, 3, 4];
        let q = from(&data);
        assert_eq!(q.count(), 4);
        assert_eq!(q.long_count(), 4);
        assert_eq!(q.count_by(|x| x % 2 == 0), 2);
        assert!(q.any());
        assert!(q.any_by(|x| *x > 3));
        assert!(!q.all(|x| *x > 1));
        assert!(q.contains(&3));
        assert!(!q.contains(&9));
    }

    #[test]
    fn folds() {
        let data = [3, 1, 4, 1, 5];
        let q = from(&data);
        assert_eq!(q.sum(), Ok(14));
        assert_eq!(q.max(), Ok(5));
        assert_eq!(q.min(), Ok(1));
        assert_eq!(q.aggregate(|a, b| a * b), Ok(60));
        let digits = q.aggregate_seeded(String::new(), |s, x| s + &x.to_string());
        assert_eq!(digits, Ok("31415".to_string()));
        assert_eq!(q.average(), Ok(2.8));
    }

    #[test]
    fn folds_fail_on_empty() {
        let empty: [i32; 0] = [];
        let q = from(&empty);
        assert_eq!(q.sum(), Err(Error::empty()));
        assert_eq!(q.average(), Err(Error::empty()));
        assert_eq!(q.aggregate_seeded(0, |a, b| a + b), Err(Error::empty()));
        assert_eq!(q.max_by_key(|x| *x), Err(Error::empty()));
    }

    #[test]
    fn keyed_extremes_prefer_the_first() {
        let words = ["bb", "a", "cc", "d"];
        let q = from(&words);
        assert_eq!(q.max_by_key(|w| w.len()), Ok("bb"));
        assert_eq!(q.min_by_key(|w| w.len()), Ok("a"));
    }

    #[test]
    fn element_access() {
        let data = [10, 20, 30];
        let q = from(&data);
        assert_eq!(q.first(), Ok(10));
        assert_eq!(q.last(), Ok(30));
        assert_eq!(q.first_by(|x| *x > 10), Ok(20));
        assert_eq!(q.last_by(|x| *x < 30), Ok(20));
        assert_eq!(q.element_at(1), Ok(20));
        assert_eq!(q.element_at(-1), Err(Error::out_of_range()));
        assert_eq!(q.element_at(3).unwrap_err().message(), "Index out of range");
        assert_eq!(q.element_at_or_default(7), 0);
        assert_eq!(q.first_by(|x| *x > 99).unwrap_err().message(), "No value found");
        assert_eq!(q.first_by_or_default(|x| *x > 99), 0);
        assert_eq!(q.last_by_or_default(|x| *x > 99), 0);
    }

    #[test]
    fn or_default_on_empty() {
        let empty: Vec<String> = Vec::new();
        let q = from(&empty);
        assert_eq!(q.first_or_default(), "");
        assert_eq!(q.last_or_default(), "");
        assert_eq!(q.single_or_default(), Ok(String::new()));
        assert_eq!(q.first(), Err(Error::empty()));
    }

    #[test]
    fn single_variants() {
        let data = [1, 2, 3];
        let q = from(&data);
        assert_eq!(
            q.single().unwrap_err().message(),
            "The collection should have only one value."
        );
        assert_eq!(q.single_by(|x| *x == 2), Ok(2));
        assert_eq!(q.single_by_or_default(|x| *x == 9), Ok(0));
        assert_eq!(
            q.single_by_or_default(|x| *x > 1).unwrap_err().message(),
            "More than one value found"
        );
        assert!(q.single_or_default().is_err());
        assert_eq!(from(&[5]).single(), Ok(5));
    }

    #[test]
    fn sequence_equality() {
        let a = [1, 2, 3];
        assert!(from(&a).sequence_equal(&[1, 2, 3]));
        assert!(!from(&a).sequence_equal(&[1, 2]));
        assert!(!from(&a).sequence_equal(vec![1, 2, 4]));
    }
}
