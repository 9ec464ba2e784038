//! Budget-accounted buffers for materializing operators.
//!
//! A `SharedBuffer` owns the precomputed elements plus the guard for their
//! bytes. Adapters wrap it in an `Arc` so every cursor copy shares one
//! allocation; the bytes go back to the budget when the last copy drops.

use std::fmt;
use std::ops::Deref;


use crate::error::{Error, Result};
use crate::budget::{BudgetGuard, MaterializeBudget};

pub struct SharedBuffer<T> {
    guard: BudgetGuard,
    items: Vec<T>,
}

impl<T> SharedBuffer<T> {
    /// Bytes accounted for `len` elements of `T`.
    pub fn bytes_for(len: usize) -> usize {
        std::mem::size_of::<T>().saturating_mul(len)
    }

    /// Take ownership of `items`, accounting their bytes against `budget`.
    pub fn new(
        budget: &MaterializeBudget,
        items: Vec<T>,
        tag: &'static str,
    ) -> Result<Self> {
        let requested = Self::bytes_for(items.len());
        let guard = budget
            .try_acquire(requested, tag)
            .ok_or_else(|| Error::BudgetExceeded {
                tag,
                requested,
                capacity: budget.capacity_bytes(),
                used: budget.used_bytes(),
            })?;
        Ok(Self { guard, items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn bytes(&self) -> usize {
        self.guard.bytes()
    }

    pub fn tag(&self) -> &'static str {
        self.guard.tag()
    }
}

impl<T> Deref for SharedBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> fmt::Debug for SharedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedBuffer")
            .field("tag", &self.tag())
            .field("len", &self.items.len())
            .field("bytes", &self.bytes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_accounts_element_bytes() {
        let budget = MaterializeBudget::new(1024);
        let buf = SharedBuffer::new(&budget, vec![1u64, 2, 3], "test").unwrap();
        assert_eq!(buf.bytes(), 24);
        assert_eq!(budget.used_bytes(), 24);
        assert_eq!(&buf[..], &[1, 2, 3]);
        drop(buf);
        assert_eq!(budget.used_bytes(), 0);
    }

    #[test]
    fn over_cap_is_rejected_with_context() {
        let budget = MaterializeBudget::new(8);
        let err = SharedBuffer::new(&budget, vec![0u32; 4], "distinct").unwrap_err();
        match err {
            Error::BudgetExceeded {
                tag,
                requested,
                capacity,
                ..
            } => {
                assert_eq!(tag, "distinct");
                assert_eq!(requested, 16);
                assert_eq!(capacity, 8);
            }
        }
    }
}
