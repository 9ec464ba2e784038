//! The materialization budget of one query context.
//!
//! Every eager operator reserves the bytes of its buffer before storing it and
//! holds the returned `BudgetGuard` inside the buffer. The ledger tracks live
//! bytes in total and per operator tag, plus the high-water mark.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rlinq_core::config::QueryConfig;

struct Ledger {
    capacity: usize,
    used: AtomicUsize,
    peak: AtomicUsize,
    by_tag: Mutex<BTreeMap<&'static str, usize>>,
}

impl Ledger {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            used: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            by_tag: Mutex::new(BTreeMap::new()),
        }
    }

    fn tags(&self) -> MutexGuard<'_, BTreeMap<&'static str, usize>> {
        // A panic while holding the lock cannot leave the map half-updated.
        self.by_tag.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reserve `bytes` unless that would cross the capacity.
    fn reserve(&self, bytes: usize, tag: &'static str) -> bool {
        let reserved = self
            .used
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |cur| {
                cur.checked_add(bytes).filter(|next| *next <= self.capacity)
            });
        let Ok(before) = reserved else {
            return false;
        };
        let now = before + bytes;
        let peak = self.peak.fetch_max(now, Ordering::AcqRel).max(now);
        *self.tags().entry(tag).or_insert(0) += bytes;

        #[cfg(feature = "tracing")]
        tracing::trace!(tag, bytes, used = now, peak, "materialized bytes");
        #[cfg(not(feature = "tracing"))]
        let _ = peak;
        true
    }

    fn release(&self, bytes: usize, tag: &'static str) {
        self.used.fetch_sub(bytes, Ordering::AcqRel);
        let mut tags = self.tags();
        if let Some(live) = tags.get_mut(tag) {
            *live = live.saturating_sub(bytes);
            if *live == 0 {
                tags.remove(tag);
            }
        }
    }
}

/// Shared by every handle derived from one query context; clones share the
/// same ledger.
#[derive(Clone)]
pub struct MaterializeBudget {
    ledger: Arc<Ledger>,
}

impl MaterializeBudget {
    pub fn new(capacity_bytes: usize) -> Self {
        Self {
            ledger: Arc::new(Ledger::new(capacity_bytes)),
        }
    }

    /// Never refuses; usage and peak are still tracked.
    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    pub fn from_config(cfg: &QueryConfig) -> Self {
        cfg.materialize_cap_bytes
            .map_or_else(Self::unbounded, Self::new)
    }

    /// Reserve `bytes` for a buffer built by operator `tag`. `None` means the
    /// cap would be crossed; nothing is reserved in that case.
    pub fn try_acquire(&self, bytes: usize, tag: &'static str) -> Option<BudgetGuard> {
        if bytes > 0 && !self.ledger.reserve(bytes, tag) {
            return None;
        }
        Some(BudgetGuard {
            ledger: Arc::clone(&self.ledger),
            bytes,
            tag,
        })
    }

    pub fn capacity_bytes(&self) -> usize {
        self.ledger.capacity
    }

    /// Bytes held by live buffers right now.
    pub fn used_bytes(&self) -> usize {
        self.ledger.used.load(Ordering::Acquire)
    }

    /// Live bytes held by buffers of one operator.
    pub fn used_bytes_for(&self, tag: &str) -> usize {
        self.ledger.tags().get(tag).copied().unwrap_or(0)
    }

    /// Highest `used_bytes` ever observed.
    pub fn peak_bytes(&self) -> usize {
        self.ledger.peak.load(Ordering::Acquire)
    }

    pub fn is_unbounded(&self) -> bool {
        self.ledger.capacity == usize::MAX
    }
}

impl Default for MaterializeBudget {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl fmt::Debug for MaterializeBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaterializeBudget")
            .field("capacity", &self.ledger.capacity)
            .field("used", &self.used_bytes())
            .field("peak", &self.peak_bytes())
            .finish()
    }
}

/// Bytes reserved for one buffer; dropping it hands them back.
pub struct BudgetGuard {
    ledger: Arc<Ledger>,
    bytes: usize,
    tag: &'static str,
}

impl BudgetGuard {
    pub fn bytes(&self) -> usize {
        self.bytes
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }
}

impl Drop for BudgetGuard {
    fn drop(&mut self) {
        if self.bytes > 0 {
            self.ledger.release(self.bytes, self.tag);
        }
    }
}

impl fmt::Debug for BudgetGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BudgetGuard")
            .field("bytes", &self.bytes)
            .field("tag", &self.tag)
            .finish()
    }
}
