//! QueryContext: configuration plus the materialization budget shared by
//! every handle derived from one entry point.

use std::sync::Arc;

use rlinq_core::config::QueryConfig;
use rlinq_core::cursor::{Cursor, IntoSpan, Span};
use rlinq_core::error::Result;
use rlinq_core::source::{IterCursor, OwnedCursor};
use rlinq_mem::MaterializeBudget;

use crate::query::Query;

/// Cloning a context shares its budget.
#[derive(Debug, Clone)]
pub struct QueryContext {
    cfg: Arc<QueryConfig>,
    budget: MaterializeBudget,
}

impl QueryContext {
    pub fn new(cfg: QueryConfig) -> Result<Self> {
        cfg.validate()?;
        let budget = MaterializeBudget::from_config(&cfg);
        Ok(Self {
            cfg: Arc::new(cfg),
            budget,
        })
    }

    /// Build from `RLINQ_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(QueryConfig::from_env())
    }

    pub fn config(&self) -> &QueryConfig {
        &self.cfg
    }

    pub fn budget(&self) -> &MaterializeBudget {
        &self.budget
    }

    /// Bytes currently held by live materialized buffers.
    pub fn used_bytes(&self) -> usize {
        self.budget.used_bytes()
    }

    pub fn peak_materialized_bytes(&self) -> usize {
        self.budget.peak_bytes()
    }

    pub fn from<S: IntoSpan>(&self, seq: S) -> Query<S::Cursor> {
        Query::new(seq.into_span(), self.clone())
    }

    pub fn from_iter<I>(&self, iter: I) -> Query<IterCursor<I>>
    where
        I: Iterator + Clone,
        I::Item: Clone,
    {
        Query::new(IterCursor::span(iter), self.clone())
    }

    /// One-element sequence holding `value`.
    pub fn from_value<T: Clone>(&self, value: T) -> Query<OwnedCursor<T>> {
        Query::new(OwnedCursor::span(vec![value]), self.clone())
    }

    pub fn from_span<C: Cursor>(&self, span: Span<C>) -> Query<C> {
        Query::new(span, self.clone())
    }
}

impl Default for QueryContext {
    fn default() -> Self {
        Self {
            cfg: Arc::new(QueryConfig::default()),
            budget: MaterializeBudget::unbounded(),
        }
    }
}
