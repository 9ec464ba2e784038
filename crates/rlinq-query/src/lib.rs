#![forbid(unsafe_code)]
//! rlinq-query: the `Query` handle, its terminal operators, and the context
//! that owns configuration plus the materialization budget.
//!
//! Chain operators live in `query`; terminals are split by concern across
//! `terminal`, `convert`, and `group`.

pub mod context;
mod convert;
mod group;
pub mod metrics;
pub mod query;
mod terminal;

pub use context::QueryContext;
pub use query::{from, from_iter, from_span, from_value, Query, QueryIter};
