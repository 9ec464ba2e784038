#![forbid(unsafe_code)]
//! rlinq-mem: materialization budget, RAII guards, and shared buffers.
//!
//! Every operator that precomputes a result (distinct, zip, order-by, ...)
//! stores it in a `SharedBuffer`, which holds a guard for its bytes until the
//! last cursor referencing it is dropped.

pub mod budget;
pub mod buffer;
pub mod error;

pub use budget::{BudgetGuard, MaterializeBudget};
pub use buffer::SharedBuffer;
pub use error::{Error, Result};
