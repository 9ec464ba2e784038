#![forbid(unsafe_code)]
//! rlinq-adapters: one cursor type per query operator.
//!
//! Design intent:
//! - Every adapter wraps one or two inner cursors (plus an optional callable)
//!   and is itself a `Cursor`, so chains nest at the type level.
//! - Lazy adapters do their work on `advance`; eager ones (single, zip, set
//!   operations, ordering) do one pass at construction and expose the result
//!   through a `MaterializedCursor` or a precomputed position.
//! - All materialized buffers go through `rlinq-mem` so the context budget
//!   sees them.

pub mod cast;
pub mod concat;
pub mod filter;
pub mod flatten;
pub mod map;
pub mod materialize;
pub mod set_ops;
pub mod single;
pub mod sort;
pub mod window;
pub mod zip;

pub use cast::CastCursor;
pub use concat::ConcatCursor;
pub use filter::WhereCursor;
pub use flatten::SelectManyCursor;
pub use map::{SelectCursor, SelectIndexedCursor};
pub use materialize::MaterializedCursor;
pub use single::SingleCursor;
pub use sort::Direction;
pub use window::{SkipCursor, TakeCursor, TakeWhileCursor};
pub use zip::ZipCursor;
