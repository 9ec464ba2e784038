#![forbid(unsafe_code)]
//! rlinq-core: the cursor contract, spans, source cursors, errors, and config.
//!
//! Everything else in the workspace builds on the three operations a cursor
//! exposes (advance, dereference, equality). Adapters live in `rlinq-adapters`,
//! the query handle in `rlinq-query`.

pub mod cast;
pub mod config;
pub mod cursor;
pub mod error;
pub mod prelude;
pub mod source;

pub use cast::CastFrom;
pub use config::QueryConfig;
pub use cursor::{Cursor, IntoSpan, Span, SpanIter};
pub use error::{Error, Result};
pub use source::{IterCursor, OwnedCursor, SliceCursor};
