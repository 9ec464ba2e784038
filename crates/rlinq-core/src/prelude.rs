//! Convenient re-exports for downstream crates.

pub use crate::cast::CastFrom;
pub use crate::config::QueryConfig;
pub use crate::cursor::{Cursor, IntoSpan, Span, SpanIter};
pub use crate::error::{Error, Result};
pub use crate::source::{IterCursor, OwnedCursor, SliceCursor};
