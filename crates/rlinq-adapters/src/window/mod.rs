//! Windowing adapters: skip / skip-while / take / take-while.
//!
//! Skips do all their work at construction; takes force the cursor onto the
//! end position once the window closes.

pub mod skip;
pub mod take;

pub use skip::SkipCursor;
pub use take::{TakeCursor, TakeWhileCursor};
