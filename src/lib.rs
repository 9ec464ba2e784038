#![forbid(unsafe_code)]
//! rlinq: LINQ-style lazy query composition over cursor pairs.
//!
//! ```
//! let data: Vec<i32> = (1..=10).collect();
//! let odd = rlinq::from(&data).skip(3).where_(|x| x % 2 == 1).to_vec();
//! assert_eq!(odd, vec![5, 7, 9]);
//! ```
//!
//! Chain operators are lazy and build nested cursor types; operators that
//! must look at the whole input first (single, zip, set operations, ordering)
//! materialize into budget-accounted buffers owned by the query's
//! [`QueryContext`].

pub use rlinq_adapters as adapters;
pub use rlinq_core::source;
pub use rlinq_mem as mem;

pub use rlinq_core::{CastFrom, Cursor, Error, IntoSpan, QueryConfig, Result, Span};
pub use rlinq_query::{from, from_iter, from_span, from_value, Query, QueryContext, QueryIter};

pub mod prelude {
    pub use rlinq_core::prelude::*;
    pub use rlinq_query::{from, from_iter, from_span, from_value, Query, QueryContext};
}
