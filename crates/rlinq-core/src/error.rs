use thiserror::Error;

/// Canonical result for every fallible query operation.
pub type Result<T> = std::result::Result<T, Error>;

pub const EMPTY_COLLECTION: &str = "Empty collection.";
pub const NOT_SINGLE: &str = "The collection should have only one value.";
pub const NO_VALUE_FOUND: &str = "No value found";
pub const MORE_THAN_ONE: &str = "More than one value found";
pub const LENGTH_MISMATCH: &str = "Sequences have different lengths";
pub const INDEX_OUT_OF_RANGE: &str = "Index out of range";

/// The single query error kind. Variants only classify the trigger; the
/// message is what callers are expected to surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{0}")]
    EmptySource(String),

    #[error("{0}")]
    Cardinality(String),

    #[error("{0}")]
    OutOfRange(String),

    #[error("materialization budget exceeded for '{tag}': requested {requested} bytes, capacity {capacity}, used {used}")]
    BudgetExceeded {
        tag: &'static str,
        requested: usize,
        capacity: usize,
        used: usize,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn empty() -> Self {
        Error::EmptySource(EMPTY_COLLECTION.into())
    }

    pub fn cardinality(msg: &str) -> Self {
        Error::Cardinality(msg.into())
    }

    pub fn out_of_range() -> Self {
        Error::OutOfRange(INDEX_OUT_OF_RANGE.into())
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
