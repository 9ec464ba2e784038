use thiserror::Error;

/// Result type local to rlinq-mem.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("memory budget exceeded for tag '{tag}': requested {requested} bytes, capacity {capacity}, used {used}")]
    BudgetExceeded {
        tag: &'static str,
        requested: usize,
        capacity: usize,
        used: usize,
    },
}

impl From<Error> for rlinq_core::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::BudgetExceeded {
                tag,
                requested,
                capacity,
                used,
            } => rlinq_core::Error::BudgetExceeded {
                tag,
                requested,
                capacity,
                used,
            },
        }
    }
}
