use thiserror::Error;

/// Domain-level errors for matching operations
///
/// Text parsing failures belong to the adapter and have their own type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchingError {
    /// Negative price or quantity; the book is left untouched
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
}

pub type MatchingResult<T> = std::result::Result<T, MatchingError>;
