//! Error taxonomy.
//!
//! Every error is raised before a search starts. A run that passes
//! validation is a total function of its inputs and cannot fail.

use thiserror::Error;

/// Rejected input or configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The problem has no items.
    #[error("knapsack problem has no items")]
    EmptyItems,

    /// Capacity is negative, NaN, or infinite.
    #[error("capacity must be a finite non-negative number, got {capacity}")]
    InvalidCapacity { capacity: f64 },

    /// An item weight is not strictly positive and finite.
    #[error("item {id}: weight must be a finite positive number, got {weight}")]
    InvalidWeight { id: usize, weight: f64 },

    /// An item value is negative, NaN, or infinite.
    #[error("item {id}: value must be a finite non-negative number, got {value}")]
    InvalidValue { id: usize, value: f64 },

    /// Two items share the same id.
    #[error("item id {id} appears more than once")]
    DuplicateItemId { id: usize },

    /// A solver configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An N-Queens board needs at least one row.
    #[error("board size must be at least 1, got {n}")]
    InvalidBoardSize { n: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_item() {
        let err = SolveError::InvalidWeight { id: 3, weight: 0.0 };
        assert_eq!(
            err.to_string(),
            "item 3: weight must be a finite positive number, got 0"
        );

        let err = SolveError::InvalidConfig("epsilon must be non-negative".into());
        assert!(err.to_string().contains("epsilon"));
    }
}
