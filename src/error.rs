//! Error types shared by every solver in the crate.

use thiserror::Error;

/// Errors raised while validating input or constructing a solver.
///
/// Search itself never fails: once a solver has been constructed,
/// `solve` always returns a selection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnapsackError {
    /// An item carries a negative or non-finite importance or cost.
    #[error("invalid item {index}: {reason}")]
    InvalidItem {
        /// Position of the offending item in caller order.
        index: usize,
        /// Human-readable description of the problem.
        reason: String,
    },

    /// The capacity is not a number.
    #[error("invalid capacity: {0}")]
    InvalidCapacity(f64),

    /// The factory was asked for a strategy it does not know.
    #[error("invalid solver kind: {0}")]
    InvalidSolverKind(String),

    /// A solver configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Dynamic programming needs costs that are whole multiples of the
    /// configured resolution.
    #[error("item {index} has cost {cost}, which is not integral at the configured scale")]
    NonIntegralCost {
        /// Position of the offending item in caller order.
        index: usize,
        /// The raw cost.
        cost: f64,
    },

    /// The dynamic programming table would exceed the configured ceiling.
    #[error("dynamic programming table needs {cells} cells, limit is {limit}")]
    TableTooLarge {
        /// Cells the table would need.
        cells: u128,
        /// Configured ceiling.
        limit: usize,
    },

    /// Exhaustive enumeration was asked to handle too many items.
    #[error("brute force supports at most {limit} items, got {items}")]
    TooManyItems {
        /// Number of items supplied.
        items: usize,
        /// Configured ceiling.
        limit: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, KnapsackError>;
