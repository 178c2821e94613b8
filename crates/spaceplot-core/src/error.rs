//! Error types for spaceplot tensors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("Invalid shape: {0:?}")]
    InvalidShape(Vec<usize>),

    #[error("Invalid address {address:?} for shape {shape:?}")]
    InvalidAddress {
        address: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error(
        "Invalid dimensions - {lost} data would be lost (capacity {capacity}, supplied {supplied})",
        lost = .supplied - .capacity
    )]
    CapacityExceeded { capacity: usize, supplied: usize },

    #[error("Dimensionality error: {0}")]
    Dimensionality(String),

    #[error("Vector must be a row, got shape {0:?}")]
    NotARow(Vec<usize>),
}

pub type Result<T> = std::result::Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message_counts_lost_values() {
        let err = PlotError::CapacityExceeded {
            capacity: 4,
            supplied: 5,
        };
        assert!(err.to_string().contains("1 data would be lost"));
    }
}
