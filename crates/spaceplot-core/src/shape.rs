//! Shape descriptors for tensors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The extents of a tensor, one entry per axis.
///
/// Shapes are compared positionally: `[2, 3]` and `[3, 2]` are different
/// shapes, as are `[2, 3]` and `[2, 3, 1]`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape(Vec<usize>);

impl Shape {
    /// Create a new shape from dimensions.
    pub fn new(dims: Vec<usize>) -> Self {
        Shape(dims)
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Get dimension at index.
    pub fn dim(&self, idx: usize) -> usize {
        self.0[idx]
    }

    /// Get dimensions as slice.
    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Product of all extents, or `None` if it does not fit in a `usize`.
    pub fn capacity(&self) -> Option<usize> {
        self.0.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    /// Largest single extent, or 0 for an empty shape.
    pub fn max_extent(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Same length and identical extents at every position.
    ///
    /// This is the compatibility gate for every element-wise operation.
    pub fn equals(&self, other: &Shape) -> bool {
        self.0.len() == other.0.len() && self.0.iter().zip(&other.0).all(|(a, b)| a == b)
    }

    /// The same extents in reverse order.
    pub fn reversed(&self) -> Shape {
        Shape(self.0.iter().rev().copied().collect())
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({:?})", self.0)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<usize>> for Shape {
    fn from(v: Vec<usize>) -> Self {
        Shape(v)
    }
}

impl From<&[usize]> for Shape {
    fn from(s: &[usize]) -> Self {
        Shape(s.to_vec())
    }
}
