//! Row and column vectors

use crate::number::Number;
use crate::ops::{Dimensioned, Getable};
use crate::shape::Shape;
use crate::{PlotError, Result};
use std::fmt;

/// A `[n,1]` or `[1,n]` sequence of [`Number`] slots.
///
/// [`Vector::transpose`] shares slots with the source. [`Vector::times`] and
/// [`Vector::plus`] allocate fresh slots, which ends any such sharing.
#[derive(Clone)]
pub struct Vector {
    data: Vec<Number>,
    shape: Shape,
}

impl Vector {
    /// Create a vector of the given shape.
    ///
    /// The shape must have two extents, both at least 1, with at least one of
    /// them equal to 1. Slots beyond `values` are zero; surplus values are
    /// ignored.
    pub fn new(dims: &[usize], values: &[f64]) -> Result<Self> {
        if dims.len() != 2 || dims[0] < 1 || dims[1] < 1 || (dims[0] != 1 && dims[1] != 1) {
            return Err(PlotError::InvalidShape(dims.to_vec()));
        }
        let shape = Shape::from(dims);

        let data = (0..shape.max_extent())
            .map(|i| Number::new(values.get(i).copied().unwrap_or(0.0)))
            .collect();

        Ok(Self { data, shape })
    }

    /// The element slots, in order.
    pub fn data(&self) -> &[Number] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current values, copied out.
    pub fn values(&self) -> Vec<f64> {
        self.data.iter().map(Number::value).collect()
    }

    /// `[n,1]` with n > 1 lays out as a column.
    pub fn is_column(&self) -> bool {
        self.shape.dim(0) > 1
    }

    /// Multiply every element by `n`, replacing each slot with a fresh one.
    pub fn times(&mut self, n: &Number) {
        let factor = n.value();
        for slot in self.data.iter_mut() {
            *slot = Number::new(slot.value() * factor);
        }
    }

    /// Add `n` to every element, replacing each slot with a fresh one.
    pub fn plus(&mut self, n: &Number) {
        let addend = n.value();
        for slot in self.data.iter_mut() {
            *slot = Number::new(slot.value() + addend);
        }
    }

    /// Inner product with `other`.
    ///
    /// The shapes must line up (`self[0] == other[1]` or
    /// `self[1] == other[0]`) and `self` must have a second extent of 1.
    /// Elements are paired positionally; when the lengths differ the sum
    /// stops at the shorter vector.
    pub fn dot_product(&self, other: &Vector) -> Result<Number> {
        let (a, b) = (self.shape.dims(), other.shape.dims());
        if a[0] != b[1] && a[1] != b[0] {
            return Err(PlotError::ShapeMismatch {
                expected: self.shape.reversed().dims().to_vec(),
                got: b.to_vec(),
            });
        }
        if a[1] != 1 {
            return Err(PlotError::NotARow(a.to_vec()));
        }

        let sum = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(x, y)| x.value() * y.value())
            .sum();
        Ok(Number::new(sum))
    }

    /// Swap the extents, sharing element slots with `self`.
    pub fn transpose(&self) -> Vector {
        Vector {
            data: self.data.clone(),
            shape: self.shape.reversed(),
        }
    }
}

impl Dimensioned for Vector {
    fn dimension(&self) -> &Shape {
        &self.shape
    }
}

impl Getable for Vector {
    /// One component is a flat index; two are `(row, column)`.
    fn get(&self, addr: &[usize]) -> Result<Number> {
        let invalid = || PlotError::InvalidAddress {
            address: addr.to_vec(),
            shape: self.shape.dims().to_vec(),
        };

        let index = match addr {
            [i] if *i < self.data.len() => *i,
            [row, col] if *row < self.shape.dim(0) && *col < self.shape.dim(1) => row + col,
            _ => return Err(invalid()),
        };
        self.data.get(index).cloned().ok_or_else(invalid)
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("shape", &self.shape)
            .field("data", &self.values())
            .finish()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_column() {
            writeln!(f, "[")?;
            for n in &self.data {
                writeln!(f, " {}", n)?;
            }
        } else {
            write!(f, "[ ")?;
            for n in &self.data {
                write!(f, "{} ", n)?;
            }
        }
        write!(f, "]")
    }
}
