//! N-dimensional dense matrices

use crate::number::Number;
use crate::ops::{Dimensioned, Getable};
use crate::shape::Shape;
use crate::{PlotError, Result};
use std::fmt;

/// A dense tensor of two or more dimensions.
///
/// Slots are addressed with [`Matrix::offset`]: the first index, plus each
/// later index scaled by the extent of the axis *before* it.
#[derive(Clone)]
pub struct Matrix {
    data: Vec<Number>,
    shape: Shape,
}

impl Matrix {
    /// Create a matrix of the given extents.
    ///
    /// Needs at least two extents, each at least 1. `data` fills slots in
    /// order and the rest are zero; more values than slots is an error.
    pub fn new(dims: &[usize], data: &[f64]) -> Result<Self> {
        if dims.len() < 2 {
            return Err(PlotError::Dimensionality(format!(
                "Matrix must have 2 or more dimensions, got {}",
                dims.len()
            )));
        }
        if let Some(axis) = dims.iter().position(|&d| d < 1) {
            return Err(PlotError::Dimensionality(format!(
                "Dimension {} of {:?} must be >= 1",
                axis, dims
            )));
        }

        let shape = Shape::from(dims);
        let capacity = shape.capacity().ok_or_else(|| {
            PlotError::Dimensionality(format!("Dimensions {:?} overflow the capacity", dims))
        })?;
        if data.len() > capacity {
            return Err(PlotError::CapacityExceeded {
                capacity,
                supplied: data.len(),
            });
        }

        let data = (0..capacity)
            .map(|i| Number::new(data.get(i).copied().unwrap_or(0.0)))
            .collect();

        Ok(Self { data, shape })
    }

    /// Linear slot offset for `addr`, without bounds checks.
    pub fn offset(&self, addr: &[usize]) -> usize {
        let dims = self.shape.dims();
        addr.iter()
            .enumerate()
            .skip(1)
            .fold(addr.first().copied().unwrap_or(0), |acc, (axis, &i)| {
                acc + i * dims[axis - 1]
            })
    }

    /// The element slots in storage order.
    pub fn data(&self) -> &[Number] {
        &self.data
    }

    /// Current values in storage order, copied out.
    pub fn values(&self) -> Vec<f64> {
        self.data.iter().map(Number::value).collect()
    }

    /// Add `n` to every element in place. Pass a negated number to subtract.
    pub fn add_number(&self, n: &Number) {
        let addend = n.value();
        for slot in &self.data {
            slot.set(slot.value() + addend);
        }
    }

    /// Element-wise add `other` into `self`.
    ///
    /// Shapes must be equal; on mismatch neither operand changes. `other`
    /// may be `self`, which doubles every element.
    pub fn add_matrix(&self, other: &Matrix) -> Result<()> {
        if !self.shape.equals(&other.shape) {
            return Err(PlotError::ShapeMismatch {
                expected: self.shape.dims().to_vec(),
                got: other.shape.dims().to_vec(),
            });
        }
        for (slot, addend) in self.data.iter().zip(&other.data) {
            slot.set(slot.value() + addend.value());
        }
        Ok(())
    }
}

impl Dimensioned for Matrix {
    fn dimension(&self) -> &Shape {
        &self.shape
    }
}

impl Getable for Matrix {
    fn get(&self, addr: &[usize]) -> Result<Number> {
        let invalid = || PlotError::InvalidAddress {
            address: addr.to_vec(),
            shape: self.shape.dims().to_vec(),
        };

        if addr.len() != self.shape.ndim() {
            return Err(invalid());
        }
        if addr.iter().zip(self.shape.dims()).any(|(&i, &d)| i >= d) {
            return Err(invalid());
        }
        self.data.get(self.offset(addr)).cloned().ok_or_else(invalid)
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("shape", &self.shape)
            .field("data", &self.values())
            .finish()
    }
}

/// Rows over the second axis, columns over the first. Higher axes are held
/// at zero and do not appear.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut addr = vec![0; self.shape.ndim()];
        for j in 0..self.shape.dim(1) {
            if j > 0 {
                writeln!(f)?;
            }
            for i in 0..self.shape.dim(0) {
                if i > 0 {
                    write!(f, " ")?;
                }
                addr[0] = i;
                addr[1] = j;
                let value = self.data.get(self.offset(&addr)).map_or(0.0, Number::value);
                write!(f, "[{:.2}]", value)?;
            }
        }
        Ok(())
    }
}
