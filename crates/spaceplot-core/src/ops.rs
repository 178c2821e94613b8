//! Capability traits shared by tensors and scalars
//!
//! These are small capability sets rather than a type hierarchy. [`Number`]
//! is [`Valuable`]; [`Vector`] and [`Matrix`] are [`Getable`] and
//! [`Dimensioned`].
//!
//! [`Number`]: crate::Number
//! [`Vector`]: crate::Vector
//! [`Matrix`]: crate::Matrix

use crate::number::Number;
use crate::shape::Shape;
use crate::Result;

/// Something that holds a scalar value.
pub trait Valuable {
    fn value(&self) -> f64;
}

/// Indexed access to the [`Number`] slot at an address.
pub trait Getable {
    /// Return a handle to the addressed slot.
    ///
    /// The returned [`Number`] shares storage with the container, so
    /// [`Number::set`] on it writes through.
    fn get(&self, addr: &[usize]) -> Result<Number>;
}

/// Access to the shape of a container.
pub trait Dimensioned {
    fn dimension(&self) -> &Shape;

    /// Number of dimensions.
    fn ndim(&self) -> usize {
        self.dimension().ndim()
    }
}
