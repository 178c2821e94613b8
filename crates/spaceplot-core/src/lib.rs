//! spaceplot core - shape-checked tensors
//!
//! This crate holds the small dense-tensor layer the renderer is built on:
//! [`Shape`] descriptors, boxed [`Number`] scalars, and the [`Vector`] and
//! [`Matrix`] containers that store them.
//!
//! Element storage is shared, not copied. A transposed [`Vector`] refers to
//! the same [`Number`] slots as its source, so writes through either handle
//! are visible through both.

pub mod error;
pub mod matrix;
pub mod number;
pub mod ops;
pub mod shape;
pub mod vector;

pub use error::{PlotError, Result};
pub use matrix::Matrix;
pub use number::Number;
pub use ops::{Dimensioned, Getable, Valuable};
pub use shape::Shape;
pub use vector::Vector;
