//! spaceplot scene - data spaces and rasterization
//!
//! A [`DataSpace`] is the renderable scene: three [`Dimension`]s, a list of
//! [`DataPoint`]s, a background [`Color`] and a target raster size.
//! [`DataSpace::render`] resolves defaults and produces a [`Raster`].
//!
//! ## Example
//!
//! ```
//! use spaceplot_scene::{Color, DataSpace};
//!
//! let mut space = DataSpace::default();
//! let raster = space.render();
//!
//! assert_eq!((raster.width(), raster.height()), (800, 640));
//! assert_eq!(raster.pixel(0, 0), Some(Color::BLACK));
//! assert_eq!(raster.pixel(1, 0), Some(Color::WHITE));
//! ```
//!
//! Rendering currently draws a fixed X across the raster; the scene content
//! is carried but not yet consumed.

pub mod color;
pub mod dimension;
pub mod primitives;
pub mod raster;
pub mod space;

pub use color::Color;
pub use dimension::Dimension;
pub use primitives::{ClosedPolygon, Line, Point, Projectable, Renderable, SimpleShape, Vertex};
pub use raster::Raster;
pub use space::{Class, DataPoint, DataSpace, Label, DEFAULT_HEIGHT, DEFAULT_WIDTH};
