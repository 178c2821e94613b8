//! Scene primitives and the capabilities they provide.
//!
//! - [`Point`] (and [`Vertex`]) is [`Projectable`]
//! - [`Line`] is [`Renderable`]
//! - [`ClosedPolygon`] is a [`SimpleShape`]
//!
//! Projection onto the raster has no model yet, so every point lands on the
//! raster origin. Drawing is written against [`Projectable::project`] and
//! follows whatever it returns.

use crate::color::Color;
use crate::raster::Raster;
use crate::space::DataSpace;
use serde::{Deserialize, Serialize};
use spaceplot_core::{Result, Vector};

/// Draws itself onto a raster.
pub trait Renderable {
    fn draw(&self, raster: &mut Raster);
}

/// Maps onto integer screen coordinates within a [`DataSpace`].
pub trait Projectable {
    fn project(&self, space: &DataSpace) -> (i32, i32);
}

/// An editable outline of vertices.
pub trait SimpleShape: Projectable {
    fn append_vertex(&mut self, vertex: Vertex);

    /// Remove and return the vertex at `index`, or `None` if out of range.
    fn remove_vertex(&mut self, index: usize) -> Option<Vertex>;
}

/// A position in the data space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A point used as the end of a line or corner of a polygon.
pub type Vertex = Point;

impl Point {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The coordinates as a `[3,1]` vector.
    pub fn to_vector(&self) -> Result<Vector> {
        Vector::new(&[3, 1], &[self.x, self.y, self.z])
    }
}

impl Projectable for Point {
    fn project(&self, _space: &DataSpace) -> (i32, i32) {
        (0, 0)
    }
}

/// A straight segment between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub p1: Vertex,
    pub p2: Vertex,
    pub color: Color,
}

impl Line {
    pub fn new(p1: Vertex, p2: Vertex, color: Color) -> Self {
        Self { p1, p2, color }
    }

    /// Paint the segment between two screen positions. The segment is
    /// clipped to the raster first, so only visible pixels are stepped.
    pub fn draw_between(raster: &mut Raster, from: (i32, i32), to: (i32, i32), color: Color) {
        let Some(((mut x, mut y), end)) = clip_to_raster(raster, from, to) else {
            return;
        };
        let dx = (end.0 - x).abs();
        let dy = -(end.1 - y).abs();
        let sx = if x < end.0 { 1 } else { -1 };
        let sy = if y < end.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            raster.set_pixel(x as u32, y as u32, color);
            if (x, y) == end {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Liang-Barsky clip of `from..to` against the raster's pixel rectangle.
/// Returns the rounded endpoints of the visible part, or `None` if no part
/// of the segment lands on the raster.
fn clip_to_raster(
    raster: &Raster,
    from: (i32, i32),
    to: (i32, i32),
) -> Option<((i64, i64), (i64, i64))> {
    if raster.width() == 0 || raster.height() == 0 {
        return None;
    }
    let (x0, y0) = (f64::from(from.0), f64::from(from.1));
    let (dx, dy) = (f64::from(to.0) - x0, f64::from(to.1) - y0);
    let (max_x, max_y) = (f64::from(raster.width() - 1), f64::from(raster.height() - 1));

    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [(-dx, x0), (dx, max_x - x0), (-dy, y0), (dy, max_y - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| {
        (
            (x0 + t * dx).round().clamp(0.0, max_x) as i64,
            (y0 + t * dy).round().clamp(0.0, max_y) as i64,
        )
    };
    Some((at(t0), at(t1)))
}

impl Renderable for Line {
    fn draw(&self, raster: &mut Raster) {
        let space = DataSpace {
            width: raster.width(),
            height: raster.height(),
            ..Default::default()
        };
        let from = self.p1.project(&space);
        let to = self.p2.project(&space);
        Line::draw_between(raster, from, to, self.color);
    }
}

/// A polygon whose last vertex connects back to its first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClosedPolygon {
    pub points: Vec<Vertex>,
    pub is_filled: bool,
}

impl ClosedPolygon {
    pub fn new(points: Vec<Vertex>, is_filled: bool) -> Self {
        Self { points, is_filled }
    }

    /// Consecutive vertex pairs, ending with the closing edge back to the
    /// first vertex. A single vertex yields one degenerate edge; none yields
    /// nothing.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

impl Projectable for ClosedPolygon {
    /// Projects the first vertex; an empty polygon sits at the origin.
    fn project(&self, space: &DataSpace) -> (i32, i32) {
        self.points.first().map_or((0, 0), |p| p.project(space))
    }
}

impl SimpleShape for ClosedPolygon {
    fn append_vertex(&mut self, vertex: Vertex) {
        self.points.push(vertex);
    }

    fn remove_vertex(&mut self, index: usize) -> Option<Vertex> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }
}
