//! Pixel buffers produced by rendering.

use crate::color::Color;
use ndarray::{Array2, Zip};

/// A `width x height` grid of colors, stored row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pixels: Array2<Color>,
}

impl Raster {
    /// Create a raster filled with one color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            pixels: Array2::from_elem((height as usize, width as usize), fill),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.ncols() as u32
    }

    pub fn height(&self) -> u32 {
        self.pixels.nrows() as u32
    }

    /// Color at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixels.get((y as usize, x as usize)).copied()
    }

    /// Paint one pixel. Returns false, leaving the raster untouched, when
    /// `(x, y)` is outside it.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> bool {
        match self.pixels.get_mut((y as usize, x as usize)) {
            Some(px) => {
                *px = color;
                true
            }
            None => false,
        }
    }

    /// Repaint every pixel from its `(x, y)` position, in parallel.
    pub fn paint_with<F>(&mut self, shader: F)
    where
        F: Fn(u32, u32) -> Color + Sync,
    {
        Zip::indexed(&mut self.pixels).par_for_each(|(y, x), px| {
            *px = shader(x as u32, y as u32);
        });
    }

    /// RGBA bytes, row-major, four per pixel.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }
}
