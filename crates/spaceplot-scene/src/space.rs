//! The renderable scene and its data points.

use crate::color::Color;
use crate::dimension::Dimension;
use crate::raster::Raster;
use serde::{Deserialize, Serialize};

/// Raster width used when a space leaves it at zero.
pub const DEFAULT_WIDTH: u32 = 800;
/// Raster height used when a space leaves it at zero.
pub const DEFAULT_HEIGHT: u32 = 640;

/// Identifies a single item. Not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(pub String);

/// Names a group of items that share something in common.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Class(pub String);

/// One datum: a position, a color, and its identifying strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub color: Color,
    pub label: Label,
    pub class: Class,
}

impl DataPoint {
    pub fn new(x: f64, y: f64, z: f64, color: Color) -> Self {
        Self {
            x,
            y,
            z,
            color,
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Label(label.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Class(class.into());
        self
    }
}

/// The renderable domain.
///
/// Zero width, zero height and a transparent-black background mean "not
/// chosen"; [`DataSpace::check_defaults`] replaces them before drawing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSpace {
    pub x: Dimension,
    pub y: Dimension,
    pub z: Dimension,
    pub data: Vec<DataPoint>,
    pub background: Color,
    pub width: u32,
    pub height: u32,
}

impl DataSpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: DataPoint) {
        self.data.push(point);
    }

    /// Fill in the default size and background where they are unset.
    pub fn check_defaults(&mut self) {
        if self.width == 0 {
            self.width = DEFAULT_WIDTH;
            log::debug!("width unset, using {}", DEFAULT_WIDTH);
        }
        if self.height == 0 {
            self.height = DEFAULT_HEIGHT;
            log::debug!("height unset, using {}", DEFAULT_HEIGHT);
        }
        if self.background.is_zero() {
            self.background = Color::WHITE;
            log::debug!("background unset, using opaque white");
        }
    }

    /// Resolve defaults, then draw.
    ///
    /// Every pixel on the diagonal `x == y` or the anti-diagonal
    /// `x + y == width - 1` is opaque black; the rest take the background.
    /// Data points and dimensions do not affect the output yet.
    pub fn render(&mut self) -> Raster {
        self.check_defaults();
        log::debug!(
            "rendering {}x{} raster, {} data points",
            self.width,
            self.height,
            self.data.len()
        );

        let (width, background) = (self.width, self.background);
        let mut raster = Raster::new(self.width, self.height, background);
        raster.paint_with(|x, y| {
            if x == y || x + y == width - 1 {
                Color::BLACK
            } else {
                background
            }
        });
        raster
    }
}
