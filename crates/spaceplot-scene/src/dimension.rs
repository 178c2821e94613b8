//! Per-axis rendering metadata.

use serde::{Deserialize, Serialize};

/// Scale, tick and tilt settings for one axis of a [`DataSpace`].
///
/// [`DataSpace`]: crate::DataSpace
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimension {
    pub scale: f64,
    pub major_tic_spacing: f64,
    pub minor_tic_spacing: f64,
    pub show_minor_tics: bool,
    pub show_major_tics: bool,
    pub tilt_angle: f64,
}
