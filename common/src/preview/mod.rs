//! Geometry of the preview artboard: zoom, centering and text fitting.

pub mod fit;
pub mod zoom;

/// Artboard size of the rendered announcement, in pixels.
pub const ARTBOARD_WIDTH: f64 = 1000.0;
pub const ARTBOARD_HEIGHT: f64 = 1300.0;
