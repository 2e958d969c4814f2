// File: crates/scatter-core/src/types.rs
// Summary: Shared types and constants (viewport sizes, data/pixel points).

/// Default surface width in logical pixels.
pub const WIDTH: f32 = 1024.0;
/// Default surface height in logical pixels.
pub const HEIGHT: f32 = 640.0;

/// A point in normalized data space: the unit square, y growing upward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same point pulled into `[0, 1]²`.
    pub fn clamped(self) -> Self {
        Self { x: crate::geometry::clamp(self.x, 0.0, 1.0), y: crate::geometry::clamp(self.y, 0.0, 1.0) }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A point in device pixel space (logical pixels), y growing downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for PixelPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<PixelPoint> for skia_safe::Point {
    fn from(p: PixelPoint) -> Self {
        skia_safe::Point::new(p.x, p.y)
    }
}

/// Logical size of a drawing surface plus its device pixel ratio.
/// Contract: `width`, `height` >= 1 and `scale_factor` > 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scale_factor: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_scale(width, height, 1.0)
    }

    pub fn with_scale(width: f32, height: f32, scale_factor: f32) -> Self {
        let scale_factor = if scale_factor.is_finite() && scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self { width: width.max(1.0), height: height.max(1.0), scale_factor }
    }

    /// Backing store size in device pixels.
    pub fn physical_size(&self) -> (i32, i32) {
        let w = (self.width * self.scale_factor).round().max(1.0) as i32;
        let h = (self.height * self.scale_factor).round().max(1.0) as i32;
        (w, h)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
