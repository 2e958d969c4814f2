// File: crates/scatter-core/src/convert.rs
// Summary: Data <-> device pixel transforms. The viewport is read from the source on every call.

use crate::types::{DataPoint, PixelPoint, Viewport};

/// Anything that can report the current logical viewport (surfaces, or a bare `Viewport`).
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

/// Pixel position -> normalized data point. Flips the vertical axis.
/// Nothing is validated: pixels outside the surface map outside `[0, 1]`.
pub fn to_data<V: ViewportSource + ?Sized>(src: &V, p: PixelPoint) -> DataPoint {
    let vp = src.viewport();
    DataPoint {
        x: p.x as f64 / vp.width as f64,
        y: 1.0 - p.y as f64 / vp.height as f64,
    }
}

/// Normalized data point -> pixel position. Exact inverse of [`to_data`].
pub fn to_canvas<V: ViewportSource + ?Sized>(src: &V, p: DataPoint) -> PixelPoint {
    let vp = src.viewport();
    PixelPoint {
        x: (p.x * vp.width as f64) as f32,
        y: ((1.0 - p.y) * vp.height as f64) as f32,
    }
}
