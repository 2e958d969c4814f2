// File: crates/scatter-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::PixelPoint;

/// Squared euclidean distance; hit-testing compares against radius² to skip the sqrt.
#[inline]
pub fn dist_sq(a: PixelPoint, b: PixelPoint) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

#[inline]
pub fn distance(a: PixelPoint, b: PixelPoint) -> f32 {
    dist_sq(a, b).sqrt()
}

/// Angle of the vector `from -> to` in radians, y-down screen convention.
#[inline]
pub fn angle(from: PixelPoint, to: PixelPoint) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
