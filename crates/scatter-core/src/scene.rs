// File: crates/scatter-core/src/scene.rs
// Summary: Scene state: the point sequence, the user-drawn reference line and the pending click buffer.
// Notes:
// - Points live in normalized data space; the reference line and clicks in device pixels.
// - The reference line is not re-projected when the viewport changes.

use crate::convert::{to_canvas, ViewportSource};
use crate::geometry::dist_sq;
use crate::types::{DataPoint, PixelPoint};

/// Free-hand line between two clicks, stored in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceLine {
    pub from: PixelPoint,
    pub to: PixelPoint,
}

/// Up to two pending clicks while a reference line is being composed.
/// The second push yields the line and empties the buffer, so it rests at 0 or 1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClickBuffer {
    first: Option<PixelPoint>,
}

impl ClickBuffer {
    pub fn push(&mut self, p: PixelPoint) -> Option<ReferenceLine> {
        match self.first.take() {
            None => {
                self.first = Some(p);
                None
            }
            Some(from) => Some(ReferenceLine { from, to: p }),
        }
    }

    pub fn pending(&self) -> Option<PixelPoint> {
        self.first
    }

    pub fn len(&self) -> usize {
        self.first.is_some() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn clear(&mut self) {
        self.first = None;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    points: Vec<DataPoint>,
    reference_line: Option<ReferenceLine>,
    clicks: ClickBuffer,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from arbitrary points; each is clamped into the unit square.
    pub fn with_points(points: impl IntoIterator<Item = DataPoint>) -> Self {
        Self { points: points.into_iter().map(DataPoint::clamped).collect(), ..Self::default() }
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn reference_line(&self) -> Option<ReferenceLine> {
        self.reference_line
    }

    pub fn clicks(&self) -> &ClickBuffer {
        &self.clicks
    }

    /// Index of the first point (insertion order) whose device position lies within `radius` of `cursor`.
    pub fn hit_test<V: ViewportSource + ?Sized>(&self, view: &V, cursor: PixelPoint, radius: f32) -> Option<usize> {
        let r2 = radius * radius;
        self.points.iter().position(|&p| dist_sq(to_canvas(view, p), cursor) <= r2)
    }

    pub(crate) fn push_point(&mut self, p: DataPoint) {
        self.points.push(p.clamped());
    }

    pub(crate) fn remove_point(&mut self, index: usize) -> Option<DataPoint> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    /// Overwrite a point in place. Returns false for an index that no longer exists.
    pub(crate) fn move_point(&mut self, index: usize, to: DataPoint) -> bool {
        match self.points.get_mut(index) {
            Some(p) => {
                *p = to.clamped();
                true
            }
            None => false,
        }
    }

    /// Feed a click into the buffer; a completed pair replaces the reference line.
    pub(crate) fn push_click(&mut self, p: PixelPoint) -> Option<ReferenceLine> {
        let line = self.clicks.push(p)?;
        self.reference_line = Some(line);
        Some(line)
    }

    /// Drop the reference line and any half-composed one.
    pub(crate) fn reset_line(&mut self) {
        self.clicks.clear();
        self.reference_line = None;
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
        self.reset_line();
    }
}
