// File: crates/scatter-core/src/surface.rs
// Summary: Renderer-agnostic drawing surface trait plus an in-memory recording implementation.
// Notes:
// - All coordinates are logical device pixels; backends apply their own scale factor.
// - The Skia raster backend lives in `raster.rs`.

use anyhow::Result;
use skia_safe as skia;

use crate::convert::ViewportSource;
use crate::types::{PixelPoint, Viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: skia::Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: skia::Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Drawing commands the render pipeline issues. The core never owns the surface.
pub trait Surface: ViewportSource {
    fn clear(&mut self, color: skia::Color);
    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, stroke: Stroke);
    fn fill_circle(&mut self, center: PixelPoint, radius: f32, color: skia::Color);
    fn stroke_circle(&mut self, center: PixelPoint, radius: f32, stroke: Stroke);
    /// Filled `width x height` rectangle whose top-left corner sits at `origin`,
    /// rotated about `origin` by `angle` radians.
    fn fill_rotated_rect(&mut self, origin: PixelPoint, angle: f32, width: f32, height: f32, color: skia::Color);
    /// Recompute backing dimensions for a new viewport (size and scale factor).
    fn resize(&mut self, viewport: Viewport) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(skia::Color),
    Line { from: PixelPoint, to: PixelPoint, stroke: Stroke },
    FillCircle { center: PixelPoint, radius: f32, color: skia::Color },
    StrokeCircle { center: PixelPoint, radius: f32, stroke: Stroke },
    RotatedRect { origin: PixelPoint, angle: f32, width: f32, height: f32, color: skia::Color },
}

/// Keeps the commands of the current picture. `clear` starts a new picture.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    viewport: Viewport,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl ViewportSource for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: skia::Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn fill_circle(&mut self, center: PixelPoint, radius: f32, color: skia::Color) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: PixelPoint, radius: f32, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, stroke });
    }

    fn fill_rotated_rect(&mut self, origin: PixelPoint, angle: f32, width: f32, height: f32, color: skia::Color) {
        self.commands.push(DrawCommand::RotatedRect { origin, angle, width, height, color });
    }

    fn resize(&mut self, viewport: Viewport) -> Result<()> {
        self.viewport = viewport;
        Ok(())
    }
}
