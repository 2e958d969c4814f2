// File: crates/scatter-core/src/raster.rs
// Summary: Skia CPU raster surface implementing `Surface`, with PNG and RGBA8 export.

use anyhow::{anyhow, Result};
use skia_safe as skia;

use crate::convert::ViewportSource;
use crate::surface::{Stroke, Surface};
use crate::types::{PixelPoint, Viewport};

pub struct RasterSurface {
    surface: skia::Surface,
    viewport: Viewport,
}

impl RasterSurface {
    /// Allocate a `viewport.physical_size()` surface whose canvas draws in logical pixels.
    pub fn new(viewport: Viewport) -> Result<Self> {
        let surface = allocate(viewport)?;
        Ok(Self { surface, viewport })
    }

    /// Backing store size in device pixels.
    pub fn physical_size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read back unpremultiplied RGBA8 pixels: `(pixels, width, height, row_bytes)`.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = self.physical_size();
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(anyhow!("read_pixels failed for {w}x{h} surface"));
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }
}

impl ViewportSource for RasterSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self, color: skia::Color) {
        self.surface.canvas().clear(color);
    }

    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, stroke: Stroke) {
        let paint = stroke_paint(stroke);
        self.surface.canvas().draw_line(from, to, &paint);
    }

    fn fill_circle(&mut self, center: PixelPoint, radius: f32, color: skia::Color) {
        let paint = fill_paint(color);
        self.surface.canvas().draw_circle(center, radius, &paint);
    }

    fn stroke_circle(&mut self, center: PixelPoint, radius: f32, stroke: Stroke) {
        let paint = stroke_paint(stroke);
        self.surface.canvas().draw_circle(center, radius, &paint);
    }

    fn fill_rotated_rect(&mut self, origin: PixelPoint, angle: f32, width: f32, height: f32, color: skia::Color) {
        let paint = fill_paint(color);
        let canvas = self.surface.canvas();
        canvas.save();
        canvas.translate((origin.x, origin.y));
        canvas.rotate(angle.to_degrees(), None);
        canvas.draw_rect(skia::Rect::from_xywh(0.0, 0.0, width, height), &paint);
        canvas.restore();
    }

    fn resize(&mut self, viewport: Viewport) -> Result<()> {
        if viewport == self.viewport {
            return Ok(());
        }
        self.surface = allocate(viewport)?;
        self.viewport = viewport;
        log::debug!("raster surface resized to {:?} ({:?} device px)", viewport, self.physical_size());
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn allocate(viewport: Viewport) -> Result<skia::Surface> {
    let (w, h) = viewport.physical_size();
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
    surface.canvas().scale((viewport.scale_factor, viewport.scale_factor));
    Ok(surface)
}

fn stroke_paint(stroke: Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(stroke.color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}
