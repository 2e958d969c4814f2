// File: crates/scatter-core/src/render.rs
// Summary: Full-scene repaint in fixed layer order: grid, means, fit, reference line, squares, residuals, points.

use crate::convert::{to_canvas, ViewportSource};
use crate::geometry::{angle, distance};
use crate::grid::grid_lines;
use crate::scene::Scene;
use crate::stats::{linear_regression, mean, Regression};
use crate::summary::Summary;
use crate::surface::{Stroke, Surface};
use crate::theme::Theme;
use crate::types::{DataPoint, PixelPoint};

/// Which optional overlays the host currently wants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewToggles {
    pub show_mean: bool,
    pub show_regression: bool,
    pub show_residuals: bool,
    pub show_squares: bool,
}

impl ViewToggles {
    pub const fn all() -> Self {
        Self { show_mean: true, show_regression: true, show_residuals: true, show_squares: true }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Grid cell edge in logical pixels; the grid never zooms.
    pub cell_size: f32,
    pub point_radius: f32,
    pub preview_radius: f32,
    pub grid_width: f32,
    pub point_width: f32,
    pub mean_width: f32,
    pub regression_width: f32,
    pub residual_width: f32,
    pub reference_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::light(),
            cell_size: 50.0,
            point_radius: 10.0,
            preview_radius: 5.0,
            grid_width: 2.0,
            point_width: 2.0,
            mean_width: 2.0,
            regression_width: 2.0,
            residual_width: 2.0,
            reference_width: 3.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RenderPipeline {
    pub opts: RenderOptions,
}

impl RenderPipeline {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    /// Repaint everything from `scene` and return the info-panel summary.
    /// Idempotent: the same inputs produce the same picture.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, scene: &Scene, toggles: &ViewToggles) -> Summary {
        let points = scene.points();
        let fit = linear_regression(points);
        if let Err(e) = &fit {
            if points.len() >= 2 {
                log::trace!("fit layers skipped: {e}");
            }
        }

        self.draw_grid(surface);
        if toggles.show_mean && !points.is_empty() {
            self.draw_mean_lines(surface, points);
        }
        if let (true, Ok(reg)) = (toggles.show_regression, &fit) {
            self.draw_regression(surface, reg);
        }
        if let Some(line) = scene.reference_line() {
            surface.stroke_line(line.from, line.to, Stroke::new(self.opts.theme.reference, self.opts.reference_width));
        }
        if let (true, Ok(reg)) = (toggles.show_squares, &fit) {
            self.draw_squared_errors(surface, points, reg);
        }
        if let (true, Ok(reg)) = (toggles.show_residuals, &fit) {
            self.draw_residuals(surface, points, reg);
        }
        self.draw_points(surface, points);

        let summary = Summary::with_fit(points, &fit);
        log::trace!("repaint: {summary}");
        summary
    }

    /// Marker for the first click of a reference line. Not part of `render`;
    /// the next repaint paints over it.
    pub fn render_preview_marker<S: Surface + ?Sized>(&self, surface: &mut S, at: PixelPoint) {
        surface.fill_circle(at, self.opts.preview_radius, self.opts.theme.preview);
    }

    /// Translucent disc showing the hit-test area around the pointer.
    pub fn render_pick_cursor<S: Surface + ?Sized>(&self, surface: &mut S, at: PixelPoint, radius: f32) {
        surface.fill_circle(at, radius, self.opts.theme.cursor);
    }

    fn draw_grid<S: Surface + ?Sized>(&self, surface: &mut S) {
        let vp = surface.viewport();
        let stroke = Stroke::new(self.opts.theme.grid, self.opts.grid_width);
        surface.clear(self.opts.theme.background);

        // verticals
        for x in grid_lines(vp.width, self.opts.cell_size) {
            surface.stroke_line(PixelPoint::new(x, 0.0), PixelPoint::new(x, vp.height), stroke);
        }
        // horizontals
        for y in grid_lines(vp.height, self.opts.cell_size) {
            surface.stroke_line(PixelPoint::new(0.0, y), PixelPoint::new(vp.width, y), stroke);
        }
    }

    fn draw_mean_lines<S: Surface + ?Sized>(&self, surface: &mut S, points: &[DataPoint]) {
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        let mx = mean(&xs);
        let my = mean(&ys);
        let stroke = Stroke::new(self.opts.theme.mean, self.opts.mean_width);

        let h1 = to_canvas(&*surface, DataPoint::new(0.0, my));
        let h2 = to_canvas(&*surface, DataPoint::new(1.0, my));
        surface.stroke_line(h1, h2, stroke);

        let v1 = to_canvas(&*surface, DataPoint::new(mx, 0.0));
        let v2 = to_canvas(&*surface, DataPoint::new(mx, 1.0));
        surface.stroke_line(v1, v2, stroke);
    }

    fn draw_regression<S: Surface + ?Sized>(&self, surface: &mut S, reg: &Regression) {
        let a = to_canvas(&*surface, DataPoint::new(0.0, reg.predict(0.0)));
        let b = to_canvas(&*surface, DataPoint::new(1.0, reg.predict(1.0)));
        surface.stroke_line(a, b, Stroke::new(self.opts.theme.regression, self.opts.regression_width));
    }

    fn draw_squared_errors<S: Surface + ?Sized>(&self, surface: &mut S, points: &[DataPoint], reg: &Regression) {
        for &p in points {
            let (real, proj) = residual_segment(&*surface, p, reg);
            let side = distance(real, proj);
            surface.fill_rotated_rect(real, angle(real, proj), side, side, self.opts.theme.square);
        }
    }

    fn draw_residuals<S: Surface + ?Sized>(&self, surface: &mut S, points: &[DataPoint], reg: &Regression) {
        let stroke = Stroke::new(self.opts.theme.residual, self.opts.residual_width);
        for &p in points {
            let (real, proj) = residual_segment(&*surface, p, reg);
            surface.stroke_line(real, proj, stroke);
        }
    }

    fn draw_points<S: Surface + ?Sized>(&self, surface: &mut S, points: &[DataPoint]) {
        let outline = Stroke::new(self.opts.theme.point, self.opts.point_width);
        for &p in points {
            let c = to_canvas(&*surface, p);
            surface.fill_circle(c, self.opts.point_radius, self.opts.theme.point);
            surface.stroke_circle(c, self.opts.point_radius, outline);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Device positions of a point and of its vertical projection onto the fitted line.
fn residual_segment<V: ViewportSource + ?Sized>(view: &V, p: DataPoint, reg: &Regression) -> (PixelPoint, PixelPoint) {
    let real = to_canvas(view, p);
    let proj = to_canvas(view, DataPoint::new(p.x, reg.predict(p.x)));
    (real, proj)
}
