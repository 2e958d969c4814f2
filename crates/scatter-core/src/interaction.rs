// File: crates/scatter-core/src/interaction.rs
// Summary: Pointer/command handlers that own the scene, mutate it and trigger full repaints.
// Notes:
// - Mode and toggles belong to the host and arrive with every call via `Controls`.
// - Every mutating handler ends in a complete repaint and returns its `Summary`.

use anyhow::Result;

use crate::convert::to_data;
use crate::render::{RenderPipeline, ViewToggles};
use crate::scene::Scene;
use crate::summary::Summary;
use crate::surface::Surface;
use crate::types::{PixelPoint, Viewport};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    AddPoint,
    DrawLine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

/// Current host widget values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub mode: Mode,
    pub toggles: ViewToggles,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Dragging { index: usize },
    ComposingLine { pending: usize },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionOptions {
    /// Hit-test distance around a point, in logical pixels.
    pub pick_radius: f32,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self { pick_radius: 20.0 }
    }
}

#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    scene: Scene,
    pipeline: RenderPipeline,
    options: InteractionOptions,
    dragging: Option<usize>,
    // Set when a press grabs a point; the click that closes that press is swallowed.
    suppress_click: bool,
}

impl InteractionController {
    pub fn new(pipeline: RenderPipeline, options: InteractionOptions) -> Self {
        Self { scene: Scene::new(), pipeline, options, dragging: None, suppress_click: false }
    }

    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self.dragging = None;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn pipeline(&self) -> &RenderPipeline {
        &self.pipeline
    }

    pub fn options(&self) -> &InteractionOptions {
        &self.options
    }

    pub fn state(&self) -> InteractionState {
        match self.dragging {
            Some(index) => InteractionState::Dragging { index },
            None if !self.scene.clicks().is_empty() => InteractionState::ComposingLine { pending: self.scene.clicks().len() },
            None => InteractionState::Idle,
        }
    }

    pub fn pointer_down<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        controls: &Controls,
        pos: PixelPoint,
        button: PointerButton,
    ) -> Option<Summary> {
        match button {
            PointerButton::Primary => {
                let hit = self.scene.hit_test(&*surface, pos, self.options.pick_radius);
                self.suppress_click = hit.is_some();
                if let Some(index) = hit {
                    log::trace!("drag start on point {index}");
                    self.dragging = Some(index);
                }
                None
            }
            PointerButton::Secondary => {
                let index = self.scene.hit_test(&*surface, pos, self.options.pick_radius)?;
                let removed = self.scene.remove_point(index)?;
                log::debug!("removed point {index} at ({:.4}, {:.4})", removed.x, removed.y);
                self.dragging = match self.dragging {
                    Some(d) if d == index => None,
                    Some(d) if d > index => Some(d - 1),
                    other => other,
                };
                Some(self.refresh(surface, controls))
            }
            PointerButton::Other => None,
        }
    }

    pub fn pointer_move<S: Surface + ?Sized>(&mut self, surface: &mut S, controls: &Controls, pos: PixelPoint) -> Option<Summary> {
        let index = self.dragging?;
        let to = to_data(&*surface, pos);
        if !self.scene.move_point(index, to) {
            log::warn!("dragged point {index} no longer exists; ending drag");
            self.dragging = None;
            return None;
        }
        Some(self.refresh(surface, controls))
    }

    pub fn pointer_up(&mut self) {
        self.dragging = None;
    }

    pub fn pointer_leave(&mut self) {
        self.dragging = None;
    }

    /// A completed press/release. Swallowed when the press grabbed a point.
    pub fn click<S: Surface + ?Sized>(&mut self, surface: &mut S, controls: &Controls, pos: PixelPoint) -> Option<Summary> {
        if std::mem::take(&mut self.suppress_click) {
            log::trace!("click after drag suppressed");
            return None;
        }

        match controls.mode {
            Mode::AddPoint => {
                let p = to_data(&*surface, pos).clamped();
                self.scene.push_point(p);
                log::debug!("added point #{} at ({:.4}, {:.4})", self.scene.points().len(), p.x, p.y);
                Some(self.redraw(surface, controls))
            }
            Mode::DrawLine => match self.scene.push_click(pos) {
                Some(line) => {
                    log::debug!("reference line {:?} -> {:?}", line.from, line.to);
                    Some(self.redraw(surface, controls))
                }
                None => Some(self.refresh(surface, controls)),
            },
        }
    }

    /// The host switched between adding points and drawing a line.
    pub fn mode_changed<S: Surface + ?Sized>(&mut self, surface: &mut S, controls: &Controls) -> Summary {
        self.scene.reset_line();
        self.redraw(surface, controls)
    }

    pub fn toggles_changed<S: Surface + ?Sized>(&mut self, surface: &mut S, controls: &Controls) -> Summary {
        self.refresh(surface, controls)
    }

    pub fn clear<S: Surface + ?Sized>(&mut self, surface: &mut S, controls: &Controls) -> Summary {
        self.scene.clear();
        self.dragging = None;
        log::debug!("scene cleared");
        self.redraw(surface, controls)
    }

    /// Normalized points follow the new size; the reference line keeps its old pixels.
    pub fn resize<S: Surface + ?Sized>(&mut self, surface: &mut S, controls: &Controls, viewport: Viewport) -> Result<Summary> {
        surface.resize(viewport)?;
        Ok(self.refresh(surface, controls))
    }

    /// Repaint that also restores the marker of a pending reference-line click.
    pub fn refresh<S: Surface + ?Sized>(&self, surface: &mut S, controls: &Controls) -> Summary {
        let summary = self.redraw(surface, controls);
        if let Some(at) = self.scene.clicks().pending() {
            self.pipeline.render_preview_marker(surface, at);
        }
        summary
    }

    pub fn redraw<S: Surface + ?Sized>(&self, surface: &mut S, controls: &Controls) -> Summary {
        self.pipeline.render(surface, &self.scene, &controls.toggles)
    }
}
