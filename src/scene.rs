//! Headless scene core: viewport, mode, field, and the frame counter.
//!
//! The per-frame loop itself belongs to the window layer; this type holds
//! everything the loop needs that is not a GPU resource, which keeps mode
//! changes, resizes, and frame advancement testable without a surface.

use crate::draw::DrawCommand;
use crate::field::ParticleField;
use crate::palette::SceneMode;

pub struct SceneRenderer {
    field: ParticleField,
    mode: SceneMode,
    width: f32,
    height: f32,
    frame: u64,
}

impl SceneRenderer {
    /// Create the scene at an initial viewport and mode, spawning the first
    /// population immediately.
    pub fn new(width: f32, height: f32, mode: SceneMode, field: ParticleField) -> Self {
        let mut scene = Self {
            field,
            mode,
            width,
            height,
            frame: 0,
        };
        scene.field.regenerate(width, height, mode);
        scene
    }

    /// Switch scene mode, rebuilding the population only on a real change.
    ///
    /// Idempotent: re-applying the current mode must not visibly restart the
    /// field, because scroll jitter re-reports the active section constantly.
    pub fn set_mode(&mut self, mode: SceneMode) {
        if mode != self.mode {
            self.mode = mode;
            self.field.regenerate(self.width, self.height, mode);
        }
    }

    /// Adopt a new viewport and respawn for it.
    ///
    /// Touches only the particle population; section/scroll state is owned
    /// elsewhere and survives resizes. Fires on every call so that in a burst
    /// of resize events the last call wins outright.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.field.regenerate(width, height, self.mode);
    }

    /// Produce this frame's draw commands and advance the frame counter.
    ///
    /// `out` is a caller-owned scratch buffer; it is cleared here so the
    /// window loop can reuse one allocation for the lifetime of the page.
    pub fn render_frame(&mut self, out: &mut Vec<DrawCommand>) {
        out.clear();
        self.field.advance(self.frame, out);
        self.frame += 1;
    }

    pub fn mode(&self) -> SceneMode {
        self.mode
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(w: f32, h: f32, mode: SceneMode) -> SceneRenderer {
        SceneRenderer::new(w, h, mode, ParticleField::with_seed(0xD1F7))
    }

    #[test]
    fn test_initial_population_matches_viewport() {
        let scene = scene(1000.0, 1000.0, SceneMode::Wireframe);
        assert_eq!(scene.field().len(), 100);
    }

    #[test]
    fn test_set_mode_same_mode_is_noop() {
        let mut scene = scene(1000.0, 1000.0, SceneMode::Garden);
        let generation = scene.field().generation();
        let snapshot: Vec<(f32, f32)> =
            scene.field().particles().iter().map(|p| (p.x, p.y)).collect();

        scene.set_mode(SceneMode::Garden);

        assert_eq!(scene.field().generation(), generation);
        let after: Vec<(f32, f32)> =
            scene.field().particles().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(snapshot, after);
    }

    #[test]
    fn test_set_mode_change_regenerates() {
        let mut scene = scene(1000.0, 1000.0, SceneMode::Wireframe);
        let generation = scene.field().generation();
        scene.set_mode(SceneMode::Final);
        assert_eq!(scene.field().generation(), generation + 1);
        assert_eq!(scene.field().len(), 200);
    }

    #[test]
    fn test_resize_respawns_without_touching_mode() {
        let mut scene = scene(1000.0, 1000.0, SceneMode::Final);
        scene.resize(500.0, 500.0);
        assert_eq!(scene.mode(), SceneMode::Final);
        // 250_000 / 10_000 = 25 base, x2.0
        assert_eq!(scene.field().len(), 50);
    }

    #[test]
    fn test_render_frame_advances_counter_and_reuses_scratch() {
        let mut scene = scene(400.0, 300.0, SceneMode::Wireframe);
        let mut out = Vec::new();
        scene.render_frame(&mut out);
        assert!(out.len() >= scene.field().len());
        scene.render_frame(&mut out);
        assert_eq!(scene.frame(), 2);
        // Scratch was cleared, not appended to: exactly one circle per
        // particle survives from the latest frame.
        let circles = out.iter().filter(|c| c.is_circle()).count();
        assert_eq!(circles, scene.field().len());
    }

    #[test]
    fn test_resize_and_mode_scenario() {
        // 1000x1000 Wireframe -> 100; 2000x2000 stays capped at 100;
        // Final at the same viewport doubles to 200.
        let mut scene = scene(1000.0, 1000.0, SceneMode::Wireframe);
        assert_eq!(scene.field().len(), 100);
        scene.resize(2000.0, 2000.0);
        assert_eq!(scene.field().len(), 100);
        scene.set_mode(SceneMode::Final);
        assert_eq!(scene.field().len(), 200);
    }
}
