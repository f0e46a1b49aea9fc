//! Per-session application state.
//!
//! One instance lives for the page session, owned by the application handler
//! and passed explicitly to whoever needs it. Only the scroll coordinator
//! mutates it; the renderer and the nav-indicator surface read it.

use crate::palette::SceneMode;
use crate::sections::{scene_mode_for, SectionTrack};

/// Current section and the scene mode derived from it.
#[derive(Debug, Clone)]
pub struct AppState {
    track: SectionTrack,
    current_ordinal: usize,
    mode: SceneMode,
    scroll_progress: f32,
}

impl AppState {
    /// Start at the first section in Wireframe mode.
    pub fn new() -> Self {
        Self {
            track: SectionTrack::new(),
            current_ordinal: 0,
            mode: scene_mode_for(0),
            scroll_progress: 0.0,
        }
    }

    /// Move to a section ordinal and re-derive the scene mode.
    ///
    /// Out-of-range ordinals clamp onto the track.
    pub fn update_section(&mut self, ordinal: usize) {
        self.current_ordinal = self.track.clamp(ordinal);
        self.mode = scene_mode_for(self.current_ordinal);
    }

    /// Record the continuous scroll progress fraction, clamped to [0, 1].
    pub fn set_scroll_progress(&mut self, progress: f32) {
        self.scroll_progress = progress.clamp(0.0, 1.0);
    }

    pub fn current_ordinal(&self) -> usize {
        self.current_ordinal
    }

    /// Identifier of the active section.
    pub fn current_section(&self) -> &'static str {
        self.track.id(self.current_ordinal)
    }

    pub fn scene_mode(&self) -> SceneMode {
        self.mode
    }

    /// Label of the background layer that should be visible.
    pub fn background_layer(&self) -> &'static str {
        self.mode.label()
    }

    /// Whether the nav indicator at `ordinal` should light up.
    pub fn nav_active(&self, ordinal: usize) -> bool {
        ordinal == self.current_ordinal
    }

    pub fn scroll_progress(&self) -> f32 {
        self.scroll_progress
    }

    pub fn track(&self) -> &SectionTrack {
        &self.track
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.current_section(), "hero");
        assert_eq!(state.scene_mode(), SceneMode::Wireframe);
        assert_eq!(state.background_layer(), "wireframe");
        assert!(state.nav_active(0));
        assert!(!state.nav_active(3));
    }

    #[test]
    fn test_update_section_derives_mode() {
        let mut state = AppState::new();
        state.update_section(6);
        assert_eq!(state.current_section(), "garden");
        assert_eq!(state.scene_mode(), SceneMode::Final);
        assert_eq!(state.background_layer(), "final");
    }

    #[test]
    fn test_out_of_range_ordinal_clamps() {
        let mut state = AppState::new();
        state.update_section(42);
        assert_eq!(state.current_section(), "find");
        assert_eq!(state.scene_mode(), SceneMode::Final);
    }

    #[test]
    fn test_scroll_progress_clamps() {
        let mut state = AppState::new();
        state.set_scroll_progress(1.7);
        assert_eq!(state.scroll_progress(), 1.0);
        state.set_scroll_progress(-0.2);
        assert_eq!(state.scroll_progress(), 0.0);
    }
}
