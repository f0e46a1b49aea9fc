//! The narrative section sequence and its mapping to scene modes.
//!
//! Mode is a pure function of a section's ordinal position, not of scroll
//! history: crossing a threshold forwards or backwards always lands on the
//! same mode, so no transition table exists.

use crate::palette::SceneMode;

/// The fixed, ordered section identifiers of the page.
pub const SECTION_IDS: [&str; 9] = [
    "hero", "tutorial", "hall", "origin", "library", "sprite", "garden", "quiz", "find",
];

/// Ordinal at or above which the backdrop enters [`SceneMode::Final`].
const FINAL_THRESHOLD: usize = 5;
/// Ordinal at or above which the backdrop enters [`SceneMode::Garden`].
const GARDEN_THRESHOLD: usize = 2;

/// Scene mode for a section ordinal. Pure and monotonic non-decreasing.
pub fn scene_mode_for(ordinal: usize) -> SceneMode {
    if ordinal >= FINAL_THRESHOLD {
        SceneMode::Final
    } else if ordinal >= GARDEN_THRESHOLD {
        SceneMode::Garden
    } else {
        SceneMode::Wireframe
    }
}

/// The linear track of sections, with ordinal/identifier lookups.
#[derive(Debug, Clone)]
pub struct SectionTrack {
    ids: &'static [&'static str],
}

impl SectionTrack {
    pub fn new() -> Self {
        Self { ids: &SECTION_IDS }
    }

    /// Number of sections on the track.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifier at an ordinal; out-of-range ordinals clamp to the last
    /// section instead of failing.
    pub fn id(&self, ordinal: usize) -> &'static str {
        self.ids[ordinal.min(self.ids.len() - 1)]
    }

    /// Ordinal of an identifier, or `None` for an unknown id.
    pub fn ordinal_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|s| *s == id)
    }

    /// Clamp an arbitrary ordinal onto the track.
    pub fn clamp(&self, ordinal: usize) -> usize {
        ordinal.min(self.ids.len() - 1)
    }
}

impl Default for SectionTrack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_thresholds() {
        let expected = [
            SceneMode::Wireframe,
            SceneMode::Wireframe,
            SceneMode::Garden,
            SceneMode::Garden,
            SceneMode::Garden,
            SceneMode::Final,
            SceneMode::Final,
            SceneMode::Final,
            SceneMode::Final,
        ];
        for (ordinal, want) in expected.into_iter().enumerate() {
            assert_eq!(scene_mode_for(ordinal), want, "ordinal {ordinal}");
        }
    }

    #[test]
    fn test_mode_is_monotonic_non_decreasing() {
        fn rank(mode: SceneMode) -> u8 {
            match mode {
                SceneMode::Wireframe => 0,
                SceneMode::Garden => 1,
                SceneMode::Final => 2,
            }
        }
        let mut prev = 0;
        for ordinal in 0..32 {
            let r = rank(scene_mode_for(ordinal));
            assert!(r >= prev);
            prev = r;
        }
    }

    #[test]
    fn test_track_lookups() {
        let track = SectionTrack::new();
        assert_eq!(track.len(), 9);
        assert_eq!(track.id(0), "hero");
        assert_eq!(track.id(8), "find");
        assert_eq!(track.ordinal_of("garden"), Some(6));
        assert_eq!(track.ordinal_of("missing"), None);
    }

    #[test]
    fn test_out_of_range_ordinal_clamps() {
        let track = SectionTrack::new();
        assert_eq!(track.id(100), "find");
        assert_eq!(track.clamp(100), 8);
    }
}
