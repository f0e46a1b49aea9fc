//! Scene modes and the static palette table.
//!
//! Each narrative scene mode carries a fixed visual regime: a particle color,
//! a density multiplier applied to the viewport-derived base count, and a base
//! speed that scales spawn velocities. The table is pure data; nothing in it
//! is ever mutated after construction.

use glam::Vec3;

/// Discrete visual regime of the particle backdrop.
///
/// Selected purely from the active section's ordinal position; see
/// [`crate::sections::scene_mode_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneMode {
    /// Opening sections: sparse green wireframe look.
    #[default]
    Wireframe,
    /// Middle sections: denser, faster yellow field.
    Garden,
    /// Closing sections: densest, fastest violet field.
    Final,
}

impl SceneMode {
    /// All modes in section order.
    pub const ALL: [SceneMode; 3] = [SceneMode::Wireframe, SceneMode::Garden, SceneMode::Final];

    /// Resolve a mode from its layer label.
    ///
    /// Unrecognized labels fall back to [`SceneMode::Wireframe`] rather than
    /// failing; the backdrop is decoration and must keep rendering.
    pub fn from_label(label: &str) -> Self {
        match label {
            "wireframe" => SceneMode::Wireframe,
            "garden" => SceneMode::Garden,
            "final" => SceneMode::Final,
            _ => SceneMode::Wireframe,
        }
    }

    /// Layer label for this mode (background layer visibility toggling).
    pub fn label(self) -> &'static str {
        match self {
            SceneMode::Wireframe => "wireframe",
            SceneMode::Garden => "garden",
            SceneMode::Final => "final",
        }
    }

    /// Look up the palette entry for this mode. Total, never fails.
    pub fn palette(self) -> PaletteEntry {
        match self {
            SceneMode::Wireframe => PaletteEntry {
                color: Vec3::new(0.0, 1.0, 0.533), // #00ff88
                count_multiplier: 1.0,
                base_speed: 0.5,
            },
            SceneMode::Garden => PaletteEntry {
                color: Vec3::new(1.0, 1.0, 0.0), // #ffff00
                count_multiplier: 1.5,
                base_speed: 0.8,
            },
            SceneMode::Final => PaletteEntry {
                color: Vec3::new(0.533, 0.0, 1.0), // #8800ff
                count_multiplier: 2.0,
                base_speed: 1.2,
            },
        }
    }
}

/// One row of the palette table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    /// Particle and connection color (RGB, 0.0-1.0).
    pub color: Vec3,
    /// Multiplier on the viewport-derived base particle count.
    pub count_multiplier: f32,
    /// Scale applied to per-axis spawn velocities.
    pub base_speed: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_total_over_all_modes() {
        for mode in SceneMode::ALL {
            let entry = mode.palette();
            assert!(entry.count_multiplier >= 1.0);
            assert!(entry.base_speed > 0.0);
        }
    }

    #[test]
    fn test_density_and_speed_increase_with_mode() {
        let w = SceneMode::Wireframe.palette();
        let g = SceneMode::Garden.palette();
        let f = SceneMode::Final.palette();
        assert!(w.count_multiplier < g.count_multiplier);
        assert!(g.count_multiplier < f.count_multiplier);
        assert!(w.base_speed < g.base_speed);
        assert!(g.base_speed < f.base_speed);
    }

    #[test]
    fn test_unknown_label_falls_back_to_wireframe() {
        assert_eq!(SceneMode::from_label("nebula"), SceneMode::Wireframe);
        assert_eq!(SceneMode::from_label(""), SceneMode::Wireframe);
    }

    #[test]
    fn test_label_round_trip() {
        for mode in SceneMode::ALL {
            assert_eq!(SceneMode::from_label(mode.label()), mode);
        }
    }
}
