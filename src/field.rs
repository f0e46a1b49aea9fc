//! The live particle population and its per-frame advance.
//!
//! The field owns every particle for the current scene mode. The whole
//! population is discarded and rebuilt whenever the viewport resizes or the
//! mode changes; between rebuilds only positions mutate. Each advance emits
//! [`DrawCommand`]s instead of drawing, so the simulation runs headless.
//!
//! Connections use an O(n^2) pair pass. The population is capped at 200
//! (base cap 100 times the densest mode's 2.0 multiplier), which keeps the
//! pass well inside a frame budget without a spatial index.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::draw::DrawCommand;
use crate::palette::SceneMode;

/// Upper bound on the viewport-derived base count, before mode multipliers.
pub const BASE_COUNT_CAP: f32 = 100.0;
/// Viewport area (px^2) per particle of base count.
pub const AREA_PER_PARTICLE: f32 = 10_000.0;
/// Maximum distance (px) at which two particles may connect.
pub const CONNECT_RADIUS: f32 = 150.0;
/// Per-frame, per-pair chance of drawing a connection inside the radius.
///
/// Sampling instead of always drawing produces the flickering constellation
/// look and bounds the edge count without an explicit cap.
pub const CONNECT_PROBABILITY: f64 = 0.3;

const DRIFT_AMPLITUDE: f32 = 0.1;
const DRIFT_FREQUENCY: f32 = 0.01;

/// A single particle. Position is in pixels, bounded by the viewport.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Draw radius in [1, 3] px.
    pub radius: f32,
    /// Fixed at creation, in [0.3, 0.8].
    pub opacity: f32,
    /// Palette color captured at creation; never re-resolved.
    pub color: Vec3,
}

/// The particle population for the current viewport and scene mode.
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: StdRng,
    generation: u64,
}

impl ParticleField {
    /// Create an empty field with an entropy-seeded generator.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create an empty field with a fixed seed, for deterministic replay.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng,
            generation: 0,
        }
    }

    /// Population size for a viewport and mode.
    ///
    /// The rounding rule for the whole crate: ceil of the fractional product.
    /// Negative or zero dimensions clamp to zero area and yield an empty
    /// population rather than an error.
    pub fn target_count(width: f32, height: f32, mode: SceneMode) -> usize {
        let area = width.max(0.0) * height.max(0.0);
        let base = (area / AREA_PER_PARTICLE).min(BASE_COUNT_CAP);
        (base * mode.palette().count_multiplier).ceil() as usize
    }

    /// Discard the current population and spawn a fresh one.
    ///
    /// Called on viewport resize and on scene-mode change; safe to call in
    /// bursts, each call fully replaces the previous population.
    pub fn regenerate(&mut self, width: f32, height: f32, mode: SceneMode) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let entry = mode.palette();
        let count = Self::target_count(width, height, mode);

        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle {
                x: self.rng.gen::<f32>() * self.width,
                y: self.rng.gen::<f32>() * self.height,
                vx: (self.rng.gen::<f32>() - 0.5) * entry.base_speed,
                vy: (self.rng.gen::<f32>() - 0.5) * entry.base_speed,
                radius: self.rng.gen::<f32>() * 2.0 + 1.0,
                opacity: self.rng.gen::<f32>() * 0.5 + 0.3,
                color: entry.color,
            });
        }
        self.generation += 1;
    }

    /// Advance every particle one frame and emit its draw commands.
    ///
    /// Motion is velocity plus a slow sinusoidal drift keyed on the frame
    /// index and the particle's own position, which keeps straight-line
    /// trajectories from reading as mechanical. The y drift samples the
    /// already-updated x. Positions wrap toroidally: after this call every
    /// particle lies in `[0, width) x [0, height)`.
    pub fn advance(&mut self, frame: u64, out: &mut Vec<DrawCommand>) {
        let (w, h) = (self.width, self.height);
        let phase = frame as f32 * DRIFT_FREQUENCY;

        for p in &mut self.particles {
            p.x += p.vx + DRIFT_AMPLITUDE * (phase + p.y * DRIFT_FREQUENCY).sin();
            p.y += p.vy + DRIFT_AMPLITUDE * (phase + p.x * DRIFT_FREQUENCY).cos();
            p.x = wrap_axis(p.x, w);
            p.y = wrap_axis(p.y, h);
            out.push(DrawCommand::Circle {
                x: p.x,
                y: p.y,
                radius: p.radius,
                color: p.color,
                alpha: p.opacity,
            });
        }

        self.emit_connections(out);
    }

    /// Probabilistic constellation pass over all unordered pairs.
    fn emit_connections(&mut self, out: &mut Vec<DrawCommand>) {
        let radius_sq = CONNECT_RADIUS * CONNECT_RADIUS;
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i];
                let b = self.particles[j];
                let (dx, dy) = (a.x - b.x, a.y - b.y);
                let dist_sq = dx * dx + dy * dy;
                if dist_sq < radius_sq && self.rng.gen_bool(CONNECT_PROBABILITY) {
                    let dist = dist_sq.sqrt();
                    out.push(DrawCommand::Line {
                        x1: a.x,
                        y1: a.y,
                        x2: b.x,
                        y2: b.y,
                        color: a.color,
                        alpha: 0.1 * (1.0 - dist / CONNECT_RADIUS),
                    });
                }
            }
        }
    }

    /// Current population, read-only.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Bumped on every regenerate. Two reads returning the same value
    /// guarantee the population between them was never replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

/// Toroidal wrap into `[0, dim)`.
///
/// `rem_euclid` alone is not enough: a value negative by less than half an
/// ULP of `dim` rounds up to exactly `dim`, which would land a particle one
/// texel outside the field.
fn wrap_axis(value: f32, dim: f32) -> f32 {
    let wrapped = value.rem_euclid(dim);
    if wrapped >= dim {
        0.0
    } else {
        wrapped
    }
}
