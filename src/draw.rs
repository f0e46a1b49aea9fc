//! Draw commands emitted by the simulation.
//!
//! The particle field never touches the GPU directly; each frame it emits a
//! flat command list which the surface backend executes in order. Keeping the
//! boundary at plain data makes the simulation testable without a window.

use glam::Vec3;

/// An abstract per-frame drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Filled circle at a particle position.
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Vec3,
        alpha: f32,
    },
    /// Connection line between two particles.
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Vec3,
        alpha: f32,
    },
}

impl DrawCommand {
    /// Whether this command draws a circle.
    pub fn is_circle(&self) -> bool {
        matches!(self, DrawCommand::Circle { .. })
    }

    /// Whether this command draws a line.
    pub fn is_line(&self) -> bool {
        matches!(self, DrawCommand::Line { .. })
    }
}
