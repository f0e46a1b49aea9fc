//! GPU-side vertex records and the WGSL sources that consume them.

use bytemuck::{Pod, Zeroable};

pub const CIRCLE_SOURCE: &str = include_str!("circle.wgsl");
pub const LINE_SOURCE: &str = include_str!("line.wgsl");

/// Per-instance record for one particle circle.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct CircleInstance {
    /// Center in pixel coordinates, origin top-left.
    pub center: [f32; 2],
    pub radius: f32,
    pub alpha: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

/// One endpoint of a connection line (two per line).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub alpha: f32,
    pub _pad: f32,
    pub color: [f32; 3],
    pub _pad1: f32,
}

/// Uniforms shared by both pipelines.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    /// Viewport size in pixels; the vertex stages map pixels to clip space.
    pub viewport: [f32; 2],
    pub _padding: [f32; 2],
}
