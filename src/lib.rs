//! # driftfield - scroll-driven ambient particle backdrop
//!
//! A continuous constellation-style particle field whose palette, density,
//! and speed change as the viewer scrolls through a linear sequence of
//! narrative sections.
//!
//! ## Quick Start
//!
//! ```ignore
//! use driftfield::Backdrop;
//!
//! fn main() -> Result<(), driftfield::BackdropError> {
//!     Backdrop::new()
//!         .with_title("my page")
//!         .with_section_height(1000.0)
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Scene modes
//!
//! The page's nine sections map onto three visual regimes (wireframe,
//! garden, final) purely by ordinal position. Crossing a section boundary
//! in either direction swaps the regime; nothing depends on scroll history.
//!
//! ### The particle field
//!
//! [`ParticleField`] owns the population for the current mode and viewport.
//! It is rebuilt wholesale on resize or mode change and advanced every frame
//! regardless of scroll activity. Each advance emits [`DrawCommand`]s; the
//! wgpu backend executes them, so the simulation itself never touches a
//! window and tests run headless.
//!
//! ### The constellation flicker
//!
//! Every frame, each in-radius particle pair has a fixed chance of drawing a
//! connection line whose alpha fades with distance. Sampling rather than
//! always drawing keeps the edge count bounded and gives the field its
//! characteristic shimmer.

mod backdrop;
pub mod draw;
pub mod error;
pub mod field;
mod gpu;
pub mod palette;
pub mod scene;
pub mod scroll;
pub mod sections;
pub mod shader;
pub mod state;
pub mod time;
mod window;

pub use backdrop::{Backdrop, BackdropConfig};
pub use draw::DrawCommand;
pub use error::{BackdropError, GpuError};
pub use field::{Particle, ParticleField};
pub use glam::Vec3;
pub use palette::{PaletteEntry, SceneMode};
pub use scene::SceneRenderer;
pub use scroll::{PageLayout, ScrollCoordinator, SectionSpan};
pub use sections::{scene_mode_for, SectionTrack, SECTION_IDS};
pub use state::AppState;
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use driftfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backdrop::Backdrop;
    pub use crate::draw::DrawCommand;
    pub use crate::error::BackdropError;
    pub use crate::field::ParticleField;
    pub use crate::palette::SceneMode;
    pub use crate::scene::SceneRenderer;
    pub use crate::scroll::{PageLayout, ScrollCoordinator};
    pub use crate::sections::{scene_mode_for, SectionTrack};
    pub use crate::state::AppState;
}
