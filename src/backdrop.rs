//! Backdrop builder and runner.

use winit::event_loop::{ControlFlow, EventLoop};

use crate::error::BackdropError;
use crate::window::App;

/// Settings assembled by the builder and handed to the window layer.
#[derive(Debug, Clone)]
pub struct BackdropConfig {
    pub title: String,
    /// Page-space height of each narrative section, in pixels.
    pub section_height: f32,
    /// Multiplier on incoming wheel deltas.
    pub scroll_speed: f32,
    /// Fixed RNG seed for deterministic replay; entropy when absent.
    pub seed: Option<u64>,
}

/// A scroll-driven particle backdrop builder.
///
/// Use method chaining to configure, then call `.run()` to start.
///
/// ```ignore
/// use driftfield::Backdrop;
///
/// Backdrop::new()
///     .with_title("driftfield")
///     .with_section_height(900.0)
///     .run()?;
/// ```
pub struct Backdrop {
    config: BackdropConfig,
}

impl Backdrop {
    /// Create a backdrop with default settings.
    pub fn new() -> Self {
        Self {
            config: BackdropConfig {
                title: "driftfield".to_string(),
                section_height: 1000.0,
                scroll_speed: 1.0,
                seed: None,
            },
        }
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Set the page-space height of each section.
    pub fn with_section_height(mut self, height: f32) -> Self {
        self.config.section_height = height.max(1.0);
        self
    }

    /// Scale scroll-wheel sensitivity.
    pub fn with_scroll_speed(mut self, speed: f32) -> Self {
        self.config.scroll_speed = speed;
        self
    }

    /// Seed the particle generator for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Run the backdrop. Blocks until the window is closed.
    ///
    /// A surface-attach failure inside the loop is recorded by the handler
    /// and surfaced here instead of dying silently behind a blank window.
    pub fn run(self) -> Result<(), BackdropError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.config);
        event_loop.run_app(&mut app)?;

        match app.take_fatal() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}
