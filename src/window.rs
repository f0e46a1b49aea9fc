//! winit application handler: the perpetual render loop and scroll input.
//!
//! The loop is owned by the host's frame-presentation primitive: every
//! `RedrawRequested` advances the simulation, executes its commands, and
//! requests the next redraw. It never pauses for scroll inactivity and is
//! torn down only by an explicit close (window close or Escape), so no
//! callback chain outlives the page session.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::backdrop::BackdropConfig;
use crate::draw::DrawCommand;
use crate::error::BackdropError;
use crate::field::ParticleField;
use crate::gpu::GpuState;
use crate::scene::SceneRenderer;
use crate::scroll::{PageLayout, ScrollCoordinator};
use crate::state::AppState;
use crate::time::FrameClock;

/// Pixels of page scroll per mouse-wheel line.
const LINE_SCROLL_PX: f32 = 60.0;

pub struct App {
    config: BackdropConfig,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    scene: Option<SceneRenderer>,
    app_state: AppState,
    scroll: ScrollCoordinator,
    scroll_y: f32,
    clock: FrameClock,
    commands: Vec<DrawCommand>,
    /// Fatal attach failure, reported out of `Backdrop::run` after exit.
    fatal: Option<BackdropError>,
}

impl App {
    pub fn new(config: BackdropConfig) -> Self {
        let layout = PageLayout::uniform(config.section_height);
        Self {
            config,
            window: None,
            gpu: None,
            scene: None,
            app_state: AppState::new(),
            scroll: ScrollCoordinator::new(layout),
            scroll_y: 0.0,
            clock: FrameClock::new(),
            commands: Vec::new(),
            fatal: None,
        }
    }

    /// Take the fatal error recorded before the event loop exited, if any.
    pub fn take_fatal(&mut self) -> Option<BackdropError> {
        self.fatal.take()
    }

    fn viewport_height(&self) -> f32 {
        self.gpu
            .as_ref()
            .map(|gpu| gpu.config.height as f32)
            .unwrap_or(0.0)
    }

    fn apply_scroll(&mut self, delta_px: f32) {
        let viewport_h = self.viewport_height();
        let max_scroll = (self.scroll.layout().total_height() - viewport_h).max(0.0);
        self.scroll_y = (self.scroll_y - delta_px).clamp(0.0, max_scroll);

        if let Some(scene) = &mut self.scene {
            self.scroll
                .on_scroll(self.scroll_y, viewport_h, &mut self.app_state, scene);
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: BackdropError) {
        eprintln!("Fatal: {}", err);
        self.fatal = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, BackdropError::Window(e)),
        };
        self.window = Some(window.clone());

        // A missing surface is a fatal precondition: bail out loudly rather
        // than render a blank frame indistinguishable from a hang.
        let gpu = match pollster::block_on(GpuState::new(window)) {
            Ok(gpu) => gpu,
            Err(e) => return self.fail(event_loop, BackdropError::Gpu(e)),
        };

        let field = match self.config.seed {
            Some(seed) => ParticleField::with_seed(seed),
            None => ParticleField::new(),
        };
        self.scene = Some(SceneRenderer::new(
            gpu.config.width as f32,
            gpu.config.height as f32,
            self.app_state.scene_mode(),
            field,
        ));
        self.gpu = Some(gpu);

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                // Resize replaces the population only; section and scroll
                // state survive.
                if let Some(scene) = &mut self.scene {
                    scene.resize(physical_size.width as f32, physical_size.height as f32);
                }
                self.apply_scroll(0.0);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta_px = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * LINE_SCROLL_PX,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                self.apply_scroll(delta_px * self.config.scroll_speed);
            }
            WindowEvent::RedrawRequested => {
                self.clock.update();
                if self.clock.frame() % 120 == 0 {
                    if let Some(window) = &self.window {
                        window.set_title(&format!(
                            "{} [{} | {:.0} fps]",
                            self.config.title,
                            self.app_state.current_section(),
                            self.clock.fps(),
                        ));
                    }
                }

                if let (Some(scene), Some(gpu)) = (&mut self.scene, &mut self.gpu) {
                    scene.render_frame(&mut self.commands);
                    match gpu.render(&self.commands) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                            width: gpu.config.width,
                            height: gpu.config.height,
                        }),
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
