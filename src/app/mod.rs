//! App shell
//!
//! Owns the window, the [`RenderContext`] and the frame clock, and drives
//! the fixed per-frame order: user update (timelines → poses → controls) →
//! input cleanup → world-matrix update → render submission. There is one
//! logical thread of control; everything runs inside the redraw callback.

pub mod input;
pub mod input_adapter;

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::app::input::Input;
use crate::renderer::{HeadlessRenderer, Renderer};
use crate::scene::Scene;
use crate::utils::Timer;

/// The scene, the renderer, and nothing else: one explicit bundle instead
/// of scattered globals, constructed once per session.
pub struct RenderContext {
    pub scene: Scene,
    pub renderer: Box<dyn Renderer>,
}

impl RenderContext {
    #[must_use]
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self {
            scene: Scene::new(),
            renderer,
        }
    }

    /// Propagates a window resize: surface first, then the active camera's
    /// aspect ratio and projection.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);

        if height > 0 {
            let new_aspect = width as f32 / height as f32;
            if let Some((_, camera)) = self.scene.main_camera_bundle() {
                camera.aspect = new_aspect;
                camera.update_projection_matrix();
            }
        }
    }

    /// Submits one frame through the active camera. Without an active
    /// camera there is nothing to draw; the frame is skipped.
    pub fn render(&mut self) {
        let camera_key = self
            .scene
            .active_camera
            .and_then(|node_id| self.scene.get_node(node_id))
            .and_then(|node| node.camera);

        if let Some(key) = camera_key {
            if let Some(camera) = self.scene.cameras.get(key) {
                self.renderer.render(&self.scene, camera);
            }
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(Box::new(HeadlessRenderer::default()))
    }
}

pub type UpdateFn = Box<dyn FnMut(&mut RenderContext, &Input, &Timer)>;

pub struct App {
    window: Option<Arc<Window>>,
    pub title: String,
    pub ctx: RenderContext,

    update_fn: Option<UpdateFn>,
    timer: Timer,
    input: Input,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: None,
            title: "Pantin Playground".into(),
            ctx: RenderContext::default(),
            update_fn: None,
            timer: Timer::new(),
            input: Input::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Swaps the renderer backend (configuration phase).
    #[must_use]
    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.ctx.renderer = renderer;
        self
    }

    /// Installs the per-frame update hook. It runs before input cleanup and
    /// world-matrix propagation, so it is the place to advance timelines,
    /// apply poses and move the camera.
    pub fn set_update_fn<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&mut RenderContext, &Input, &Timer) + 'static,
    {
        self.update_fn = Some(Box::new(f));
        self
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self).map_err(Into::into)
    }

    fn update(&mut self) {
        self.timer.tick();

        if let Some(ref mut update_fn) = self.update_fn {
            update_fn(&mut self.ctx, &self.input, &self.timer);
        }

        self.input.end_frame();
        self.ctx.scene.update();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0));

        let window = event_loop
            .create_window(window_attributes)
            .expect("Failed to create window");
        let window = Arc::new(window);
        self.window = Some(window.clone());

        log::info!("Initializing renderer backend...");
        if let Err(e) = self.ctx.renderer.init(window.clone()) {
            log::error!("Fatal renderer error: {e}");
            event_loop.exit();
            return;
        }

        let size = window.inner_size();
        self.input.inject_resize(size.width, size.height);
        self.ctx.handle_resize(size.width, size.height);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.input
                    .inject_resize(physical_size.width, physical_size.height);
                self.ctx
                    .handle_resize(physical_size.width, physical_size.height);
            }
            WindowEvent::RedrawRequested => {
                self.update();
                self.ctx.render();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            other => {
                input_adapter::process_window_event(&mut self.input, &other);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
