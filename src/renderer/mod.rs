//! Renderer contract
//!
//! Pixel production is an external collaborator: the playground only
//! describes scenes and consumes this trait. [`HeadlessRenderer`] fulfills
//! the contract without a GPU — it walks the scene, honors visibility, and
//! records what a backend would have drawn. Useful for tests and for
//! running the demos on machines without a graphics stack.

pub mod settings;

pub use settings::RendererSettings;

use std::sync::Arc;

use winit::window::Window;

use crate::errors::Result;
use crate::scene::{Camera, NodeHandle, Scene};

/// The consumed rendering contract: a surface-sized target plus one frame
/// submission per redraw.
pub trait Renderer {
    /// Binds the output window. Backends acquire their surface here; the
    /// default implementation is a no-op for window-less renderers.
    fn init(&mut self, _window: Arc<Window>) -> Result<()> {
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32);

    /// Submits one frame.
    fn render(&mut self, scene: &Scene, camera: &Camera);

    fn settings(&self) -> &RendererSettings;
}

/// A renderer that draws nothing but observes everything.
pub struct HeadlessRenderer {
    pub settings: RendererSettings,
    width: u32,
    height: u32,
    /// Frames submitted so far.
    pub frames_rendered: u64,
    /// Visible mesh nodes in the last submitted frame.
    pub last_visible_meshes: usize,
}

impl HeadlessRenderer {
    #[must_use]
    pub fn new(settings: RendererSettings) -> Self {
        Self {
            settings,
            width: 0,
            height: 0,
            frames_rendered: 0,
            last_visible_meshes: 0,
        }
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Counts mesh nodes that would be drawn: visible, with every ancestor
    /// visible.
    fn count_visible_meshes(scene: &Scene) -> usize {
        let mut count = 0;
        let mut stack: Vec<NodeHandle> = scene.root_nodes.clone();
        while let Some(handle) = stack.pop() {
            let Some(node) = scene.get_node(handle) else {
                continue;
            };
            if !node.visible {
                continue;
            }
            if node.mesh.is_some() {
                count += 1;
            }
            stack.extend_from_slice(node.children());
        }
        count
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new(RendererSettings::default())
    }
}

impl Renderer for HeadlessRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) {
        self.last_visible_meshes = Self::count_visible_meshes(scene);
        self.frames_rendered += 1;
        log::trace!(
            "frame {}: {} visible meshes, camera aspect {:.3}",
            self.frames_rendered,
            self.last_visible_meshes,
            camera.aspect
        );
    }

    fn settings(&self) -> &RendererSettings {
        &self.settings
    }
}
