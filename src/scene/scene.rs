use glam::Vec3;
use slotmap::SlotMap;

use crate::resources::Mesh;
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::node::Node;
use crate::scene::transform::Transform;
use crate::scene::transform_system;
use crate::scene::{CameraKey, LightKey, MeshKey, NodeHandle};

/// Linear fog settings, consumed by renderer backends.
#[derive(Debug, Clone, Copy)]
pub struct Fog {
    pub color: Vec3,
    pub near: f32,
    pub far: f32,
}

/// Scene container.
///
/// Pure data layer: stores the node hierarchy and the component pools
/// (meshes, cameras, lights). Rendering is a consumer — the scene never
/// touches a GPU.
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,

    // === Component pools ===
    pub meshes: SlotMap<MeshKey, Mesh>,
    pub cameras: SlotMap<CameraKey, Camera>,
    pub lights: SlotMap<LightKey, Light>,

    // Environment and global settings
    pub background: Option<Vec3>,
    pub fog: Option<Fog>,

    pub active_camera: Option<NodeHandle>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            meshes: SlotMap::with_key(),
            cameras: SlotMap::with_key(),
            lights: SlotMap::with_key(),

            background: None,
            fog: None,

            active_camera: None,
        }
    }

    /// Starts building a node with the fluent builder.
    pub fn build_node(&'_ mut self, name: &'static str) -> NodeBuilder<'_> {
        NodeBuilder::new(self, name)
    }

    /// Adds a node to the scene root set.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Adds a node as a child of `parent_handle`.
    pub fn add_to_parent(&mut self, child: Node, parent_handle: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);

        if let Some(p) = self.nodes.get_mut(parent_handle) {
            p.children.push(handle);
        } else {
            log::error!("Parent node not found, child added to root set instead");
            self.root_nodes.push(handle);
            return handle;
        }
        if let Some(c) = self.nodes.get_mut(handle) {
            c.parent = Some(parent_handle);
        }

        handle
    }

    /// Removes a node and its whole subtree, cleaning up components.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        // 1. Take the children list first to avoid borrow conflicts
        let children = match self.nodes.get(handle) {
            Some(node) => node.children.clone(),
            None => return,
        };

        // 2. Recurse into the subtree
        for child in children {
            self.remove_node(child);
        }

        // 3. Unlink from the parent (or the root set)
        let parent_opt = self.nodes.get(handle).and_then(|n| n.parent);
        if let Some(parent_handle) = parent_opt {
            if let Some(parent) = self.nodes.get_mut(parent_handle) {
                if let Some(pos) = parent.children.iter().position(|&x| x == handle) {
                    parent.children.remove(pos);
                }
            }
        } else if let Some(pos) = self.root_nodes.iter().position(|&x| x == handle) {
            self.root_nodes.remove(pos);
        }

        // 4. Clean up components
        if let Some(node) = self.nodes.get(handle) {
            if let Some(mesh_key) = node.mesh {
                self.meshes.remove(mesh_key);
            }
            if let Some(camera_key) = node.camera {
                self.cameras.remove(camera_key);
            }
            if let Some(light_key) = node.light {
                self.lights.remove(light_key);
            }
        }
        if self.active_camera == Some(handle) {
            self.active_camera = None;
        }

        // 5. Drop the node itself
        self.nodes.remove(handle);
    }

    /// Core logic: establish a parent-child relationship.
    pub fn attach(&mut self, child_handle: NodeHandle, parent_handle: NodeHandle) {
        if child_handle == parent_handle {
            log::warn!("Cannot attach node to itself");
            return;
        }

        // 1. Detach from the old parent (or the root set)
        let old_parent = self.nodes.get(child_handle).and_then(|n| n.parent);
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p) {
                if let Some(i) = n.children.iter().position(|&x| x == child_handle) {
                    n.children.remove(i);
                }
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == child_handle) {
            self.root_nodes.remove(i);
        }

        // 2. Attach to the new parent
        if let Some(p) = self.nodes.get_mut(parent_handle) {
            p.children.push(child_handle);
        } else {
            log::error!("Parent node not found during attach");
            self.root_nodes.push(child_handle);
            return;
        }

        // 3. Update the child
        if let Some(c) = self.nodes.get_mut(child_handle) {
            c.parent = Some(parent_handle);
            c.transform.mark_dirty();
        }
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    // ========================================================================
    // Component helpers
    // ========================================================================

    pub fn add_mesh(&mut self, mesh: Mesh) -> NodeHandle {
        let mut node = Node::new(mesh.name.clone());
        node.mesh = Some(self.meshes.insert(mesh));
        self.add_node(node)
    }

    pub fn add_mesh_to_parent(&mut self, mesh: Mesh, parent: NodeHandle) -> NodeHandle {
        let mut node = Node::new(mesh.name.clone());
        node.mesh = Some(self.meshes.insert(mesh));
        self.add_to_parent(node, parent)
    }

    /// Adds a camera node and makes it the active camera if none is set.
    pub fn add_camera(&mut self, camera: Camera) -> NodeHandle {
        let mut node = Node::new("Camera");
        node.camera = Some(self.cameras.insert(camera));
        let handle = self.add_node(node);
        if self.active_camera.is_none() {
            self.active_camera = Some(handle);
        }
        handle
    }

    pub fn add_light(&mut self, light: Light) -> NodeHandle {
        let mut node = Node::new("Light");
        node.light = Some(self.lights.insert(light));
        self.add_node(node)
    }

    pub fn add_light_to_parent(&mut self, light: Light, parent: NodeHandle) -> NodeHandle {
        let mut node = Node::new("Light");
        node.light = Some(self.lights.insert(light));
        self.add_to_parent(node, parent)
    }

    /// Transform + Camera pair for the active camera node.
    pub fn main_camera_bundle(&mut self) -> Option<(&mut Transform, &mut Camera)> {
        let node_handle = self.active_camera?;
        self.camera_bundle(node_handle)
    }

    pub fn camera_bundle(
        &mut self,
        node_handle: NodeHandle,
    ) -> Option<(&mut Transform, &mut Camera)> {
        let camera_key = self.nodes.get(node_handle)?.camera?;
        let camera = self.cameras.get_mut(camera_key)?;
        let transform = &mut self.nodes.get_mut(node_handle)?.transform;
        Some((transform, camera))
    }

    /// Iterates the lights together with their owning node's world matrix.
    pub fn iter_active_lights(&self) -> impl Iterator<Item = (&Light, &glam::Affine3A)> {
        self.nodes.values().filter_map(move |node| {
            let light_key = node.light?;
            let light = self.lights.get(light_key)?;
            if node.visible {
                Some((light, &node.transform.world_matrix))
            } else {
                None
            }
        })
    }

    // ========================================================================
    // Matrix update pipeline
    // ========================================================================

    /// Updates the world matrices of the whole scene.
    /// Must run every frame, after logic and before render submission.
    pub fn update_matrix_world(&mut self) {
        transform_system::update_hierarchy(&mut self.nodes, &mut self.cameras, &self.root_nodes);
    }

    /// Updates the world matrices of one subtree.
    pub fn update_subtree(&mut self, root_handle: NodeHandle) {
        transform_system::update_subtree(&mut self.nodes, &mut self.cameras, root_handle);
    }

    /// Per-frame scene update (currently just matrix propagation).
    pub fn update(&mut self) {
        self.update_matrix_world();
    }
}

/// Fluent builder for inserting configured nodes.
pub struct NodeBuilder<'a> {
    scene: &'a mut Scene,
    node: Node,
    parent: Option<NodeHandle>,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(scene: &'a mut Scene, name: &'static str) -> Self {
        Self {
            scene,
            node: Node::new(name),
            parent: None,
        }
    }

    // === Chained configuration ===

    #[must_use]
    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.node.transform.position = Vec3::new(x, y, z);
        self
    }

    #[must_use]
    pub fn with_rotation_euler(mut self, x: f32, y: f32, z: f32) -> Self {
        self.node.transform.set_rotation_euler(x, y, z);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, s: f32) -> Self {
        self.node.transform.scale = Vec3::splat(s);
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: NodeHandle) -> Self {
        self.parent = Some(parent);
        self
    }

    #[must_use]
    pub fn with_mesh(mut self, mesh: Mesh) -> Self {
        self.node.mesh = Some(self.scene.meshes.insert(mesh));
        self
    }

    // === Terminal ===

    /// Inserts the node into the scene and returns its handle.
    pub fn build(self) -> NodeHandle {
        let handle = self.scene.nodes.insert(self.node);

        if let Some(parent_handle) = self.parent {
            // attach() expects the child to be linked nowhere yet
            if let Some(p) = self.scene.nodes.get_mut(parent_handle) {
                p.children.push(handle);
                if let Some(c) = self.scene.nodes.get_mut(handle) {
                    c.parent = Some(parent_handle);
                }
            } else {
                log::error!("Parent node not found during build");
                self.scene.root_nodes.push(handle);
            }
        } else {
            self.scene.root_nodes.push(handle);
        }

        handle
    }
}
