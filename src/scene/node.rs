use std::borrow::Cow;

use glam::Affine3A;

use crate::scene::transform::Transform;
use crate::scene::{CameraKey, LightKey, MeshKey, NodeHandle};

/// A scene node: hierarchy links, a transform, and optional component keys.
///
/// # Hierarchy
///
/// Nodes form a tree through parent-child relationships:
/// - `parent`: optional handle to the parent node (None for root nodes)
/// - `children`: ordered list of child node handles
///
/// # Components
///
/// Heavy data (mesh descriptors, cameras, lights) lives in the
/// [`Scene`](crate::scene::Scene)'s component pools; a node only carries the
/// keys. This keeps the per-frame hierarchy traversal cache-friendly.
#[derive(Debug, Clone)]
pub struct Node {
    /// Display label, used for logging and debugging.
    pub name: Cow<'static, str>,

    // === Core hierarchy ===
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    // === Core spatial data ===
    /// Transform component (hot data accessed every frame).
    pub transform: Transform,

    // === Core state ===
    /// Visibility flag. An invisible node hides its whole subtree.
    pub visible: bool,

    // === Component keys ===
    pub mesh: Option<MeshKey>,
    pub camera: Option<CameraKey>,
    pub light: Option<LightKey>,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            visible: true,
            mesh: None,
            camera: None,
            light: None,
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Returns a reference to the world transformation matrix.
    ///
    /// Updated by the transform system each frame.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new("Node")
    }
}
