//! Transform system
//!
//! Propagates world matrices through the scene hierarchy. Decoupled from
//! [`Scene`](crate::scene::Scene) so it only borrows the node arena and the
//! camera pool, avoiding borrow conflicts with the rest of the container.

use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::camera::Camera;
use crate::scene::node::Node;
use crate::scene::{CameraKey, NodeHandle};

/// Updates the world matrices of the whole hierarchy.
///
/// Uses an explicit stack instead of recursion so deep hierarchies cannot
/// overflow the call stack. Cameras attached to a node get their
/// view-projection refreshed in the same pass.
pub fn update_hierarchy(
    nodes: &mut SlotMap<NodeHandle, Node>,
    cameras: &mut SlotMap<CameraKey, Camera>,
    roots: &[NodeHandle],
) {
    // Work stack: (node handle, parent world matrix, parent changed)
    let mut stack: Vec<(NodeHandle, Affine3A, bool)> = Vec::with_capacity(64);

    for &root_handle in roots.iter().rev() {
        stack.push((root_handle, Affine3A::IDENTITY, false));
    }

    while let Some((node_handle, parent_world_matrix, parent_changed)) = stack.pop() {
        let Some(node) = nodes.get_mut(node_handle) else {
            continue;
        };

        // 1. Refresh the local matrix
        let local_changed = node.transform.update_local_matrix();
        let world_needs_update = local_changed || parent_changed;

        // 2. Refresh the world matrix
        if world_needs_update {
            let new_world = parent_world_matrix * *node.transform.local_matrix();
            node.transform.set_world_matrix(new_world);

            // Keep the attached camera in sync
            if let Some(camera_key) = node.camera {
                if let Some(camera) = cameras.get_mut(camera_key) {
                    camera.update_view_projection(&new_world);
                }
            }
        }

        // 3. Push children (reversed to preserve processing order)
        let current_world = node.transform.world_matrix;
        let children_count = node.children.len();

        for i in (0..children_count).rev() {
            if let Some(node) = nodes.get(node_handle) {
                if let Some(&child_handle) = node.children.get(i) {
                    stack.push((child_handle, current_world, world_needs_update));
                }
            }
        }
    }
}

/// Updates the subtree rooted at `root_handle`.
///
/// The parent's world matrix is read as-is; use this for local refreshes
/// between full hierarchy passes.
pub fn update_subtree(
    nodes: &mut SlotMap<NodeHandle, Node>,
    cameras: &mut SlotMap<CameraKey, Camera>,
    root_handle: NodeHandle,
) {
    let parent_world = match nodes.get(root_handle) {
        Some(node) => match node.parent {
            Some(parent_handle) => nodes
                .get(parent_handle)
                .map(|p| p.transform.world_matrix)
                .unwrap_or(Affine3A::IDENTITY),
            None => Affine3A::IDENTITY,
        },
        None => return,
    };

    let mut stack: Vec<(NodeHandle, Affine3A)> = vec![(root_handle, parent_world)];

    while let Some((node_handle, parent_world_matrix)) = stack.pop() {
        let Some(node) = nodes.get_mut(node_handle) else {
            continue;
        };

        node.transform.update_local_matrix();
        let new_world = parent_world_matrix * *node.transform.local_matrix();
        node.transform.set_world_matrix(new_world);

        if let Some(camera_key) = node.camera {
            if let Some(camera) = cameras.get_mut(camera_key) {
                camera.update_view_projection(&new_world);
            }
        }

        let current_world = node.transform.world_matrix;
        let children: Vec<NodeHandle> = node.children.clone();
        for child in children.into_iter().rev() {
            stack.push((child, current_world));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_hierarchy_update() {
        let mut nodes: SlotMap<NodeHandle, Node> = SlotMap::with_key();
        let mut cameras: SlotMap<CameraKey, Camera> = SlotMap::with_key();

        // Simple parent/child pair
        let mut parent = Node::new("parent");
        parent.transform.position = Vec3::new(1.0, 0.0, 0.0);
        let parent_handle = nodes.insert(parent);

        let mut child = Node::new("child");
        child.transform.position = Vec3::new(0.0, 1.0, 0.0);
        child.parent = Some(parent_handle);
        let child_handle = nodes.insert(child);

        nodes
            .get_mut(parent_handle)
            .unwrap()
            .children
            .push(child_handle);

        let roots = vec![parent_handle];

        update_hierarchy(&mut nodes, &mut cameras, &roots);

        // Child world position combines both translations
        let child_world_pos = nodes.get(child_handle).unwrap().transform.world_position();
        assert!((child_world_pos.x - 1.0).abs() < 1e-5);
        assert!((child_world_pos.y - 1.0).abs() < 1e-5);
    }
}
