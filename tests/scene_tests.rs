//! Scene Integration Tests
//!
//! Tests for:
//! - Node creation, attach/detach, recursive removal
//! - Component pools: mesh, camera, light cleanup on removal
//! - Active camera bookkeeping
//! - NodeBuilder configuration

use glam::Vec3;
use pantin::resources::{Geometry, Material, Mesh};
use pantin::scene::{Camera, Light, Node, Scene};

fn test_mesh(name: &'static str) -> Mesh {
    Mesh::new(name, Geometry::cuboid(1.0, 1.0, 1.0), Material::default())
}

// ============================================================================
// Node Creation & Removal
// ============================================================================

#[test]
fn scene_add_node_to_root() {
    let mut scene = Scene::new();
    let handle = scene.add_node(Node::new("a"));
    assert!(scene.root_nodes.contains(&handle));
    assert!(scene.get_node(handle).is_some());
}

#[test]
fn scene_remove_node_removes_from_root() {
    let mut scene = Scene::new();
    let handle = scene.add_node(Node::new("a"));

    scene.remove_node(handle);
    assert!(!scene.root_nodes.contains(&handle));
    assert!(scene.get_node(handle).is_none());
}

#[test]
fn scene_remove_node_removes_subtree() {
    let mut scene = Scene::new();
    let parent = scene.add_node(Node::new("parent"));
    let child = scene.add_to_parent(Node::new("child"), parent);
    let grandchild = scene.add_to_parent(Node::new("grandchild"), child);

    scene.remove_node(parent);

    assert!(scene.get_node(parent).is_none());
    assert!(scene.get_node(child).is_none());
    assert!(scene.get_node(grandchild).is_none());
}

#[test]
fn scene_remove_child_unlinks_parent() {
    let mut scene = Scene::new();
    let parent = scene.add_node(Node::new("parent"));
    let child = scene.add_to_parent(Node::new("child"), parent);

    scene.remove_node(child);

    let parent_node = scene.get_node(parent).unwrap();
    assert!(parent_node.children().is_empty());
}

// ============================================================================
// Attach
// ============================================================================

#[test]
fn scene_attach_reparents_root_node() {
    let mut scene = Scene::new();
    let a = scene.add_node(Node::new("a"));
    let b = scene.add_node(Node::new("b"));

    scene.attach(b, a);

    assert!(!scene.root_nodes.contains(&b));
    assert_eq!(scene.get_node(b).unwrap().parent(), Some(a));
    assert_eq!(scene.get_node(a).unwrap().children(), &[b]);
}

#[test]
fn scene_attach_to_self_is_rejected() {
    let mut scene = Scene::new();
    let a = scene.add_node(Node::new("a"));

    scene.attach(a, a);

    // Still a root, no self-link
    assert!(scene.root_nodes.contains(&a));
    assert_eq!(scene.get_node(a).unwrap().parent(), None);
}

// ============================================================================
// Components
// ============================================================================

#[test]
fn scene_mesh_removed_with_node() {
    let mut scene = Scene::new();
    let handle = scene.add_mesh(test_mesh("cube"));

    assert_eq!(scene.meshes.len(), 1);
    scene.remove_node(handle);
    assert_eq!(scene.meshes.len(), 0);
}

#[test]
fn scene_light_removed_with_node() {
    let mut scene = Scene::new();
    let handle = scene.add_light(Light::new_directional(Vec3::ONE, 1.0));

    assert_eq!(scene.lights.len(), 1);
    scene.remove_node(handle);
    assert_eq!(scene.lights.len(), 0);
}

#[test]
fn scene_first_camera_becomes_active() {
    let mut scene = Scene::new();
    let cam = scene.add_camera(Camera::new_perspective(75.0, 1.0, 0.1, 100.0));
    assert_eq!(scene.active_camera, Some(cam));

    // A second camera does not steal the active slot
    let other = scene.add_camera(Camera::new_perspective(60.0, 1.0, 0.1, 100.0));
    assert_eq!(scene.active_camera, Some(cam));
    assert_ne!(scene.active_camera, Some(other));
}

#[test]
fn scene_removing_active_camera_clears_slot() {
    let mut scene = Scene::new();
    let cam = scene.add_camera(Camera::new_perspective(75.0, 1.0, 0.1, 100.0));

    scene.remove_node(cam);
    assert_eq!(scene.active_camera, None);
    assert_eq!(scene.cameras.len(), 0);
}

#[test]
fn scene_camera_bundle_pairs_transform_and_camera() {
    let mut scene = Scene::new();
    scene.add_camera(Camera::new_perspective(75.0, 1.0, 0.1, 100.0));

    let (transform, camera) = scene.main_camera_bundle().expect("active camera");
    transform.position = Vec3::new(0.0, 0.0, 5.0);
    camera.aspect = 2.0;

    let node = scene.active_camera.and_then(|h| scene.get_node(h)).unwrap();
    assert_eq!(node.transform.position, Vec3::new(0.0, 0.0, 5.0));
}

// ============================================================================
// NodeBuilder
// ============================================================================

#[test]
fn node_builder_configures_and_parents() {
    let mut scene = Scene::new();
    let parent = scene.add_node(Node::new("parent"));

    let child = scene
        .build_node("child")
        .with_parent(parent)
        .with_position(1.0, 2.0, 3.0)
        .with_scale(2.0)
        .with_mesh(test_mesh("part"))
        .build();

    let node = scene.get_node(child).unwrap();
    assert_eq!(node.parent(), Some(parent));
    assert_eq!(node.transform.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(node.transform.scale, Vec3::splat(2.0));
    assert!(node.mesh.is_some());
    assert_eq!(scene.get_node(parent).unwrap().children(), &[child]);
}

#[test]
fn iter_active_lights_skips_invisible() {
    let mut scene = Scene::new();
    let a = scene.add_light(Light::new_point(Vec3::ONE, 1.0, 10.0));
    let _b = scene.add_light(Light::new_point(Vec3::ONE, 1.0, 10.0));

    assert_eq!(scene.iter_active_lights().count(), 2);

    scene.get_node_mut(a).unwrap().visible = false;
    assert_eq!(scene.iter_active_lights().count(), 1);
}
