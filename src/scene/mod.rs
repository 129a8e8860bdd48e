//! Scene graph module
//!
//! Manages the scene hierarchy and its components:
//! - Node: scene node (parent/child links and a transform)
//! - Transform: TRS component with cached matrices and dirty checking
//! - Scene: scene container and component pools
//! - Camera: camera component
//! - Light: light component
//! - TransformSystem: decoupled world-matrix update

pub mod camera;
pub mod light;
pub mod node;
pub mod scene;
pub mod transform;
pub mod transform_system;

pub use camera::{Camera, ProjectionType};
pub use light::{Light, LightKind, ShadowConfig};
pub use node::Node;
pub use scene::{Fog, NodeBuilder, Scene};
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct MeshKey;
    pub struct CameraKey;
    pub struct LightKey;
}
