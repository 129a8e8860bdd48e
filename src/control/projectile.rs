use glam::Vec3;

use crate::resources::{Geometry, Material, Mesh};
use crate::rig::params::{ParameterSet, names};
use crate::scene::{NodeHandle, Scene};
use crate::tween::{Timeline, Tween};

/// One transient shot: a scene node, its own tiny parameter set and a
/// fire-and-forget flight timeline. No pooling — completed shots remove
/// their node and drop.
struct Projectile {
    node: NodeHandle,
    params: ParameterSet,
    flight: Timeline,
}

/// Spawns and updates projectiles.
pub struct ProjectileLauncher {
    live: Vec<Projectile>,
    /// Horizontal distance covered per shot.
    pub range: f32,
    /// Flight time in seconds.
    pub duration: f32,
    pub radius: f32,
    pub color: Vec3,
}

impl Default for ProjectileLauncher {
    fn default() -> Self {
        Self {
            live: Vec::new(),
            range: 40.0,
            duration: 1.0,
            radius: 0.1,
            color: Vec3::new(1.0, 0.0, 0.0),
        }
    }
}

impl ProjectileLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of shots currently in flight.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Spawns a shot at `origin`, flying along the yaw direction. The node
    /// goes straight into the scene; position is interpolated linearly to
    /// `origin + range * (sin ry, 0, cos ry)` and the node is removed when
    /// the flight completes.
    pub fn fire(&mut self, scene: &mut Scene, origin: Vec3, yaw: f32) {
        let node = scene
            .build_node("Projectile")
            .with_position(origin.x, origin.y, origin.z)
            .with_mesh(
                Mesh::new(
                    "Projectile",
                    Geometry::Sphere {
                        radius: self.radius,
                        width_segments: 16,
                        height_segments: 16,
                    },
                    Material::lambert(self.color),
                )
                .with_cast_shadow(true),
            )
            .build();

        let mut params = ParameterSet::new();
        params.set(names::X, origin.x);
        params.set(names::Y, origin.y);
        params.set(names::Z, origin.z);

        let target_x = origin.x + self.range * yaw.sin();
        let target_z = origin.z + self.range * yaw.cos();
        let flight = Timeline::new()
            .step(Tween::to(names::X, target_x).duration(self.duration))
            .step_with_previous(Tween::to(names::Z, target_z).duration(self.duration));

        self.live.push(Projectile {
            node,
            params,
            flight,
        });
    }

    /// Advances every flight, writes positions back to the scene, and
    /// removes completed shots (node included).
    pub fn update(&mut self, dt: f32, scene: &mut Scene) {
        self.live.retain_mut(|shot| {
            shot.flight.advance(dt, &mut shot.params);

            if let Some(node) = scene.get_node_mut(shot.node) {
                node.transform.position = Vec3::new(
                    shot.params.get(names::X),
                    shot.params.get(names::Y),
                    shot.params.get(names::Z),
                );
            }

            if shot.flight.is_active() {
                true
            } else {
                scene.remove_node(shot.node);
                false
            }
        });
    }
}
