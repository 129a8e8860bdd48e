use glam::{Quat, Vec3};
use rand::Rng;

use crate::resources::{Geometry, Material, Mesh, hsl};
use crate::rig::params::{ParameterSet, names};
use crate::rig::{Puppet, Rig, mirror_sign, pose_node};
use crate::scene::{NodeHandle, Scene};

const ARM_HEIGHT: f32 = 0.85;
const EYE_COLOR: Vec3 = Vec3::new(0.266, 0.266, 0.36);

/// The little humanoid: box body, sphere head with antennas and eyes, two
/// arms and two legs.
///
/// Construction order is fixed — body, legs (children of the body), head,
/// eyes, arms — because later parts attach as children of earlier ones. The
/// root node lands in the scene immediately; there is no detached mode.
pub struct Figure {
    rig: Rig,
    head_material: Material,
    body_material: Material,
}

impl Figure {
    /// Assembles a figure and adds it to the scene. Head and body hues are
    /// jittered per instance.
    pub fn build(scene: &mut Scene) -> Self {
        let mut rng = rand::rng();
        let head_hue = rng.random_range(0.0..360.0);
        let body_hue = rng.random_range(0.0..360.0);
        let head_lightness = rng.random_range(0.40..0.65);

        let head_material = Material::lambert(hsl(head_hue, 0.3, head_lightness));
        let body_material = Material::lambert(hsl(body_hue, 0.85, 0.5));

        let mut params = ParameterSet::new();
        params.set(names::X, 0.0);
        params.set(names::Y, 1.4);
        params.set(names::Z, 0.0);
        params.set(names::RY, 0.0);
        params.set(names::ARM_ROTATION, 0.0);
        params.set(names::HEAD_ROTATION, 0.0);
        params.set(names::LEFT_EYE_SCALE, 1.0);
        params.set(names::WALK_ROTATION, 0.0);

        let root = scene
            .build_node("Figure")
            .with_position(0.0, params.get(names::Y), 0.0)
            .build();

        let mut figure = Self {
            rig: Rig::new(root, params),
            head_material,
            body_material,
        };

        figure.create_body(scene);
        figure.create_head(scene);
        figure.create_arms(scene);
        figure
    }

    fn create_body(&mut self, scene: &mut Scene) {
        let body = scene
            .build_node("Body")
            .with_parent(self.rig.root)
            .with_mesh(
                Mesh::new("BodyMain", Geometry::cuboid(1.0, 1.5, 1.0), self.body_material)
                    .with_cast_shadow(true),
            )
            .build();
        self.rig.insert_node("body", body);

        self.create_legs(scene, body);
    }

    fn create_legs(&mut self, scene: &mut Scene, body: NodeHandle) {
        let legs = scene
            .build_node("Legs")
            .with_parent(body)
            .with_position(0.0, -1.15, 0.0)
            .build();

        let geometry = Geometry::cuboid(0.25, 0.4, 0.25);
        for i in 0..2 {
            let m = mirror_sign(i);
            let leg = scene
                .build_node("Leg")
                .with_parent(legs)
                .with_position(m * 0.22, 0.0, 0.0)
                .with_mesh(Mesh::new("Leg", geometry, self.head_material).with_cast_shadow(true))
                .build();
            self.rig.push_group_node("legs", leg);
        }
    }

    fn create_head(&mut self, scene: &mut Scene) {
        let head = scene
            .build_node("Head")
            .with_parent(self.rig.root)
            .with_position(0.0, 1.65, 0.0)
            .with_mesh(
                Mesh::new("HeadMain", Geometry::sphere(0.8), self.head_material)
                    .with_cast_shadow(true),
            )
            .build();
        self.rig.insert_node("head", head);

        // Antennas
        let antenna = Geometry::Cylinder {
            radius_top: 0.03,
            radius_bottom: 0.03,
            height: 0.8,
            radial_segments: 8,
        };
        for i in 0..2 {
            let m = mirror_sign(i);
            scene
                .build_node("Antenna")
                .with_parent(head)
                .with_position(m * 0.55, 0.8, 0.0)
                .with_rotation_euler(0.0, 0.0, -m * std::f32::consts::FRAC_PI_6)
                .with_mesh(Mesh::new("Antenna", antenna, self.head_material))
                .build();
        }

        self.create_eyes(scene, head);
    }

    fn create_eyes(&mut self, scene: &mut Scene, head: NodeHandle) {
        let eyes = scene
            .build_node("Eyes")
            .with_parent(head)
            .with_position(0.0, -0.1, 0.7)
            .build();

        let geometry = Geometry::Sphere {
            radius: 0.15,
            width_segments: 12,
            height_segments: 8,
        };
        let material = Material::lambert(EYE_COLOR);
        for i in 0..2 {
            let m = mirror_sign(i);
            let eye = scene
                .build_node("Eye")
                .with_parent(eyes)
                .with_position(m * 0.36, 0.0, 0.0)
                .with_mesh(Mesh::new("Eye", geometry, material))
                .build();
            if i == 0 {
                self.rig.insert_node("left_eye", eye);
            }
        }
    }

    fn create_arms(&mut self, scene: &mut Scene) {
        let body = self.rig.node("body");
        let geometry = Geometry::cuboid(0.25, ARM_HEIGHT, 0.25);

        for i in 0..2 {
            let m = mirror_sign(i);
            let arm_group = scene
                .build_node("Arm")
                .with_parent(body)
                .with_position(m * 0.8, 0.6, 0.0)
                .with_rotation_euler(0.0, 0.0, (30.0_f32 * m).to_radians())
                .build();

            // Pivot at the shoulder: the mesh hangs half its height below
            scene
                .build_node("ArmMain")
                .with_parent(arm_group)
                .with_position(0.0, ARM_HEIGHT * -0.5, 0.0)
                .with_mesh(Mesh::new("ArmMain", geometry, self.head_material).with_cast_shadow(true))
                .build();

            self.rig.push_group_node("arms", arm_group);
        }
    }
}

impl Puppet for Figure {
    fn rig(&self) -> &Rig {
        &self.rig
    }

    fn rig_mut(&mut self) -> &mut Rig {
        &mut self.rig
    }

    fn apply_pose(&self, scene: &mut Scene) {
        let p = &self.rig.params;
        let walk = p.get(names::WALK_ROTATION);
        let arm = p.get(names::ARM_ROTATION);

        let root = pose_node(scene, self.rig.root, "root");
        root.transform.rotation = Quat::from_rotation_y(p.get(names::RY));
        root.transform.position =
            Vec3::new(p.get(names::X), p.get(names::Y), p.get(names::Z));

        for (i, &handle) in self.rig.group("arms").iter().enumerate() {
            let m = mirror_sign(i);
            let node = pose_node(scene, handle, "arm");
            node.transform.set_rotation_euler(walk * m, 0.0, arm * m);
        }
        for (i, &handle) in self.rig.group("legs").iter().enumerate() {
            let m = mirror_sign(i);
            let node = pose_node(scene, handle, "leg");
            node.transform.set_rotation_euler(walk * -m, 0.0, 0.0);
        }

        let head = pose_node(scene, self.rig.node("head"), "head");
        head.transform
            .set_rotation_euler(0.0, 0.0, p.get(names::HEAD_ROTATION));

        let eye_scale = p.get(names::LEFT_EYE_SCALE);
        let left_eye = pose_node(scene, self.rig.node("left_eye"), "left_eye");
        left_eye.transform.scale = Vec3::splat(eye_scale);
    }
}
