use glam::{Quat, Vec3};
use rand::Rng;

use crate::resources::{Geometry, Material, Mesh, hsl};
use crate::rig::params::{ParameterSet, names};
use crate::rig::{Puppet, Rig, mirror_sign, pose_node};
use crate::scene::{NodeHandle, Scene};

const EYE_DARK: Vec3 = Vec3::new(0.266, 0.266, 0.36);
const EYE_CLEAR: Vec3 = Vec3::new(0.933, 0.933, 0.925);

/// The quadruped: box body and head, ears, layered eyes, snout, four legs.
///
/// The leg group is ordered front-left, back-left, back-right, front-right
/// so the mirror-sign parity produces a diagonal gait: diagonally opposite
/// legs swing together.
pub struct Dog {
    rig: Rig,
    head_material: Material,
    body_material: Material,
}

impl Dog {
    pub fn build(scene: &mut Scene) -> Self {
        let mut rng = rand::rng();
        let head_hue = rng.random_range(0.0..360.0);
        let body_hue = rng.random_range(0.0..360.0);
        let head_lightness = rng.random_range(0.40..0.65);

        let head_material = Material::lambert(hsl(head_hue, 0.3, head_lightness));
        let body_material = Material::lambert(hsl(body_hue, 0.85, 0.5));

        let mut params = ParameterSet::new();
        params.set(names::X, 0.0);
        params.set(names::Y, 1.3);
        params.set(names::Z, 0.0);
        params.set(names::RY, 0.0);
        params.set(names::HEAD_ROTATION, 0.0);
        params.set(names::LEFT_EYE_SCALE, 0.8);
        params.set(names::WALK_ROTATION, 0.0);
        params.set(names::BODY_ROTATION, 0.0);

        let root = scene
            .build_node("Dog")
            .with_position(0.0, params.get(names::Y), 0.0)
            .build();

        let mut dog = Self {
            rig: Rig::new(root, params),
            head_material,
            body_material,
        };

        dog.create_body(scene);
        dog.create_head(scene);
        dog.create_legs(scene);
        dog
    }

    fn create_body(&mut self, scene: &mut Scene) {
        let body = scene
            .build_node("Body")
            .with_parent(self.rig.root)
            .with_mesh(
                Mesh::new("BodyMain", Geometry::cuboid(1.0, 1.0, 2.0), self.body_material)
                    .with_cast_shadow(true),
            )
            .build();
        self.rig.insert_node("body", body);
    }

    fn create_head(&mut self, scene: &mut Scene) {
        let head = scene
            .build_node("Head")
            .with_parent(self.rig.root)
            .with_position(0.0, 1.05, 0.65)
            .with_mesh(
                Mesh::new("HeadMain", Geometry::cuboid(0.8, 1.0, 0.8), self.head_material)
                    .with_cast_shadow(true),
            )
            .build();
        self.rig.insert_node("head", head);

        self.create_eyes_and_snout(scene, head);

        // Ears
        let ear_geometry = Geometry::cuboid(0.25, 0.35, 0.05);
        for i in 0..2 {
            let m = mirror_sign(i);
            scene
                .build_node("Ear")
                .with_parent(head)
                .with_position(m * 0.25, 0.7, 0.2)
                .with_mesh(Mesh::new("Ear", ear_geometry, self.body_material))
                .build();
        }
    }

    fn create_eyes_and_snout(&mut self, scene: &mut Scene, head: NodeHandle) {
        let eyes = scene
            .build_node("Eyes")
            .with_parent(head)
            .with_position(0.0, 0.25, 0.5)
            .build();

        let eye_geometry = Geometry::cuboid(0.15, 0.15, 0.05);
        let dark = Material::lambert(EYE_DARK);
        let clear = Material::lambert(EYE_CLEAR);

        for i in 0..2 {
            let m = mirror_sign(i);

            // Dark pupil, squashed nearly flat
            let pupil = scene
                .build_node("EyeDark")
                .with_parent(eyes)
                .with_position(m * 0.23, 0.0, 0.0)
                .with_mesh(Mesh::new("EyeDark", eye_geometry, dark))
                .build();
            if i == 0 {
                self.rig.insert_node("left_eye", pupil);
            }
            if let Some(node) = scene.get_node_mut(pupil) {
                node.transform.scale = Vec3::new(0.8, 0.8, 0.1);
            }

            // Clear backing plate, slightly larger
            let plate = scene
                .build_node("EyeClear")
                .with_parent(eyes)
                .with_position(m * 0.23, 0.0, -0.05)
                .with_mesh(Mesh::new("EyeClear", eye_geometry, clear))
                .build();
            if let Some(node) = scene.get_node_mut(plate) {
                node.transform.scale = Vec3::new(1.5, 1.5, 1.0);
            }
        }

        // Snout
        let snout_geometry = Geometry::cuboid(0.65, 0.2, 0.2);
        scene
            .build_node("SnoutTop")
            .with_parent(head)
            .with_position(0.0, -0.1, 0.5)
            .with_mesh(Mesh::new("SnoutTop", snout_geometry, self.body_material))
            .build();
        scene
            .build_node("SnoutDown")
            .with_parent(head)
            .with_position(0.0, -0.33, 0.5)
            .with_mesh(Mesh::new("SnoutDown", snout_geometry, self.body_material))
            .build();
        scene
            .build_node("Truffle")
            .with_parent(head)
            .with_position(0.0, -0.02, 0.6)
            .with_scale(0.5)
            .with_mesh(Mesh::new("Truffle", snout_geometry, dark))
            .build();
    }

    fn create_legs(&mut self, scene: &mut Scene) {
        let body = self.rig.node("body");
        let legs_group = scene
            .build_node("Legs")
            .with_parent(body)
            .with_position(0.0, -0.95, 0.0)
            .build();

        let geometry = Geometry::cuboid(0.25, 0.8, 0.25);
        for i in 0..2 {
            let m = mirror_sign(i);

            let front = scene
                .build_node("LegFront")
                .with_parent(legs_group)
                .with_position(m * 0.25, 0.0, 0.8)
                .with_mesh(Mesh::new("LegFront", geometry, self.head_material).with_cast_shadow(true))
                .build();
            let back = scene
                .build_node("LegBack")
                .with_parent(legs_group)
                .with_position(m * 0.25, 0.0, -0.8)
                .with_mesh(Mesh::new("LegBack", geometry, self.head_material).with_cast_shadow(true))
                .build();

            // Interleave so parity alternates along the diagonal gait
            if i == 0 {
                self.rig.push_group_node("legs", front);
                self.rig.push_group_node("legs", back);
            } else {
                self.rig.push_group_node("legs", back);
                self.rig.push_group_node("legs", front);
            }
        }
    }
}

impl Puppet for Dog {
    fn rig(&self) -> &Rig {
        &self.rig
    }

    fn rig_mut(&mut self) -> &mut Rig {
        &mut self.rig
    }

    fn apply_pose(&self, scene: &mut Scene) {
        let p = &self.rig.params;
        let walk = p.get(names::WALK_ROTATION);

        let root = pose_node(scene, self.rig.root, "root");
        // World-axis composition: pitch for the jump spin, then yaw
        root.transform.rotation = Quat::from_rotation_y(p.get(names::RY))
            * Quat::from_rotation_x(-p.get(names::BODY_ROTATION));
        root.transform.position =
            Vec3::new(p.get(names::X), p.get(names::Y), p.get(names::Z));

        let eye_scale = p.get(names::LEFT_EYE_SCALE);
        let left_eye = pose_node(scene, self.rig.node("left_eye"), "left_eye");
        left_eye.transform.scale.x = eye_scale;
        left_eye.transform.scale.y = eye_scale;

        let head = pose_node(scene, self.rig.node("head"), "head");
        head.transform
            .set_rotation_euler(0.0, 0.0, p.get(names::HEAD_ROTATION));

        for (i, &handle) in self.rig.group("legs").iter().enumerate() {
            let m = mirror_sign(i);
            let node = pose_node(scene, handle, "leg");
            node.transform.set_rotation_euler(walk * m, 0.0, 0.0);
        }
    }
}
