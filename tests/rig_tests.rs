//! Rig Builder & Pose Updater Tests
//!
//! Tests for:
//! - Construction-order invariant: parameters and handles exist after build
//! - Mirrored-limb sign convention (positive, negative, zero)
//! - Figure and Dog pose semantics
//! - Parameter-driven root placement

use glam::{Quat, Vec3};
use pantin::rig::params::names;
use pantin::rig::{Dog, Figure, Puppet};
use pantin::scene::Scene;

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Construction-Order Invariant
// ============================================================================

#[test]
fn figure_seeds_every_consumed_parameter() {
    let mut scene = Scene::new();
    let figure = Figure::build(&mut scene);

    for name in [
        names::X,
        names::Y,
        names::Z,
        names::RY,
        names::ARM_ROTATION,
        names::HEAD_ROTATION,
        names::LEFT_EYE_SCALE,
        names::WALK_ROTATION,
    ] {
        assert!(figure.params().contains(name), "missing parameter {name}");
    }
}

#[test]
fn figure_registers_every_consumed_handle() {
    let mut scene = Scene::new();
    let figure = Figure::build(&mut scene);

    assert!(scene.get_node(figure.rig().root).is_some());
    assert!(scene.get_node(figure.rig().node("body")).is_some());
    assert!(scene.get_node(figure.rig().node("head")).is_some());
    assert!(scene.get_node(figure.rig().node("left_eye")).is_some());
    assert_eq!(figure.rig().group("arms").len(), 2);
    assert_eq!(figure.rig().group("legs").len(), 2);
}

#[test]
fn figure_first_pose_update_succeeds_on_fresh_build() {
    let mut scene = Scene::new();
    let figure = Figure::build(&mut scene);

    // Must not panic: everything the updater touches exists already
    figure.apply_pose(&mut scene);
    scene.update_matrix_world();
}

#[test]
fn dog_seeds_every_consumed_parameter() {
    let mut scene = Scene::new();
    let dog = Dog::build(&mut scene);

    for name in [
        names::X,
        names::Y,
        names::Z,
        names::RY,
        names::HEAD_ROTATION,
        names::LEFT_EYE_SCALE,
        names::WALK_ROTATION,
        names::BODY_ROTATION,
    ] {
        assert!(dog.params().contains(name), "missing parameter {name}");
    }
    assert_eq!(dog.rig().group("legs").len(), 4);
}

#[test]
fn figure_root_is_in_scene_immediately() {
    let mut scene = Scene::new();
    let figure = Figure::build(&mut scene);
    assert!(scene.root_nodes.contains(&figure.rig().root));
}

// ============================================================================
// Mirrored-Limb Sign Convention
// ============================================================================

#[test]
fn figure_arms_mirror_thirty_degrees() {
    let mut scene = Scene::new();
    let mut figure = Figure::build(&mut scene);

    let angle = 30.0_f32.to_radians();
    figure.params_mut().write(names::ARM_ROTATION, angle);
    figure.apply_pose(&mut scene);

    let arms = figure.rig().group("arms");
    let z0 = scene.get_node(arms[0]).unwrap().transform.rotation_euler().z;
    let z1 = scene.get_node(arms[1]).unwrap().transform.rotation_euler().z;
    assert!(approx(z0, angle), "arm[0] = {z0}");
    assert!(approx(z1, -angle), "arm[1] = {z1}");
}

#[test]
fn figure_legs_mirror_opposite_to_arms() {
    let mut scene = Scene::new();
    let mut figure = Figure::build(&mut scene);

    let swing = 20.0_f32.to_radians();
    figure.params_mut().write(names::WALK_ROTATION, swing);
    figure.apply_pose(&mut scene);

    let arms = figure.rig().group("arms");
    let legs = figure.rig().group("legs");
    let arm_x = scene.get_node(arms[0]).unwrap().transform.rotation_euler().x;
    let leg_x = scene.get_node(legs[0]).unwrap().transform.rotation_euler().x;
    let leg_x1 = scene.get_node(legs[1]).unwrap().transform.rotation_euler().x;

    // Arms and legs on the same side swing in opposite phase
    assert!(approx(arm_x, swing), "arm[0].x = {arm_x}");
    assert!(approx(leg_x, -swing), "leg[0].x = {leg_x}");
    assert!(approx(leg_x1, swing), "leg[1].x = {leg_x1}");
}

#[test]
fn mirror_holds_for_negative_and_zero() {
    let mut scene = Scene::new();
    let mut figure = Figure::build(&mut scene);
    let arms_handles: Vec<_> = figure.rig().group("arms").to_vec();

    for angle in [-0.4_f32, 0.0, 0.4] {
        figure.params_mut().write(names::ARM_ROTATION, angle);
        figure.apply_pose(&mut scene);

        let z0 = scene
            .get_node(arms_handles[0])
            .unwrap()
            .transform
            .rotation_euler()
            .z;
        let z1 = scene
            .get_node(arms_handles[1])
            .unwrap()
            .transform
            .rotation_euler()
            .z;
        assert!(approx(z0, angle), "angle={angle}: arm[0]={z0}");
        assert!(approx(z1, -angle), "angle={angle}: arm[1]={z1}");
        assert!(approx(z0 + z1, 0.0), "pair must cancel exactly");
    }
}

#[test]
fn dog_legs_swing_in_diagonal_pairs() {
    let mut scene = Scene::new();
    let mut dog = Dog::build(&mut scene);

    let swing = 10.0_f32.to_radians();
    dog.params_mut().write(names::WALK_ROTATION, swing);
    dog.apply_pose(&mut scene);

    let legs = dog.rig().group("legs");
    let xs: Vec<f32> = legs
        .iter()
        .map(|&h| scene.get_node(h).unwrap().transform.rotation_euler().x)
        .collect();

    // Index parity alternates the sign down the group
    assert!(approx(xs[0], swing));
    assert!(approx(xs[1], -swing));
    assert!(approx(xs[2], swing));
    assert!(approx(xs[3], -swing));
}

// ============================================================================
// Pose Semantics
// ============================================================================

#[test]
fn figure_root_follows_parameters() {
    let mut scene = Scene::new();
    let mut figure = Figure::build(&mut scene);

    figure.params_mut().write(names::X, 3.0);
    figure.params_mut().write(names::Y, 5.0);
    figure.params_mut().write(names::Z, -2.0);
    figure.params_mut().write(names::RY, 1.0);
    figure.apply_pose(&mut scene);

    let root = scene.get_node(figure.rig().root).unwrap();
    assert_eq!(root.transform.position, Vec3::new(3.0, 5.0, -2.0));
    let expected = Quat::from_rotation_y(1.0);
    assert!(root.transform.rotation.angle_between(expected) < EPSILON);
}

#[test]
fn figure_left_eye_scales_uniformly() {
    let mut scene = Scene::new();
    let mut figure = Figure::build(&mut scene);

    figure.params_mut().write(names::LEFT_EYE_SCALE, 0.2);
    figure.apply_pose(&mut scene);

    let eye = scene.get_node(figure.rig().node("left_eye")).unwrap();
    assert_eq!(eye.transform.scale, Vec3::splat(0.2));
}

#[test]
fn dog_left_eye_keeps_flat_depth() {
    let mut scene = Scene::new();
    let mut dog = Dog::build(&mut scene);

    dog.params_mut().write(names::LEFT_EYE_SCALE, 0.5);
    dog.apply_pose(&mut scene);

    // Only x/y breathe; the squashed z stays put
    let eye = scene.get_node(dog.rig().node("left_eye")).unwrap();
    assert!(approx(eye.transform.scale.x, 0.5));
    assert!(approx(eye.transform.scale.y, 0.5));
    assert!(approx(eye.transform.scale.z, 0.1));
}

#[test]
fn dog_spin_composes_pitch_then_yaw() {
    let mut scene = Scene::new();
    let mut dog = Dog::build(&mut scene);

    dog.params_mut().write(names::RY, std::f32::consts::FRAC_PI_2);
    dog.params_mut().write(names::BODY_ROTATION, 0.3);
    dog.apply_pose(&mut scene);

    let root = scene.get_node(dog.rig().root).unwrap();
    let expected =
        Quat::from_rotation_y(std::f32::consts::FRAC_PI_2) * Quat::from_rotation_x(-0.3);
    assert!(root.transform.rotation.angle_between(expected) < EPSILON);
}

#[test]
fn pose_update_is_deterministic() {
    let mut scene = Scene::new();
    let mut figure = Figure::build(&mut scene);

    figure.params_mut().write(names::ARM_ROTATION, 0.25);
    figure.apply_pose(&mut scene);
    let arms = figure.rig().group("arms").to_vec();
    let first = scene.get_node(arms[0]).unwrap().transform.rotation;

    // Re-running with unchanged parameters changes nothing
    figure.apply_pose(&mut scene);
    let second = scene.get_node(arms[0]).unwrap().transform.rotation;
    assert_eq!(first, second);
}
