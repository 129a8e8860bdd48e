//! Control & State Machine Tests
//!
//! Tests for:
//! - Walk/Idle mutual exclusion across intent sequences
//! - Jump guard (re-trigger no-op) and return-to-intent transitions
//! - Discrete eased turns
//! - Projectile lifecycle (spawn, fly, self-clean)
//! - Key-edge to intent mapping and repeat filtering
//! - Resize propagation to the active camera

use glam::Vec3;
use pantin::app::RenderContext;
use pantin::app::input::{Input, Key, KeyEvent};
use pantin::control::{Animator, Intent, KeyBindings, Locomotion, ProjectileLauncher};
use pantin::rig::params::names;
use pantin::rig::{Figure, Puppet};
use pantin::scene::{Camera, Scene};

const EPSILON: f32 = 1e-3;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn figure_and_animator() -> (Scene, Figure, Animator) {
    let mut scene = Scene::new();
    let figure = Figure::build(&mut scene);
    (scene, figure, Animator::for_figure())
}

/// At most one of idle/walk runs outside a jump; during a jump, neither.
fn assert_exclusion(animator: &Animator) {
    match animator.state() {
        Locomotion::Jumping => {
            assert!(!animator.idle.is_active(), "idle must pause during jump");
            assert!(!animator.walk.is_active(), "walk must pause during jump");
        }
        Locomotion::Walking => {
            assert!(animator.walk.is_active());
            assert!(!animator.idle.is_active());
        }
        Locomotion::Idle => {
            assert!(animator.idle.is_active());
            assert!(!animator.walk.is_active());
        }
    }
}

// ============================================================================
// Walk / Idle Exclusion
// ============================================================================

#[test]
fn animator_rests_in_idle() {
    let (_, _, animator) = figure_and_animator();
    assert_eq!(animator.state(), Locomotion::Idle);
    assert_exclusion(&animator);
}

#[test]
fn walk_start_pauses_idle_and_stop_restores_it() {
    let (_, mut figure, mut animator) = figure_and_animator();

    animator.handle(Intent::StartWalking, figure.params_mut());
    assert_eq!(animator.state(), Locomotion::Walking);
    assert_exclusion(&animator);

    animator.handle(Intent::StopWalking, figure.params_mut());
    assert_eq!(animator.state(), Locomotion::Idle);
    assert_exclusion(&animator);
}

#[test]
fn exclusion_holds_across_arbitrary_sequences() {
    let (_, mut figure, mut animator) = figure_and_animator();

    let sequence = [
        Intent::StartWalking,
        Intent::StartWalking,
        Intent::Jump,
        Intent::Jump,
        Intent::StopWalking,
        Intent::StartWalking,
        Intent::StopWalking,
        Intent::StopWalking,
        Intent::Jump,
        Intent::StartWalking,
    ];

    for intent in sequence {
        animator.handle(intent, figure.params_mut());
        animator.advance(0.01, figure.params_mut());
        assert_exclusion(&animator);
    }

    // Let every pending jump finish and settle
    for _ in 0..200 {
        animator.advance(0.05, figure.params_mut());
        assert_exclusion(&animator);
    }
}

// ============================================================================
// Jump
// ============================================================================

#[test]
fn jump_from_idle_returns_to_idle() {
    let (_, mut figure, mut animator) = figure_and_animator();

    animator.handle(Intent::Jump, figure.params_mut());
    assert_eq!(animator.state(), Locomotion::Jumping);
    assert!(animator.jump.is_active());

    // Figure jump plays 0.25 s forward + 0.25 s back
    animator.advance(0.6, figure.params_mut());
    assert_eq!(animator.state(), Locomotion::Idle);
    assert!(animator.idle.is_active());
    assert_exclusion(&animator);
}

#[test]
fn jump_returns_to_walking_when_intent_held() {
    let (_, mut figure, mut animator) = figure_and_animator();

    animator.handle(Intent::StartWalking, figure.params_mut());
    animator.handle(Intent::Jump, figure.params_mut());
    assert_eq!(animator.state(), Locomotion::Jumping);

    animator.advance(0.6, figure.params_mut());
    assert_eq!(animator.state(), Locomotion::Walking);
    assert!(animator.walk.is_active());
    assert_exclusion(&animator);
}

#[test]
fn jump_retrigger_is_a_noop() {
    let (_, mut figure, mut animator) = figure_and_animator();

    animator.handle(Intent::Jump, figure.params_mut());
    animator.advance(0.1, figure.params_mut());
    let airborne_time = animator.jump.time();
    assert!(airborne_time > 0.0);

    // Second press while airborne must not restart the timeline
    animator.handle(Intent::Jump, figure.params_mut());
    assert!(approx(animator.jump.time(), airborne_time));
    assert_eq!(animator.state(), Locomotion::Jumping);
}

#[test]
fn jump_lifts_and_lands_on_base_height() {
    let (_, mut figure, mut animator) = figure_and_animator();
    let base_y = figure.params().get(names::Y);

    animator.handle(Intent::Jump, figure.params_mut());
    animator.advance(0.25, figure.params_mut());
    let apex = figure.params().get(names::Y);
    assert!(apex > base_y, "apex {apex} should clear base {base_y}");

    animator.advance(0.5, figure.params_mut());
    assert!(
        approx(figure.params().get(names::Y), base_y),
        "landed at {}",
        figure.params().get(names::Y)
    );
}

// ============================================================================
// Turns
// ============================================================================

#[test]
fn turn_applies_one_eased_step() {
    let (_, mut figure, mut animator) = figure_and_animator();

    animator.handle(Intent::TurnLeft, figure.params_mut());
    assert_eq!(animator.active_turns(), 1);

    // 0.5 s of flight plus slack
    animator.advance(0.3, figure.params_mut());
    animator.advance(0.3, figure.params_mut());

    assert!(approx(figure.params().get(names::RY), animator.turn_step));
    assert_eq!(animator.active_turns(), 0, "finished turns are dropped");
}

#[test]
fn opposite_turns_cancel() {
    let (_, mut figure, mut animator) = figure_and_animator();

    animator.handle(Intent::TurnLeft, figure.params_mut());
    animator.advance(0.6, figure.params_mut());
    animator.handle(Intent::TurnRight, figure.params_mut());
    animator.advance(0.6, figure.params_mut());

    assert!(approx(figure.params().get(names::RY), 0.0));
}

// ============================================================================
// Projectiles
// ============================================================================

#[test]
fn projectiles_self_clean_after_flight() {
    let mut scene = Scene::new();
    let baseline = scene.nodes.len();

    let mut launcher = ProjectileLauncher::new();
    for _ in 0..5 {
        launcher.fire(&mut scene, Vec3::new(0.0, 1.0, 0.0), 0.0);
    }
    assert_eq!(launcher.live_count(), 5);
    assert_eq!(scene.nodes.len(), baseline + 5);

    // Mid-flight: everything still alive
    launcher.update(0.5, &mut scene);
    assert_eq!(launcher.live_count(), 5);

    // Past the 1 s flight: all gone, scene back to baseline
    launcher.update(2.0, &mut scene);
    assert_eq!(launcher.live_count(), 0);
    assert_eq!(scene.nodes.len(), baseline);
    assert_eq!(scene.meshes.len(), 0, "mesh components cleaned with nodes");
}

#[test]
fn projectile_flies_linearly_along_yaw() {
    let mut scene = Scene::new();
    let mut launcher = ProjectileLauncher::new();

    // Yaw 0 faces +Z
    launcher.fire(&mut scene, Vec3::new(0.0, 1.0, 0.0), 0.0);
    launcher.update(0.5, &mut scene);

    let node = scene
        .root_nodes
        .iter()
        .find_map(|&h| {
            let node = scene.get_node(h)?;
            (node.name == "Projectile").then_some(node)
        })
        .expect("projectile node");

    let pos = node.transform.position;
    assert!(approx(pos.x, 0.0), "x = {}", pos.x);
    assert!(approx(pos.y, 1.0), "y = {}", pos.y);
    assert!(
        approx(pos.z, launcher.range * 0.5),
        "half-flight z = {}",
        pos.z
    );
}

// ============================================================================
// Intent Mapping
// ============================================================================

#[test]
fn bindings_map_press_and_release_edges() {
    let bindings = KeyBindings::default();

    let press = |key| KeyEvent { key, pressed: true };
    let release = |key| KeyEvent {
        key,
        pressed: false,
    };

    assert_eq!(
        bindings.map(&press(Key::ArrowUp)),
        Some(Intent::StartWalking)
    );
    assert_eq!(
        bindings.map(&release(Key::ArrowUp)),
        Some(Intent::StopWalking)
    );
    assert_eq!(bindings.map(&press(Key::Space)), Some(Intent::Jump));
    assert_eq!(bindings.map(&release(Key::Space)), None);
    assert_eq!(bindings.map(&press(Key::ArrowLeft)), Some(Intent::TurnLeft));
    assert_eq!(
        bindings.map(&press(Key::ArrowRight)),
        Some(Intent::TurnRight)
    );
    assert_eq!(bindings.map(&press(Key::F)), Some(Intent::Shoot));
    assert_eq!(bindings.map(&press(Key::Q)), None);
}

#[test]
fn input_filters_key_repeats() {
    let mut input = Input::new();

    input.inject_key(Key::Space, true, false);
    input.inject_key(Key::Space, true, true);
    input.inject_key(Key::Space, true, true);
    assert_eq!(input.key_events().len(), 1);
    assert!(input.is_key_pressed(Key::Space));

    input.end_frame();
    assert!(input.key_events().is_empty());
    assert!(input.is_key_pressed(Key::Space), "held state survives frames");

    input.inject_key(Key::Space, false, false);
    assert_eq!(input.key_events().len(), 1);
    assert!(!input.is_key_pressed(Key::Space));
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn resize_updates_active_camera_aspect() {
    let mut ctx = RenderContext::default();
    ctx.scene
        .add_camera(Camera::new_perspective(75.0, 1.0, 0.1, 100.0));

    for (w, h) in [(800_u32, 600_u32), (1920, 1080), (333, 777)] {
        ctx.handle_resize(w, h);
        let (_, camera) = ctx.scene.main_camera_bundle().unwrap();
        assert!(
            approx(camera.aspect, w as f32 / h as f32),
            "{w}x{h}: aspect = {}",
            camera.aspect
        );
    }
}

#[test]
fn resize_to_zero_height_is_ignored() {
    let mut ctx = RenderContext::default();
    ctx.scene
        .add_camera(Camera::new_perspective(75.0, 1.5, 0.1, 100.0));

    ctx.handle_resize(800, 0);
    let (_, camera) = ctx.scene.main_camera_bundle().unwrap();
    assert!(approx(camera.aspect, 1.5), "aspect must be untouched");
}
