//! One figure on a ground plane: arrows to walk and turn, space to jump,
//! F to shoot. Left-drag orbits the camera.

use glam::Vec3;
use pantin::rig::params::names;
use pantin::{
    Animator, App, Camera, Figure, FpsCounter, Geometry, Intent, IntervalTimer, KeyBindings,
    Light, Locomotion, Material, Mesh, OrbitControls, ProjectileLauncher, Puppet,
};

/// Ground speed while the walk intent is held, world units per second.
const WALK_SPEED: f32 = 3.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = App::new().with_title("Figure Playground");
    let scene = &mut app.ctx.scene;

    scene.background = Some(Vec3::splat(0.5));

    // Ground
    scene
        .build_node("Ground")
        .with_position(0.0, -1.5, 0.0)
        .with_rotation_euler(-std::f32::consts::FRAC_PI_2, 0.0, 0.0)
        .with_mesh(
            Mesh::new(
                "Ground",
                Geometry::Plane {
                    width: 100.0,
                    height: 100.0,
                },
                Material::lambert(Vec3::splat(0.33)),
            )
            .with_receive_shadow(true),
        )
        .build();

    // Lights
    scene.add_light(Light::new_ambient(Vec3::new(0.62, 0.68, 1.0), 0.5));
    let sun = scene.add_light(Light::new_directional(Vec3::ONE, 0.8).with_cast_shadows(true));
    if let Some(node) = scene.get_node_mut(sun) {
        node.transform.position = Vec3::new(5.0, 5.0, 5.0);
    }

    // A blinking spot, on its own timer
    let spot = scene.add_light(Light::new_spot(Vec3::new(1.0, 0.3, 0.2), 20.0, 200.0, 0.5));
    if let Some(node) = scene.get_node_mut(spot) {
        node.transform.position = Vec3::new(-6.0, 8.0, 2.0);
    }
    let mut blink = IntervalTimer::new(0.35);

    // Camera
    let camera = scene.add_camera(Camera::new_perspective(75.0, 16.0 / 9.0, 0.1, 1000.0));
    if let Some(node) = scene.get_node_mut(camera) {
        node.transform.position = Vec3::new(0.0, 2.0, 8.0);
    }

    let mut figure = Figure::build(scene);
    let mut animator = Animator::for_figure();
    let mut launcher = ProjectileLauncher::new();
    let bindings = KeyBindings::default();
    let mut orbit = OrbitControls::new(Vec3::new(0.0, 1.0, 0.0), 8.0);
    let mut fps = FpsCounter::new();

    app.set_update_fn(move |ctx, input, timer| {
        let dt = timer.dt_seconds();
        let scene = &mut ctx.scene;

        // 1. Key edges to intents
        for event in input.key_events() {
            if let Some(intent) = bindings.map(event) {
                if intent == Intent::Shoot {
                    let params = figure.params();
                    let origin = Vec3::new(
                        params.get(names::X),
                        params.get(names::Y),
                        params.get(names::Z),
                    );
                    let yaw = params.get(names::RY);
                    launcher.fire(scene, origin, yaw);
                } else {
                    animator.handle(intent, figure.params_mut());
                }
            }
        }

        // 2. Advance timelines
        animator.advance(dt, figure.params_mut());
        launcher.update(dt, scene);

        // 3. Ground translation while the walk intent is held
        if animator.state() == Locomotion::Walking {
            let ry = figure.params().get(names::RY);
            figure.params_mut().add(names::X, WALK_SPEED * dt * ry.sin());
            figure.params_mut().add(names::Z, WALK_SPEED * dt * ry.cos());
        }

        // 4. Poses, blink, camera
        figure.apply_pose(scene);
        for _ in 0..blink.tick(dt) {
            if let Some(node) = scene.get_node_mut(spot) {
                node.visible = !node.visible;
            }
        }
        if let Some((transform, camera)) = scene.main_camera_bundle() {
            let fov = camera.fov;
            orbit.update(transform, input, fov, dt);
        }
        if let Some(value) = fps.update() {
            log::debug!("fps: {value:.1}");
        }
    });

    app.run()
}
