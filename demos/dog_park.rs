//! A pack of dogs scattered over a big plane, all driven by the same keys:
//! every dog walks, turns and jumps together.

use glam::Vec3;
use pantin::rig::params::names;
use pantin::{
    Animator, App, Camera, Dog, Fog, Geometry, KeyBindings, Light, Locomotion, Material, Mesh,
    OrbitControls, Puppet,
};
use rand::Rng;

const NUM_DOGS: usize = 10;
const WALK_SPEED: f32 = 2.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = App::new().with_title("Dog Park");
    let scene = &mut app.ctx.scene;

    scene.background = Some(Vec3::splat(0.88));
    scene.fog = Some(Fog {
        color: Vec3::splat(0.88),
        near: 20.0,
        far: 100.0,
    });

    scene
        .build_node("Ground")
        .with_rotation_euler(-std::f32::consts::FRAC_PI_2, 0.0, 0.0)
        .with_mesh(
            Mesh::new(
                "Ground",
                Geometry::Plane {
                    width: 100.0,
                    height: 100.0,
                },
                Material::phong(Vec3::ONE),
            )
            .with_receive_shadow(true),
        )
        .build();

    scene.add_light(Light::new_ambient(Vec3::new(0.62, 0.68, 1.0), 0.5));
    let sun = scene.add_light(Light::new_directional(Vec3::ONE, 1.0).with_cast_shadows(true));
    if let Some(node) = scene.get_node_mut(sun) {
        node.transform.position = Vec3::new(25.0, 50.0, 5.0);
    }

    let camera = scene.add_camera(Camera::new_perspective(75.0, 16.0 / 9.0, 0.1, 1000.0));
    if let Some(node) = scene.get_node_mut(camera) {
        node.transform.position = Vec3::new(0.0, 3.0, 8.0);
    }

    // The pack: every dog gets its own rig and animator
    let mut rng = rand::rng();
    let mut pack = Vec::with_capacity(NUM_DOGS);
    for _ in 0..NUM_DOGS {
        let mut dog = Dog::build(scene);
        dog.params_mut()
            .write(names::X, rng.random_range(-40.0..40.0));
        dog.params_mut()
            .write(names::Z, rng.random_range(-40.0..40.0));
        dog.params_mut()
            .write(names::RY, rng.random_range(0.0..std::f32::consts::TAU));
        pack.push((dog, Animator::for_dog()));
    }

    let bindings = KeyBindings::default();
    let mut orbit = OrbitControls::new(Vec3::ZERO, 12.0);

    app.set_update_fn(move |ctx, input, timer| {
        let dt = timer.dt_seconds();
        let scene = &mut ctx.scene;

        for event in input.key_events() {
            if let Some(intent) = bindings.map(event) {
                for (dog, animator) in &mut pack {
                    animator.handle(intent, dog.params_mut());
                }
            }
        }

        for (dog, animator) in &mut pack {
            animator.advance(dt, dog.params_mut());
            if animator.state() == Locomotion::Walking {
                let ry = dog.params().get(names::RY);
                dog.params_mut().add(names::X, WALK_SPEED * dt * ry.sin());
                dog.params_mut().add(names::Z, WALK_SPEED * dt * ry.cos());
            }
            dog.apply_pose(scene);
        }

        if let Some((transform, camera)) = scene.main_camera_bundle() {
            let fov = camera.fov;
            orbit.update(transform, input, fov, dt);
        }
    });

    app.run()
}
