//! Nested-pivot orbits: a sun, an earth on an orbit pivot, a moon on a
//! sub-pivot. The sun pops in with an elastic scale tween and a ring of
//! spots blinks on independent timers.

use glam::Vec3;
use pantin::{
    App, Camera, Easing, Geometry, IntervalTimer, Light, Material, Mesh, NodeHandle,
    OrbitControls, ParameterSet, Repeat, Timeline, Tween,
};
use rand::Rng;

struct RotationSpeeds {
    sun: f32,
    earth: f32,
    moon: f32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = App::new().with_title("Solar System");
    let scene = &mut app.ctx.scene;

    scene.background = Some(Vec3::ZERO);

    scene.add_light(Light::new_ambient(Vec3::splat(0.08), 1.0));
    let key_light = scene.add_light(Light::new_point(Vec3::ONE, 2.0, 100.0));
    if let Some(node) = scene.get_node_mut(key_light) {
        node.transform.position = Vec3::new(0.0, 10.0, 10.0);
    }

    // Blinking spots on independent periods
    let mut rng = rand::rng();
    let mut blinkers: Vec<(NodeHandle, IntervalTimer)> = Vec::new();
    for _ in 0..6 {
        let color = Vec3::new(
            rng.random_range(0.0..1.0),
            rng.random_range(0.0..1.0),
            rng.random_range(0.0..1.0),
        );
        let spot = scene.add_light(Light::new_spot(color, 20.0, 200.0, 0.4));
        if let Some(node) = scene.get_node_mut(spot) {
            node.transform.position = Vec3::new(
                rng.random_range(-30.0..30.0),
                rng.random_range(-30.0..30.0),
                rng.random_range(-30.0..30.0),
            );
        }
        blinkers.push((spot, IntervalTimer::new(rng.random_range(0.1..1.0))));
    }

    // Sun → earth orbit pivot → earth → moon orbit pivot → moon
    let sun = scene
        .build_node("Sun")
        .with_mesh(Mesh::new(
            "Sun",
            Geometry::sphere(3.0),
            Material::phong(Vec3::new(1.0, 0.8, 0.1)),
        ))
        .build();
    let earth_orbit = scene.build_node("EarthOrbit").with_parent(sun).build();
    let earth = scene
        .build_node("Earth")
        .with_parent(earth_orbit)
        .with_position(10.0, 0.0, 0.0)
        .with_mesh(Mesh::new(
            "Earth",
            Geometry::sphere(1.0),
            Material::phong(Vec3::new(0.2, 0.4, 1.0)),
        ))
        .build();
    let moon_orbit = scene.build_node("MoonOrbit").with_parent(earth).build();
    scene
        .build_node("Moon")
        .with_parent(moon_orbit)
        .with_position(2.5, 0.0, 0.0)
        .with_mesh(Mesh::new(
            "Moon",
            Geometry::sphere(0.4),
            Material::phong(Vec3::splat(0.7)),
        ))
        .build();

    let camera = scene.add_camera(Camera::new_perspective(45.0, 16.0 / 9.0, 0.1, 1000.0));
    if let Some(node) = scene.get_node_mut(camera) {
        node.transform.position = Vec3::new(0.0, 0.0, 30.0);
    }

    // Elastic pop-in for the sun subtree
    let mut intro_params = ParameterSet::new();
    intro_params.set("sun_scale", 0.0);
    let mut intro = Timeline::new().with_repeat(Repeat::Count(0)).step(
        Tween::to("sun_scale", 1.0).duration(2.0).ease(Easing::ElasticOut {
            amplitude: 1.0,
            period: 0.3,
        }),
    );

    let speeds = RotationSpeeds {
        sun: 0.15,
        earth: 0.6,
        moon: 2.4,
    };
    let mut orbit = OrbitControls::new(Vec3::ZERO, 30.0);

    app.set_update_fn(move |ctx, input, timer| {
        let dt = timer.dt_seconds();
        let scene = &mut ctx.scene;

        intro.advance(dt, &mut intro_params);
        if let Some(node) = scene.get_node_mut(sun) {
            node.transform.scale = Vec3::splat(intro_params.get("sun_scale").max(0.0));
            let euler = node.transform.rotation_euler();
            node.transform
                .set_rotation_euler(0.0, euler.y + speeds.sun * dt, 0.0);
        }
        if let Some(node) = scene.get_node_mut(earth_orbit) {
            let euler = node.transform.rotation_euler();
            node.transform
                .set_rotation_euler(0.0, euler.y + speeds.earth * dt, 0.0);
        }
        if let Some(node) = scene.get_node_mut(moon_orbit) {
            let euler = node.transform.rotation_euler();
            node.transform
                .set_rotation_euler(0.0, euler.y + speeds.moon * dt, 0.0);
        }

        for (spot, blink) in &mut blinkers {
            for _ in 0..blink.tick(dt) {
                if let Some(node) = scene.get_node_mut(*spot) {
                    node.visible = !node.visible;
                }
            }
        }

        if let Some((transform, camera)) = scene.main_camera_bundle() {
            let fov = camera.fov;
            orbit.update(transform, input, fov, dt);
        }
    });

    app.run()
}
