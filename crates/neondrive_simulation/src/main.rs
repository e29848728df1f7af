//! Headless прогон NEONDRIVE
//!
//! Скриптованная поездка без рендера: газ, подруливание, торможение у
//! стенда. Каждый update = ровно один 60Hz tick (simulated clock).

use bevy::prelude::*;
use neondrive_simulation::{
    create_headless_app, log_info, spawn_car, spawn_decorations, spawn_follow_camera,
    spawn_showcase, Car, CarControls, DeterministicRng, ShowcaseKind, SimulationPlugin,
    DECORATION_COUNT,
};

/// Стенды кольцом радиуса 30 вокруг старта
const SHOWCASE_RING: [(ShowcaseKind, Vec3); 5] = [
    (ShowcaseKind::Introduction, Vec3::new(0.0, 0.0, 30.0)),
    (ShowcaseKind::Projects, Vec3::new(28.5, 0.0, 9.3)),
    (ShowcaseKind::Skills, Vec3::new(17.6, 0.0, -24.3)),
    (ShowcaseKind::Leadership, Vec3::new(-17.6, 0.0, -24.3)),
    (ShowcaseKind::Contact, Vec3::new(-28.5, 0.0, 9.3)),
];

fn main() {
    let seed = 42;
    println!("Starting NEONDRIVE headless drive (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    let car = spawn_car(&mut app.world_mut().commands(), Vec3::ZERO);
    spawn_follow_camera(&mut app.world_mut().commands());
    for (kind, position) in SHOWCASE_RING {
        spawn_showcase(&mut app.world_mut().commands(), kind, position);
    }

    // Декорации из seeded RNG (resource вынимаем на время spawn'а)
    {
        let world = app.world_mut();
        if let Some(mut rng) = world.remove_resource::<DeterministicRng>() {
            {
                let mut commands = world.commands();
                spawn_decorations(&mut commands, &mut rng.rng, DECORATION_COUNT);
            }
            world.insert_resource(rng);
        }
    }
    app.world_mut().flush();

    // Скрипт поездки: разгон к Introduction, подруливание, тормоз у стенда
    for tick in 0..900u32 {
        let controls = CarControls {
            forward: tick < 300,
            backward: false,
            left: (120..180).contains(&tick),
            right: (180..240).contains(&tick),
            brake: tick >= 300,
        };
        if let Some(mut car_controls) = app.world_mut().get_mut::<CarControls>(car) {
            *car_controls = controls;
        }

        app.update();

        if tick % 100 == 0 {
            let world = app.world();
            if let (Some(state), Some(transform)) =
                (world.get::<Car>(car), world.get::<Transform>(car))
            {
                log_info(&format!(
                    "tick {}: pos ({:.1}, {:.1}) speed {:.3} yaw {:.2}",
                    tick,
                    transform.translation.x,
                    transform.translation.z,
                    state.speed,
                    state.yaw
                ));
            }
        }
    }

    println!("Drive complete!");
}
