//! Тесты окружения

use bevy::ecs::schedule::Schedule;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

use crate::components::Decoration;
use crate::environment::systems::{
    advance_glow_pulse, animate_decorations, spawn_decorations, GlowPulse, DECORATION_COUNT,
};

fn scatter(seed: u64) -> Vec<(Transform, Decoration)> {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    {
        let mut commands = world.commands();
        spawn_decorations(&mut commands, &mut rng, DECORATION_COUNT);
    }
    world.flush();

    let mut query = world.query::<(&Transform, &Decoration)>();
    let mut result: Vec<_> = query
        .iter(&world)
        .map(|(transform, decoration)| (*transform, *decoration))
        .collect();
    result.sort_by_key(|(_, decoration)| decoration.index);
    result
}

#[test]
fn test_scatter_is_deterministic_per_seed() {
    let first = scatter(7);
    let second = scatter(7);
    assert_eq!(first.len(), DECORATION_COUNT);

    for ((t1, d1), (t2, d2)) in first.iter().zip(second.iter()) {
        assert_eq!(t1.translation, t2.translation);
        assert_eq!(t1.rotation, t2.rotation);
        assert_eq!(d1.spin_rate, d2.spin_rate);
        assert_eq!(d1.float_speed, d2.float_speed);
    }

    // Другой seed — другая сцена
    let other = scatter(8);
    assert!(first
        .iter()
        .zip(other.iter())
        .any(|((t1, _), (t2, _))| t1.translation != t2.translation));
}

#[test]
fn test_scatter_respects_bounds() {
    for (transform, decoration) in scatter(42) {
        let p = transform.translation;
        assert!(p.x >= -50.0 && p.x < 50.0);
        assert!(p.z >= -50.0 && p.z < 50.0);
        assert!(p.y >= 5.0 && p.y < 25.0);
        assert!(transform.scale.x >= 0.2 && transform.scale.x < 1.0);
        assert!(decoration.spin_rate.abs().max_element() < 0.005);
        assert!(decoration.float_speed >= 0.2 && decoration.float_speed < 0.7);
        assert!(decoration.visible, "после spawn все декорации видимы");
    }
}

#[test]
fn test_animation_advances_phase_and_bobs() {
    let mut world = World::new();
    world.insert_resource(Time::<Fixed>::default());
    let entity = world
        .spawn((
            Transform::from_translation(Vec3::new(0.0, 10.0, 0.0)),
            Decoration {
                index: 0,
                spin_rate: Vec3::new(0.0, 0.004, 0.0),
                float_speed: 0.5,
                float_phase: 0.0,
                visible: true,
            },
        ))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems(animate_decorations);

    let tick = Duration::from_secs_f64(1.0 / 60.0);
    for _ in 0..60 {
        world.resource_mut::<Time<Fixed>>().advance_by(tick);
        schedule.run(&mut world);
    }

    let decoration = world.get::<Decoration>(entity).unwrap();
    // 1 секунда * 0.5 rad/sec
    assert!((decoration.float_phase - 0.5).abs() < 1e-3);

    // Фаза в (0, π) — куб всплыл выше базовой высоты
    let y = world.get::<Transform>(entity).unwrap().translation.y;
    assert!(y > 10.0, "y = {}", y);

    // Вращение накопилось вокруг Y
    let (yaw, _, _) = world
        .get::<Transform>(entity)
        .unwrap()
        .rotation
        .to_euler(EulerRot::YXZ);
    assert!((yaw - 60.0 * 0.004).abs() < 1e-3, "yaw = {}", yaw);
}

#[test]
fn test_glow_pulse_accumulates_scene_seconds() {
    let mut world = World::new();
    world.insert_resource(Time::<Fixed>::default());
    world.init_resource::<GlowPulse>();

    let mut schedule = Schedule::default();
    schedule.add_systems(advance_glow_pulse);

    let tick = Duration::from_secs_f64(1.0 / 60.0);
    for _ in 0..90 {
        world.resource_mut::<Time<Fixed>>().advance_by(tick);
        schedule.run(&mut world);
    }

    let pulse = world.resource::<GlowPulse>();
    assert!((pulse.seconds - 1.5).abs() < 1e-3, "seconds = {}", pulse.seconds);
}
