//! Декорации окружения: детерминированный scatter и idle-анимация
//!
//! Параметры каждой декорации раздаются один раз при spawn из seeded RNG —
//! один seed даёт идентичную сцену (проверяется determinism-тестами).

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::components::Decoration;

/// Полное число декораций сцены
pub const DECORATION_COUNT: usize = 20;

/// Амплитуда покачивания за tick (множитель sin фазы)
pub const DECORATION_BOB_STEP: f32 = 0.01;

/// Часы пульсации свечения пола
///
/// Рендер читает накопленные секунды для pulse-эффекта шейдера.
#[derive(Resource, Debug, Default)]
pub struct GlowPulse {
    pub seconds: f32,
}

/// Spawn helper: рассеять `count` декораций по сцене
///
/// Позиция x/z в ±50, высота 5..25, случайная ориентация и масштаб
/// 0.2..1.0 — каждая со своими скоростями вращения и покачивания.
pub fn spawn_decorations(
    commands: &mut Commands,
    rng: &mut ChaCha8Rng,
    count: usize,
) -> Vec<Entity> {
    let mut spawned = Vec::with_capacity(count);

    for index in 0..count {
        let position = Vec3::new(
            rng.gen_range(-50.0..50.0),
            rng.gen_range(5.0..25.0),
            rng.gen_range(-50.0..50.0),
        );
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            rng.gen_range(0.0..std::f32::consts::PI),
            rng.gen_range(0.0..std::f32::consts::PI),
            rng.gen_range(0.0..std::f32::consts::PI),
        );
        let scale = rng.gen_range(0.2..1.0);

        let decoration = Decoration {
            index,
            spin_rate: Vec3::new(
                rng.gen_range(-0.005..0.005),
                rng.gen_range(-0.005..0.005),
                rng.gen_range(-0.005..0.005),
            ),
            float_speed: rng.gen_range(0.2..0.7),
            float_phase: rng.gen_range(0.0..std::f32::consts::TAU),
            visible: true,
        };

        let entity = commands
            .spawn((
                Transform {
                    translation: position,
                    rotation,
                    scale: Vec3::splat(scale),
                },
                decoration,
            ))
            .id();
        spawned.push(entity);
    }

    spawned
}

/// Система анимации декораций
///
/// Вращение — фиксированный шаг за tick; покачивание — накопление фазы
/// по float_speed и синусоидальный сдвиг Y.
pub fn animate_decorations(mut query: Query<(&mut Decoration, &mut Transform)>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for (mut decoration, mut transform) in query.iter_mut() {
        let spin = decoration.spin_rate;
        transform.rotate_x(spin.x);
        transform.rotate_y(spin.y);
        transform.rotate_z(spin.z);

        decoration.float_phase += delta * decoration.float_speed;
        transform.translation.y += decoration.float_phase.sin() * DECORATION_BOB_STEP;
    }
}

/// Система часов свечения пола
pub fn advance_glow_pulse(mut pulse: ResMut<GlowPulse>, time: Res<Time<Fixed>>) {
    pulse.seconds += time.delta_secs();
}

/// Plugin окружения
pub struct EnvironmentPlugin;

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GlowPulse>()
            .add_systems(FixedUpdate, (animate_decorations, advance_glow_pulse));
    }
}
