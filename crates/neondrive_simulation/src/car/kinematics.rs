//! Кинематика машины: per-tick обновление скорости, heading и позиции
//!
//! Порядок шагов внутри tick фиксирован (.chain()):
//! скорость → поворот → крен → интеграция. Все шаги — тотальные функции,
//! clamp вместо ошибок.

use bevy::prelude::*;

use crate::components::{Car, CarControls, CarTilt};

/// Система продольной скорости
///
/// 1. Газ вперёд/назад: ±acceleration за tick (forward имеет приоритет).
///    Без газа — линейное затухание к нулю шагом deceleration; переход
///    через ноль запрещён: срез точно в 0.
/// 2. Тормоз: speed *= brake_damping каждый tick удержания
///    (непрерывное экспоненциальное затухание, не one-shot).
/// 3. Безусловный clamp в [-max_speed, max_speed].
pub fn update_longitudinal_speed(mut query: Query<(&mut Car, &CarControls)>) {
    for (mut car, controls) in query.iter_mut() {
        if controls.forward {
            car.speed += car.acceleration;
        } else if controls.backward {
            car.speed -= car.acceleration;
        } else if car.speed > 0.0 {
            car.speed -= car.deceleration;
            if car.speed < 0.0 {
                car.speed = 0.0;
            }
        } else if car.speed < 0.0 {
            car.speed += car.deceleration;
            if car.speed > 0.0 {
                car.speed = 0.0;
            }
        }

        if controls.brake {
            car.speed *= car.brake_damping;
        }

        car.speed = car.speed.clamp(-car.max_speed, car.max_speed);
    }
}

/// Система поворота heading
///
/// Работает только при speed != 0 (стоя на месте руль ничего не делает).
/// Оба флага применяются независимо: left+right взаимно гасятся.
pub fn apply_steering(mut query: Query<(&mut Car, &CarControls)>) {
    for (mut car, controls) in query.iter_mut() {
        if !car.is_moving() {
            continue;
        }
        if controls.left {
            car.yaw += car.rotation_speed;
        }
        if controls.right {
            car.yaw -= car.rotation_speed;
        }
    }
}

/// Система визуального крена кузова
///
/// Exponential smoothing к ±intensity при повороте в движении, иначе к
/// нулю. В отличие от руля, при left+right крен уходит влево: left
/// проверяется первым.
pub fn update_tilt(mut query: Query<(&mut CarTilt, &Car, &CarControls)>) {
    for (mut tilt, car, controls) in query.iter_mut() {
        let target = if controls.left && car.is_moving() {
            tilt.intensity
        } else if controls.right && car.is_moving() {
            -tilt.intensity
        } else {
            0.0
        };

        let t = tilt.smoothing;
        tilt.roll += (target - tilt.roll) * t;
    }
}

/// Система интеграции позиции
///
/// Смещение за tick = speed * (sin(yaw), cos(yaw)): heading 0 смотрит
/// вдоль +Z, рост yaw поворачивает к +X. Y не трогаем — машина на земле.
/// Итоговый rotation = yaw + косметический roll.
pub fn integrate_position(mut query: Query<(&mut Transform, &Car, &CarTilt)>) {
    for (mut transform, car, tilt) in query.iter_mut() {
        transform.translation.x += car.yaw.sin() * car.speed;
        transform.translation.z += car.yaw.cos() * car.speed;
        transform.rotation = Quat::from_euler(EulerRot::YXZ, car.yaw, 0.0, tilt.roll);
    }
}

/// Plugin кинематики машины
///
/// Все системы в FixedUpdate, последовательно.
pub struct CarPlugin;

impl Plugin for CarPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                update_longitudinal_speed,
                apply_steering,
                update_tilt,
                integrate_position,
            )
                .chain(),
        );
    }
}

/// Spawn helper для машины-аватара
///
/// CarControls и CarTilt добавляются через Required Components.
pub fn spawn_car(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((Transform::from_translation(position), Car::default()))
        .id()
}
