//! Follow-камера: ideal-цели из позы машины + per-tick lerp
//!
//! Камера висит позади и выше машины (вдоль -heading), смотрит чуть
//! вперёд неё. Обе точки сглаживаются экспоненциально — фиксированный
//! вес за tick, НЕ time-scaled.

use bevy::prelude::*;

use crate::car::integrate_position;
use crate::components::{Car, FollowCamera};

/// Ideal позиция камеры: за машиной на `distance`, выше на `height`
///
/// Не зависит от скорости — только от позы.
pub fn ideal_position(car_position: Vec3, yaw: f32, height: f32, distance: f32) -> Vec3 {
    car_position + Vec3::new(-yaw.sin() * distance, height, -yaw.cos() * distance)
}

/// Ideal look-at: чуть впереди машины вдоль heading, приподнята над землёй
pub fn ideal_look_at(car_position: Vec3, yaw: f32, look_ahead: f32, look_height: f32) -> Vec3 {
    car_position + Vec3::new(yaw.sin() * look_ahead, look_height, yaw.cos() * look_ahead)
}

/// Система follow-камеры
///
/// Выполняется после интеграции позиции машины: цели считаются от
/// свежей позы этого tick.
pub fn follow_car(
    car_query: Query<(&Transform, &Car)>,
    mut camera_query: Query<&mut FollowCamera>,
) {
    let (car_transform, car) = match car_query.single() {
        Ok(found) => found,
        Err(_) => return,
    };

    for mut camera in camera_query.iter_mut() {
        let target_position = ideal_position(
            car_transform.translation,
            car.yaw,
            camera.height,
            camera.distance,
        );
        let target_look_at = ideal_look_at(
            car_transform.translation,
            car.yaw,
            camera.look_ahead,
            camera.look_height,
        );

        let t = camera.smoothing;
        camera.position = camera.position.lerp(target_position, t);
        camera.look_at = camera.look_at.lerp(target_look_at, t);
    }
}

/// Plugin follow-камеры
pub struct FollowCameraPlugin;

impl Plugin for FollowCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, follow_car.after(integrate_position));
    }
}

/// Spawn helper для camera-entity симуляции
///
/// Transform камеры ведёт клиент (from_translation + looking_at по
/// сглаженным точкам); здесь только состояние.
pub fn spawn_follow_camera(commands: &mut Commands) -> Entity {
    commands.spawn(FollowCamera::default()).id()
}
