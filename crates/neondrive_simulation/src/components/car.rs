//! Компоненты машины-аватара: Car, CarTilt

use bevy::prelude::*;

use super::controls::CarControls;

/// Машина-аватар (единственная управляемая entity сцены)
///
/// Держит кинематическое состояние и параметры. Позиция живёт в Transform,
/// yaw хранится отдельным скаляром: он unbounded (без wraparound), а
/// Transform.rotation — производная величина (yaw + визуальный roll).
///
/// Инварианты:
/// - |speed| ≤ max_speed после каждого tick
/// - heading меняется только при speed != 0
///
/// Автоматически добавляет CarControls и CarTilt через Required Components.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(CarControls, CarTilt)]
pub struct Car {
    /// Скалярная скорость со знаком (units/tick, минус = задний ход)
    pub speed: f32,
    /// Heading (yaw, радианы). 0 = +Z, рост yaw поворачивает к +X
    pub yaw: f32,
    /// Предел |speed|
    pub max_speed: f32,
    /// Прирост скорости за tick при газе
    pub acceleration: f32,
    /// Линейный шаг затухания к нулю за tick без газа
    pub deceleration: f32,
    /// Шаг поворота heading за tick
    pub rotation_speed: f32,
    /// Множитель скорости за tick при удержании тормоза (<1)
    pub brake_damping: f32,
}

impl Default for Car {
    fn default() -> Self {
        Self {
            speed: 0.0,
            yaw: 0.0,
            max_speed: 0.5,
            acceleration: 0.01,
            deceleration: 0.05,
            rotation_speed: 0.05,
            brake_damping: 0.9,
        }
    }
}

impl Car {
    /// Движется ли машина (поворот и tilt работают только в движении)
    pub fn is_moving(&self) -> bool {
        self.speed != 0.0
    }
}

/// Визуальный крен кузова при повороте
///
/// Чистая косметика: на position/heading не влияет.
/// Инвариант: |roll| ≤ intensity.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct CarTilt {
    /// Текущий сглаженный roll (радианы)
    pub roll: f32,
    /// Целевой крен при повороте
    pub intensity: f32,
    /// Вес lerp за tick (exponential smoothing)
    pub smoothing: f32,
}

impl Default for CarTilt {
    fn default() -> Self {
        Self {
            roll: 0.0,
            intensity: 0.1,
            smoothing: 0.1,
        }
    }
}
