//! Виртуальный джойстик (touch-устройства)
//!
//! Нормализованный вектор [-1, 1]² в экранных координатах: y < 0 — палец
//! вверх (газ), y > 0 — вниз (назад). Тормоз — отдельная дискретная
//! кнопка, к стику не привязан.

use bevy::prelude::*;

use crate::components::CarControls;

/// Мёртвая зона по каждой оси
pub const JOYSTICK_DEAD_ZONE: f32 = 0.3;

/// Применить положение стика к четырём направленным флагам
///
/// Флаги ПРИСВАИВАЮТСЯ (не or'ятся): возврат стика в мёртвую зону сам
/// снимает направление. brake не трогаем.
pub fn apply_joystick(controls: &mut CarControls, stick: Vec2) {
    controls.forward = stick.y < -JOYSTICK_DEAD_ZONE;
    controls.backward = stick.y > JOYSTICK_DEAD_ZONE;
    controls.left = stick.x < -JOYSTICK_DEAD_ZONE;
    controls.right = stick.x > JOYSTICK_DEAD_ZONE;
}

/// Палец убран со стика: снять направленные флаги
pub fn release_joystick(controls: &mut CarControls) {
    controls.forward = false;
    controls.backward = false;
    controls.left = false;
    controls.right = false;
}

/// Дискретная кнопка тормоза (interact)
pub fn set_brake(controls: &mut CarControls, held: bool) {
    controls.brake = held;
}
