//! Клавиатурная раскладка
//!
//! forward = W/Up, backward = S/Down, left = A/Left, right = D/Right,
//! brake = Space. Key-down ставит флаг, key-up снимает.

use bevy::input::keyboard::KeyCode;

use crate::components::CarControls;

/// Применить событие клавиши к флагам управления
///
/// Незнакомые клавиши игнорируются.
pub fn apply_key(controls: &mut CarControls, key: KeyCode, pressed: bool) {
    match key {
        KeyCode::KeyW | KeyCode::ArrowUp => controls.forward = pressed,
        KeyCode::KeyS | KeyCode::ArrowDown => controls.backward = pressed,
        KeyCode::KeyA | KeyCode::ArrowLeft => controls.left = pressed,
        KeyCode::KeyD | KeyCode::ArrowRight => controls.right = pressed,
        KeyCode::Space => controls.brake = pressed,
        _ => {}
    }
}
