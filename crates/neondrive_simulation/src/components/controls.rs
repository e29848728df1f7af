//! Состояние управления машиной

use bevy::prelude::*;

/// Пять независимых флагов управления
///
/// Сознательно НЕ enum: forward+brake и left+right — легальные комбинации
/// (газ с тормозом, взаимно гасящийся поворот).
///
/// Писатели — input-хэндлеры хоста (клавиатура/джойстик), читатель —
/// simulation tick. Single-writer frame-loop: синхронизация не нужна.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct CarControls {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub brake: bool,
}

impl CarControls {
    /// Сбросить все флаги (потеря фокуса окна и т.п.)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
