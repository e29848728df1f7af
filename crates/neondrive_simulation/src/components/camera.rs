//! Follow-камера: сглаженное состояние и параметры

use bevy::prelude::*;

/// Trailing камера за машиной
///
/// Держит СГЛАЖЕННЫЕ точки (position, look_at) — к ideal-целям они
/// подтягиваются lerp'ом раз в tick, фактор фиксированный (НЕ time-scaled).
/// Клиент применяет их к Transform камеры как есть.
///
/// Инварианты:
/// - smoothing ∈ (0, 1); ближе к 1 — резче камера, ближе к 0 — больше lag
/// - при неподвижной машине расстояние до ideal строго убывает
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct FollowCamera {
    /// Текущая сглаженная позиция камеры
    pub position: Vec3,
    /// Текущая сглаженная точка прицеливания
    pub look_at: Vec3,
    /// Высота камеры над землёй
    pub height: f32,
    /// Дистанция за машиной (вдоль -heading)
    pub distance: f32,
    /// Насколько впереди машины лежит look-at цель
    pub look_ahead: f32,
    /// Высота look-at точки над позицией машины
    pub look_height: f32,
    /// Вес lerp за tick
    pub smoothing: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 10.0),
            look_at: Vec3::ZERO,
            height: 5.0,
            distance: 10.0,
            look_ahead: 5.0,
            look_height: 1.0,
            smoothing: 0.05,
        }
    }
}
