//! Плавающие неоновые декорации окружения

use bevy::prelude::*;

/// Декоративный куб, парящий над сценой
///
/// Параметры анимации раздаются при spawn из DeterministicRng.
/// `visible` мутирует quality-контроллер; рендер только читает.
#[derive(Component, Debug, Clone, Copy)]
pub struct Decoration {
    /// Порядковый номер spawn'а — quality оставляет видимыми первые N
    pub index: usize,
    /// Скорость вращения по осям (радианы/tick)
    pub spin_rate: Vec3,
    /// Скорость накопления фазы покачивания (rad/sec)
    pub float_speed: f32,
    /// Текущая фаза покачивания
    pub float_phase: f32,
    /// Показывать ли декорацию при текущем quality level
    pub visible: bool,
}
