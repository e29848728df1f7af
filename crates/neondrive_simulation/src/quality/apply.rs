//! Применение пресета к simulation-стороне сцены

use bevy::prelude::*;

use super::monitor::ActiveQuality;
use crate::components::Decoration;
use crate::environment::DECORATION_COUNT;

/// Сколько декораций остаются видимыми при данной доле
pub fn visible_decoration_count(total: usize, fraction: f32) -> usize {
    (total as f32 * fraction).floor() as usize
}

/// Система применения пресета
///
/// Видимыми остаются первые N по порядку spawn'а — смена уровня туда и
/// обратно возвращает ровно тот же набор декораций.
pub fn apply_quality(active: Res<ActiveQuality>, mut decorations: Query<&mut Decoration>) {
    if !active.is_changed() {
        return;
    }

    let settings = active.level.settings();
    let visible = visible_decoration_count(DECORATION_COUNT, settings.decoration_fraction);

    for mut decoration in decorations.iter_mut() {
        decoration.visible = decoration.index < visible;
    }
}
