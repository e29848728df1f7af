//! Showcase systems: близость, панели, голограммы

use bevy::prelude::*;

use crate::car::integrate_position;
use crate::components::{Car, CarControls, Hologram, Nearby, Showcase, ShowcaseKind};
use crate::logger::log_info;
use crate::showcase::events::{ClosePanelIntent, PanelClosed, PanelOpened};

/// Поворот голограммы за tick (радианы)
pub const HOLOGRAM_SPIN_RATE: f32 = 0.005;

/// Амплитуда покачивания голограммы
pub const HOLOGRAM_BOB_AMPLITUDE: f32 = 0.5;

/// Активная панель (максимум одна на всю сцену)
///
/// Открытие нового стенда вытесняет предыдущую панель — как UI,
/// где показ раздела прячет остальные.
#[derive(Resource, Debug, Default)]
pub struct PanelRegistry {
    pub active: Option<ShowcaseKind>,
}

/// Система близости: edge-triggered marker
///
/// Проблема: "машина в радиусе" истинно каждый tick пока стоим у стенда —
/// событие на каждый tick было бы спамом.
///
/// Решение: Nearby вставляется ОДИН РАЗ при входе в радиус и снимается
/// при выходе; interaction prompt хоста живёт ровно столько же.
pub fn detect_nearby(
    mut commands: Commands,
    car_query: Query<&Transform, With<Car>>,
    showcases: Query<(Entity, &Transform, &Showcase, Option<&Nearby>)>,
) {
    let car_transform = match car_query.single() {
        Ok(found) => found,
        Err(_) => return,
    };

    for (entity, transform, showcase, nearby) in showcases.iter() {
        let distance = car_transform.translation.distance(transform.translation);
        let inside = distance < showcase.interact_radius;

        if inside && nearby.is_none() {
            commands.entity(entity).insert(Nearby);
        } else if !inside && nearby.is_some() {
            commands.entity(entity).remove::<Nearby>();
        }
    }
}

/// Система взаимодействия: тормоз у стенда открывает его панель
///
/// Повторное "открытие" уже активной панели — no-op. Стенды обходятся в
/// стабильном порядке (sort по kind): при перекрывающихся радиусах
/// результат детерминирован.
pub fn interact_opens_panel(
    car_query: Query<&CarControls, With<Car>>,
    nearby_showcases: Query<&Showcase, With<Nearby>>,
    mut registry: ResMut<PanelRegistry>,
    mut opened: EventWriter<PanelOpened>,
    mut closed: EventWriter<PanelClosed>,
) {
    let controls = match car_query.single() {
        Ok(found) => found,
        Err(_) => return,
    };
    if !controls.brake {
        return;
    }

    let mut kinds: Vec<ShowcaseKind> = nearby_showcases.iter().map(|s| s.kind).collect();
    kinds.sort();

    for kind in kinds {
        if registry.active == Some(kind) {
            continue;
        }
        if let Some(previous) = registry.active.replace(kind) {
            closed.write(PanelClosed { kind: previous });
        }
        opened.write(PanelOpened { kind });
        log_info(&format!("panel opened: {}", kind.as_str()));
    }
}

/// Система закрытия панели по запросу хоста
pub fn handle_close_intents(
    mut intents: EventReader<ClosePanelIntent>,
    mut registry: ResMut<PanelRegistry>,
    mut closed: EventWriter<PanelClosed>,
) {
    if intents.read().next().is_none() {
        return;
    }
    intents.clear();

    if let Some(kind) = registry.active.take() {
        closed.write(PanelClosed { kind });
        log_info(&format!("panel closed: {}", kind.as_str()));
    }
}

/// Система idle-анимации голограмм
///
/// Общая фаза покачивания у всех стендов (единые "часы" сцены),
/// вращение накапливается per-tick.
pub fn animate_holograms(mut query: Query<&mut Hologram>, time: Res<Time<Fixed>>) {
    let elapsed = time.elapsed_secs();

    for mut hologram in query.iter_mut() {
        hologram.spin += HOLOGRAM_SPIN_RATE;
        hologram.hover_offset = elapsed.sin() * HOLOGRAM_BOB_AMPLITUDE;
    }
}

/// Plugin showcase-домена
pub struct ShowcasePlugin;

impl Plugin for ShowcasePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PanelOpened>()
            .add_event::<PanelClosed>()
            .add_event::<ClosePanelIntent>()
            .init_resource::<PanelRegistry>()
            .add_systems(
                FixedUpdate,
                (detect_nearby, interact_opens_panel, handle_close_intents)
                    .chain()
                    .after(integrate_position),
            )
            .add_systems(FixedUpdate, animate_holograms);
    }
}

/// Spawn helper для стенда
pub fn spawn_showcase(commands: &mut Commands, kind: ShowcaseKind, position: Vec3) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            Showcase::new(kind),
            Hologram::default(),
        ))
        .id()
}
