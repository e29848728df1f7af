//! NEONDRIVE Simulation Core
//!
//! Headless ECS-симуляция интерактивной portfolio-сцены на Bevy 0.16:
//! машина-аватар, follow-камера, showcase-стенды, декорации, adaptive quality.
//!
//! АРХИТЕКТУРА (strategic/tactical split):
//! - ECS = strategic layer (кинематика, панели, quality policy)
//! - Клиент (neondrive_client) = tactical layer (рендер, окно, клавиатура)
//!
//! Вся логика работает в FixedUpdate 60Hz — per-tick константы
//! остаются корректными при любом render rate.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod camera;
pub mod car;
pub mod components;
pub mod environment;
pub mod input;
pub mod logger;
pub mod quality;
pub mod showcase;

// Re-export базовых компонентов для удобства
pub use camera::{spawn_follow_camera, FollowCameraPlugin};
pub use car::{spawn_car, CarPlugin};
pub use components::*;
pub use environment::{spawn_decorations, EnvironmentPlugin, GlowPulse, DECORATION_COUNT};
pub use input::{apply_joystick, apply_key, release_joystick, set_brake, JOYSTICK_DEAD_ZONE};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel,
    LogSink,
};
pub use quality::{
    adjust_level, effective_pixel_ratio, initial_quality, visible_decoration_count, ActiveQuality,
    DeviceClass, QualityChanged, QualityLevel, QualityPlugin, QualitySettings,
};
pub use showcase::{
    spawn_showcase, ClosePanelIntent, PanelClosed, PanelOpened, PanelRegistry, ShowcasePlugin,
};

/// Частота simulation tick (Hz)
pub const TICK_RATE: f64 = 60.0;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Fixed timestep 60Hz для simulation tick (per-tick константы)
        app.insert_resource(Time::<Fixed>::from_hz(TICK_RATE));

        // Детерминистичный RNG (seed по умолчанию); seed из
        // create_headless_app не затираем
        if app.world().get_resource::<DeterministicRng>().is_none() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app
            // Подсистемы (strategic layer)
            .add_plugins((
                CarPlugin,
                FollowCameraPlugin,
                ShowcasePlugin,
                EnvironmentPlugin,
                QualityPlugin,
            ));
    }
}

/// Детерминистичный RNG resource (seeded)
///
/// Единственный потребитель случайности — процедурный scatter декораций.
/// Один seed → идентичная сцена.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время продвигается вручную ровно на один 60Hz tick за `app.update()`
/// (TimeUpdateStrategy::ManualDuration) — headless прогоны полностью
/// детерминированы и не зависят от wall clock.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(TICK_RATE))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / TICK_RATE,
        )));

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Собирает компоненты типа T в байтовый слепок, отсортированный по
/// Entity ID. Сериализация через Debug — достаточно для сравнения
/// прогонов между собой.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    entities.sort_by_key(|(entity, _)| entity.index());

    let mut snapshot = Vec::new();
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
