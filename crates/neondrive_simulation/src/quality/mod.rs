//! Quality domain — адаптация fidelity под устройство и реальный FPS
//!
//! Policy/config selection: выбор одного из трёх пресетов и его
//! применение к simulation-стороне сцены (видимость декораций).
//! Рендерные опции пресета (pixel ratio, тени, отражения) читает клиент.

pub mod apply;
pub mod device;
pub mod monitor;
pub mod settings;


pub use apply::*;
pub use device::*;
pub use monitor::*;
pub use settings::*;

use bevy::prelude::*;

/// Plugin quality-контроллера
///
/// Семплирование FPS и применение пресета живут в Update: они меряют
/// реальные кадры рендера, а не simulation ticks.
pub struct QualityPlugin;

impl Plugin for QualityPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<QualityChanged>()
            .init_resource::<ActiveQuality>()
            .init_resource::<FpsMonitor>()
            .add_systems(Update, (sample_frame_rate, apply_quality).chain());
    }
}
