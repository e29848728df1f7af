//! FPS-монитор с автокоррекцией уровня качества

use bevy::prelude::*;

use super::device::DeviceClass;
use super::settings::QualityLevel;
use crate::logger::log_info;

/// Окно усреднения FPS (секунды)
pub const FPS_WINDOW_SECONDS: f32 = 1.0;

/// Текущий уровень качества и класс устройства
#[derive(Resource, Debug, Clone, Copy)]
pub struct ActiveQuality {
    pub level: QualityLevel,
    pub device: DeviceClass,
}

impl Default for ActiveQuality {
    fn default() -> Self {
        Self {
            level: QualityLevel::High,
            device: DeviceClass::Desktop,
        }
    }
}

/// Event: уровень качества сменился (вместе с замеренным FPS)
#[derive(Event, Debug, Clone, Copy)]
pub struct QualityChanged {
    pub level: QualityLevel,
    pub fps: f32,
}

/// Счётчик кадров текущего окна
#[derive(Resource, Debug, Default)]
pub struct FpsMonitor {
    pub frames: u32,
    pub elapsed: f32,
}

/// Правило автокоррекции уровня по замеренному FPS
///
/// - просадка ниже 20 → Low с любого уровня
/// - 40..50 на Low → поднять до Medium (осторожный возврат)
/// - выше 55 на Medium, но только desktop → High
///
/// Возвращает None если уровень менять не надо.
pub fn adjust_level(fps: f32, current: QualityLevel, device: DeviceClass) -> Option<QualityLevel> {
    if fps < 20.0 && current != QualityLevel::Low {
        return Some(QualityLevel::Low);
    }
    if fps > 40.0 && fps < 50.0 && current == QualityLevel::Low {
        return Some(QualityLevel::Medium);
    }
    if fps > 55.0 && current == QualityLevel::Medium && device == DeviceClass::Desktop {
        return Some(QualityLevel::High);
    }
    None
}

/// Система семплирования FPS (Update — реальные кадры рендера)
///
/// Копит кадры, раз в окно считает среднее и при необходимости меняет
/// ActiveQuality, сообщая об этом событием.
pub fn sample_frame_rate(
    time: Res<Time>,
    mut monitor: ResMut<FpsMonitor>,
    mut active: ResMut<ActiveQuality>,
    mut changes: EventWriter<QualityChanged>,
) {
    monitor.frames += 1;
    monitor.elapsed += time.delta_secs();

    if monitor.elapsed < FPS_WINDOW_SECONDS {
        return;
    }

    let fps = monitor.frames as f32 / monitor.elapsed;
    monitor.frames = 0;
    monitor.elapsed = 0.0;

    if let Some(next) = adjust_level(fps, active.level, active.device) {
        active.level = next;
        changes.write(QualityChanged { level: next, fps });
        log_info(&format!(
            "quality -> {} ({:.0} fps)",
            next.as_str(),
            fps
        ));
    }
}
