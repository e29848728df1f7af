//! Классификация устройства по viewport

use super::settings::QualityLevel;

/// Класс устройства (по ширине viewport в CSS-пикселях)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// Границы: < 768 mobile, < 1024 tablet, дальше desktop
    pub fn from_viewport_width(width: f32) -> Self {
        if width < 768.0 {
            DeviceClass::Mobile
        } else if width < 1024.0 {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Стартовый уровень качества
///
/// Mobile стартует с Low, tablet — с Medium; desktop получает High только
/// при намёке на дискретный GPU (хост решает как его определить), иначе
/// Medium. FPS-монитор дальше корректирует сам.
pub fn initial_quality(device: DeviceClass, discrete_gpu: bool) -> QualityLevel {
    match device {
        DeviceClass::Mobile => QualityLevel::Low,
        DeviceClass::Tablet => QualityLevel::Medium,
        DeviceClass::Desktop => {
            if discrete_gpu {
                QualityLevel::High
            } else {
                QualityLevel::Medium
            }
        }
    }
}
