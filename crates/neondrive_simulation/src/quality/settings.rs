//! Пресеты качества

use serde::{Deserialize, Serialize};

/// Дискретный уровень качества
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Low,
    Medium,
    High,
}

impl QualityLevel {
    pub fn as_str(&self) -> &str {
        match self {
            QualityLevel::Low => "low",
            QualityLevel::Medium => "medium",
            QualityLevel::High => "high",
        }
    }
}

/// Иммутабельный пресет рендер-опций уровня
///
/// Simulation применяет только decoration_fraction; остальное — контракт
/// для рендера (клиент читает и настраивает renderer сам).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualitySettings {
    /// Верхняя граница pixel ratio (до удвоения хостом)
    pub pixel_ratio_cap: f32,
    /// Сторона shadow map (texels)
    pub shadow_map_size: u32,
    pub shadows_enabled: bool,
    /// Доля видимых декораций (0..=1)
    pub decoration_fraction: f32,
    pub reflections_enabled: bool,
    pub post_processing_enabled: bool,
}

impl QualityLevel {
    /// Пресет уровня (единственный источник значений)
    pub const fn settings(self) -> QualitySettings {
        match self {
            QualityLevel::Low => QualitySettings {
                pixel_ratio_cap: 0.5,
                shadow_map_size: 512,
                shadows_enabled: false,
                decoration_fraction: 0.3,
                reflections_enabled: false,
                post_processing_enabled: false,
            },
            QualityLevel::Medium => QualitySettings {
                pixel_ratio_cap: 0.75,
                shadow_map_size: 1024,
                shadows_enabled: true,
                decoration_fraction: 0.6,
                reflections_enabled: false,
                post_processing_enabled: false,
            },
            QualityLevel::High => QualitySettings {
                pixel_ratio_cap: 1.0,
                shadow_map_size: 2048,
                shadows_enabled: true,
                decoration_fraction: 1.0,
                reflections_enabled: true,
                post_processing_enabled: true,
            },
        }
    }
}

/// Эффективный pixel ratio: native ratio устройства, срезанный пресетом
///
/// Cap удваивается — retina-экраны получают запас, не теряя лимит.
pub fn effective_pixel_ratio(device_pixel_ratio: f32, settings: &QualitySettings) -> f32 {
    device_pixel_ratio.min(settings.pixel_ratio_cap * 2.0)
}
