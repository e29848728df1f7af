//! Showcase-стенды: разделы portfolio, расставленные по сцене

use bevy::prelude::*;

/// Раздел portfolio, который показывает стенд
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShowcaseKind {
    Introduction,
    Projects,
    Skills,
    Leadership,
    Contact,
}

impl ShowcaseKind {
    pub fn as_str(&self) -> &str {
        match self {
            ShowcaseKind::Introduction => "introduction",
            ShowcaseKind::Projects => "projects",
            ShowcaseKind::Skills => "skills",
            ShowcaseKind::Leadership => "leadership",
            ShowcaseKind::Contact => "contact",
        }
    }
}

/// Стенд в сцене (позиция — в Transform entity)
///
/// Машина в радиусе + тормоз = открыть панель стенда.
#[derive(Component, Debug, Clone, Copy)]
pub struct Showcase {
    pub kind: ShowcaseKind,
    /// Радиус взаимодействия (world units)
    pub interact_radius: f32,
}

impl Showcase {
    pub fn new(kind: ShowcaseKind) -> Self {
        Self {
            kind,
            interact_radius: 8.0,
        }
    }
}

/// Marker: машина сейчас в радиусе этого стенда
///
/// Edge-triggered: вставляется ОДИН РАЗ при входе в радиус, снимается при
/// выходе — без спама событий каждый tick (хост показывает по нему
/// interaction prompt).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Nearby;

/// Голограмма над стендом (idle-анимация)
///
/// spin и hover_offset — выходные величины для рендера, на взаимодействие
/// не влияют.
#[derive(Component, Debug, Clone, Copy)]
pub struct Hologram {
    /// Накопленный поворот вокруг Y (радианы)
    pub spin: f32,
    /// Базовая высота парения над стендом
    pub base_height: f32,
    /// Текущее синусоидальное смещение по Y
    pub hover_offset: f32,
}

impl Default for Hologram {
    fn default() -> Self {
        Self {
            spin: 0.0,
            base_height: 4.0,
            hover_offset: 0.0,
        }
    }
}
