//! Showcase events

use bevy::prelude::*;

use crate::components::ShowcaseKind;

/// Event: панель стенда открылась
///
/// Обрабатывается хостом (клиент показывает контент раздела).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelOpened {
    pub kind: ShowcaseKind,
}

/// Event: панель закрылась (вытеснена другой или закрыта хостом)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelClosed {
    pub kind: ShowcaseKind,
}

/// Intent: хост просит закрыть активную панель (кнопка close, Esc)
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ClosePanelIntent;
