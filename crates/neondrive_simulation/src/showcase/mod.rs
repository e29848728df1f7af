//! Showcase domain — стенды portfolio и панели
//!
//! Содержит:
//! - detect_nearby (edge-triggered marker близости)
//! - interact_opens_panel (тормоз в радиусе = открыть панель)
//! - handle_close_intents (запрос закрытия от UI хоста)
//! - animate_holograms (idle-анимация голограмм)

pub mod events;
pub mod systems;


pub use events::*;
pub use systems::*;
