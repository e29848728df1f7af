//! ECS Components для сцены portfolio
//!
//! Организация по доменам:
//! - car: машина-аватар (Car, CarTilt)
//! - controls: пять булевых флагов управления (CarControls)
//! - camera: trailing follow-камера (FollowCamera)
//! - showcase: стенды portfolio и их голограммы (Showcase, Nearby, Hologram)
//! - decoration: плавающие неоновые декорации (Decoration)

pub mod camera;
pub mod car;
pub mod controls;
pub mod decoration;
pub mod showcase;

// Re-exports для удобного импорта
pub use camera::*;
pub use car::*;
pub use controls::*;
pub use decoration::*;
pub use showcase::*;
