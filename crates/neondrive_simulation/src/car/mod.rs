//! Car domain — кинематика машины-аватара
//!
//! Содержит:
//! - update_longitudinal_speed (газ / линейное затухание / тормоз / clamp)
//! - apply_steering (heading, только в движении)
//! - update_tilt (визуальный крен кузова)
//! - integrate_position (интеграция позиции + итоговый rotation quat)

pub mod kinematics;


pub use kinematics::*;
