//! Input domain — маппинг клавиатуры и джойстика на CarControls
//!
//! Симуляция сама input не опрашивает: хост (клиент, тест, скрипт)
//! зовёт эти функции из своих event-хэндлеров, tick читает snapshot.

pub mod joystick;
pub mod keymap;

pub use joystick::*;
pub use keymap::*;
