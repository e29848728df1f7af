//! Camera domain — trailing follow-камера за машиной

pub mod follow;


pub use follow::*;
