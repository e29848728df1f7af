//! Environment domain — декорации и "часы" свечения пола

pub mod systems;

#[cfg(test)]
mod systems_tests;

pub use systems::*;
