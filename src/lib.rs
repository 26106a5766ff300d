//! Almanac library crate — re-exports all modules for integration testing.
//!
//! The binary crate (`main.rs`) is a thin CLI around `engine::evaluate_all`.
//! This library crate exposes the same modules so that `tests/` integration
//! tests can drive full scenarios through the public API.

pub mod shared;
pub mod calendar;
pub mod farming;
pub mod economy;
pub mod data;
pub mod engine;
