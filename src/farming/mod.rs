//! Farming domain — growth periods, harvest counting, and crop quality.
//!
//! Communicates with other domains exclusively through crate::shared types.

pub mod growth;
pub mod quality;
