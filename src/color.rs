//! Palettes and their per-pixel gradient expansion.

pub mod container;
pub mod prepare;
