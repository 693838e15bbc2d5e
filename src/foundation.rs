//! Shared plumbing: error taxonomy, diagnostics, packed-RGB math.

pub mod diag;
pub mod error;
pub mod math;
