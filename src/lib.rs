//! Ledloom models the physical layout of pixels in an addressable LED
//! installation (1D strip, 2D panel, or 3D volume) and derives, from that
//! layout, the spatial groupings and color gradients that animations consume.
//!
//! # Core pieces
//!
//! 1. **Layout**: [`PixelLocationManager`] ingests per-pixel 3D coordinates
//!    (`Location`), validates them, computes bounding statistics, samples
//!    random points inside the bounding box, and groups pixels along an
//!    arbitrarily rotated axis for plane-sweep animations.
//! 2. **Color**: [`ColorContainer`] is a small palette of packed 24-bit RGB
//!    integers; [`ColorContainer::prepare`] expands it into a per-pixel
//!    gradient buffer ([`PreparedColorContainer`]) for a strip of arbitrary
//!    length.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure and synchronous**: every operation is a bounded, CPU-only
//!   computation over in-memory arrays; `prepare` and
//!   [`PixelLocationManager::group_pixels_by_axis`] take `&self` and are safe
//!   to call concurrently on a shared read-only instance.
//! - **Eager validation**: configuration mistakes (zero pixel counts,
//!   duplicate pixel coordinates, too few coordinates) surface immediately as
//!   [`LedloomError`] values, never as partially constructed state.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod foundation;
mod layout;

pub use color::container::{ColorContainer, PreparedColorContainer};
pub use foundation::diag::{
    DiagnosticRecord, DiagnosticSink, RecordingSink, Severity, TracingSink,
};
pub use foundation::error::{LedloomError, LedloomResult};
pub use foundation::math::blend;
pub use layout::location::{Distance, Location, PixelLocation};
pub use layout::manager::{AxisBounds, PixelLocationManager};
pub use layout::rotation::Rotation;
