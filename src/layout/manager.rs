use std::collections::HashSet;

use crate::foundation::diag::{DiagnosticSink, Severity, TracingSink};
use crate::foundation::error::{LedloomError, LedloomResult};
use crate::layout::location::{Distance, Location, PixelLocation};
use crate::layout::rotation::Rotation;

/// Source tag on every diagnostic emitted by the manager.
const DIAG_SOURCE: &str = "Pixel Location Manager";

/// Warning emitted when no locations were supplied and a strip is assumed.
const DEFAULT_STRIP_WARNING: &str =
    "no LED locations defined, assuming one-dimensional strip with equal spacing";

/// Inclusive per-axis bounds over all pixel locations.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxisBounds {
    /// Smallest coordinate on this axis.
    pub min: f64,
    /// Largest coordinate on this axis.
    pub max: f64,
}

impl AxisBounds {
    fn from_coords(coords: impl Iterator<Item = f64> + Clone) -> Self {
        let min = coords.clone().fold(f64::INFINITY, f64::min);
        let max = coords.fold(f64::NEG_INFINITY, f64::max);
        Self { min, max }
    }

    /// Midpoint `(min + max) / 2`.
    pub fn midpoint(self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Extent `|min| + |max|`.
    pub fn distance(self) -> f64 {
        self.min.abs() + self.max.abs()
    }

    fn sample(self, rng: &mut fastrand::Rng) -> f64 {
        self.min + (self.max - self.min) * rng.f64()
    }
}

/// Owns the physical layout of an installation's pixels and answers spatial
/// queries over it.
///
/// Constructed once per installation, read-only afterwards. Pixel indices
/// are the contiguous range `0..count`, in the order the locations were
/// supplied. All supplied locations must be pairwise distinct: two LEDs at
/// the identical coordinate cannot be disambiguated spatially, so duplicates
/// are rejected at construction.
#[derive(Clone, Debug)]
pub struct PixelLocationManager {
    pixel_locations: Vec<PixelLocation>,
    x: AxisBounds,
    y: AxisBounds,
    z: AxisBounds,
}

impl PixelLocationManager {
    /// Build a manager for `count` pixels.
    ///
    /// When `locations` is present, the first `count` entries are used (extra
    /// entries are ignored, not an error). When absent, a one-dimensional
    /// strip with unit spacing is synthesized (pixel `i` at `(i, 0, 0)`) and
    /// one warning diagnostic is emitted through the default `tracing` sink.
    ///
    /// # Errors
    ///
    /// - [`LedloomError::InvalidConfiguration`] when `count` is zero or two
    ///   of the first `count` locations are coordinate-equal.
    /// - [`LedloomError::OutOfRange`] when fewer than `count` locations are
    ///   supplied.
    pub fn new(locations: Option<&[Location]>, count: usize) -> LedloomResult<Self> {
        Self::with_diagnostics(locations, count, &TracingSink)
    }

    /// Same as [`new`](Self::new) with an explicit diagnostic sink, so tests
    /// and embedders can capture the structured warning record.
    pub fn with_diagnostics(
        locations: Option<&[Location]>,
        count: usize,
        diag: &dyn DiagnosticSink,
    ) -> LedloomResult<Self> {
        if count == 0 {
            return Err(LedloomError::invalid_configuration(
                "pixel count must be positive",
            ));
        }

        let pixel_locations = match locations {
            Some(locations) => {
                if locations.len() < count {
                    return Err(LedloomError::out_of_range(format!(
                        "{} locations supplied for {count} pixels",
                        locations.len()
                    )));
                }
                let mut seen = HashSet::with_capacity(count);
                for (index, location) in locations[..count].iter().enumerate() {
                    if !seen.insert(location.bits()) {
                        return Err(LedloomError::invalid_configuration(format!(
                            "duplicate pixel location {location:?} at index {index}"
                        )));
                    }
                }
                locations[..count]
                    .iter()
                    .enumerate()
                    .map(|(index, &location)| PixelLocation::new(index, location))
                    .collect()
            }
            None => {
                diag.record(Severity::Warn, DIAG_SOURCE, DEFAULT_STRIP_WARNING);
                (0..count)
                    .map(|index| PixelLocation::new(index, Location::strip(index)))
                    .collect::<Vec<_>>()
            }
        };

        let coords = |f: fn(Location) -> f64| pixel_locations.iter().map(move |p| f(p.location));
        let x = AxisBounds::from_coords(coords(|l| l.x));
        let y = AxisBounds::from_coords(coords(|l| l.y));
        let z = AxisBounds::from_coords(coords(|l| l.z));

        Ok(Self {
            pixel_locations,
            x,
            y,
            z,
        })
    }

    /// All pixels in index order.
    pub fn pixel_locations(&self) -> &[PixelLocation] {
        &self.pixel_locations
    }

    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixel_locations.len()
    }

    /// X-axis bounds over all pixels.
    pub fn x_bounds(&self) -> AxisBounds {
        self.x
    }

    /// Y-axis bounds over all pixels.
    pub fn y_bounds(&self) -> AxisBounds {
        self.y
    }

    /// Z-axis bounds over all pixels.
    pub fn z_bounds(&self) -> AxisBounds {
        self.z
    }

    /// Center of the bounding box: the three per-axis midpoints.
    pub fn default_location(&self) -> Location {
        Location::new(self.x.midpoint(), self.y.midpoint(), self.z.midpoint())
    }

    /// Per-axis `|min| + |max|` extents of the installation.
    pub fn default_distance(&self) -> Distance {
        Distance::new(self.x.distance(), self.y.distance(), self.z.distance())
    }

    /// A synthetic point drawn uniformly from the bounding box.
    ///
    /// The point is not guaranteed to coincide with any real pixel; it
    /// serves animations that need a random spatial origin (ripples,
    /// splats). The caller supplies the generator so runs are seedable.
    pub fn random_location(&self, rng: &mut fastrand::Rng) -> Location {
        Location::new(
            self.x.sample(rng),
            self.y.sample(rng),
            self.z.sample(rng),
        )
    }

    /// Group pixels into plane-sweep buckets along a rotated axis.
    ///
    /// Every pixel location is rotated by `rotation` (about X, then Y, then
    /// Z; see [`Rotation::apply`]) and its rotated X coordinate is quantized
    /// into half-open buckets of width `step_size` spanning from the minimum
    /// to the maximum rotated coordinate. The result is ordered by
    /// increasing bucket coordinate; buckets that contain no pixels are
    /// still present as empty sets so a sweeping animation idles over them
    /// instead of skipping frames. A pixel exactly on the maximum coordinate
    /// lands in the last bucket.
    ///
    /// Pure and recomputed on demand; rotation and step parameters vary per
    /// animation invocation, so nothing is cached.
    ///
    /// # Errors
    ///
    /// [`LedloomError::InvalidConfiguration`] when `step_size` is not a
    /// positive finite number.
    #[tracing::instrument(skip(self))]
    pub fn group_pixels_by_axis(
        &self,
        rotation: Rotation,
        step_size: f64,
    ) -> LedloomResult<Vec<HashSet<usize>>> {
        if !(step_size.is_finite() && step_size > 0.0) {
            return Err(LedloomError::invalid_configuration(
                "step size must be a positive finite number",
            ));
        }

        let rotated: Vec<f64> = self
            .pixel_locations
            .iter()
            .map(|p| rotation.apply(p.location).x)
            .collect();
        let min = rotated.iter().copied().fold(f64::INFINITY, f64::min);
        let max = rotated.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let bucket_count = (((max - min) / step_size).ceil() as usize).max(1);
        let mut buckets = vec![HashSet::new(); bucket_count];
        for (index, &coord) in rotated.iter().enumerate() {
            let slot = (((coord - min) / step_size).floor() as usize).min(bucket_count - 1);
            buckets[slot].insert(index);
        }
        Ok(buckets)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/manager.rs"]
mod tests;
