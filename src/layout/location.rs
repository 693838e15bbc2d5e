/// Immutable 3D coordinate of one physical pixel.
///
/// Compared structurally; coordinates are expected to be finite.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Location {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Location {
    /// Coordinate at `(x, y, z)`.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Origin `(0, 0, 0)`.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Position of pixel `index` on a default one-dimensional strip with
    /// unit spacing: `(index, 0, 0)`.
    pub fn strip(index: usize) -> Self {
        Self::new(index as f64, 0.0, 0.0)
    }

    /// Bitwise coordinate key, used for exact duplicate detection.
    pub(crate) fn bits(self) -> (u64, u64, u64) {
        (self.x.to_bits(), self.y.to_bits(), self.z.to_bits())
    }
}

/// One physical pixel: its strip index paired with its location.
///
/// Created exactly once at manager construction, never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PixelLocation {
    /// Index of the pixel on the strip, contiguous from zero.
    pub index: usize,
    /// Physical location of the pixel.
    pub location: Location,
}

impl PixelLocation {
    /// Pair `index` with `location`.
    pub fn new(index: usize, location: Location) -> Self {
        Self { index, location }
    }
}

/// Per-axis spatial extent of an installation: `|min| + |max|` on each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Distance {
    /// Extent along the X axis.
    pub x: f64,
    /// Extent along the Y axis.
    pub y: f64,
    /// Extent along the Z axis.
    pub z: f64,
}

impl Distance {
    /// Extent `(x, y, z)`.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}
