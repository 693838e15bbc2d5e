use crate::layout::location::Location;

/// A 3-axis rotation, in radians, applied about X first, then Y, then Z.
///
/// Plane-sweep grouping rotates every pixel into the plane-relative frame
/// with this exact order and then reads the rotated X coordinate, so the
/// same `Rotation` value always reproduces the same bucket membership.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rotation {
    /// Angle about the X axis, radians.
    pub x: f64,
    /// Angle about the Y axis, radians.
    pub y: f64,
    /// Angle about the Z axis, radians.
    pub z: f64,
}

impl Rotation {
    /// Rotation by `(x, y, z)` radians about the respective axes.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// No rotation.
    pub fn none() -> Self {
        Self::default()
    }

    /// Rotate `point` about the X axis, then Y, then Z.
    pub fn apply(self, point: Location) -> Location {
        let (sx, cx) = self.x.sin_cos();
        let (sy, cy) = self.y.sin_cos();
        let (sz, cz) = self.z.sin_cos();

        // About X: y/z plane.
        let (x, y, z) = (point.x, point.y, point.z);
        let (y, z) = (y * cx - z * sx, y * sx + z * cx);
        // About Y: z/x plane.
        let (z, x) = (z * cy - x * sy, z * sy + x * cy);
        // About Z: x/y plane.
        let (x, y) = (x * cz - y * sz, x * sz + y * cz);

        Location::new(x, y, z)
    }
}
