use std::ops::Range;

/// Ordered, mutable palette of packed 24-bit RGB colors.
///
/// Index-based access is deliberately lenient: reading past the end returns
/// black (`0`) rather than failing, and writing past the end appends instead
/// of erroring. A container holding exactly one color is "single-color": its
/// [`get_at`](Self::get_at) ignores the index argument and always returns
/// that one color.
///
/// Serializes transparently as an array of integers, so a JSON palette is
/// simply `[16711680, 255]`.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ColorContainer {
    colors: Vec<u32>,
}

impl ColorContainer {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a palette from an ordered color sequence.
    pub fn from_colors(colors: Vec<u32>) -> Self {
        Self { colors }
    }

    /// Ordered view of the palette colors.
    pub fn colors(&self) -> &[u32] {
        &self.colors
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether the palette holds exactly one color.
    pub fn is_single_color(&self) -> bool {
        self.colors.len() == 1
    }

    /// Color at `index`.
    ///
    /// Single-color containers ignore `index` and return their lone color.
    /// Otherwise an out-of-range `index` returns black (`0`), not an error.
    pub fn get_at(&self, index: usize) -> u32 {
        if self.is_single_color() {
            return self.colors[0];
        }
        self.colors.get(index).copied().unwrap_or(0)
    }

    /// Colors at each index of `range`, with the same fallback rules as
    /// [`get_at`](Self::get_at).
    pub fn get_range(&self, range: Range<usize>) -> Vec<u32> {
        range.map(|i| self.get_at(i)).collect()
    }

    /// Set the color at `index`, appending when `index` does not yet exist.
    pub fn set_at(&mut self, index: usize, color: u32) {
        match self.colors.get_mut(index) {
            Some(slot) => *slot = color,
            None => self.colors.push(color),
        }
    }

    /// Set every index of `range` to `color`, appending for each index that
    /// does not yet exist.
    pub fn set_range(&mut self, range: Range<usize>, color: u32) {
        for i in range {
            self.set_at(i, color);
        }
    }

    /// Append a color to the end of the palette.
    pub fn append(&mut self, color: u32) {
        self.colors.push(color);
    }

    /// Iterate over the palette colors in order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.colors.iter().copied()
    }
}

impl From<Vec<u32>> for ColorContainer {
    fn from(colors: Vec<u32>) -> Self {
        Self::from_colors(colors)
    }
}

impl FromIterator<u32> for ColorContainer {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::from_colors(iter.into_iter().collect())
    }
}

// Equality is defined per ordered pair of types rather than through dynamic
// dispatch: container vs container compares color sequences, container vs
// prepared buffer compares against the prepared snapshot of its source
// palette, and container vs raw integer holds only for single-color palettes.

impl PartialEq for ColorContainer {
    fn eq(&self, other: &Self) -> bool {
        self.colors == other.colors
    }
}

impl Eq for ColorContainer {}

impl PartialEq<PreparedColorContainer> for ColorContainer {
    fn eq(&self, other: &PreparedColorContainer) -> bool {
        self.colors == other.source
    }
}

impl PartialEq<u32> for ColorContainer {
    fn eq(&self, other: &u32) -> bool {
        self.is_single_color() && self.colors[0] == *other
    }
}

/// Read-only per-pixel color buffer produced by
/// [`ColorContainer::prepare`](crate::ColorContainer::prepare).
///
/// Holds the expanded gradient (one entry per physical pixel) together with
/// an owned snapshot of the source palette taken at preparation time. The
/// snapshot exists for equality checks against the originating container;
/// mutating that container afterwards does not affect an already prepared
/// buffer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PreparedColorContainer {
    pub(crate) colors: Vec<u32>,
    pub(crate) source: Vec<u32>,
}

impl PreparedColorContainer {
    /// The expanded per-pixel colors, one entry per pixel.
    pub fn colors(&self) -> &[u32] {
        &self.colors
    }

    /// Snapshot of the palette this buffer was prepared from.
    pub fn source_colors(&self) -> &[u32] {
        &self.source
    }

    /// Number of pixels in the buffer.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at pixel `index`, with black (`0`) returned past the end.
    pub fn get_at(&self, index: usize) -> u32 {
        self.colors.get(index).copied().unwrap_or(0)
    }

    /// Iterate over the per-pixel colors in strip order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.colors.iter().copied()
    }
}

impl PartialEq<ColorContainer> for PreparedColorContainer {
    fn eq(&self, other: &ColorContainer) -> bool {
        other == self
    }
}
