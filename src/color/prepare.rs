//! Gradient expansion: palette -> per-pixel color buffer.
//!
//! A palette of `k` colors is spread across `pixel_count` pixels by placing
//! each palette color at a "pure pixel" (an exact, unblended anchor) and
//! filling the gaps with per-channel linear blends toward the next palette
//! color. Pure pixel `p` sits at `round(spacing * p)` where
//! `spacing = pixel_count / k`; rounding is half-up (`f64::round`, half away
//! from zero — all positions here are non-negative).

use crate::color::container::{ColorContainer, PreparedColorContainer};
use crate::foundation::error::{LedloomError, LedloomResult};
use crate::foundation::math::blend;

impl ColorContainer {
    /// Expand this palette into a per-pixel gradient buffer of exactly
    /// `pixel_count` colors.
    ///
    /// A pixel exactly on a pure pixel takes that palette color unblended;
    /// when several palette colors round to the same pure position, the last
    /// such color wins. Every other pixel is assigned to the first pure
    /// pixel `p` (in palette order) with `i - p < spacing` and blends from
    /// that segment's color toward the next palette color (wrapping modulo
    /// `k`, with the last segment running to the strip's end) by
    /// `round((i - p) / d * 255)` on the 0–255 blend scale.
    ///
    /// A single-color palette produces a flat buffer with no blending. A
    /// palette larger than `pixel_count` still produces exactly
    /// `pixel_count` entries.
    ///
    /// # Errors
    ///
    /// [`LedloomError::InvalidConfiguration`] when `pixel_count` is zero or
    /// the palette is empty.
    pub fn prepare(&self, pixel_count: usize) -> LedloomResult<PreparedColorContainer> {
        if pixel_count == 0 {
            return Err(LedloomError::invalid_configuration(
                "prepare requires a positive pixel count",
            ));
        }
        if self.is_empty() {
            return Err(LedloomError::invalid_configuration(
                "cannot prepare an empty palette",
            ));
        }

        let palette = self.colors();
        let source = palette.to_vec();

        // Degenerate single-color palette: flat buffer, nothing to blend
        // toward.
        if palette.len() == 1 {
            return Ok(PreparedColorContainer {
                colors: vec![palette[0]; pixel_count],
                source,
            });
        }

        let k = palette.len();
        let spacing = pixel_count as f64 / k as f64;
        let pure_pixels: Vec<usize> = (0..k)
            .map(|p| (spacing * p as f64).round() as usize)
            .collect();

        let mut colors = Vec::with_capacity(pixel_count);
        for i in 0..pixel_count {
            // Anchor pixels take their palette color unblended. When several
            // palette colors round to the same pure position the last one
            // wins; the first-match scan below governs only non-anchor
            // pixels.
            if let Some(p) = pure_pixels.iter().rposition(|&pp| pp == i) {
                colors.push(palette[p]);
                continue;
            }

            // First matching pure pixel in palette order is the defined
            // tie-break for segment membership, not nearest-neighbor.
            let p = pure_pixels
                .iter()
                .position(|&pp| (i as f64 - pp as f64) < spacing)
                .unwrap_or(k - 1);
            let pp = pure_pixels[p];

            // Distance to the next pure pixel; the last segment runs to the
            // strip's end rather than wrapping back to pixel 0.
            let d = if p == k - 1 {
                pixel_count - pp
            } else {
                pure_pixels[p + 1] - pp
            };

            if d == 0 {
                colors.push(palette[p]);
                continue;
            }

            let amount = (((i as f64 - pp as f64) / d as f64) * 255.0).round() as u8;
            colors.push(blend(palette[p], palette[(p + 1) % k], amount));
        }

        Ok(PreparedColorContainer { colors, source })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/prepare.rs"]
mod tests;
