//! Packed 24-bit RGB helpers.
//!
//! Colors are `0x00RRGGBB` integers. Values outside the 24-bit range are
//! accepted by the containers but arithmetic on them is undefined; callers
//! must supply valid packed colors.

pub(crate) fn red(c: u32) -> i32 {
    ((c >> 16) & 0xFF) as i32
}

pub(crate) fn green(c: u32) -> i32 {
    ((c >> 8) & 0xFF) as i32
}

pub(crate) fn blue(c: u32) -> i32 {
    (c & 0xFF) as i32
}

pub(crate) fn pack(r: i32, g: i32, b: i32) -> u32 {
    ((r as u32 & 0xFF) << 16) | ((g as u32 & 0xFF) << 8) | (b as u32 & 0xFF)
}

/// Per-channel linear interpolation between two packed RGB colors.
///
/// `amount` is on a 0–255 scale: 0 returns `current`, 255 returns `target`,
/// intermediate values compute `channel = low + (high - low) * amount / 255`
/// independently per channel with truncating integer division.
pub fn blend(current: u32, target: u32, amount: u8) -> u32 {
    let amount = i32::from(amount);
    let channel = |low: i32, high: i32| low + (high - low) * amount / 255;
    pack(
        channel(red(current), red(target)),
        channel(green(current), green(target)),
        channel(blue(current), blue(target)),
    )
}
