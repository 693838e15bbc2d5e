use super::*;

#[test]
fn single_color_palette_yields_flat_buffer() {
    let cc = ColorContainer::from_colors(vec![0xABCDEF]);
    for n in [1, 2, 7, 240] {
        let prepared = cc.prepare(n).unwrap();
        assert_eq!(prepared.len(), n);
        assert!(prepared.iter().all(|c| c == 0xABCDEF));
    }
}

#[test]
fn output_length_matches_pixel_count_for_any_palette_size() {
    let n = 8;
    for k in [1usize, 4, 8, 16] {
        let cc: ColorContainer = (0..k as u32).map(|c| c * 0x010101).collect();
        let prepared = cc.prepare(n).unwrap();
        assert_eq!(prepared.len(), n, "palette size {k}");
    }
}

#[test]
fn red_blue_palette_over_four_pixels() {
    let cc = ColorContainer::from_colors(vec![0xFF0000, 0x0000FF]);
    let prepared = cc.prepare(4).unwrap();

    // Pure pixels at round(0) = 0 and round(2) = 2.
    assert_eq!(prepared.get_at(0), 0xFF0000);
    assert_eq!(prepared.get_at(2), 0x0000FF);
    // Pixel 1 is the half-way blend from red toward blue, pixel 3 the
    // half-way blend of the wrapping segment from blue back toward red.
    assert_eq!(prepared.get_at(1), 0x7F0080);
    assert_eq!(prepared.get_at(3), 0x80007F);
}

#[test]
fn black_white_palette_interpolates_gray_levels() {
    let cc = ColorContainer::from_colors(vec![0x000000, 0xFFFFFF]);
    let prepared = cc.prepare(4).unwrap();
    assert_eq!(prepared.colors(), &[0x000000, 0x808080, 0xFFFFFF, 0x7F7F7F]);
}

#[test]
fn anchor_pixels_take_palette_colors_unblended() {
    let palette = vec![0x102030, 0x405060, 0x708090];
    let cc = ColorContainer::from_colors(palette.clone());
    let prepared = cc.prepare(30).unwrap();

    // spacing = 10, pure pixels at 0, 10, 20.
    assert_eq!(prepared.get_at(0), palette[0]);
    assert_eq!(prepared.get_at(10), palette[1]);
    assert_eq!(prepared.get_at(20), palette[2]);
}

#[test]
fn collided_anchor_shows_last_palette_color() {
    // Three colors over two pixels: spacing = 2/3, pure pixels [0, 1, 1].
    // The collided anchor at pixel 1 shows the last palette color that
    // rounds onto it, not the first.
    let cc = ColorContainer::from_colors(vec![0xFF0000, 0x00FF00, 0x0000FF]);
    let prepared = cc.prepare(2).unwrap();
    assert_eq!(prepared.get_at(0), 0xFF0000);
    assert_eq!(prepared.get_at(1), 0x0000FF);
}

#[test]
fn more_palette_colors_than_pixels_still_fits() {
    let cc: ColorContainer = (0..10u32).map(|c| c * 0x111111).collect();
    let prepared = cc.prepare(3).unwrap();
    assert_eq!(prepared.len(), 3);
    // spacing = 0.3: pure pixels land at [0,0,1,1,1,2,2,2,2,3], so every
    // output pixel is a collided anchor showing the last palette color
    // that rounds onto it.
    assert_eq!(prepared.colors(), &[0x111111, 0x444444, 0x888888]);
}

#[test]
fn zero_pixel_count_is_rejected() {
    let cc = ColorContainer::from_colors(vec![0xFF0000]);
    let err = cc.prepare(0).unwrap_err();
    assert!(matches!(err, LedloomError::InvalidConfiguration(_)));
}

#[test]
fn empty_palette_is_rejected() {
    let cc = ColorContainer::new();
    let err = cc.prepare(12).unwrap_err();
    assert!(matches!(err, LedloomError::InvalidConfiguration(_)));
}

#[test]
fn prepared_buffer_records_source_palette() {
    let cc = ColorContainer::from_colors(vec![0xFF0000, 0x00FF00, 0x0000FF]);
    let prepared = cc.prepare(16).unwrap();
    assert_eq!(prepared.source_colors(), cc.colors());
}
