// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Ink-spot degradation — opaque black blotches as left by a dirty drum or
// platen.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;
use rand::Rng;
use tracing::debug;

/// Draw `count` solid-black filled circles at uniform random positions, with
/// radii drawn uniformly from `radius_px`. Centers can fall anywhere on the
/// canvas, so spots near the edge are clipped.
pub fn spots<R: Rng>(
    mut img: RgbImage,
    count: u32,
    radius_px: (i32, i32),
    rng: &mut R,
) -> RgbImage {
    if count == 0 {
        return img;
    }
    debug!(count, "Drawing ink spots");

    let (width, height) = img.dimensions();
    for _ in 0..count {
        let x = rng.gen_range(0..width) as i32;
        let y = rng.gen_range(0..height) as i32;
        let radius = rng.gen_range(radius_px.0..=radius_px.1);
        draw_filled_circle_mut(&mut img, (x, y), radius, Rgb([0u8, 0, 0]));
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use imageproc::region_labelling::{Connectivity, connected_components};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Count connected components of pure-black pixels against a non-black
    /// background.
    fn black_components(img: &RgbImage) -> usize {
        let mask = GrayImage::from_fn(img.width(), img.height(), |x, y| {
            if img.get_pixel(x, y).0 == [0, 0, 0] {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        });
        let labelled = connected_components(&mask, Connectivity::Four, Luma([0u8]));
        labelled.pixels().map(|p| p.0[0]).max().unwrap_or(0) as usize
    }

    #[test]
    fn zero_spots_is_identity() {
        let img = RgbImage::from_pixel(100, 100, Rgb([128u8, 128, 128]));
        let mut rng = StdRng::seed_from_u64(7);
        let out = spots(img.clone(), 0, (10, 30), &mut rng);
        assert_eq!(out.as_raw(), img.as_raw());
    }

    /// Three fixed spots on solid gray: circles may overlap or clip at the
    /// edges, so between 1 and 3 black components, and every changed pixel
    /// must be pure black.
    #[test]
    fn three_spots_on_gray_form_black_components() {
        let img = RgbImage::from_pixel(100, 100, Rgb([128u8, 128, 128]));
        let mut rng = StdRng::seed_from_u64(8);
        let out = spots(img, 3, (10, 30), &mut rng);

        let components = black_components(&out);
        assert!(
            (1..=3).contains(&components),
            "expected 1..=3 black components, got {components}"
        );

        let black_pixels = out.pixels().filter(|p| p.0 == [0, 0, 0]).count();
        // Even a circle clipped to a corner quarter keeps ~ pi * 10^2 / 4 pixels.
        assert!(black_pixels > 75, "too few black pixels: {black_pixels}");

        for pixel in out.pixels() {
            assert!(
                pixel.0 == [128, 128, 128] || pixel.0 == [0, 0, 0],
                "spot drawing changed a pixel to a non-black value: {:?}",
                pixel.0
            );
        }
    }
}
