// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Noise degradations — sensor noise (Gaussian) and dust (salt-and-pepper).

use image::{Rgb, RgbImage};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

/// Add zero-mean Gaussian noise with standard deviation `sigma` to every
/// channel of every pixel, clamped to the valid pixel range.
pub fn gaussian<R: Rng>(mut img: RgbImage, sigma: f32, rng: &mut R) -> RgbImage {
    if sigma <= 0.0 {
        return img;
    }
    debug!(sigma, "Adding Gaussian noise");

    // sigma is positive here, so construction cannot fail.
    let normal = Normal::new(0.0f32, sigma).expect("sigma is positive and finite");

    for pixel in img.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            let noisy = *channel as f32 + normal.sample(rng);
            *channel = noisy.clamp(0.0, 255.0) as u8;
        }
    }
    img
}

/// Flip a `density` fraction of pixels to pure black or pure white (50/50).
///
/// Pixel positions are drawn independently, so at higher densities some
/// draws land on the same pixel twice; the altered fraction is therefore at
/// most `density`. Density 0 leaves the image untouched.
pub fn salt_pepper<R: Rng>(mut img: RgbImage, density: f64, rng: &mut R) -> RgbImage {
    if density <= 0.0 {
        return img;
    }
    debug!(density, "Adding salt-and-pepper noise");

    let (width, height) = img.dimensions();
    let num_noisy = (density * width as f64 * height as f64) as u64;

    for _ in 0..num_noisy {
        let x = rng.gen_range(0..width);
        let y = rng.gen_range(0..height);
        let value = if rng.gen_bool(0.5) { 0u8 } else { 255u8 };
        img.put_pixel(x, y, Rgb([value, value, value]));
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn gray_image(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb([128u8, 128, 128]))
    }

    #[test]
    fn gaussian_zero_sigma_is_identity() {
        let img = gray_image(32, 32);
        let mut rng = StdRng::seed_from_u64(1);
        let out = gaussian(img.clone(), 0.0, &mut rng);
        assert_eq!(out.as_raw(), img.as_raw());
    }

    #[test]
    fn gaussian_perturbs_pixels() {
        let img = gray_image(32, 32);
        let mut rng = StdRng::seed_from_u64(1);
        let out = gaussian(img.clone(), 10.0, &mut rng);
        assert_ne!(out.as_raw(), img.as_raw());
        assert_eq!((out.width(), out.height()), (32, 32));
    }

    #[test]
    fn salt_pepper_zero_density_is_identity() {
        let img = gray_image(32, 32);
        let mut rng = StdRng::seed_from_u64(2);
        let out = salt_pepper(img.clone(), 0.0, &mut rng);
        assert_eq!(out.as_raw(), img.as_raw());
    }

    /// At the calibrated cap the altered-pixel fraction must sit near the
    /// requested density — at most the cap (duplicate draws only reduce it),
    /// and not implausibly below it.
    #[test]
    fn salt_pepper_density_within_bounds() {
        let density = 0.08;
        let img = gray_image(100, 100);
        let mut rng = StdRng::seed_from_u64(3);
        let out = salt_pepper(img, density, &mut rng);

        let altered = out
            .pixels()
            .filter(|p| p.0 == [0, 0, 0] || p.0 == [255, 255, 255])
            .count();
        let fraction = altered as f64 / (100.0 * 100.0);

        assert!(fraction <= density, "altered fraction {fraction} above cap");
        assert!(
            fraction >= density * 0.8,
            "altered fraction {fraction} implausibly far below cap {density}"
        );
    }

    #[test]
    fn salt_pepper_pixels_are_pure_black_or_white() {
        let img = gray_image(50, 50);
        let mut rng = StdRng::seed_from_u64(4);
        let out = salt_pepper(img, 0.05, &mut rng);

        for pixel in out.pixels() {
            assert!(
                pixel.0 == [128, 128, 128] || pixel.0 == [0, 0, 0] || pixel.0 == [255, 255, 255],
                "unexpected pixel value {:?}",
                pixel.0
            );
        }
    }
}
