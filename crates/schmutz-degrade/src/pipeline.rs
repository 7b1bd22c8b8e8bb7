// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Degradation pipeline — fixed-order transform chain and numbered copy
// writer.

use std::path::Path;

use image::RgbImage;
use rand::Rng;
use schmutz_core::error::{Result, SchmutzError};
use schmutz_core::{DegradeConfig, DegradePlan};
use tracing::{debug, info, instrument};

use crate::sample::DrawnParams;
use crate::transforms;

/// The print/scan degradation pipeline.
///
/// Applies the transforms named by a [`DegradePlan`] in a fixed order —
/// rotation, translation, contrast, brightness, Gaussian noise,
/// salt-and-pepper noise, spots — regardless of how the plan was assembled.
/// The pipeline itself is stateless apart from its range configuration; the
/// caller owns the RNG, so seeded runs are reproducible.
pub struct DegradePipeline {
    config: DegradeConfig,
}

impl DegradePipeline {
    /// Build a pipeline from a validated configuration.
    pub fn new(config: DegradeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configured transform ranges.
    pub fn config(&self) -> &DegradeConfig {
        &self.config
    }

    /// Produce one degraded copy of `img`.
    ///
    /// Draws fresh values for every `Randomized` parameter, then applies the
    /// fixed-order chain. An empty plan returns a byte-identical copy.
    #[instrument(skip_all, fields(width = img.width(), height = img.height()))]
    pub fn degrade_one<R: Rng>(
        &self,
        img: &RgbImage,
        plan: &DegradePlan,
        rng: &mut R,
    ) -> RgbImage {
        if plan.is_empty() {
            debug!("Empty plan; returning unmodified copy");
            return img.clone();
        }

        let drawn = DrawnParams::draw(plan, &self.config, rng);
        self.apply(img.clone(), &drawn, rng)
    }

    /// Apply already-drawn parameters in pipeline order. Deterministic given
    /// the drawn values, except for the per-pixel noise draws.
    fn apply<R: Rng>(&self, img: RgbImage, drawn: &DrawnParams, rng: &mut R) -> RgbImage {
        let mut img = img;

        if let Some(degrees) = drawn.rotation {
            img = transforms::rotate(img, degrees);
        }
        if let Some((dx, dy)) = drawn.translation {
            img = transforms::translate(img, dx, dy);
        }
        if let Some(factor) = drawn.contrast {
            img = transforms::contrast(img, factor);
        }
        if let Some(factor) = drawn.brightness {
            img = transforms::brightness(img, factor);
        }
        if let Some(sigma) = drawn.gaussian {
            img = transforms::gaussian(img, sigma, rng);
        }
        if let Some(density) = drawn.salt_pepper {
            img = transforms::salt_pepper(img, density, rng);
        }
        if let Some(count) = drawn.spot {
            img = transforms::spots(img, count, self.config.spot_radius_px, rng);
        }

        img
    }

    /// Write `count` degraded copies of `img` as `output_0.png` …
    /// `output_{count-1}.png` under `out_dir`, re-drawing randomized
    /// parameters for every copy.
    ///
    /// The directory is created if missing. Any failure aborts the whole
    /// run; copies already written are left on disk.
    #[instrument(skip_all, fields(out_dir = %out_dir.as_ref().display(), count))]
    pub fn write_copies<R: Rng>(
        &self,
        img: &RgbImage,
        plan: &DegradePlan,
        out_dir: impl AsRef<Path>,
        count: u32,
        rng: &mut R,
    ) -> Result<()> {
        let out_dir = out_dir.as_ref();
        std::fs::create_dir_all(out_dir)?;

        for i in 0..count {
            let path = out_dir.join(format!("output_{i}.png"));
            let copy = self.degrade_one(img, plan, rng);
            copy.save(&path).map_err(|err| {
                SchmutzError::Image(format!("failed to save {}: {}", path.display(), err))
            })?;
            debug!(copy = i, path = %path.display(), "Copy written");
        }

        info!(count, "Degraded copies written");
        Ok(())
    }
}

/// Load the source image and convert it to RGB.
///
/// A missing or unreadable file is a fatal precondition failure — no output
/// is produced for the run.
#[instrument]
pub fn load_rgb(path: impl AsRef<Path> + std::fmt::Debug) -> Result<RgbImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|err| {
        SchmutzError::Image(format!("failed to open {}: {}", path.display(), err))
    })?;
    info!(
        width = img.width(),
        height = img.height(),
        "Source image loaded"
    );
    Ok(img.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use schmutz_core::Param;

    fn gray_image(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb([128u8, 128, 128]))
    }

    fn pipeline() -> DegradePipeline {
        DegradePipeline::new(DegradeConfig::default()).expect("default config")
    }

    /// Spec identity property: a plan with no transforms leaves the image
    /// byte-identical.
    #[test]
    fn empty_plan_is_identity() {
        let img = gray_image(64, 64);
        let mut rng = StdRng::seed_from_u64(1);
        let out = pipeline().degrade_one(&img, &DegradePlan::none(), &mut rng);
        assert_eq!(out.as_raw(), img.as_raw());
    }

    /// Neutral fixed values for every transform that has a neutral point
    /// also leave the image untouched.
    #[test]
    fn neutral_fixed_values_are_identity() {
        let img = gray_image(64, 64);
        let mut rng = StdRng::seed_from_u64(2);
        let plan = DegradePlan {
            rotation: Param::Fixed(0.0),
            translation: Param::Fixed((0, 0)),
            contrast: Param::Fixed(50.0),   // maps to factor 1.0
            brightness: Param::Fixed(50.0), // maps to factor 1.0
            salt_pepper: Param::Fixed(0.0),
            spot: Param::Fixed(0),
            ..DegradePlan::none()
        };
        let out = pipeline().degrade_one(&img, &plan, &mut rng);
        assert_eq!(out.as_raw(), img.as_raw());
    }

    /// The canvas never changes size, whatever the plan.
    #[test]
    fn dimensions_are_preserved() {
        let img = gray_image(120, 90);
        let mut rng = StdRng::seed_from_u64(3);
        let out = pipeline().degrade_one(&img, &DegradePlan::all_randomized(), &mut rng);
        assert_eq!((out.width(), out.height()), (120, 90));
    }

    /// Spec non-determinism property: five all-randomized copies are not all
    /// pixel-identical.
    #[test]
    fn randomized_copies_differ() {
        let img = gray_image(80, 80);
        let mut rng = StdRng::seed_from_u64(4);
        let pipeline = pipeline();
        let plan = DegradePlan::all_randomized();

        let copies: Vec<Vec<u8>> = (0..5)
            .map(|_| pipeline.degrade_one(&img, &plan, &mut rng).into_raw())
            .collect();
        assert!(
            copies.iter().any(|c| c != &copies[0]),
            "five randomized copies were all pixel-identical"
        );
    }

    /// Transforms apply in pipeline order, not plan-construction order:
    /// translating after rotating a half-black image differs from the
    /// reverse, and the pipeline must pick its own order.
    #[test]
    fn fixed_order_rotation_before_translation() {
        let mut img = gray_image(60, 60);
        for y in 0..60 {
            for x in 0..30 {
                img.put_pixel(x, y, Rgb([0u8, 0, 0]));
            }
        }

        let plan = DegradePlan {
            rotation: Param::Fixed(30.0),
            translation: Param::Fixed((15, 0)),
            ..DegradePlan::none()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let piped = pipeline().degrade_one(&img, &plan, &mut rng);

        let by_hand =
            transforms::translate(transforms::rotate(img.clone(), 30.0), 15.0, 0.0);
        assert_eq!(piped.as_raw(), by_hand.as_raw());

        let reversed =
            transforms::rotate(transforms::translate(img, 15.0, 0.0), 30.0);
        assert_ne!(piped.as_raw(), reversed.as_raw());
    }

    #[test]
    fn write_copies_produces_numbered_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let img = gray_image(32, 32);
        let mut rng = StdRng::seed_from_u64(6);

        pipeline()
            .write_copies(&img, &DegradePlan::all_randomized(), dir.path(), 4, &mut rng)
            .expect("write_copies");

        for i in 0..4 {
            let path = dir.path().join(format!("output_{i}.png"));
            assert!(path.exists(), "missing {}", path.display());
        }
        assert!(!dir.path().join("output_4.png").exists());
    }

    #[test]
    fn write_copies_outputs_decode_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let img = gray_image(32, 32);
        let mut rng = StdRng::seed_from_u64(7);

        pipeline()
            .write_copies(&img, &DegradePlan::none(), dir.path(), 1, &mut rng)
            .expect("write_copies");

        let reloaded = load_rgb(dir.path().join("output_0.png")).expect("reload");
        assert_eq!(reloaded.as_raw(), img.as_raw());
    }

    #[test]
    fn load_rgb_missing_file_is_fatal() {
        let err = load_rgb("/nonexistent/source.png").unwrap_err();
        assert!(matches!(err, SchmutzError::Image(_)));
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = DegradeConfig {
            salt_pepper_cap: 2.0,
            ..DegradeConfig::default()
        };
        assert!(DegradePipeline::new(config).is_err());
    }
}
