// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Parameter sampling — turns a `DegradePlan` into the concrete values for one
// output copy.

use rand::Rng;
use schmutz_core::{DegradeConfig, DegradePlan, Param};
use tracing::trace;

/// Fully concrete parameters for ONE output copy, in final units.
///
/// `None` means the transform is skipped. Percentage-valued plan entries have
/// already been mapped through their configured ranges, so the pipeline and
/// the individual transforms never see a percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnParams {
    /// Rotation in degrees.
    pub rotation: Option<f32>,
    /// Offset in pixels.
    pub translation: Option<(f32, f32)>,
    /// Contrast factor.
    pub contrast: Option<f32>,
    /// Brightness factor.
    pub brightness: Option<f32>,
    /// Gaussian noise sigma.
    pub gaussian: Option<f32>,
    /// Salt-and-pepper density (fraction of pixels).
    pub salt_pepper: Option<f64>,
    /// Spot count.
    pub spot: Option<u32>,
}

impl DrawnParams {
    /// Resolve a plan against the configured ranges, drawing fresh random
    /// values for every `Randomized` entry. Called once per output copy, so
    /// unset parameters re-randomize between copies.
    pub fn draw<R: Rng>(plan: &DegradePlan, config: &DegradeConfig, rng: &mut R) -> Self {
        let max = config.rotation_max_deg;
        let rotation = match plan.rotation {
            Param::Absent => None,
            Param::Fixed(degrees) => Some(degrees),
            Param::Randomized => Some(if max > 0.0 {
                rng.gen_range(-max..=max)
            } else {
                0.0
            }),
        };

        let (lo, hi) = config.translation_px;
        let translation = match plan.translation {
            Param::Absent => None,
            Param::Fixed((dx, dy)) => Some((dx as f32, dy as f32)),
            Param::Randomized => Some((
                rng.gen_range(lo as f32..=hi as f32),
                rng.gen_range(lo as f32..=hi as f32),
            )),
        };

        let contrast = percentage(plan.contrast, config.contrast_factor, rng);
        let brightness = percentage(plan.brightness, config.brightness_factor, rng);
        let gaussian = percentage(plan.gaussian, config.gaussian_sigma, rng);

        let salt_pepper = match plan.salt_pepper {
            Param::Absent => None,
            Param::Fixed(pct) => Some(map_percent(pct, 0.0, config.salt_pepper_cap as f32) as f64),
            Param::Randomized => {
                let pct = rng.gen_range(0.0f32..100.0);
                Some(map_percent(pct, 0.0, config.salt_pepper_cap as f32) as f64)
            }
        };

        let (spot_lo, spot_hi) = config.spot_count;
        let spot = match plan.spot {
            Param::Absent => None,
            Param::Fixed(count) => Some(count),
            Param::Randomized => Some(rng.gen_range(spot_lo..=spot_hi)),
        };

        let drawn = Self {
            rotation,
            translation,
            contrast,
            brightness,
            gaussian,
            salt_pepper,
            spot,
        };
        trace!(?drawn, "Parameters drawn");
        drawn
    }
}

/// Resolve a percentage-valued parameter into its configured range.
fn percentage<R: Rng>(param: Param<f32>, range: (f32, f32), rng: &mut R) -> Option<f32> {
    match param {
        Param::Absent => None,
        Param::Fixed(pct) => Some(map_percent(pct, range.0, range.1)),
        Param::Randomized => {
            let pct = rng.gen_range(0.0f32..100.0);
            Some(map_percent(pct, range.0, range.1))
        }
    }
}

/// Map a 0-100 percentage linearly into [lo, hi]. Out-of-range percentages
/// are clamped rather than extrapolated.
fn map_percent(pct: f32, lo: f32, hi: f32) -> f32 {
    let t = (pct / 100.0).clamp(0.0, 1.0);
    lo + t * (hi - lo)
}
