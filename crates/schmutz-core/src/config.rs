// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Degradation range configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchmutzError};

/// Tuned ranges for every transform.
///
/// An explicit, immutable configuration struct passed into the pipeline —
/// there is no hidden global tuning state. The defaults are the constants
/// the emulator was calibrated with against real print/scan cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegradeConfig {
    /// Maximum rotation magnitude in degrees; random draws are uniform in
    /// [-max, max].
    pub rotation_max_deg: f32,
    /// Translation offset bounds in pixels, applied per axis.
    pub translation_px: (i32, i32),
    /// Contrast factor range mapped from the 0-100 percentage.
    pub contrast_factor: (f32, f32),
    /// Brightness factor range mapped from the 0-100 percentage.
    pub brightness_factor: (f32, f32),
    /// Gaussian noise sigma range mapped from the 0-100 percentage.
    pub gaussian_sigma: (f32, f32),
    /// Salt-and-pepper density at 100%; fraction of pixels flipped.
    pub salt_pepper_cap: f64,
    /// Spot count bounds for random draws.
    pub spot_count: (u32, u32),
    /// Spot radius bounds in pixels.
    pub spot_radius_px: (i32, i32),
}

impl Default for DegradeConfig {
    fn default() -> Self {
        Self {
            rotation_max_deg: 3.0,
            translation_px: (-80, 80),
            contrast_factor: (0.8, 1.2),
            brightness_factor: (0.8, 1.2),
            gaussian_sigma: (2.0, 10.0),
            salt_pepper_cap: 0.08,
            spot_count: (2, 5),
            spot_radius_px: (10, 30),
        }
    }
}

impl DegradeConfig {
    /// Load a configuration from a JSON file, so batch runs can pin their
    /// range tuning alongside the generated corpus.
    pub fn from_json_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make the pipeline draw from inverted
    /// or negative ranges.
    pub fn validate(&self) -> Result<()> {
        if self.rotation_max_deg < 0.0 {
            return Err(SchmutzError::Config(format!(
                "rotation_max_deg must be non-negative, got {}",
                self.rotation_max_deg
            )));
        }
        if self.translation_px.0 > self.translation_px.1 {
            return Err(SchmutzError::Config(
                "translation_px bounds are inverted".into(),
            ));
        }
        for (name, (lo, hi)) in [
            ("contrast_factor", self.contrast_factor),
            ("brightness_factor", self.brightness_factor),
            ("gaussian_sigma", self.gaussian_sigma),
        ] {
            if lo > hi {
                return Err(SchmutzError::Config(format!("{name} bounds are inverted")));
            }
        }
        if !(0.0..=1.0).contains(&self.salt_pepper_cap) {
            return Err(SchmutzError::Config(format!(
                "salt_pepper_cap must be in [0, 1], got {}",
                self.salt_pepper_cap
            )));
        }
        if self.spot_count.0 > self.spot_count.1 {
            return Err(SchmutzError::Config("spot_count bounds are inverted".into()));
        }
        if self.spot_radius_px.0 < 1 || self.spot_radius_px.0 > self.spot_radius_px.1 {
            return Err(SchmutzError::Config(
                "spot_radius_px bounds must be positive and ordered".into(),
            ));
        }
        Ok(())
    }
}
