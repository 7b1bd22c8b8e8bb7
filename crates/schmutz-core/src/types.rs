// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Schmutz degradation emulator.

use serde::{Deserialize, Serialize};

/// State of a single transform parameter.
///
/// Replaces the "None means randomize" sentinel of the original scripts with
/// an explicit three-way tag, so "not applied" and "applied with a random
/// draw" can never be confused.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Param<T> {
    /// Transform is skipped entirely.
    Absent,
    /// Transform runs with a fresh random draw for every output copy.
    Randomized,
    /// Transform runs with this exact value.
    Fixed(T),
}

impl<T> Param<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl<T> Default for Param<T> {
    fn default() -> Self {
        Self::Absent
    }
}

/// Which transforms to apply for a degradation run, and with what values.
///
/// Fields are listed in pipeline order; the pipeline applies them in this
/// order regardless of how the plan was built. Percentage-valued parameters
/// (contrast, brightness, gaussian, salt_pepper) are mapped into their
/// configured ranges at draw time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DegradePlan {
    /// Rotation angle in degrees (counter-clockwise for positive values).
    pub rotation: Param<f32>,
    /// Pixel offset (dx, dy).
    pub translation: Param<(i32, i32)>,
    /// Contrast as a 0-100 percentage of the configured factor range.
    pub contrast: Param<f32>,
    /// Brightness as a 0-100 percentage of the configured factor range.
    pub brightness: Param<f32>,
    /// Gaussian noise as a 0-100 percentage of the configured sigma range.
    pub gaussian: Param<f32>,
    /// Salt-and-pepper noise as a 0-100 percentage of the configured density cap.
    pub salt_pepper: Param<f32>,
    /// Number of black spots to draw. A literal count, not an intensity.
    pub spot: Param<u32>,
}

impl DegradePlan {
    /// A plan applying no transforms at all (output is a copy of the input).
    pub fn none() -> Self {
        Self::default()
    }

    /// A plan applying every transform with per-copy random draws — the
    /// behavior of the original scripts when invoked without arguments.
    pub fn all_randomized() -> Self {
        Self {
            rotation: Param::Randomized,
            translation: Param::Randomized,
            contrast: Param::Randomized,
            brightness: Param::Randomized,
            gaussian: Param::Randomized,
            salt_pepper: Param::Randomized,
            spot: Param::Randomized,
        }
    }

    /// True if every transform is absent.
    pub fn is_empty(&self) -> bool {
        self.rotation.is_absent()
            && self.translation.is_absent()
            && self.contrast.is_absent()
            && self.brightness.is_absent()
            && self.gaussian.is_absent()
            && self.salt_pepper.is_absent()
            && self.spot.is_absent()
    }
}
