// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line surface for the schmutz binary.

use std::path::PathBuf;

use clap::Parser;
use schmutz_core::{DegradePlan, Param};

/// Applies random or specified printer/scanner degradations to an image.
///
/// Each transform flag takes an optional value: giving the flag with a value
/// applies the transform with exactly that value; giving the flag without a
/// value applies it with a fresh random draw per copy; omitting the flag
/// skips the transform. If no transform flag is given at all, every
/// transform runs randomized.
#[derive(Parser, Debug, Clone)]
#[command(name = "schmutz", author, version, about)]
pub struct AppArgs {
    /// Source image to degrade.
    pub input: PathBuf,

    /// Rotation in degrees; no value means a random skew.
    #[arg(short, long, value_name = "DEG")]
    pub rotation: Option<Option<f32>>,

    /// Translation offset in pixels; no value means a random offset.
    #[arg(short, long, value_name = "DX,DY", value_parser = parse_offset)]
    pub translation: Option<Option<(i32, i32)>>,

    /// Contrast as a 0-100 percentage of the configured factor range.
    #[arg(short, long, value_name = "PCT")]
    pub contrast: Option<Option<f32>>,

    /// Brightness as a 0-100 percentage of the configured factor range.
    #[arg(short, long, value_name = "PCT")]
    pub brightness: Option<Option<f32>>,

    /// Gaussian noise as a 0-100 percentage of the configured sigma range.
    #[arg(short, long, value_name = "PCT")]
    pub gaussian: Option<Option<f32>>,

    /// Salt-and-pepper noise as a 0-100 percentage of the configured density cap.
    #[arg(short, long, value_name = "PCT")]
    pub salt_pepper: Option<Option<f32>>,

    /// Number of black ink spots to draw; no value means a random count.
    #[arg(short = 'p', long, value_name = "COUNT")]
    pub spot: Option<Option<u32>>,

    /// Number of output copies to write.
    #[arg(short, long, value_name = "N", default_value_t = 10)]
    pub nb_copy: u32,

    /// Directory the numbered copies are written into.
    #[arg(short, long, value_name = "DIR", default_value = "noisy_copies")]
    pub output_dir: PathBuf,

    /// Range configuration JSON; defaults to the built-in tuning.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// RNG seed for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl AppArgs {
    /// Build the degradation plan from the transform flags.
    ///
    /// With no transform flag present, falls back to the all-randomized
    /// default of the original emulator.
    pub fn plan(&self) -> DegradePlan {
        let no_transform_flags = self.rotation.is_none()
            && self.translation.is_none()
            && self.contrast.is_none()
            && self.brightness.is_none()
            && self.gaussian.is_none()
            && self.salt_pepper.is_none()
            && self.spot.is_none();
        if no_transform_flags {
            return DegradePlan::all_randomized();
        }

        DegradePlan {
            rotation: to_param(self.rotation),
            translation: to_param(self.translation),
            contrast: to_param(self.contrast),
            brightness: to_param(self.brightness),
            gaussian: to_param(self.gaussian),
            salt_pepper: to_param(self.salt_pepper),
            spot: to_param(self.spot),
        }
    }
}

/// Map clap's flag states onto the parameter tag: flag absent, flag without
/// value, flag with value.
fn to_param<T>(flag: Option<Option<T>>) -> Param<T> {
    match flag {
        None => Param::Absent,
        Some(None) => Param::Randomized,
        Some(Some(value)) => Param::Fixed(value),
    }
}

/// Parse a `dx,dy` pixel offset.
fn parse_offset(value: &str) -> Result<(i32, i32), String> {
    let (dx, dy) = value
        .split_once(',')
        .ok_or_else(|| format!("expected DX,DY, got `{value}`"))?;
    let dx = dx
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("bad DX `{dx}`: {err}"))?;
    let dy = dy
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("bad DY `{dy}`: {err}"))?;
    Ok((dx, dy))
}
