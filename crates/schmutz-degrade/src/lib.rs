// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// schmutz-degrade — Print/scan degradation pipeline.
//
// Applies an ordered sequence of optional image transformations (rotation,
// translation, contrast, brightness, Gaussian noise, salt-and-pepper noise,
// ink spots) to a source image, emulating the defects of a print-then-scan
// cycle.

pub mod pipeline;
pub mod sample;
pub mod transforms;

// Re-export the primary entry points so callers can use
// `schmutz_degrade::DegradePipeline` etc.
pub use pipeline::{DegradePipeline, load_rgb};
pub use sample::DrawnParams;
