// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Individual degradation transforms. Each is a pure function of its input
// image and final-unit parameters; the pipeline decides order and inclusion.

pub mod geometry;
pub mod noise;
pub mod spots;
pub mod tone;

pub use geometry::{rotate, translate};
pub use noise::{gaussian, salt_pepper};
pub use spots::spots;
pub use tone::{brightness, contrast};
