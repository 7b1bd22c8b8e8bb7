// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Geometric degradations — page skew (rotation) and feed offset (translation).

use image::{Rgb, RgbImage};
use imageproc::geometric_transformations::{
    self, Interpolation, Projection, warp,
};
use tracing::debug;

/// Revealed-canvas fill for geometric transforms. Scanners report nothing
/// where the page has moved away, so the emulator fills with black.
const FILL: Rgb<u8> = Rgb([0u8, 0, 0]);

/// Rotate the image about its center by `degrees` (counter-clockwise for
/// positive angles). The canvas keeps its original dimensions; corners that
/// rotate out of frame are lost and revealed areas are filled black.
pub fn rotate(img: RgbImage, degrees: f32) -> RgbImage {
    if degrees == 0.0 {
        return img;
    }
    debug!(degrees, "Applying rotation");

    // rotate_about_center is clockwise for positive theta, so negate.
    let radians = -degrees.to_radians();
    geometric_transformations::rotate_about_center(&img, radians, Interpolation::Bilinear, FILL)
}

/// Shift the image content by `(dx, dy)` pixels. Revealed areas are filled
/// black; content shifted past the canvas edge is lost.
pub fn translate(img: RgbImage, dx: f32, dy: f32) -> RgbImage {
    if dx == 0.0 && dy == 0.0 {
        return img;
    }
    debug!(dx, dy, "Applying translation");

    let projection = Projection::translate(dx, dy);
    warp(&img, &projection, Interpolation::Nearest, FILL)
}
