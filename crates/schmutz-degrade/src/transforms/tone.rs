// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tone degradations — contrast and brightness drift.

use image::{ImageBuffer, Rgb, RgbImage};
use tracing::debug;

/// Scale contrast by `factor` around the mid-gray pivot (128). Values > 1.0
/// increase contrast, values < 1.0 flatten the image toward gray, and 1.0 is
/// the identity.
pub fn contrast(img: RgbImage, factor: f32) -> RgbImage {
    debug!(factor, "Adjusting contrast");

    let adjust = |channel: u8| -> u8 {
        let val = factor * (channel as f32 - 128.0) + 128.0;
        val.clamp(0.0, 255.0) as u8
    };
    map_channels(img, adjust)
}

/// Scale brightness multiplicatively by `factor`. Values > 1.0 brighten,
/// values < 1.0 darken, and 1.0 is the identity.
pub fn brightness(img: RgbImage, factor: f32) -> RgbImage {
    debug!(factor, "Adjusting brightness");

    let adjust = |channel: u8| -> u8 {
        let val = factor * channel as f32;
        val.clamp(0.0, 255.0) as u8
    };
    map_channels(img, adjust)
}

/// Apply a per-channel function to every pixel.
fn map_channels(img: RgbImage, adjust: impl Fn(u8) -> u8) -> RgbImage {
    ImageBuffer::from_fn(img.width(), img.height(), |x, y| {
        let Rgb([r, g, b]) = *img.get_pixel(x, y);
        Rgb([adjust(r), adjust(g), adjust(b)])
    })
}
