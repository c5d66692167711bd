// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Saturation adjuster: per-pixel HSV saturation scaling.

use image::RgbaImage;
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::color::hsv::Hsv;

/// Scale the saturation of every pixel in place.
///
/// Each pixel is converted to HSV, its saturation multiplied by
/// `(100 + percentage) / 100` and clamped to [0, 1], then converted back.
/// Alpha is left untouched. Pixels are independent, so the buffer is
/// processed in parallel.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn adjust_saturation(image: &mut RgbaImage, percentage: i32) {
    let samples: &mut [u8] = image;
    samples.par_chunks_exact_mut(4).for_each(|pixel| {
        let [r, g, b] = Hsv::from_rgb(pixel[0], pixel[1], pixel[2])
            .scale_saturation(percentage)
            .to_rgb();
        pixel[0] = r;
        pixel[1] = g;
        pixel[2] = b;
    });
    debug!(percentage, "Saturation adjusted");
}
