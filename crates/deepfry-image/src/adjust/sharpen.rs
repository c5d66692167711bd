// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sharpener — 3x3 convolution over the colour channels of an RGBA image.

use deepfry_core::error::FryError;
use image::RgbaImage;
use rayon::prelude::*;
use tracing::{debug, instrument};

/// A 3x3 convolution kernel with a divisor and an additive offset.
///
/// Output channel = `sum(weight * neighbour) / divisor + offset`. The divisor
/// is never zero; constructors reject kernels that would need one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvolutionKernel {
    weights: [[f32; 3]; 3],
    divisor: f32,
    offset: f32,
}

impl ConvolutionKernel {
    /// The fixed high-pass sharpen kernel (weights sum to 1).
    pub const SHARPEN: ConvolutionKernel = ConvolutionKernel {
        weights: [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]],
        divisor: 1.0,
        offset: 0.0,
    };

    /// Build a kernel with an explicit divisor and offset.
    pub fn new(weights: [[f32; 3]; 3], divisor: f32, offset: f32) -> Result<Self, FryError> {
        if divisor == 0.0 {
            return Err(FryError::DivisionByZero);
        }
        Ok(Self {
            weights,
            divisor,
            offset,
        })
    }

    /// Build a kernel whose divisor is the sum of its weights, which keeps
    /// overall brightness stable. Zero-sum kernels (edge detectors) fail.
    pub fn from_weights(weights: [[f32; 3]; 3]) -> Result<Self, FryError> {
        let divisor = weights.iter().flatten().sum();
        Self::new(weights, divisor, 0.0)
    }

    pub fn weights(&self) -> &[[f32; 3]; 3] {
        &self.weights
    }

    pub fn divisor(&self) -> f32 {
        self.divisor
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

/// Sharpen an image with [`ConvolutionKernel::SHARPEN`].
pub fn sharpen(image: &RgbaImage) -> RgbaImage {
    convolve(image, &ConvolutionKernel::SHARPEN)
}

/// Convolve the RGB channels of `source` with `kernel`.
///
/// Every output pixel is computed from the unmodified source, never from
/// already-written neighbours. Borders use edge replication: neighbours that
/// fall outside the image take the value of the nearest edge pixel. Results
/// are rounded to nearest and clamped to [0, 255]; alpha is copied from the
/// source pixel.
#[instrument(skip_all, fields(width = source.width(), height = source.height()))]
pub fn convolve(source: &RgbaImage, kernel: &ConvolutionKernel) -> RgbaImage {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return source.clone();
    }

    let mut output = RgbaImage::new(width, height);
    let row_len = width as usize * 4;
    let samples: &mut [u8] = &mut output;

    samples
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let mut acc = [0.0f32; 3];
                for (ky, weights) in kernel.weights.iter().enumerate() {
                    let sy = clamp_coord(y as i64 + ky as i64 - 1, height);
                    for (kx, &weight) in weights.iter().enumerate() {
                        if weight == 0.0 {
                            continue;
                        }
                        let sx = clamp_coord(x as i64 + kx as i64 - 1, width);
                        let neighbour = source.get_pixel(sx, sy).0;
                        for (sum, &channel) in acc.iter_mut().zip(&neighbour[..3]) {
                            *sum += weight * channel as f32;
                        }
                    }
                }

                let out = &mut row[x as usize * 4..x as usize * 4 + 4];
                for (dst, sum) in out.iter_mut().zip(acc) {
                    *dst = (sum / kernel.divisor + kernel.offset)
                        .round()
                        .clamp(0.0, 255.0) as u8;
                }
                out[3] = source.get_pixel(x, y as u32).0[3];
            }
        });

    debug!("Convolution complete");
    output
}

/// Clamp a possibly out-of-range coordinate to `0..len`.
fn clamp_coord(coord: i64, len: u32) -> u32 {
    coord.clamp(0, len as i64 - 1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn sharpen_kernel_divisor_is_weight_sum() {
        let derived =
            ConvolutionKernel::from_weights(*ConvolutionKernel::SHARPEN.weights()).expect("kernel");
        assert_eq!(derived, ConvolutionKernel::SHARPEN);
        assert_eq!(derived.divisor(), 1.0);
        assert_eq!(derived.offset(), 0.0);
    }

    #[test]
    fn zero_divisor_rejected() {
        let result = ConvolutionKernel::new([[1.0; 3]; 3], 0.0, 0.0);
        assert!(matches!(result, Err(FryError::DivisionByZero)));
    }

    #[test]
    fn zero_sum_weights_rejected() {
        let laplacian = [[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];
        assert!(matches!(
            ConvolutionKernel::from_weights(laplacian),
            Err(FryError::DivisionByZero)
        ));
    }

    #[test]
    fn uniform_image_unchanged() {
        let image = RgbaImage::from_pixel(13, 7, Rgba([200, 40, 90, 128]));
        assert_eq!(sharpen(&image), image);
    }

    #[test]
    fn single_pixel_unchanged() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([12, 34, 56, 78]));
        assert_eq!(sharpen(&image), image);
    }

    #[test]
    fn empty_image_passes_through() {
        let image = RgbaImage::new(0, 0);
        assert_eq!(sharpen(&image).dimensions(), (0, 0));
    }

    #[test]
    fn bright_spot_is_amplified_and_neighbours_darkened() {
        let mut image = RgbaImage::from_pixel(3, 3, Rgba([100, 100, 100, 255]));
        image.put_pixel(1, 1, Rgba([120, 100, 100, 255]));

        let out = sharpen(&image);
        // Centre: 5*120 - 4*100 = 200 on red.
        assert_eq!(out.get_pixel(1, 1).0, [200, 100, 100, 255]);
        // Edge neighbour (1, 0) with replication: 5*100 - (100 + 100 + 100 + 120) = 80.
        assert_eq!(out.get_pixel(1, 0).0, [80, 100, 100, 255]);
        // Corners only touch the centre diagonally, so they stay put.
        assert_eq!(out.get_pixel(0, 0).0, [100, 100, 100, 255]);
    }

    #[test]
    fn results_are_clamped() {
        let mut image = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]));
        image.put_pixel(1, 1, Rgba([255, 255, 255, 255]));

        let out = sharpen(&image);
        assert_eq!(out.get_pixel(1, 1).0, [255, 255, 255, 255]);
        assert_eq!(out.get_pixel(1, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn reads_from_snapshot_not_partial_output() {
        let image = RgbaImage::from_fn(5, 1, |x, _| {
            let level = if x == 1 { 110 } else { 100 };
            Rgba([level, level, level, 255])
        });

        let out = sharpen(&image);
        // x=0: 5*100 - (100 + 100 + 100 + 110) = 90.
        assert_eq!(out.get_pixel(0, 0).0, [90, 90, 90, 255]);
        // x=1 must see the original left neighbour (100), not the written 90:
        // 5*110 - (110 + 110 + 100 + 100) = 130.
        assert_eq!(out.get_pixel(1, 0).0, [130, 130, 130, 255]);
        // x=2: 5*100 - (100 + 100 + 110 + 100) = 90.
        assert_eq!(out.get_pixel(2, 0).0, [90, 90, 90, 255]);
        assert_eq!(out.get_pixel(4, 0).0, [100, 100, 100, 255]);
    }

    #[test]
    fn alpha_copied_from_source() {
        let image = RgbaImage::from_fn(4, 4, |x, y| {
            Rgba([x as u8 * 60, y as u8 * 60, 10, (x + y) as u8 * 30])
        });
        let out = sharpen(&image);
        for (before, after) in image.pixels().zip(out.pixels()) {
            assert_eq!(before.0[3], after.0[3]);
        }
    }

    #[test]
    fn offset_and_divisor_applied() {
        let identity = [[0.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 0.0]];
        let kernel = ConvolutionKernel::new(identity, 4.0, 10.0).expect("kernel");
        let image = RgbaImage::from_pixel(2, 2, Rgba([100, 50, 0, 255]));

        let out = convolve(&image, &kernel);
        assert_eq!(out.get_pixel(0, 0).0, [60, 35, 10, 255]);
    }
}
