// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// deepfry-image: Pixel pipeline for the deep fryer.
//
// Provides RGB <-> HSV conversion, a per-pixel saturation adjuster, a 3x3
// convolution sharpener, a narrow codec seam over the `image` crate, and the
// `Fryer` pipeline that chains them and encodes the result as JPEG.

pub mod adjust;
pub mod codec;
pub mod color;
pub mod fryer;

// Re-export the primary items so callers can use `deepfry_image::Fryer` etc.
pub use adjust::saturation::adjust_saturation;
pub use adjust::sharpen::{ConvolutionKernel, convolve, sharpen};
pub use codec::{ImageCodec, JpegCodec};
pub use color::hsv::Hsv;
pub use fryer::Fryer;
