// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixel adjustments: saturation scaling and convolution sharpening.

pub mod saturation;
pub mod sharpen;

pub use saturation::adjust_saturation;
pub use sharpen::{ConvolutionKernel, convolve, sharpen};
