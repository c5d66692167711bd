// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error type for the deep fryer.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all frying operations.
///
/// Every variant is terminal for the operation that produced it; nothing in
/// the pipeline is retried.
#[derive(Debug, Error)]
pub enum FryError {
    // -- Input errors --
    #[error("no such file found at: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("failed to decode image: {0}")]
    Decode(String),

    // -- Configuration errors --
    #[error("quality must be an integer between 0 and 100, got {0}")]
    InvalidQuality(i64),

    #[error("convolution kernel divisor must not be zero")]
    DivisionByZero,

    // -- Output errors --
    #[error("JPEG encoding failed: {0}")]
    Encode(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FryError>;
