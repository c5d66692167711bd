// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: encoder quality and output disposition.

use serde::{Deserialize, Serialize};

use crate::error::FryError;

/// Suffix appended to the source file stem when naming fried output.
pub const OUTPUT_SUFFIX: &str = "_deepfried";

/// MIME type of everything the fryer emits.
pub const JPEG_MIME: &str = "image/jpeg";

/// JPEG encoder quality, guaranteed to lie in `0..=100`.
///
/// Out-of-range values are rejected when the quality is constructed (or
/// deserialized), never at encode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Quality(u8);

impl Quality {
    pub const MIN: Quality = Quality(0);
    pub const MAX: Quality = Quality(100);

    /// Validate and wrap a quality value.
    pub fn new(value: i64) -> Result<Self, FryError> {
        if !(0..=100).contains(&value) {
            return Err(FryError::InvalidQuality(value));
        }
        Ok(Self(value as u8))
    }

    /// The raw quality value.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(30)
    }
}

impl TryFrom<i64> for Quality {
    type Error = FryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How fried output is presented to whoever receives the byte stream.
///
/// `force_download` only changes the metadata (an attachment disposition);
/// the image bytes are identical either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDisposition {
    pub file_name: String,
    pub force_download: bool,
}

impl OutputDisposition {
    /// Disposition for an image whose source file stem is `stem`.
    pub fn new(stem: &str, force_download: bool) -> Self {
        Self {
            file_name: output_file_name(stem),
            force_download,
        }
    }

    /// HTTP-style headers, in emission order.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", JPEG_MIME.to_string())];
        if self.force_download {
            headers.push((
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", self.file_name),
            ));
        }
        headers
    }
}

/// Default output file name for a source file stem, e.g. `meme` ->
/// `meme_deepfried.jpg`.
pub fn output_file_name(stem: &str) -> String {
    format!("{stem}{OUTPUT_SUFFIX}.jpg")
}
