// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Codec seam: decoding arbitrary rasters and encoding JPEG.

use deepfry_core::error::FryError;
use deepfry_core::types::Quality;
use image::buffer::ConvertBuffer;
use image::codecs::jpeg::JpegEncoder;
use image::{RgbImage, RgbaImage};
use tracing::debug;

/// Narrow interface over whatever decodes input and encodes output.
pub trait ImageCodec {
    /// Decode encoded bytes into an RGBA pixel buffer.
    fn decode(&self, data: &[u8]) -> Result<RgbaImage, FryError>;

    /// Encode a pixel buffer at the given quality.
    fn encode(&self, image: &RgbaImage, quality: Quality) -> Result<Vec<u8>, FryError>;
}

/// Decodes anything the `image` crate recognises; encodes baseline JPEG.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegCodec;

impl ImageCodec for JpegCodec {
    fn decode(&self, data: &[u8]) -> Result<RgbaImage, FryError> {
        let img = image::load_from_memory(data)
            .map_err(|err| FryError::Decode(err.to_string()))?;
        debug!(width = img.width(), height = img.height(), "Image decoded from bytes");
        Ok(img.to_rgba8())
    }

    /// JPEG has no alpha channel, so it is dropped here. The encoder's lowest
    /// accepted quality is 1; a configured 0 is encoded as 1.
    fn encode(&self, image: &RgbaImage, quality: Quality) -> Result<Vec<u8>, FryError> {
        let mut buffer = Vec::new();
        let rgb: RgbImage = image.convert();
        let encoder = JpegEncoder::new_with_quality(&mut buffer, quality.get().max(1));
        rgb.write_with_encoder(encoder)
            .map_err(|err| FryError::Encode(err.to_string()))?;
        debug!(bytes = buffer.len(), %quality, "JPEG encoded");
        Ok(buffer)
    }
}
