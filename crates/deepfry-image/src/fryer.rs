// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fryer: saturate, sharpen, and JPEG-encode a single in-memory image.

use std::io::Write;
use std::path::{Path, PathBuf};

use deepfry_core::config::FryConfig;
use deepfry_core::error::FryError;
use deepfry_core::types::{OutputDisposition, Quality, output_file_name};
use image::RgbaImage;
use tracing::{debug, info, instrument};

use crate::adjust::{adjust_saturation, sharpen};
use crate::codec::{ImageCodec, JpegCodec};

/// Saturation offset used by [`Fryer::fry_harder`].
pub const HARDER_SATURATION: i32 = 300;

/// File stem used when the image did not come from a named file.
const DEFAULT_STEM: &str = "image";

/// Deep-frying pipeline operating on a single in-memory image.
///
/// Transformations consume `self` and return the updated `Fryer`, so the
/// pixel buffer is always owned by exactly one pipeline stage:
///
/// ```ignore
/// let jpeg = Fryer::open("meme.jpg")?
///     .fry(100)
///     .fry_harder()
///     .quality(20)?
///     .to_jpeg_bytes()?;
/// ```
pub struct Fryer {
    /// The working pixel buffer.
    image: RgbaImage,
    /// Encoder quality used for every output method.
    quality: Quality,
    /// Stem of the source file, used to name output.
    file_stem: String,
}

impl Fryer {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    ///
    /// Fails with [`FryError::MissingInput`] if the path is not a regular
    /// file, or [`FryError::Decode`] if its contents are not an image.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FryError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(FryError::MissingInput(path.to_path_buf()));
        }

        let data = std::fs::read(path)?;
        let image = JpegCodec.decode(&data).map_err(|err| match err {
            FryError::Decode(detail) => {
                FryError::Decode(format!("{}: {}", path.display(), detail))
            }
            other => other,
        })?;
        info!(width = image.width(), height = image.height(), "Image loaded");

        let file_stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_STEM.to_string());
        Ok(Self::from_rgba(image).with_file_stem(file_stem))
    }

    /// Create a fryer from raw encoded bytes (JPEG, PNG, etc.).
    pub fn from_bytes(data: &[u8]) -> Result<Self, FryError> {
        Self::from_bytes_with(&JpegCodec, data)
    }

    /// Create a fryer from raw bytes using a specific codec.
    #[instrument(skip_all, fields(data_len = data.len()))]
    pub fn from_bytes_with(codec: &dyn ImageCodec, data: &[u8]) -> Result<Self, FryError> {
        Ok(Self::from_rgba(codec.decode(data)?))
    }

    /// Wrap an already-decoded pixel buffer.
    pub fn from_rgba(image: RgbaImage) -> Self {
        Self {
            image,
            quality: Quality::default(),
            file_stem: DEFAULT_STEM.to_string(),
        }
    }

    // -- Configuration --------------------------------------------------------

    /// Override the stem used to name output files.
    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    /// Set an already-validated encoder quality.
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    /// Set the encoder quality, rejecting values outside 0-100.
    pub fn quality(self, quality: i64) -> Result<Self, FryError> {
        Ok(self.with_quality(Quality::new(quality)?))
    }

    /// Take the encoder quality from a config.
    pub fn apply_config(self, config: &FryConfig) -> Self {
        self.with_quality(config.quality)
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn current_quality(&self) -> Quality {
        self.quality
    }

    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    /// Borrow the working pixel buffer.
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the fryer and return the pixel buffer.
    pub fn into_rgba(self) -> RgbaImage {
        self.image
    }

    // -- Transformations (consume self, return Self) ---------------------------

    /// Scale saturation by `(100 + percentage) / 100`.
    #[instrument(skip(self), fields(percentage))]
    pub fn saturate(mut self, percentage: i32) -> Self {
        info!(percentage, "Boosting saturation");
        adjust_saturation(&mut self.image, percentage);
        self
    }

    /// Apply the fixed sharpen kernel.
    #[instrument(skip(self))]
    pub fn sharpen(self) -> Self {
        info!("Sharpening");
        let sharpened = sharpen(&self.image);
        Self {
            image: sharpened,
            ..self
        }
    }

    /// One frying pass: saturate, then sharpen.
    pub fn fry(self, percentage: i32) -> Self {
        self.saturate(percentage).sharpen()
    }

    /// A frying pass at triple saturation.
    pub fn fry_harder(self) -> Self {
        self.fry(HARDER_SATURATION)
    }

    // -- Output ---------------------------------------------------------------

    /// Output metadata for this image.
    pub fn disposition(&self, force_download: bool) -> OutputDisposition {
        OutputDisposition::new(&self.file_stem, force_download)
    }

    /// Encode the current image as JPEG at the configured quality.
    pub fn to_jpeg_bytes(&self) -> Result<Vec<u8>, FryError> {
        self.encode_with(&JpegCodec)
    }

    /// Encode the current image with a specific codec.
    pub fn encode_with(&self, codec: &dyn ImageCodec) -> Result<Vec<u8>, FryError> {
        codec.encode(&self.image, self.quality)
    }

    /// Write the bare JPEG stream to `writer`, returning the byte count.
    pub fn write_jpeg<W: Write>(&self, mut writer: W) -> Result<usize, FryError> {
        let bytes = self.to_jpeg_bytes()?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(bytes.len())
    }

    /// Write HTTP-style headers followed by the JPEG stream, as a CGI
    /// response would. `force_download` adds an attachment disposition.
    #[instrument(skip(self, writer))]
    pub fn output<W: Write>(&self, mut writer: W, force_download: bool) -> Result<(), FryError> {
        let bytes = self.to_jpeg_bytes()?;
        for (name, value) in self.disposition(force_download).headers() {
            write!(writer, "{name}: {value}\r\n")?;
        }
        writer.write_all(b"\r\n")?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        debug!(bytes = bytes.len(), "Response written");
        Ok(())
    }

    /// Write the image to disk as JPEG.
    ///
    /// Without an explicit path the file is named `<stem>_deepfried.jpg` in
    /// the current directory. Returns the path written.
    #[instrument(skip(self))]
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf, FryError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(output_file_name(&self.file_stem)),
        };
        let bytes = self.to_jpeg_bytes()?;
        std::fs::write(&path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), quality = %self.quality, "Image saved");
        Ok(path)
    }
}
