// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fryer configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::types::Quality;

/// Persistent frying settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FryConfig {
    /// JPEG encode quality (0-100). Deliberately crunchy by default.
    pub quality: Quality,
    /// Saturation offset in percent: the saturation is scaled by
    /// `(100 + saturation) / 100`, so 100 doubles it.
    pub saturation: i32,
    /// Mark output as an attachment when emitting headers.
    pub force_download: bool,
}

impl Default for FryConfig {
    fn default() -> Self {
        Self {
            quality: Quality::default(),
            saturation: 100,
            force_download: false,
        }
    }
}

impl FryConfig {
    /// Load a JSON config file. An out-of-range quality fails here, before
    /// any image is touched.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&data)?;
        debug!(path = %path.as_ref().display(), ?config, "Config loaded");
        Ok(config)
    }

    /// Persist the config as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FryError;

    #[test]
    fn defaults_match_original_fryer() {
        let config = FryConfig::default();
        assert_eq!(config.quality.get(), 30);
        assert_eq!(config.saturation, 100);
        assert!(!config.force_download);
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        let config = FryConfig {
            quality: Quality::new(20).expect("quality"),
            saturation: 300,
            force_download: true,
        };
        config.save(&path).expect("save");

        let loaded = FryConfig::load(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: FryConfig = serde_json::from_str(r#"{"saturation": -50}"#).expect("parse");
        assert_eq!(config.saturation, -50);
        assert_eq!(config.quality, Quality::default());
    }

    #[test]
    fn invalid_quality_rejected_at_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"quality": 250}"#).expect("write");

        let err = FryConfig::load(&path).expect_err("quality out of range");
        assert!(matches!(err, FryError::Serialization(_)));
        assert!(err.to_string().contains("between 0 and 100"));
    }
}
