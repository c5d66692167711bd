// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// deepfry-core: Types, configuration and errors shared by the deep fryer crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::FryConfig;
pub use error::{FryError, Result};
pub use types::*;
