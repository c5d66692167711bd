// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// deepfry: saturate and sharpen an image, then write it back as crunchy JPEG.
//
// Entry point. Initialises logging, resolves configuration (file, then flags),
// runs the frying pipeline, and writes the result to disk or stdout.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use deepfry_core::{FryConfig, Quality};
use deepfry_image::Fryer;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "deepfry")]
#[command(author, version, about = "Deep-fry an image: boost saturation, sharpen, crunch as JPEG")]
#[command(long_about = "
Boosts saturation in HSV space, applies a 3x3 sharpen kernel, and encodes the
result as low-quality JPEG.

Examples:
  deepfry meme.jpg                       # writes meme_deepfried.jpg
  deepfry meme.jpg --harder -q 20        # extra pass at triple saturation
  deepfry meme.png -o out.jpg -s 250
  deepfry meme.jpg --stdout --headers --force-download > response.http
")]
struct Cli {
    /// Image to fry (any format the decoder understands)
    input: PathBuf,

    /// Output path (default: <stem>_deepfried.jpg)
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Write the JPEG to standard output instead of a file
    #[arg(long)]
    stdout: bool,

    /// Prefix stdout output with Content-Type / Content-Disposition headers
    #[arg(long, requires = "stdout")]
    headers: bool,

    /// JPEG quality, 0-100
    #[arg(short, long, value_parser = parse_quality)]
    quality: Option<Quality>,

    /// Saturation offset in percent (100 doubles saturation, -100 removes it)
    #[arg(short, long, allow_hyphen_values = true)]
    saturation: Option<i32>,

    /// Run an extra pass at triple saturation
    #[arg(long)]
    harder: bool,

    /// Mark the output as an attachment in emitted headers
    #[arg(long)]
    force_download: bool,

    /// Load settings from a JSON config file; flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Persist the effective settings to a JSON config file
    #[arg(long)]
    write_config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_quality(value: &str) -> std::result::Result<Quality, String> {
    let raw: i64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not an integer"))?;
    Quality::new(raw).map_err(|err| err.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}

/// Log to stderr so stdout stays clean for image bytes.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Config file (or defaults) overlaid with whatever flags were given.
fn resolve_config(cli: &Cli) -> Result<FryConfig> {
    let mut config = match &cli.config {
        Some(path) => FryConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => FryConfig::default(),
    };
    if let Some(quality) = cli.quality {
        config.quality = quality;
    }
    if let Some(saturation) = cli.saturation {
        config.saturation = saturation;
    }
    if cli.force_download {
        config.force_download = true;
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    if let Some(path) = &cli.write_config {
        config
            .save(path)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        info!(path = %path.display(), "Config written");
    }

    let mut fryer = Fryer::open(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?
        .apply_config(&config)
        .fry(config.saturation);
    if cli.harder {
        fryer = fryer.fry_harder();
    }

    if cli.stdout {
        let mut stdout = std::io::stdout().lock();
        if cli.headers {
            fryer.output(&mut stdout, config.force_download)?;
        } else {
            fryer.write_jpeg(&mut stdout)?;
        }
        stdout.flush()?;
    } else {
        let path = fryer
            .save(cli.output.as_deref())
            .context("failed to write output")?;
        info!(path = %path.display(), "Deep fried");
    }
    Ok(())
}
