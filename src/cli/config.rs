//! TOML configuration file support.
//!
//! Chromatogram settings can be kept in a config file instead of flags:
//!
//! ```toml
//! # lcmgen.toml
//! [chromatogram]
//! profile = "gaussian"
//! baseline = 25.0
//! ```
//!
//! Flags given on the command line take precedence over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use lcmgen::chromatogram::PeakProfile;
use lcmgen::writer::WriterConfig;

/// Root configuration structure for lcmgen.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Chromatogram synthesis settings.
    #[serde(default)]
    pub chromatogram: ChromatogramSection,
}

/// The `[chromatogram]` table.
#[derive(Debug, Default, Deserialize)]
pub struct ChromatogramSection {
    /// Peak shape ("parabolic" or "gaussian").
    pub profile: Option<PeakProfile>,

    /// Baseline intensity; the profile default when absent.
    pub baseline: Option<f64>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Apply the file's settings on top of `config`.
    pub fn apply(&self, mut config: WriterConfig) -> WriterConfig {
        if let Some(profile) = self.chromatogram.profile {
            config = config.with_profile(profile);
        }
        if let Some(baseline) = self.chromatogram.baseline {
            config = config.with_baseline(baseline);
        }
        config
    }
}
