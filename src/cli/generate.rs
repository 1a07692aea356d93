use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

use lcmgen::chromatogram::PeakProfile;
use lcmgen::sample::SampleRecord;
use lcmgen::writer::{write_lcm_file, WriterConfig};

use super::config::Config;

/// Convert a sample JSON file into an LCM file
pub fn run(
    input: PathBuf,
    output: PathBuf,
    profile: Option<PeakProfile>,
    baseline: Option<f64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = WriterConfig::default();
    if let Some(path) = config_path {
        info!("Loading configuration from {}", path.display());
        config = Config::from_file(&path)?.apply(config);
    }
    if let Some(profile) = profile {
        config = config.with_profile(profile);
    }
    if let Some(baseline) = baseline {
        config = config.with_baseline(baseline);
    }
    debug!(
        "Chromatogram: {} profile, baseline {}",
        config.chromatogram.profile,
        config.chromatogram.baseline()
    );

    info!("Input:  {}", input.display());
    info!("Output: {}", output.display());

    let sample = SampleRecord::from_file(&input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    let stats = write_lcm_file(&output, &sample, &config)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("{}", stats);

    println!("LCM file generated successfully: {}", output.display());
    Ok(())
}
