use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use lcmgen::validator::validate_lcm_file;

/// Validate LCM file integrity
pub fn run(file: PathBuf) -> Result<()> {
    info!("Validating {}", file.display());

    let report = validate_lcm_file(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    println!("{}", report.format_colored());

    // Exit with error code if validation failed
    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
