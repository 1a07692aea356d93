//! # LCM Validation Module
//!
//! Integrity checks for LCM files, reported check by check rather than
//! stopping at the first problem.
//!
//! ## Validation Checklist
//!
//! 1. **Structure**: signature, version, exact length for the declared peak
//!    count, trailer literal
//! 2. **Data sanity**: full decode, analysis date, sequential peak indices,
//!    chromatogram point count, non-negative intensities, time axis
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lcmgen::validator::validate_lcm_file;
//! use std::path::Path;
//!
//! match validate_lcm_file(Path::new("sample.lcm")) {
//!     Ok(report) => println!("{}", report),
//!     Err(e) => eprintln!("Validation failed: {}", e),
//! }
//! ```

use std::path::Path;

pub use report::{CheckStatus, ValidationCheck, ValidationReport};

mod data;
mod report;
mod structure;

/// Validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// I/O error reading the file
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Main validation entry point
pub fn validate_lcm_file(path: &Path) -> Result<ValidationReport, ValidationError> {
    let bytes = std::fs::read(path)?;
    Ok(validate_lcm_bytes(path.display().to_string(), &bytes))
}

/// Validate an in-memory LCM file
pub fn validate_lcm_bytes(name: impl Into<String>, bytes: &[u8]) -> ValidationReport {
    let mut report = ValidationReport::new(name);

    // 1. Structure Check
    if structure::check_structure(bytes, &mut report) {
        // 2. Data Sanity Check
        data::check_data_sanity(bytes, &mut report);
    }

    report
}
