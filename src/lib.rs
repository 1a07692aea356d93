//! # lcmgen - LCM Chromatography File Generator
//!
//! `lcmgen` converts a JSON description of one chromatography sample (sample
//! identity, analysis date, instrument settings, detected peaks) into an LCM
//! file: a fixed-layout, little-endian binary import format read by
//! laboratory data systems.
//!
//! ## Key Features
//!
//! - **Exact layout**: every field has a fixed width, so a file's length is a
//!   function of its peak count alone (`8427 + 82 × peaks` bytes).
//!
//! - **Forgiving input**: numeric fields accept numbers or numeric strings,
//!   `null` means "absent", and missing instrument settings fall back to
//!   documented defaults.
//!
//! - **Synthesized chromatogram**: the peak table is rendered into a
//!   1000-point intensity trace, with a parabolic (default) or Gaussian peak
//!   shape.
//!
//! - **Safe output**: files are staged and renamed into place, so a failed
//!   conversion never leaves a partial file behind.
//!
//! - **Round trip**: a decoder and validator check what was written.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lcmgen::sample::{PeakRecord, SampleRecord};
//! use lcmgen::writer::{write_lcm_file, WriterConfig};
//!
//! let sample = SampleRecord::new("S-001", "Caffeine standard", "2024-01-15T10:30:00Z")
//!     .with_peak(PeakRecord::new("Caffeine", 3.42, 15234.7, 1203.5));
//!
//! let stats = write_lcm_file("caffeine.lcm", &sample, &WriterConfig::default())?;
//! println!("Wrote {} bytes", stats.bytes_written);
//! # Ok::<(), lcmgen::writer::WriterError>(())
//! ```
//!
//! ## Reading LCM Files
//!
//! ```rust,no_run
//! use lcmgen::reader::LcmFile;
//! use lcmgen::validator::validate_lcm_file;
//! use std::path::Path;
//!
//! let file = LcmFile::open("caffeine.lcm")?;
//! println!("{}", file.summary());
//!
//! let report = validate_lcm_file(Path::new("caffeine.lcm"))?;
//! assert!(!report.has_failures());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`sample`]: JSON input model with lenient numerics and timestamp parsing
//! - [`format`]: layout constants and fixed-width field helpers
//! - [`chromatogram`]: chromatogram trace synthesis
//! - [`writer`]: section encoders and atomic file output
//! - [`reader`]: decoder for generated files
//! - [`validator`]: integrity checks with a human-readable report
//!
//! ## Format Specification
//!
//! | Section | Size (bytes) | Contents |
//! |---------|--------------|----------|
//! | Header | 172 | `LCM\0`, version 100, sample ID (32), sample name (64), Unix timestamp, peak count, reserved (64) |
//! | Instrument | 240 | column (64), mobile phase (128), flow rate, injection volume, wavelength, temperature, reserved (32) |
//! | Peak table | 82 × peaks | index, RT, area, height, concentration, name (32), width, asymmetry, reserved (16) |
//! | Chromatogram | 8008 | point count (1000), max time, 1000 × (time, intensity) |
//! | Trailer | 7 | `LCMEND\0` |

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod chromatogram;
pub mod format;
pub mod reader;
pub mod sample;
pub mod validator;
pub mod writer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::chromatogram::{ChromatogramConfig, PeakProfile, SyntheticChromatogram};
    pub use crate::format::{expected_file_size, FORMAT_VERSION, MAGIC, TRAILER};
    pub use crate::reader::{FileSummary, LcmFile, LcmReader, ReaderError};
    pub use crate::sample::{InstrumentSettings, PeakRecord, SampleError, SampleRecord};
    pub use crate::validator::{validate_lcm_file, ValidationReport};
    pub use crate::writer::{
        encode_to_vec, write_lcm_file, LcmWriter, WriterConfig, WriterError, WriterStats,
    };
}
