//! # LCM Writer Module
//!
//! Encodes a [`SampleRecord`](crate::sample::SampleRecord) into the LCM binary
//! layout described in [`crate::format`].
//!
//! ## Sections
//!
//! 1. **Header**: signature, version, sample identity, analysis timestamp, peak count
//! 2. **Instrument block**: column, mobile phase, flow/injection/detector/temperature
//! 3. **Peak table**: one fixed-size record per peak, in input order
//! 4. **Chromatogram**: synthesized trace (see [`crate::chromatogram`])
//! 5. **Trailer**: `LCMEND\0`
//!
//! Everything that can reject the input (timestamp parsing, peak count range)
//! is checked before the first byte is written.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lcmgen::sample::SampleRecord;
//! use lcmgen::writer::{write_lcm_file, WriterConfig};
//!
//! let sample = SampleRecord::from_file("sample.json")?;
//! let stats = write_lcm_file("sample.lcm", &sample, &WriterConfig::default())?;
//! println!("{}", stats);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
mod sections;
mod stats;
mod writer_impl;


pub use config::WriterConfig;
pub use error::WriterError;
pub use stats::WriterStats;
pub use writer_impl::{encode_to_vec, write_lcm_file, LcmWriter};
