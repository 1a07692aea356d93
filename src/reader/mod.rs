//! # LCM Reader Module
//!
//! Decodes LCM files back into typed sections. Used by the `info` and
//! `validate` commands and by tests to check what the writer produced.
//!
//! Decoding is strict about structure (signature, section lengths, trailer,
//! no trailing data) but not about values; semantic checks live in
//! [`crate::validator`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use lcmgen::reader::LcmFile;
//!
//! let file = LcmFile::open("sample.lcm")?;
//! println!("{}: {}", file.header.sample_id, file.summary());
//! for peak in &file.peaks {
//!     println!("{:>3} {:<31} {:>8.3}", peak.index, peak.name, peak.retention_time);
//! }
//! # Ok::<(), lcmgen::reader::ReaderError>(())
//! ```

use std::io::Read;

mod decode;
mod error;
mod open;
mod summary;
mod types;


pub use error::ReaderError;
pub use summary::FileSummary;
pub use types::{LcmChromatogram, LcmFile, LcmHeader, LcmInstrument, LcmPeak};

/// Section-by-section decoder over any byte source
pub struct LcmReader<R: Read> {
    inner: R,
    offset: u64,
}

impl<R: Read> LcmReader<R> {
    /// Wrap a byte source positioned at the start of an LCM file
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    /// Number of bytes consumed so far
    pub fn offset(&self) -> u64 {
        self.offset
    }
}
