//! # LCM Layout
//!
//! Byte layout of an LCM file. Every section has a fixed width, so the size of
//! a file depends only on its peak count:
//!
//! ```text
//! header (172) | instrument block (240) | peak table (82 × N)
//!     | chromatogram (8 + 1000 × 8) | trailer (7)
//! ```
//!
//! All numeric fields are little-endian. String fields are raw UTF-8, truncated
//! to one byte less than the field width and zero-padded, so every string field
//! carries at least one terminating NUL.

mod fields;

#[cfg(test)]
mod tests;

pub use fields::{read_fixed_str, truncate_utf8, write_fixed_str, write_zeros};

/// File signature at offset 0
pub const MAGIC: [u8; 4] = *b"LCM\0";

/// Format version written after the signature (1.00)
pub const FORMAT_VERSION: u16 = 100;

/// Literal written after the chromatogram block
pub const TRAILER: [u8; 7] = *b"LCMEND\0";

/// Width of the sample ID field
pub const SAMPLE_ID_WIDTH: usize = 32;
/// Width of the sample name field
pub const SAMPLE_NAME_WIDTH: usize = 64;
/// Reserved bytes closing the header
pub const HEADER_RESERVED: usize = 64;
/// Size of the header section
pub const HEADER_SIZE: usize =
    MAGIC.len() + 2 + SAMPLE_ID_WIDTH + SAMPLE_NAME_WIDTH + 4 + 2 + HEADER_RESERVED;

/// Width of the column name field
pub const COLUMN_WIDTH: usize = 64;
/// Width of the mobile phase field
pub const MOBILE_PHASE_WIDTH: usize = 128;
/// Reserved bytes closing the instrument block
pub const INSTRUMENT_RESERVED: usize = 32;
/// Size of the instrument block
pub const INSTRUMENT_BLOCK_SIZE: usize =
    COLUMN_WIDTH + MOBILE_PHASE_WIDTH + 4 * 4 + INSTRUMENT_RESERVED;

/// Width of the peak name field
pub const PEAK_NAME_WIDTH: usize = 32;
/// Reserved bytes closing each peak record
pub const PEAK_RESERVED: usize = 16;
/// Size of one peak record
pub const PEAK_RECORD_SIZE: usize = 2 + 4 + 8 + 8 + 4 + PEAK_NAME_WIDTH + 4 + 4 + PEAK_RESERVED;

/// Peak width written for every peak (not measured)
pub const PEAK_WIDTH: f32 = 0.1;
/// Peak asymmetry written for every peak (symmetrical)
pub const PEAK_ASYMMETRY: f32 = 1.0;

/// Largest peak count the u16 header field can hold
pub const MAX_PEAKS: usize = u16::MAX as usize;

/// Number of synthetic chromatogram samples
pub const CHROMATOGRAM_POINTS: u32 = 1000;
/// Size of the chromatogram block: point count, max time, then (time, intensity) pairs
pub const CHROMATOGRAM_BLOCK_SIZE: usize = 4 + 4 + CHROMATOGRAM_POINTS as usize * 8;

/// Exact size in bytes of an LCM file holding `peak_count` peaks
pub fn expected_file_size(peak_count: usize) -> u64 {
    (HEADER_SIZE
        + INSTRUMENT_BLOCK_SIZE
        + peak_count * PEAK_RECORD_SIZE
        + CHROMATOGRAM_BLOCK_SIZE
        + TRAILER.len()) as u64
}
