//! # Sample Module
//!
//! The in-memory description of one chromatography run as supplied by the
//! laboratory system: sample identity, analysis date, instrument settings and
//! the detected peak list.
//!
//! Input documents come from several producers (data-entry forms, uploads,
//! scripts), so deserialization is forgiving:
//!
//! - numeric fields accept JSON numbers or numeric strings (`"10"`)
//! - `null` is treated the same as an absent key
//! - unknown keys are ignored
//!
//! Defaults are applied by accessor methods rather than at parse time, which
//! keeps the record faithful to what was actually supplied.

mod error;
mod instrument;
mod numeric;
mod peak;
mod record;
mod timestamp;

#[cfg(test)]
mod tests;

pub use error::SampleError;
pub use instrument::InstrumentSettings;
pub use peak::PeakRecord;
pub use record::SampleRecord;
pub use timestamp::{parse_analysis_date, unix_timestamp_u32};
