use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::timestamp::{parse_analysis_date, unix_timestamp_u32};
use super::{InstrumentSettings, PeakRecord, SampleError};

static NO_SETTINGS: InstrumentSettings = InstrumentSettings::EMPTY;

/// One chromatography sample: identity, analysis date, instrument settings and peaks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleRecord {
    /// Laboratory sample identifier
    pub sample_id: String,

    /// Human-readable sample name
    pub sample_name: String,

    /// ISO-8601 date or timestamp of the analysis
    pub analysis_date: String,

    /// Instrument settings (absent or null means all defaults)
    #[serde(default)]
    pub instrument_settings: Option<InstrumentSettings>,

    /// Detected peaks in elution order
    pub peaks: Vec<PeakRecord>,
}

impl SampleRecord {
    /// Create a sample with no peaks and default instrument settings
    pub fn new(
        sample_id: impl Into<String>,
        sample_name: impl Into<String>,
        analysis_date: impl Into<String>,
    ) -> Self {
        Self {
            sample_id: sample_id.into(),
            sample_name: sample_name.into(),
            analysis_date: analysis_date.into(),
            instrument_settings: None,
            peaks: Vec::new(),
        }
    }

    /// Append a peak
    pub fn with_peak(mut self, peak: PeakRecord) -> Self {
        self.peaks.push(peak);
        self
    }

    /// Replace the instrument settings
    pub fn with_instrument_settings(mut self, settings: InstrumentSettings) -> Self {
        self.instrument_settings = Some(settings);
        self
    }

    /// Parse a sample from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SampleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a sample from any reader yielding a JSON document
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SampleError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a sample from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SampleError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, SampleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Instrument settings, falling back to all-default settings
    pub fn instrument(&self) -> &InstrumentSettings {
        self.instrument_settings.as_ref().unwrap_or(&NO_SETTINGS)
    }

    /// Parsed analysis date in UTC
    pub fn analysis_datetime(&self) -> Result<chrono::DateTime<chrono::Utc>, SampleError> {
        parse_analysis_date(&self.analysis_date)
    }

    /// Analysis date as the header's 32-bit Unix timestamp
    pub fn unix_timestamp(&self) -> Result<u32, SampleError> {
        unix_timestamp_u32(&self.analysis_date)
    }

    /// Number of peaks
    pub fn peak_count(&self) -> usize {
        self.peaks.len()
    }
}
