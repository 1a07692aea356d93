use chrono::{DateTime, Utc};

/// Decoded header section
#[derive(Debug, Clone, PartialEq)]
pub struct LcmHeader {
    /// Format version (100 = 1.00)
    pub version: u16,
    /// Sample identifier
    pub sample_id: String,
    /// Sample name
    pub sample_name: String,
    /// Analysis date as seconds since the Unix epoch
    pub timestamp: u32,
    /// Number of peak records that follow the instrument block
    pub peak_count: u16,
}

impl LcmHeader {
    /// Analysis date in UTC
    pub fn analysis_date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::from(self.timestamp), 0)
    }
}

/// Decoded instrument block
#[derive(Debug, Clone, PartialEq)]
pub struct LcmInstrument {
    /// Column name
    pub column: String,
    /// Mobile phase
    pub mobile_phase: String,
    /// Flow rate
    pub flow_rate: f32,
    /// Injection volume
    pub injection_volume: f32,
    /// Detection wavelength
    pub detection_wavelength: f32,
    /// Column temperature
    pub temperature: f32,
}

/// Decoded peak record
#[derive(Debug, Clone, PartialEq)]
pub struct LcmPeak {
    /// 1-based position in the peak table
    pub index: u16,
    /// Retention time
    pub retention_time: f32,
    /// Peak area
    pub area: f64,
    /// Peak height
    pub height: f64,
    /// Concentration
    pub concentration: f32,
    /// Peak name
    pub name: String,
    /// Peak width
    pub width: f32,
    /// Peak asymmetry
    pub asymmetry: f32,
}

/// Decoded chromatogram block
#[derive(Debug, Clone, PartialEq)]
pub struct LcmChromatogram {
    /// End of the time axis
    pub max_time: f32,
    /// Sample times
    pub times: Vec<f32>,
    /// Sample intensities
    pub intensities: Vec<f32>,
}

impl LcmChromatogram {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True if there are no samples
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterate over (time, intensity) pairs
    pub fn points(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.times.iter().copied().zip(self.intensities.iter().copied())
    }
}

/// A fully decoded LCM file
#[derive(Debug, Clone, PartialEq)]
pub struct LcmFile {
    /// Header section
    pub header: LcmHeader,
    /// Instrument block
    pub instrument: LcmInstrument,
    /// Peak table
    pub peaks: Vec<LcmPeak>,
    /// Chromatogram block
    pub chromatogram: LcmChromatogram,
}
