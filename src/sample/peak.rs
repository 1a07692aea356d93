use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::numeric::lenient_f64;

/// A detected chromatographic peak
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakRecord {
    /// Compound/peak label
    #[serde(default)]
    pub peak_name: Option<String>,

    /// Retention time in minutes
    #[serde(default, deserialize_with = "lenient_f64")]
    pub retention_time: Option<f64>,

    /// Integrated peak area
    #[serde(default, deserialize_with = "lenient_f64")]
    pub area: Option<f64>,

    /// Peak apex height
    #[serde(default, deserialize_with = "lenient_f64")]
    pub height: Option<f64>,

    /// Quantified concentration
    #[serde(default, deserialize_with = "lenient_f64")]
    pub concentration: Option<f64>,
}

impl PeakRecord {
    /// Create a named peak with the given retention time, area and height
    pub fn new(name: impl Into<String>, retention_time: f64, area: f64, height: f64) -> Self {
        Self {
            peak_name: Some(name.into()),
            retention_time: Some(retention_time),
            area: Some(area),
            height: Some(height),
            concentration: None,
        }
    }

    /// Set the concentration
    pub fn with_concentration(mut self, concentration: f64) -> Self {
        self.concentration = Some(concentration);
        self
    }

    /// Name of the peak at 1-based position `index`; `Peak_<index>` when unnamed
    pub fn name(&self, index: usize) -> Cow<'_, str> {
        match &self.peak_name {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(format!("Peak_{}", index)),
        }
    }

    /// Retention time, or 0.0
    pub fn retention_time(&self) -> f64 {
        self.retention_time.unwrap_or(0.0)
    }

    /// Area, or 0.0
    pub fn area(&self) -> f64 {
        self.area.unwrap_or(0.0)
    }

    /// Height, or 0.0
    pub fn height(&self) -> f64 {
        self.height.unwrap_or(0.0)
    }

    /// Concentration, or 0.0
    pub fn concentration(&self) -> f64 {
        self.concentration.unwrap_or(0.0)
    }
}
