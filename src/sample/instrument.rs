use serde::{Deserialize, Serialize};

use super::numeric::lenient_f64;

/// Instrument settings recorded for a run.
///
/// Every field is optional in the input; the accessors apply the defaults the
/// import format expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstrumentSettings {
    /// Column name/model
    #[serde(default)]
    pub column: Option<String>,

    /// Mobile phase composition
    #[serde(default)]
    pub mobile_phase: Option<String>,

    /// Flow rate in mL/min
    #[serde(default, deserialize_with = "lenient_f64")]
    pub flow_rate: Option<f64>,

    /// Injection volume in uL
    #[serde(default, deserialize_with = "lenient_f64")]
    pub injection_volume: Option<f64>,

    /// Detector wavelength in nm
    #[serde(default, deserialize_with = "lenient_f64")]
    pub detection_wavelength: Option<f64>,

    /// Column temperature in Celsius
    #[serde(default, deserialize_with = "lenient_f64")]
    pub temperature: Option<f64>,
}

impl InstrumentSettings {
    /// Column name written when none is supplied
    pub const DEFAULT_COLUMN: &'static str = "Unknown";
    /// Mobile phase written when none is supplied
    pub const DEFAULT_MOBILE_PHASE: &'static str = "Unknown";
    /// Default flow rate
    pub const DEFAULT_FLOW_RATE: f64 = 1.0;
    /// Default injection volume
    pub const DEFAULT_INJECTION_VOLUME: f64 = 10.0;
    /// Default detection wavelength
    pub const DEFAULT_DETECTION_WAVELENGTH: f64 = 254.0;
    /// Default column temperature
    pub const DEFAULT_TEMPERATURE: f64 = 25.0;

    pub(crate) const EMPTY: InstrumentSettings = InstrumentSettings {
        column: None,
        mobile_phase: None,
        flow_rate: None,
        injection_volume: None,
        detection_wavelength: None,
        temperature: None,
    };

    /// Create settings with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Column name, or `"Unknown"`
    pub fn column(&self) -> &str {
        self.column.as_deref().unwrap_or(Self::DEFAULT_COLUMN)
    }

    /// Mobile phase, or `"Unknown"`
    pub fn mobile_phase(&self) -> &str {
        self.mobile_phase.as_deref().unwrap_or(Self::DEFAULT_MOBILE_PHASE)
    }

    /// Flow rate, or 1.0
    pub fn flow_rate(&self) -> f64 {
        self.flow_rate.unwrap_or(Self::DEFAULT_FLOW_RATE)
    }

    /// Injection volume, or 10.0
    pub fn injection_volume(&self) -> f64 {
        self.injection_volume.unwrap_or(Self::DEFAULT_INJECTION_VOLUME)
    }

    /// Detection wavelength, or 254.0
    pub fn detection_wavelength(&self) -> f64 {
        self.detection_wavelength
            .unwrap_or(Self::DEFAULT_DETECTION_WAVELENGTH)
    }

    /// Column temperature, or 25.0
    pub fn temperature(&self) -> f64 {
        self.temperature.unwrap_or(Self::DEFAULT_TEMPERATURE)
    }
}
