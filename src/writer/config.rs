use crate::chromatogram::{ChromatogramConfig, PeakProfile};

/// Configuration for the LCM writer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WriterConfig {
    /// How the chromatogram trace is synthesized
    pub chromatogram: ChromatogramConfig,
}

impl WriterConfig {
    /// Use the given peak profile with its default baseline
    pub fn with_profile(mut self, profile: PeakProfile) -> Self {
        self.chromatogram.profile = profile;
        self
    }

    /// Override the chromatogram baseline
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.chromatogram.baseline = Some(baseline);
        self
    }
}
