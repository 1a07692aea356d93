//! # Chromatogram Synthesizer
//!
//! LCM files carry a chromatogram trace alongside the peak table. The sample
//! description only lists integrated peaks, so the trace is synthesized: a
//! fixed number of evenly spaced samples over `[0, max_time)`, each holding a
//! baseline plus the contribution of every peak whose retention time lies
//! within [`PEAK_WINDOW`] of the sample.
//!
//! Two peak shapes are available:
//!
//! - [`PeakProfile::Parabolic`] (default): `height × 0.8 × (1 − (Δt / 0.25)²)`
//!   on a baseline of 10. Contributions turn negative for `0.25 < |Δt| < 0.5`;
//!   the summed intensity is clamped at zero.
//! - [`PeakProfile::Gaussian`]: `height × exp(−½ (Δt / 0.05)²)` on a baseline of 50.

use serde::{Deserialize, Serialize};

use crate::format::CHROMATOGRAM_POINTS;
use crate::sample::PeakRecord;

/// Half-width of the window in which a peak contributes to a sample
pub const PEAK_WINDOW: f64 = 0.5;

/// Trace length used when there are no peaks
pub const DEFAULT_MAX_TIME: f64 = 10.0;

/// Trace length relative to the latest retention time
pub const MAX_TIME_FACTOR: f64 = 1.2;

const PARABOLIC_SCALE: f64 = 0.8;
const PARABOLIC_HALF_WIDTH: f64 = 0.25;
const GAUSSIAN_SIGMA: f64 = 0.05;

/// Shape used to render each peak into the trace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeakProfile {
    /// Inverted parabola, baseline 10
    #[default]
    Parabolic,
    /// Gaussian with sigma 0.05, baseline 50
    Gaussian,
}

impl PeakProfile {
    /// Baseline intensity used when none is configured
    pub fn default_baseline(self) -> f64 {
        match self {
            PeakProfile::Parabolic => 10.0,
            PeakProfile::Gaussian => 50.0,
        }
    }

    /// Contribution of a peak of `height` at distance `offset` from its apex
    pub fn contribution(self, offset: f64, height: f64) -> f64 {
        match self {
            PeakProfile::Parabolic => {
                let x = offset / PARABOLIC_HALF_WIDTH;
                height * PARABOLIC_SCALE * (1.0 - x * x)
            }
            PeakProfile::Gaussian => {
                let x = offset / GAUSSIAN_SIGMA;
                height * (-0.5 * x * x).exp()
            }
        }
    }
}

impl std::fmt::Display for PeakProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeakProfile::Parabolic => write!(f, "parabolic"),
            PeakProfile::Gaussian => write!(f, "gaussian"),
        }
    }
}

/// Configuration for chromatogram synthesis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChromatogramConfig {
    /// Peak shape
    pub profile: PeakProfile,

    /// Baseline override (None = profile default)
    pub baseline: Option<f64>,
}

impl ChromatogramConfig {
    /// Configuration for a profile with its default baseline
    pub fn with_profile(profile: PeakProfile) -> Self {
        Self {
            profile,
            baseline: None,
        }
    }

    /// Effective baseline intensity
    pub fn baseline(&self) -> f64 {
        self.baseline.unwrap_or_else(|| self.profile.default_baseline())
    }
}

/// A single (time, intensity) sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromatogramPoint {
    /// Time in minutes
    pub time: f64,
    /// Detector intensity, never negative
    pub intensity: f64,
}

/// A synthesized chromatogram trace
#[derive(Debug, Clone)]
pub struct SyntheticChromatogram {
    /// End of the time axis (exclusive)
    pub max_time: f64,
    /// Evenly spaced samples starting at t = 0
    pub points: Vec<ChromatogramPoint>,
}

impl SyntheticChromatogram {
    /// Synthesize the trace for a peak list
    pub fn from_peaks(peaks: &[PeakRecord], config: &ChromatogramConfig) -> Self {
        let max_time = max_time(peaks);
        let count = f64::from(CHROMATOGRAM_POINTS);
        let points = (0..CHROMATOGRAM_POINTS)
            .map(|i| {
                let time = f64::from(i) / count * max_time;
                ChromatogramPoint {
                    time,
                    intensity: intensity_at(time, peaks, config),
                }
            })
            .collect();

        Self { max_time, points }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the trace holds no samples
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sample with the highest intensity
    pub fn apex(&self) -> Option<&ChromatogramPoint> {
        self.points
            .iter()
            .max_by(|a, b| a.intensity.total_cmp(&b.intensity))
    }
}

/// End of the time axis: 1.2 × the latest retention time, or 10 without peaks
pub fn max_time(peaks: &[PeakRecord]) -> f64 {
    if peaks.is_empty() {
        return DEFAULT_MAX_TIME;
    }
    let latest = peaks
        .iter()
        .map(PeakRecord::retention_time)
        .fold(f64::NEG_INFINITY, f64::max);
    latest * MAX_TIME_FACTOR
}

/// Intensity at `time`: baseline plus windowed peak contributions, clamped at zero
pub fn intensity_at(time: f64, peaks: &[PeakRecord], config: &ChromatogramConfig) -> f64 {
    let signal: f64 = peaks
        .iter()
        .filter_map(|peak| {
            let offset = time - peak.retention_time();
            (offset.abs() < PEAK_WINDOW)
                .then(|| config.profile.contribution(offset, peak.height()))
        })
        .sum();

    (signal + config.baseline()).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_peak() -> Vec<PeakRecord> {
        vec![PeakRecord::new("A", 5.0, 1000.0, 100.0)]
    }

    #[test]
    fn test_max_time() {
        assert_eq!(max_time(&[]), 10.0);
        assert!((max_time(&single_peak()) - 6.0).abs() < 1e-12);

        let peaks = vec![
            PeakRecord::new("A", 2.0, 0.0, 0.0),
            PeakRecord::new("B", 8.0, 0.0, 0.0),
            PeakRecord::new("C", 4.0, 0.0, 0.0),
        ];
        assert!((max_time(&peaks) - 9.6).abs() < 1e-12);
    }

    #[test]
    fn test_parabolic_apex() {
        let config = ChromatogramConfig::default();
        let apex = intensity_at(5.0, &single_peak(), &config);
        assert!((apex - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_sample_to_apex() {
        let chrom =
            SyntheticChromatogram::from_peaks(&single_peak(), &ChromatogramConfig::default());
        let nearest = chrom
            .points
            .iter()
            .min_by(|a, b| (a.time - 5.0).abs().total_cmp(&(b.time - 5.0).abs()))
            .unwrap();
        assert!((nearest.time - 5.0).abs() < 0.01);
        assert!((nearest.intensity - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_outside_window_is_baseline() {
        let config = ChromatogramConfig::default();
        assert_eq!(intensity_at(4.5, &single_peak(), &config), 10.0);
        assert_eq!(intensity_at(0.0, &single_peak(), &config), 10.0);
    }

    #[test]
    fn test_parabola_tail_clamped_at_zero() {
        // 0.45 from apex: 100 * 0.8 * (1 - 3.24) = -179.2, below the baseline
        let config = ChromatogramConfig::default();
        assert_eq!(intensity_at(5.45, &single_peak(), &config), 0.0);
    }

    #[test]
    fn test_gaussian_profile() {
        let config = ChromatogramConfig::with_profile(PeakProfile::Gaussian);
        assert_eq!(config.baseline(), 50.0);
        assert!((intensity_at(5.0, &single_peak(), &config) - 150.0).abs() < 1e-9);

        let one_sigma = intensity_at(5.05, &single_peak(), &config);
        let expected = 50.0 + 100.0 * (-0.5f64).exp();
        assert!((one_sigma - expected).abs() < 1e-9);
    }

    #[test]
    fn test_baseline_override() {
        let config = ChromatogramConfig {
            profile: PeakProfile::Parabolic,
            baseline: Some(0.0),
        };
        assert_eq!(intensity_at(1.0, &single_peak(), &config), 0.0);
    }

    #[test]
    fn test_trace_shape() {
        let chrom = SyntheticChromatogram::from_peaks(&[], &ChromatogramConfig::default());
        assert_eq!(chrom.len(), CHROMATOGRAM_POINTS as usize);
        assert_eq!(chrom.points[0].time, 0.0);
        assert!((chrom.points[999].time - 9.99).abs() < 1e-9);
        assert!(chrom.points.iter().all(|p| p.intensity == 10.0));
    }

    #[test]
    fn test_overlapping_peaks_sum() {
        let peaks = vec![
            PeakRecord::new("A", 3.0, 0.0, 50.0),
            PeakRecord::new("B", 3.1, 0.0, 50.0),
        ];
        let config = ChromatogramConfig::default();
        // at 3.05 each peak is 0.05 away: 50 * 0.8 * (1 - 0.04) = 38.4
        let value = intensity_at(3.05, &peaks, &config);
        assert!((value - (10.0 + 2.0 * 38.4)).abs() < 1e-9);
    }

    #[test]
    fn test_apex() {
        let chrom =
            SyntheticChromatogram::from_peaks(&single_peak(), &ChromatogramConfig::default());
        let apex = chrom.apex().unwrap();
        assert!((apex.time - 5.0).abs() < 0.01);
    }
}
