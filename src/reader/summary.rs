use std::fmt;

use super::types::LcmFile;

/// Summary statistics about an LCM file
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    /// Number of peaks
    pub peak_count: usize,
    /// Retention time range (min, max)
    pub rt_range: Option<(f32, f32)>,
    /// Sum of peak areas
    pub total_area: f64,
    /// Number of chromatogram samples
    pub point_count: usize,
    /// Chromatogram apex as (time, intensity)
    pub apex: Option<(f32, f32)>,
    /// Lowest chromatogram intensity
    pub min_intensity: Option<f32>,
}

impl LcmFile {
    /// Get summary statistics about the file
    pub fn summary(&self) -> FileSummary {
        let rt_range = if self.peaks.is_empty() {
            None
        } else {
            let min_rt = self
                .peaks
                .iter()
                .map(|p| p.retention_time)
                .fold(f32::MAX, f32::min);
            let max_rt = self
                .peaks
                .iter()
                .map(|p| p.retention_time)
                .fold(f32::MIN, f32::max);
            Some((min_rt, max_rt))
        };

        let apex = self
            .chromatogram
            .points()
            .max_by(|a, b| a.1.total_cmp(&b.1));
        let min_intensity = self
            .chromatogram
            .intensities
            .iter()
            .copied()
            .min_by(|a, b| a.total_cmp(b));

        FileSummary {
            peak_count: self.peaks.len(),
            rt_range,
            total_area: self.peaks.iter().map(|p| p.area).sum(),
            point_count: self.chromatogram.len(),
            apex,
            min_intensity,
        }
    }
}

impl fmt::Display for FileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} peaks", self.peak_count)?;
        if let Some((lo, hi)) = self.rt_range {
            write!(f, " (RT {:.3}-{:.3} min, total area {:.2})", lo, hi, self.total_area)?;
        }
        write!(f, ", {} chromatogram points", self.point_count)?;
        if let Some((time, intensity)) = self.apex {
            write!(f, ", apex {:.2} at {:.3} min", intensity, time)?;
        }
        Ok(())
    }
}
