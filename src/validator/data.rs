use crate::format::CHROMATOGRAM_POINTS;
use crate::reader::LcmFile;

use super::{ValidationCheck, ValidationReport};

pub(crate) const CHECK_DECODE: &str = "Decode";
pub(crate) const CHECK_ANALYSIS_DATE: &str = "Analysis date";
pub(crate) const CHECK_PEAK_INDICES: &str = "Peak indices";
pub(crate) const CHECK_POINT_COUNT: &str = "Chromatogram point count";
pub(crate) const CHECK_INTENSITIES: &str = "Chromatogram intensities";
pub(crate) const CHECK_TIME_AXIS: &str = "Chromatogram time axis";

/// Step 2: decoded values
pub(crate) fn check_data_sanity(bytes: &[u8], report: &mut ValidationReport) {
    let file = match LcmFile::from_bytes(bytes) {
        Ok(file) => {
            report.add_check(ValidationCheck::ok(CHECK_DECODE));
            file
        }
        Err(e) => {
            report.add_check(ValidationCheck::failed(CHECK_DECODE, e.to_string()));
            return;
        }
    };

    if file.header.timestamp == 0 {
        report.add_check(ValidationCheck::warning(
            CHECK_ANALYSIS_DATE,
            "timestamp is the Unix epoch (1970-01-01)",
        ));
    } else {
        report.add_check(ValidationCheck::ok(CHECK_ANALYSIS_DATE));
    }

    check_peak_indices(&file, report);
    check_chromatogram(&file, report);
}

fn check_peak_indices(file: &LcmFile, report: &mut ValidationReport) {
    let misplaced = file
        .peaks
        .iter()
        .enumerate()
        .find(|(i, peak)| usize::from(peak.index) != i + 1);

    match misplaced {
        None => report.add_check(ValidationCheck::ok(CHECK_PEAK_INDICES)),
        Some((i, peak)) => report.add_check(ValidationCheck::failed(
            CHECK_PEAK_INDICES,
            format!("record {} has index {}", i + 1, peak.index),
        )),
    }
}

fn check_chromatogram(file: &LcmFile, report: &mut ValidationReport) {
    let chrom = &file.chromatogram;

    if chrom.len() == CHROMATOGRAM_POINTS as usize {
        report.add_check(ValidationCheck::ok(CHECK_POINT_COUNT));
    } else {
        report.add_check(ValidationCheck::warning(
            CHECK_POINT_COUNT,
            format!("{} points (expected {})", chrom.len(), CHROMATOGRAM_POINTS),
        ));
    }

    let negative = chrom.intensities.iter().filter(|&&v| v < 0.0).count();
    let non_finite = chrom.intensities.iter().filter(|v| !v.is_finite()).count();
    if negative > 0 {
        report.add_check(ValidationCheck::failed(
            CHECK_INTENSITIES,
            format!("{} negative intensities", negative),
        ));
    } else if non_finite > 0 {
        report.add_check(ValidationCheck::warning(
            CHECK_INTENSITIES,
            format!("{} non-finite intensities", non_finite),
        ));
    } else {
        report.add_check(ValidationCheck::ok(CHECK_INTENSITIES));
    }

    // a negative max time (all retention times negative) legitimately runs backwards
    if chrom.max_time < 0.0 {
        report.add_check(ValidationCheck::warning(
            CHECK_TIME_AXIS,
            format!("negative max time {}", chrom.max_time),
        ));
        return;
    }
    let starts_at_zero = chrom.times.first().map_or(true, |&t| t == 0.0);
    let monotonic = chrom.times.windows(2).all(|w| w[0] <= w[1]);
    let within_range = chrom.times.iter().all(|&t| t <= chrom.max_time);
    if starts_at_zero && monotonic && within_range {
        report.add_check(ValidationCheck::ok(CHECK_TIME_AXIS));
    } else {
        report.add_check(ValidationCheck::failed(
            CHECK_TIME_AXIS,
            "times must start at 0 and increase up to the max time",
        ));
    }
}
