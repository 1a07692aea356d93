use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::SampleError;

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 analysis date.
///
/// Timestamps without an offset, and bare dates, are taken as UTC.
pub fn parse_analysis_date(value: &str) -> Result<DateTime<Utc>, SampleError> {
    let trimmed = value.trim();
    // A trailing 'Z' is the same as +00:00; normalizing lets the offset formats cover it.
    let normalized = match trimmed.strip_suffix('Z').or_else(|| trimmed.strip_suffix('z')) {
        Some(stripped) => format!("{}+00:00", stripped),
        None => trimmed.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    Err(SampleError::InvalidTimestamp(value.to_string()))
}

/// Whole seconds since the epoch (truncated toward zero) as the header's u32 field.
pub fn unix_timestamp_u32(value: &str) -> Result<u32, SampleError> {
    let dt = parse_analysis_date(value)?;
    let mut seconds = dt.timestamp();
    // timestamp() floors; fractional pre-epoch instants truncate toward zero instead
    if seconds < 0 && dt.timestamp_subsec_nanos() > 0 {
        seconds += 1;
    }
    u32::try_from(seconds).map_err(|_| SampleError::TimestampOutOfRange {
        value: value.to_string(),
        seconds,
    })
}
