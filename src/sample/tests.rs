use super::*;

const FULL_SAMPLE: &str = r#"{
    "sampleId": "S-2024-001",
    "sampleName": "Caffeine standard",
    "analystName": "ignored",
    "analysisDate": "2024-01-15T10:30:00Z",
    "instrumentSettings": {
        "column": "C18 150x4.6mm",
        "mobile_phase": "ACN:H2O 60:40",
        "flow_rate": 1.2,
        "injection_volume": "20",
        "detection_wavelength": 273,
        "temperature": null
    },
    "systemSuitability": { "resolution": 2.1 },
    "peaks": [
        { "peakName": "Caffeine", "retentionTime": 3.42, "area": 125000.5, "height": 8500, "concentration": 0.25 },
        { "retentionTime": "5.1", "area": 4000 }
    ]
}"#;

#[test]
fn test_parse_full_sample() {
    let sample = SampleRecord::from_json(FULL_SAMPLE).unwrap();

    assert_eq!(sample.sample_id, "S-2024-001");
    assert_eq!(sample.sample_name, "Caffeine standard");
    assert_eq!(sample.peak_count(), 2);

    let settings = sample.instrument();
    assert_eq!(settings.column(), "C18 150x4.6mm");
    assert_eq!(settings.mobile_phase(), "ACN:H2O 60:40");
    assert_eq!(settings.flow_rate(), 1.2);
    assert_eq!(settings.injection_volume(), 20.0);
    assert_eq!(settings.detection_wavelength(), 273.0);
    assert_eq!(settings.temperature(), InstrumentSettings::DEFAULT_TEMPERATURE);
}

#[test]
fn test_peak_defaults() {
    let sample = SampleRecord::from_json(FULL_SAMPLE).unwrap();
    let second = &sample.peaks[1];

    assert_eq!(second.name(2), "Peak_2");
    assert_eq!(second.retention_time(), 5.1);
    assert_eq!(second.area(), 4000.0);
    assert_eq!(second.height(), 0.0);
    assert_eq!(second.concentration(), 0.0);

    assert_eq!(sample.peaks[0].name(1), "Caffeine");
}

#[test]
fn test_missing_instrument_settings_uses_defaults() {
    let json = r#"{"sampleId":"A","sampleName":"B","analysisDate":"2024-01-15","peaks":[]}"#;
    let sample = SampleRecord::from_json(json).unwrap();
    let settings = sample.instrument();

    assert_eq!(settings.column(), "Unknown");
    assert_eq!(settings.mobile_phase(), "Unknown");
    assert_eq!(settings.flow_rate(), 1.0);
    assert_eq!(settings.injection_volume(), 10.0);
    assert_eq!(settings.detection_wavelength(), 254.0);
    assert_eq!(settings.temperature(), 25.0);
}

#[test]
fn test_null_instrument_settings() {
    let json = r#"{"sampleId":"A","sampleName":"B","analysisDate":"2024-01-15","instrumentSettings":null,"peaks":[]}"#;
    let sample = SampleRecord::from_json(json).unwrap();
    assert!(sample.instrument_settings.is_none());
    assert_eq!(sample.instrument().flow_rate(), 1.0);
}

#[test]
fn test_missing_required_field_is_error() {
    let json = r#"{"sampleId":"A","sampleName":"B","analysisDate":"2024-01-15"}"#;
    let err = SampleRecord::from_json(json).unwrap_err();
    assert!(matches!(err, SampleError::JsonError(_)));
    assert!(err.to_string().contains("peaks"));
}

#[test]
fn test_non_numeric_string_is_error() {
    let json = r#"{"sampleId":"A","sampleName":"B","analysisDate":"2024-01-15",
        "peaks":[{"retentionTime":"early"}]}"#;
    let err = SampleRecord::from_json(json).unwrap_err();
    assert!(err.to_string().contains("early"));
}

#[test]
fn test_empty_peak_name_is_kept() {
    let json = r#"{"sampleId":"A","sampleName":"B","analysisDate":"2024-01-15",
        "peaks":[{"peakName":"","retentionTime":1.0}, {"peakName":null}]}"#;
    let sample = SampleRecord::from_json(json).unwrap();
    assert_eq!(sample.peaks[0].name(1), "");
    assert_eq!(sample.peaks[1].name(2), "Peak_2");
}

#[test]
fn test_json_roundtrip() {
    let sample = SampleRecord::new("ID-1", "Blank", "2024-03-01T08:00:00Z")
        .with_peak(PeakRecord::new("Analyte", 2.5, 1000.0, 50.0).with_concentration(0.1));

    let json = sample.to_json().unwrap();
    let restored = SampleRecord::from_json(&json).unwrap();
    assert_eq!(restored, sample);
}

#[test]
fn test_timestamp_utc() {
    assert_eq!(unix_timestamp_u32("2024-01-15T10:30:00Z").unwrap(), 1_705_314_600);
    assert_eq!(unix_timestamp_u32("2024-01-15T10:30:00.999Z").unwrap(), 1_705_314_600);
}

#[test]
fn test_timestamp_offsets() {
    let utc = unix_timestamp_u32("2024-01-15T10:30:00Z").unwrap();
    assert_eq!(unix_timestamp_u32("2024-01-15T12:30:00+02:00").unwrap(), utc);
    assert_eq!(unix_timestamp_u32("2024-01-15T12:30:00+0200").unwrap(), utc);
    assert_eq!(unix_timestamp_u32("2024-01-15T10:30Z").unwrap(), utc);
}

#[test]
fn test_timestamp_naive_forms_are_utc() {
    let utc = unix_timestamp_u32("2024-01-15T10:30:00Z").unwrap();
    assert_eq!(unix_timestamp_u32("2024-01-15T10:30:00").unwrap(), utc);
    assert_eq!(unix_timestamp_u32("2024-01-15 10:30:00").unwrap(), utc);
    assert_eq!(unix_timestamp_u32("2024-01-15T10:30").unwrap(), utc);
    assert_eq!(unix_timestamp_u32("2024-01-15").unwrap(), 1_705_276_800);
}

#[test]
fn test_timestamp_invalid() {
    for bad in ["", "yesterday", "15/01/2024", "2024-13-01", "2024-01-15T25:00:00Z"] {
        let err = unix_timestamp_u32(bad).unwrap_err();
        assert!(matches!(err, SampleError::InvalidTimestamp(_)), "{bad:?}");
    }
}

#[test]
fn test_timestamp_out_of_range() {
    let err = unix_timestamp_u32("1969-12-31T23:59:58Z").unwrap_err();
    assert!(matches!(err, SampleError::TimestampOutOfRange { seconds: -2, .. }));

    let err = unix_timestamp_u32("2106-02-08T00:00:00Z").unwrap_err();
    assert!(matches!(err, SampleError::TimestampOutOfRange { .. }));

    assert_eq!(unix_timestamp_u32("1970-01-01T00:00:00Z").unwrap(), 0);
    assert_eq!(unix_timestamp_u32("2106-02-07T06:28:15Z").unwrap(), u32::MAX);
}

#[test]
fn test_timestamp_truncates_toward_zero_before_epoch() {
    assert_eq!(unix_timestamp_u32("1969-12-31T23:59:59.5Z").unwrap(), 0);
}

#[test]
fn test_analysis_datetime() {
    let sample = SampleRecord::new("A", "B", "2024-01-15T12:30:00+02:00");
    let date = sample.analysis_datetime().unwrap();
    assert_eq!(date.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    assert_eq!(date.timestamp(), i64::from(sample.unix_timestamp().unwrap()));

    let bad = SampleRecord::new("A", "B", "15/01/2024");
    assert!(matches!(bad.analysis_datetime(), Err(SampleError::InvalidTimestamp(_))));
}
