use anyhow::{Context, Result};
use std::path::PathBuf;

use lcmgen::reader::LcmFile;

/// Display the contents of an LCM file
pub fn run(file: PathBuf) -> Result<()> {
    let lcm = LcmFile::open(&file).with_context(|| format!("Failed to read {}", file.display()))?;
    let header = &lcm.header;
    let instrument = &lcm.instrument;

    println!("LCM File Information");
    println!("====================");
    println!("File: {}", file.display());
    println!();

    println!("Header:");
    println!("  Format version: {}", header.version);
    println!("  Sample ID: {}", header.sample_id);
    println!("  Sample name: {}", header.sample_name);
    match header.analysis_date() {
        Some(date) => println!("  Analysis date: {} ({})", date.to_rfc3339(), header.timestamp),
        None => println!("  Analysis date: {}", header.timestamp),
    }
    println!("  Peaks: {}", header.peak_count);
    println!();

    println!("Instrument:");
    println!("  Column: {}", instrument.column);
    println!("  Mobile phase: {}", instrument.mobile_phase);
    println!("  Flow rate: {} mL/min", instrument.flow_rate);
    println!("  Injection volume: {} uL", instrument.injection_volume);
    println!("  Detection wavelength: {} nm", instrument.detection_wavelength);
    println!("  Temperature: {} C", instrument.temperature);
    println!();

    if !lcm.peaks.is_empty() {
        println!("Peaks:");
        println!(
            "  {:>5}  {:<24} {:>10} {:>14} {:>12} {:>10}",
            "#", "Name", "RT (min)", "Area", "Height", "Conc."
        );
        for peak in &lcm.peaks {
            println!(
                "  {:>5}  {:<24} {:>10.3} {:>14.2} {:>12.2} {:>10.4}",
                peak.index,
                peak.name,
                peak.retention_time,
                peak.area,
                peak.height,
                peak.concentration
            );
        }
        println!();
    }

    println!("Chromatogram:");
    println!("  Points: {}", lcm.chromatogram.len());
    println!("  Max time: {:.3} min", lcm.chromatogram.max_time);
    println!();

    println!("Summary: {}", lcm.summary());

    Ok(())
}
