use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::chromatogram::SyntheticChromatogram;
use crate::format::{
    write_fixed_str, write_zeros, COLUMN_WIDTH, FORMAT_VERSION, HEADER_RESERVED,
    INSTRUMENT_RESERVED, MAGIC, MOBILE_PHASE_WIDTH, PEAK_ASYMMETRY, PEAK_NAME_WIDTH,
    PEAK_RESERVED, PEAK_WIDTH, SAMPLE_ID_WIDTH, SAMPLE_NAME_WIDTH, TRAILER,
};
use crate::sample::{InstrumentSettings, PeakRecord, SampleRecord};

pub(super) fn write_header<W: Write>(
    w: &mut W,
    sample: &SampleRecord,
    timestamp: u32,
    peak_count: u16,
) -> io::Result<()> {
    w.write_all(&MAGIC)?;
    w.write_u16::<LittleEndian>(FORMAT_VERSION)?;
    write_fixed_str(w, &sample.sample_id, SAMPLE_ID_WIDTH)?;
    write_fixed_str(w, &sample.sample_name, SAMPLE_NAME_WIDTH)?;
    w.write_u32::<LittleEndian>(timestamp)?;
    w.write_u16::<LittleEndian>(peak_count)?;
    write_zeros(w, HEADER_RESERVED)
}

pub(super) fn write_instrument_block<W: Write>(
    w: &mut W,
    settings: &InstrumentSettings,
) -> io::Result<()> {
    write_fixed_str(w, settings.column(), COLUMN_WIDTH)?;
    write_fixed_str(w, settings.mobile_phase(), MOBILE_PHASE_WIDTH)?;
    w.write_f32::<LittleEndian>(settings.flow_rate() as f32)?;
    w.write_f32::<LittleEndian>(settings.injection_volume() as f32)?;
    w.write_f32::<LittleEndian>(settings.detection_wavelength() as f32)?;
    w.write_f32::<LittleEndian>(settings.temperature() as f32)?;
    write_zeros(w, INSTRUMENT_RESERVED)
}

/// `index` is 1-based.
pub(super) fn write_peak_record<W: Write>(
    w: &mut W,
    index: u16,
    peak: &PeakRecord,
) -> io::Result<()> {
    w.write_u16::<LittleEndian>(index)?;
    w.write_f32::<LittleEndian>(peak.retention_time() as f32)?;
    w.write_f64::<LittleEndian>(peak.area())?;
    w.write_f64::<LittleEndian>(peak.height())?;
    w.write_f32::<LittleEndian>(peak.concentration() as f32)?;
    write_fixed_str(w, &peak.name(usize::from(index)), PEAK_NAME_WIDTH)?;
    w.write_f32::<LittleEndian>(PEAK_WIDTH)?;
    w.write_f32::<LittleEndian>(PEAK_ASYMMETRY)?;
    write_zeros(w, PEAK_RESERVED)
}

pub(super) fn write_chromatogram<W: Write>(
    w: &mut W,
    chromatogram: &SyntheticChromatogram,
) -> io::Result<()> {
    let count = u32::try_from(chromatogram.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "chromatogram too long"))?;
    w.write_u32::<LittleEndian>(count)?;
    w.write_f32::<LittleEndian>(chromatogram.max_time as f32)?;
    for point in &chromatogram.points {
        w.write_f32::<LittleEndian>(point.time as f32)?;
        w.write_f32::<LittleEndian>(point.intensity as f32)?;
    }
    Ok(())
}

pub(super) fn write_trailer<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(&TRAILER)
}
