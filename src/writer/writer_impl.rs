use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{debug, info, warn};
use tempfile::{Builder, NamedTempFile};

use crate::chromatogram::SyntheticChromatogram;
use crate::format::MAX_PEAKS;
use crate::sample::SampleRecord;

use super::config::WriterConfig;
use super::error::WriterError;
use super::sections;
use super::stats::WriterStats;

/// Counts bytes passed through to the inner writer
struct CountingWriter<W: Write> {
    inner: W,
    count: u64,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Writer producing one LCM file from one sample
pub struct LcmWriter<W: Write> {
    writer: CountingWriter<W>,
    config: WriterConfig,
    stats: Option<WriterStats>,
    poisoned: bool,
}

impl<W: Write> LcmWriter<W> {
    /// Create a new writer to any Write implementation
    pub fn new(writer: W, config: WriterConfig) -> Self {
        Self {
            writer: CountingWriter {
                inner: writer,
                count: 0,
            },
            config,
            stats: None,
            poisoned: false,
        }
    }

    /// Encode `sample` as a complete LCM file.
    ///
    /// Fails without writing anything if the sample cannot be encoded.
    pub fn write_sample(&mut self, sample: &SampleRecord) -> Result<(), WriterError> {
        if self.poisoned {
            return Err(WriterError::Poisoned);
        }
        if self.stats.is_some() {
            return Err(WriterError::SampleAlreadyWritten);
        }

        let count = sample.peak_count();
        if count > MAX_PEAKS {
            return Err(WriterError::TooManyPeaks {
                count,
                max: MAX_PEAKS,
            });
        }
        let timestamp = sample.unix_timestamp()?;
        let chromatogram =
            SyntheticChromatogram::from_peaks(&sample.peaks, &self.config.chromatogram);

        if count == 0 {
            warn!(
                "Sample {} has no peaks; writing baseline-only chromatogram",
                sample.sample_id
            );
        }
        for (i, peak) in sample.peaks.iter().enumerate() {
            if peak.retention_time() < 0.0 {
                warn!(
                    "Peak {} of sample {} has negative retention time {}",
                    i + 1,
                    sample.sample_id,
                    peak.retention_time()
                );
            }
        }

        // a failure past this point leaves a partial file in the sink
        if let Err(e) = self.write_sections(sample, timestamp, &chromatogram) {
            self.poisoned = true;
            return Err(e.into());
        }

        self.stats = Some(WriterStats {
            peaks_written: count,
            points_written: chromatogram.len(),
            bytes_written: self.writer.count,
        });
        Ok(())
    }

    fn write_sections(
        &mut self,
        sample: &SampleRecord,
        timestamp: u32,
        chromatogram: &SyntheticChromatogram,
    ) -> io::Result<()> {
        let count = sample.peak_count();
        let w = &mut self.writer;
        sections::write_header(w, sample, timestamp, count as u16)?;
        debug!(
            "Header written: sample {:?}, timestamp {}, {} peaks",
            sample.sample_id, timestamp, count
        );

        sections::write_instrument_block(w, sample.instrument())?;
        debug!("Instrument block written");

        for (i, peak) in sample.peaks.iter().enumerate() {
            // count <= u16::MAX was checked by the caller, so every 1-based index fits
            sections::write_peak_record(w, (i + 1) as u16, peak)?;
        }
        debug!("Peak table written: {} records", count);

        sections::write_chromatogram(w, chromatogram)?;
        debug!(
            "Chromatogram written: {} points over {:.3} min ({} profile, baseline {})",
            chromatogram.len(),
            chromatogram.max_time,
            self.config.chromatogram.profile,
            self.config.chromatogram.baseline()
        );

        sections::write_trailer(w)
    }

    /// Flush and return statistics
    pub fn finish(self) -> Result<WriterStats, WriterError> {
        let (_, stats) = self.finish_parts()?;
        Ok(stats)
    }

    /// Flush and return the underlying writer
    pub fn finish_into_inner(self) -> Result<W, WriterError> {
        let (inner, _) = self.finish_parts()?;
        Ok(inner)
    }

    fn finish_parts(mut self) -> Result<(W, WriterStats), WriterError> {
        if self.poisoned {
            return Err(WriterError::Poisoned);
        }
        let stats = self.stats.take().ok_or(WriterError::NothingWritten)?;
        self.writer.flush()?;
        Ok((self.writer.inner, stats))
    }

    /// Statistics of the sample written so far, if any
    pub fn stats(&self) -> Option<&WriterStats> {
        self.stats.as_ref()
    }
}

/// Encode a sample into an in-memory buffer
pub fn encode_to_vec(sample: &SampleRecord, config: &WriterConfig) -> Result<Vec<u8>, WriterError> {
    let mut writer = LcmWriter::new(Vec::new(), *config);
    writer.write_sample(sample)?;
    writer.finish_into_inner()
}

/// Create the staging file for `path` inside `dir`.
///
/// Temp files are private by default; the staged file instead gets the
/// permissions of the file it replaces, or the umask-filtered 0o666 a plain
/// create would give.
fn stage_in(dir: &Path, path: &Path) -> io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let staged = builder.tempfile_in(dir)?;
    if let Ok(existing) = fs::metadata(path) {
        staged.as_file().set_permissions(existing.permissions())?;
    }
    Ok(staged)
}

/// Write a sample to `path`.
///
/// The file is staged next to the destination and renamed into place once
/// complete, so a failed conversion leaves no partial file behind.
pub fn write_lcm_file<P: AsRef<Path>>(
    path: P,
    sample: &SampleRecord,
    config: &WriterConfig,
) -> Result<WriterStats, WriterError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let staged = stage_in(dir, path)?;
    let mut writer = LcmWriter::new(BufWriter::new(staged), *config);
    writer.write_sample(sample)?;
    let (buffered, stats) = writer.finish_parts()?;
    let staged = buffered.into_inner().map_err(|e| e.into_error())?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| e.error)?;

    let size = fs::metadata(path).map(|m| m.len()).unwrap_or(stats.bytes_written);
    info!(
        "Wrote {} ({} peaks, {} bytes)",
        path.display(),
        stats.peaks_written,
        size
    );
    Ok(stats)
}
