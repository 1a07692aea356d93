use std::fmt;

/// Statistics from a completed write operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriterStats {
    /// Number of peak records written
    pub peaks_written: usize,
    /// Number of chromatogram samples written
    pub points_written: usize,
    /// Total size in bytes
    pub bytes_written: u64,
}

impl fmt::Display for WriterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} peaks and {} chromatogram points ({} bytes)",
            self.peaks_written, self.points_written, self.bytes_written
        )
    }
}
