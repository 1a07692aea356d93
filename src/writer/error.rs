use crate::sample::SampleError;

/// Errors that can occur during writing
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// I/O error during file operations
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// The sample could not be encoded (e.g. unparsable analysisDate)
    #[error(transparent)]
    SampleError(#[from] SampleError),

    /// More peaks than the 16-bit peak count field can describe
    #[error("Too many peaks: {count} (the format holds at most {max})")]
    TooManyPeaks {
        /// Number of peaks in the sample
        count: usize,
        /// Largest representable peak count
        max: usize,
    },

    /// A sample was already written; an LCM file holds exactly one
    #[error("A sample has already been written to this LCM stream")]
    SampleAlreadyWritten,

    /// An earlier write failed partway; the sink holds a partial file
    #[error("A previous write failed; the output is incomplete")]
    Poisoned,

    /// finish() was called before any sample was written
    #[error("No sample was written")]
    NothingWritten,
}
