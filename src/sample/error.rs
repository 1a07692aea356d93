/// Errors that can occur while loading a sample description
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    /// I/O error reading the input document
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Malformed JSON or a missing/mistyped required field
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// analysisDate is not an ISO-8601 date or timestamp
    #[error("Invalid analysisDate {0:?}: expected an ISO-8601 timestamp")]
    InvalidTimestamp(String),

    /// analysisDate cannot be stored as an unsigned 32-bit Unix timestamp
    #[error("analysisDate {value:?} is outside the 32-bit Unix timestamp range ({seconds} s)")]
    TimestampOutOfRange {
        /// The analysisDate string as supplied
        value: String,
        /// Seconds since the Unix epoch
        seconds: i64,
    },
}
