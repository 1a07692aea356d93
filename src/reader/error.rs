/// Errors that can occur during reading
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// I/O error
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Input ended inside a section
    #[error("Truncated file: {section} ends early at byte offset {offset}")]
    Truncated {
        /// Section being decoded
        section: &'static str,
        /// Offset of the incomplete read
        offset: u64,
    },

    /// The file does not start with the LCM signature
    #[error("Invalid signature {0:02x?} (not an LCM file)")]
    InvalidMagic([u8; 4]),

    /// The trailer literal is missing or corrupt
    #[error("Invalid trailer {0:02x?}: expected \"LCMEND\\0\"")]
    InvalidTrailer([u8; 7]),

    /// Data remains after the trailer
    #[error("{0} unexpected bytes after the trailer")]
    TrailingBytes(usize),
}
