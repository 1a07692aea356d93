use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::types::LcmFile;
use super::{LcmReader, ReaderError};

impl LcmReader<BufReader<File>> {
    /// Open an LCM file for section-by-section decoding
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ReaderError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl LcmFile {
    /// Decode a complete LCM file from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ReaderError> {
        LcmReader::open(path)?.read_file()
    }

    /// Decode a complete LCM file from memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReaderError> {
        LcmReader::new(bytes).read_file()
    }
}
