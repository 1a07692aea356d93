use std::io::{self, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::format::{
    read_fixed_str, CHROMATOGRAM_POINTS, COLUMN_WIDTH, HEADER_SIZE, INSTRUMENT_BLOCK_SIZE, MAGIC,
    MOBILE_PHASE_WIDTH, PEAK_NAME_WIDTH, PEAK_RECORD_SIZE, SAMPLE_ID_WIDTH, SAMPLE_NAME_WIDTH,
    TRAILER,
};

use super::types::{LcmChromatogram, LcmFile, LcmHeader, LcmInstrument, LcmPeak};
use super::{LcmReader, ReaderError};

/// Take `n` bytes off the front of a section buffer.
fn take<'a>(buf: &mut &'a [u8], n: usize) -> &'a [u8] {
    let (head, tail) = buf.split_at(n);
    *buf = tail;
    head
}

impl<R: Read> LcmReader<R> {
    /// Read exactly `buf.len()` bytes, reporting a short read as truncation of `section`
    fn fill(&mut self, buf: &mut [u8], section: &'static str) -> Result<(), ReaderError> {
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.offset += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(ReaderError::Truncated {
                section,
                offset: self.offset,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Decode the header section
    pub fn read_header(&mut self) -> Result<LcmHeader, ReaderError> {
        let mut buf = [0u8; HEADER_SIZE];
        self.fill(&mut buf, "header")?;
        let mut cur = &buf[..];

        let mut magic = [0u8; 4];
        magic.copy_from_slice(take(&mut cur, MAGIC.len()));
        if magic != MAGIC {
            return Err(ReaderError::InvalidMagic(magic));
        }
        let version = cur.read_u16::<LittleEndian>()?;
        let sample_id = read_fixed_str(take(&mut cur, SAMPLE_ID_WIDTH));
        let sample_name = read_fixed_str(take(&mut cur, SAMPLE_NAME_WIDTH));
        let timestamp = cur.read_u32::<LittleEndian>()?;
        let peak_count = cur.read_u16::<LittleEndian>()?;

        Ok(LcmHeader {
            version,
            sample_id,
            sample_name,
            timestamp,
            peak_count,
        })
    }

    /// Decode the instrument block
    pub fn read_instrument(&mut self) -> Result<LcmInstrument, ReaderError> {
        let mut buf = [0u8; INSTRUMENT_BLOCK_SIZE];
        self.fill(&mut buf, "instrument block")?;
        let mut cur = &buf[..];

        Ok(LcmInstrument {
            column: read_fixed_str(take(&mut cur, COLUMN_WIDTH)),
            mobile_phase: read_fixed_str(take(&mut cur, MOBILE_PHASE_WIDTH)),
            flow_rate: cur.read_f32::<LittleEndian>()?,
            injection_volume: cur.read_f32::<LittleEndian>()?,
            detection_wavelength: cur.read_f32::<LittleEndian>()?,
            temperature: cur.read_f32::<LittleEndian>()?,
        })
    }

    /// Decode one peak record
    pub fn read_peak(&mut self) -> Result<LcmPeak, ReaderError> {
        let mut buf = [0u8; PEAK_RECORD_SIZE];
        self.fill(&mut buf, "peak table")?;
        let mut cur = &buf[..];

        Ok(LcmPeak {
            index: cur.read_u16::<LittleEndian>()?,
            retention_time: cur.read_f32::<LittleEndian>()?,
            area: cur.read_f64::<LittleEndian>()?,
            height: cur.read_f64::<LittleEndian>()?,
            concentration: cur.read_f32::<LittleEndian>()?,
            name: read_fixed_str(take(&mut cur, PEAK_NAME_WIDTH)),
            width: cur.read_f32::<LittleEndian>()?,
            asymmetry: cur.read_f32::<LittleEndian>()?,
        })
    }

    /// Decode the chromatogram block
    pub fn read_chromatogram(&mut self) -> Result<LcmChromatogram, ReaderError> {
        let mut head = [0u8; 8];
        self.fill(&mut head, "chromatogram")?;
        let mut cur = &head[..];
        let count = cur.read_u32::<LittleEndian>()?;
        let max_time = cur.read_f32::<LittleEndian>()?;

        // A corrupt count must not drive a huge allocation before the data runs out
        let capacity = count.min(CHROMATOGRAM_POINTS) as usize;
        let mut times = Vec::with_capacity(capacity);
        let mut intensities = Vec::with_capacity(capacity);
        let mut point = [0u8; 8];
        for _ in 0..count {
            self.fill(&mut point, "chromatogram")?;
            let mut cur = &point[..];
            times.push(cur.read_f32::<LittleEndian>()?);
            intensities.push(cur.read_f32::<LittleEndian>()?);
        }

        Ok(LcmChromatogram {
            max_time,
            times,
            intensities,
        })
    }

    /// Check the trailer literal
    pub fn read_trailer(&mut self) -> Result<(), ReaderError> {
        let mut trailer = [0u8; 7];
        self.fill(&mut trailer, "trailer")?;
        if trailer != TRAILER {
            return Err(ReaderError::InvalidTrailer(trailer));
        }
        Ok(())
    }

    /// Decode every section and require the input to end at the trailer
    pub fn read_file(mut self) -> Result<LcmFile, ReaderError> {
        let header = self.read_header()?;
        let instrument = self.read_instrument()?;
        let peaks = (0..header.peak_count)
            .map(|_| self.read_peak())
            .collect::<Result<Vec<_>, _>>()?;
        let chromatogram = self.read_chromatogram()?;
        self.read_trailer()?;

        let mut rest = Vec::new();
        self.inner.read_to_end(&mut rest)?;
        if !rest.is_empty() {
            return Err(ReaderError::TrailingBytes(rest.len()));
        }

        Ok(LcmFile {
            header,
            instrument,
            peaks,
            chromatogram,
        })
    }
}
