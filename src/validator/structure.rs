use crate::format::{expected_file_size, FORMAT_VERSION, HEADER_SIZE, MAGIC, TRAILER};

use super::{ValidationCheck, ValidationReport};

pub(crate) const CHECK_MAGIC: &str = "Signature";
pub(crate) const CHECK_VERSION: &str = "Format version";
pub(crate) const CHECK_LENGTH: &str = "File length";
pub(crate) const CHECK_TRAILER: &str = "Trailer";

/// Step 1: byte-level structure.
///
/// Returns false when the file is too damaged for decoding to be meaningful.
pub(crate) fn check_structure(bytes: &[u8], report: &mut ValidationReport) -> bool {
    if bytes.len() < HEADER_SIZE {
        report.add_check(ValidationCheck::failed(
            CHECK_LENGTH,
            format!(
                "{} bytes is smaller than the {}-byte header",
                bytes.len(),
                HEADER_SIZE
            ),
        ));
        return false;
    }

    let magic_ok = bytes[..MAGIC.len()] == MAGIC;
    if magic_ok {
        report.add_check(ValidationCheck::ok(CHECK_MAGIC));
    } else {
        report.add_check(ValidationCheck::failed(
            CHECK_MAGIC,
            format!("expected {:02x?}, found {:02x?}", MAGIC, &bytes[..MAGIC.len()]),
        ));
    }

    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version == FORMAT_VERSION {
        report.add_check(ValidationCheck::ok(CHECK_VERSION));
    } else {
        report.add_check(ValidationCheck::warning(
            CHECK_VERSION,
            format!("version {} (expected {})", version, FORMAT_VERSION),
        ));
    }

    let peak_count = u16::from_le_bytes([bytes[106], bytes[107]]);
    let expected = expected_file_size(usize::from(peak_count));
    let length_ok = bytes.len() as u64 == expected;
    if length_ok {
        report.add_check(ValidationCheck::ok(CHECK_LENGTH));
    } else {
        report.add_check(ValidationCheck::failed(
            CHECK_LENGTH,
            format!(
                "{} bytes, expected {} for {} peaks",
                bytes.len(),
                expected,
                peak_count
            ),
        ));
    }

    let trailer_ok = bytes.ends_with(&TRAILER);
    if trailer_ok {
        report.add_check(ValidationCheck::ok(CHECK_TRAILER));
    } else {
        report.add_check(ValidationCheck::failed(
            CHECK_TRAILER,
            "file does not end with \"LCMEND\\0\"",
        ));
    }

    magic_ok && length_ok && trailer_ok
}
