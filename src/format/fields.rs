use std::io::{self, Write};

const ZEROS: [u8; 128] = [0; 128];

/// Longest prefix of `value` that fits in `max_bytes` without splitting a character.
pub fn truncate_utf8(value: &str, max_bytes: usize) -> &str {
    if value.len() <= max_bytes {
        return value;
    }
    let mut end = max_bytes;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

/// Write `count` zero bytes.
pub fn write_zeros<W: Write>(writer: &mut W, count: usize) -> io::Result<()> {
    let mut remaining = count;
    while remaining > 0 {
        let chunk = remaining.min(ZEROS.len());
        writer.write_all(&ZEROS[..chunk])?;
        remaining -= chunk;
    }
    Ok(())
}

/// Write `value` into a NUL-padded field of exactly `width` bytes.
///
/// At most `width - 1` bytes of text are kept so the field always ends in NUL.
pub fn write_fixed_str<W: Write>(writer: &mut W, value: &str, width: usize) -> io::Result<()> {
    debug_assert!(width > 0);
    let text = truncate_utf8(value, width - 1);
    writer.write_all(text.as_bytes())?;
    write_zeros(writer, width - text.len())
}

/// Recover the text of a NUL-padded field.
pub fn read_fixed_str(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}
