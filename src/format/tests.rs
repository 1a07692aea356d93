use super::*;

#[test]
fn test_section_sizes() {
    assert_eq!(HEADER_SIZE, 172);
    assert_eq!(INSTRUMENT_BLOCK_SIZE, 240);
    assert_eq!(PEAK_RECORD_SIZE, 82);
    assert_eq!(CHROMATOGRAM_BLOCK_SIZE, 8008);
    assert_eq!(expected_file_size(0), 8427);
    assert_eq!(expected_file_size(3), 8427 + 3 * 82);
}

#[test]
fn test_truncate_ascii() {
    assert_eq!(truncate_utf8("abcdef", 3), "abc");
    assert_eq!(truncate_utf8("abc", 3), "abc");
    assert_eq!(truncate_utf8("", 3), "");
}

#[test]
fn test_truncate_backs_off_to_char_boundary() {
    // "é" is two bytes; cutting at 2 would split it
    assert_eq!(truncate_utf8("aé", 2), "a");
    assert_eq!(truncate_utf8("aé", 3), "aé");
    // four-byte code point
    assert_eq!(truncate_utf8("🧪x", 3), "");
}

#[test]
fn test_fixed_str_pads_with_zeros() {
    let mut buf = Vec::new();
    write_fixed_str(&mut buf, "C18", 8).unwrap();
    assert_eq!(buf, b"C18\0\0\0\0\0");
}

#[test]
fn test_fixed_str_truncates_leaving_terminator() {
    let mut buf = Vec::new();
    write_fixed_str(&mut buf, "0123456789", 8).unwrap();
    assert_eq!(buf.len(), 8);
    assert_eq!(&buf[..7], b"0123456");
    assert_eq!(buf[7], 0);
}

#[test]
fn test_fixed_str_multibyte_never_overflows() {
    let name = "µ".repeat(40);
    let mut buf = Vec::new();
    write_fixed_str(&mut buf, &name, PEAK_NAME_WIDTH).unwrap();
    assert_eq!(buf.len(), PEAK_NAME_WIDTH);
    // 15 two-byte characters fit in 31 bytes
    assert_eq!(read_fixed_str(&buf), "µ".repeat(15));
}

#[test]
fn test_write_zeros_larger_than_scratch() {
    let mut buf = Vec::new();
    write_zeros(&mut buf, 300).unwrap();
    assert_eq!(buf.len(), 300);
    assert!(buf.iter().all(|&b| b == 0));
}

#[test]
fn test_read_fixed_str_without_terminator() {
    assert_eq!(read_fixed_str(b"ABCD"), "ABCD");
    assert_eq!(read_fixed_str(b"AB\0D"), "AB");
}
