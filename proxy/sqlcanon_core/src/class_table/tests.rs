use super::*;

#[test]
fn digits_are_digit_alnum_and_hex() {
    for b in b'0'..=b'9' {
        let class = classify(b);
        assert!(class.contains(ByteClass::DIGIT | ByteClass::ALNUM | ByteClass::XDIGIT));
        assert!(!class.contains(ByteClass::ALPHA));
    }
}

#[test]
fn letters_are_alpha_and_alnum() {
    for b in (b'a'..=b'z').chain(b'A'..=b'Z') {
        assert!(classify(b).contains(ByteClass::ALPHA | ByteClass::ALNUM));
    }
}

#[test]
fn hex_letters_only_up_to_f() {
    assert!(is(b'a', ByteClass::XDIGIT));
    assert!(is(b'F', ByteClass::XDIGIT));
    assert!(!is(b'g', ByteClass::XDIGIT));
    assert!(!is(b'x', ByteClass::XDIGIT));
}

#[test]
fn space_matches_c_locale_isspace() {
    for b in [b' ', b'\t', b'\n', 0x0b, 0x0c, b'\r'] {
        assert_eq!(classify(b), ByteClass::SPACE, "byte {b:#04x}");
    }
    assert!(!is(0, ByteClass::SPACE));
    assert!(!is(0xa0, ByteClass::SPACE));
}

#[test]
fn quotes_and_comment_starters() {
    for b in [b'"', b'\'', b'`'] {
        assert_eq!(classify(b), ByteClass::QUOTE);
    }
    for b in [b'/', b'#', b'-'] {
        assert_eq!(classify(b), ByteClass::COMMENT);
    }
    assert!(classify(b'*').is_empty());
    assert!(classify(b'\\').is_empty());
}

#[test]
fn high_bytes_have_no_class() {
    for b in 0x80..=0xff_u8 {
        assert!(classify(b).is_empty(), "byte {b:#04x}");
        assert!(!is_marker(b));
    }
}

#[test]
fn marker_set_is_exact() {
    let expected: Vec<u8> = br#"0123456789"'`/#-\"#.to_vec();
    let mut actual: Vec<u8> = (0..=255_u8).filter(|&b| is_marker(b)).collect();
    actual.sort_unstable();
    let mut expected_sorted = expected;
    expected_sorted.sort_unstable();
    assert_eq!(actual, expected_sorted);
}

#[test]
fn composite_class_matches_any_member() {
    let literal_start = ByteClass::DIGIT | ByteClass::QUOTE;
    assert!(is(b'4', literal_start));
    assert!(is(b'\'', literal_start));
    assert!(!is(b'a', literal_start));
}
