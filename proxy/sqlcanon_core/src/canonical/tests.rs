use pretty_assertions::assert_eq;

use super::{canonicalize, Canonicalizer};
use crate::{Scanner, ScannerKind};

/// Canonicalize with every scanner this host supports and check they agree.
fn canon(sql: &str) -> String {
    let expected = canonicalize(sql);
    for kind in [ScannerKind::Portable, ScannerKind::Avx2] {
        if let Some(scanner) = Scanner::for_kind(kind) {
            let mut copy = sql.to_owned();
            Canonicalizer::with_scanner(scanner).canonicalize(&mut copy);
            assert_eq!(copy, expected, "{kind} scanner disagrees on {sql:?}");
        }
    }
    expected
}

// === Literals ===

#[test]
fn integer_literal() {
    assert_eq!(
        canon("SELECT * FROM t WHERE id = 42"),
        "SELECT * FROM t WHERE id = ?"
    );
}

#[test]
fn string_literals_become_placeholders() {
    assert_eq!(
        canon("SELECT `col` FROM t WHERE x='abc'"),
        "SELECT `col` FROM t WHERE x=?"
    );
    assert_eq!(
        canon(r#"SELECT "name" FROM t WHERE x='abc'"#),
        "SELECT ? FROM t WHERE x=?"
    );
}

#[test]
fn backtick_identifier_kept_with_markers_inside() {
    assert_eq!(canon("SELECT `a-1 'b'` FROM t"), "SELECT `a-1 'b'` FROM t");
}

#[test]
fn escaped_quotes_inside_string() {
    assert_eq!(canon(r"SELECT 'it\'s', 'a\\' FROM t"), "SELECT ?, ? FROM t");
}

#[test]
fn doubled_quote_reads_as_two_literals() {
    assert_eq!(canon("SELECT 'it''s'"), "SELECT ??");
}

#[test]
fn markers_inside_strings_are_ignored() {
    assert_eq!(
        canon("SELECT '-- not a comment 1' AS c, \"/* 2 */\""),
        "SELECT ? AS c, ?"
    );
}

#[test]
fn hex_and_scientific_literals() {
    assert_eq!(canon("SELECT 0x1F, 1.5e-10"), "SELECT ?, ?");
    assert_eq!(canon("SELECT 3.14, 2e3"), "SELECT ?, ?");
}

#[test]
fn exponent_must_be_lowercase_with_minus_sign() {
    // The numeral as a whole is not a literal; a digit run after a sign is a
    // token of its own.
    assert_eq!(canon("SELECT 1E5, 1e+5"), "SELECT 1E5, 1e+?");
    assert_eq!(canon("SELECT 2.5E-3 FROM t"), "SELECT 2.5E? FROM t");
}

#[test]
fn bare_hex_prefix_is_converted() {
    assert_eq!(canon("SELECT 0x"), "SELECT ?");
    assert_eq!(canon("SELECT 0x, 0xg"), "SELECT ?, 0xg");
}

#[test]
fn in_list() {
    assert_eq!(
        canon("SELECT a FROM t WHERE id IN (1, 22, 333)"),
        "SELECT a FROM t WHERE id IN (?, ?, ?)"
    );
}

#[test]
fn digits_in_identifiers_are_kept() {
    assert_eq!(canon("SELECT c1, t_2.x3 FROM t4"), "SELECT c1, t_2.x3 FROM t4");
}

#[test]
fn numeral_glued_to_letters_is_kept() {
    assert_eq!(canon("SELECT 1abc, 12e FROM t"), "SELECT 1abc, 12e FROM t");
}

#[test]
fn statement_starting_with_digit_is_verbatim() {
    assert_eq!(canon("1"), "1");
    assert_eq!(canon("42 + x"), "42 + x");
    assert_eq!(canon("/* c */ 7, 8"), "7, ?");
}

#[test]
fn leading_signed_number_is_converted() {
    assert_eq!(canon("-1"), "?");
}

// === Signs ===

#[test]
fn unary_minus_is_absorbed() {
    assert_eq!(canon("SELECT -1"), "SELECT ?");
    assert_eq!(canon("SELECT x FROM t WHERE y = -2.5"), "SELECT x FROM t WHERE y = ?");
}

#[test]
fn binary_minus_between_literals_is_kept() {
    assert_eq!(canon("SELECT 1-2"), "SELECT ?-?");
    assert_eq!(canon("SELECT 'a'-3"), "SELECT ?-?");
    assert_eq!(canon("SELECT 1-2-3"), "SELECT ?-?-?");
}

#[test]
fn minus_after_spaced_literal_is_a_sign() {
    assert_eq!(canon("SELECT 1, -7"), "SELECT ?, ?");
    assert_eq!(canon("SELECT 1 -2"), "SELECT ? ?");
}

#[test]
fn spaced_subtraction_is_untouched() {
    assert_eq!(canon("SELECT 1 - 2"), "SELECT ? - ?");
}

#[test]
fn minus_after_identifier_is_absorbed() {
    assert_eq!(canon("SELECT a-1"), "SELECT a?");
}

#[test]
fn double_negative() {
    assert_eq!(canon("SELECT - -1"), "SELECT - ?");
}

// === Comments ===

#[test]
fn comments_are_stripped_with_their_whitespace() {
    assert_eq!(
        canon("SELECT 1 /* note */ FROM t -- trailing\n"),
        "SELECT ? FROM t"
    );
}

#[test]
fn hash_comment_mid_statement() {
    assert_eq!(canon("SELECT a # pick a\nFROM t"), "SELECT a FROM t");
}

#[test]
fn line_comment_with_crlf() {
    assert_eq!(canon("SELECT a -- c\r\nFROM t"), "SELECT a FROM t");
}

#[test]
fn leading_comment() {
    assert_eq!(canon("/* hint */ SELECT 1"), "SELECT ?");
    assert_eq!(canon("-- header\nSELECT 1"), "SELECT ?");
}

#[test]
fn comment_without_surrounding_space_becomes_a_space() {
    assert_eq!(canon("SELECT 1/*x*/FROM t"), "SELECT ? FROM t");
    assert_eq!(canon("SELECT a# x\n5"), "SELECT a ?");
}

#[test]
fn deleted_comment_does_not_join_a_comment_opener() {
    assert_eq!(canon("SELECT -/* */- 1"), "SELECT - - ?");
    assert_eq!(canon("SELECT a-/**/-- b\n"), "SELECT a-");
    assert_eq!(canon("SELECT 6//**/*2"), "SELECT ?/ *?");
    assert_eq!(canon("SELECT a-/**/b"), "SELECT a- b");
}

#[test]
fn deleted_comment_does_not_glue_a_numeral() {
    assert_eq!(canon("SELECT 1e/* c */5"), "SELECT 1e ?");
}

#[test]
fn double_negation_around_comment_is_stable() {
    let once = canon("SELECT -/* */- 1");
    assert_eq!(canon(&once), once);
}

#[test]
fn newline_before_comment_is_kept() {
    assert_eq!(canon("SELECT 1\n-- c\nFROM t"), "SELECT ?\nFROM t");
}

#[test]
fn comment_only_statement() {
    assert_eq!(canon("-- nothing here"), "");
    assert_eq!(canon("  /* x */  "), "");
}

#[test]
fn executable_comment_is_kept_verbatim() {
    assert_eq!(canon("SELECT /*!50000 1 */"), "SELECT /*!50000 1 */");
    assert_eq!(
        canon("SELECT /*M!100000 'x' */ a FROM t WHERE b = 5"),
        "SELECT /*M!100000 'x' */ a FROM t WHERE b = ?"
    );
}

#[test]
fn unterminated_block_comment_consumes_rest() {
    assert_eq!(canon("SELECT 1 /* unfinished 'x"), "SELECT ?");
}

#[test]
fn dashes_that_are_not_comments() {
    assert_eq!(canon("SELECT a--b FROM t"), "SELECT a--b FROM t");
    assert_eq!(canon("SELECT a / b FROM t"), "SELECT a / b FROM t");
}

// === Invalid input ===

#[test]
fn unterminated_literal_copies_remainder() {
    assert_eq!(canon("SELECT 'abc"), "SELECT 'abc");
    assert_eq!(
        canon("SELECT 1, 'abc, 2 /* c */"),
        "SELECT ?, 'abc, 2 /* c */"
    );
}

#[test]
fn unterminated_literal_is_deterministic() {
    let sql = "SELECT x FROM t WHERE a = 7 AND b = 'abc";
    let first = canon(sql);
    for _ in 0..3 {
        assert_eq!(canon(sql), first);
    }
}

#[test]
fn backslash_outside_literal_is_verbatim() {
    assert_eq!(canon(r"SELECT a\b, 1"), r"SELECT a\b, ?");
}

// === Buffers ===

#[test]
fn empty_and_marker_free_input() {
    assert_eq!(canon(""), "");
    assert_eq!(canon("SELECT a FROM t"), "SELECT a FROM t");
}

#[test]
fn non_ascii_passes_through() {
    assert_eq!(
        canon("SELECT 'héllo', nämé FROM tåble WHERE x = 1"),
        "SELECT ?, nämé FROM tåble WHERE x = ?"
    );
}

#[test]
fn canonicalizer_reuses_marker_buffer() {
    let mut canonicalizer = Canonicalizer::with_scanner(Scanner::portable());
    let mut first = "SELECT 1, 2, 3, 4, 5".to_owned();
    canonicalizer.canonicalize(&mut first);
    assert_eq!(first, "SELECT ?, ?, ?, ?, ?");

    let mut second = "SELECT 'x'".to_owned();
    canonicalizer.canonicalize(&mut second);
    assert_eq!(second, "SELECT ?");
    assert_eq!(canonicalizer.scanner(), Scanner::portable());
}

#[test]
fn canonicalize_bytes_in_place() {
    let mut bytes = b"UPDATE t SET a = 'x' WHERE id = 9".to_vec();
    Canonicalizer::new().canonicalize_bytes(&mut bytes);
    assert_eq!(bytes, b"UPDATE t SET a = ? WHERE id = ?");
}

#[test]
fn get_canonical_shrinks_in_place() {
    let mut sql = String::from("INSERT INTO t VALUES (1, 'two', 3.0)");
    let capacity = sql.capacity();
    super::get_canonical(&mut sql);
    assert_eq!(sql, "INSERT INTO t VALUES (?, ?, ?)");
    assert_eq!(sql.capacity(), capacity);
}

#[test]
fn free_canonicalize_bytes_matches_string_form() {
    let sql = "SELECT a FROM t WHERE b = -4 -- x";
    let mut bytes = sql.as_bytes().to_vec();
    super::canonicalize_bytes(&mut bytes);
    assert_eq!(bytes, canon(sql).into_bytes());
}
