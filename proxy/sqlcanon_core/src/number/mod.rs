//! Numeric literal probing.
//!
//! Accepted shapes:
//!
//! | Form        | Example     |
//! |-------------|-------------|
//! | decimal     | `42`        |
//! | fraction    | `3.14`      |
//! | exponent    | `1.5e-10`   |
//! | hexadecimal | `0x1F`      |
//!
//! A numeral glued to a letter or underscore (`1abc`, `0x1G`, `2_col`) is an
//! identifier fragment, not a literal.

use crate::class_table::{is, ByteClass};

/// Length of the numeric literal at the start of `rest`, or `None` if the
/// bytes there do not form one.
///
/// `rest[0]` must be an ASCII digit. A point is only part of the number if
/// a digit follows it (`1.` reads as `1`). The exponent is a lowercase `e`,
/// an optional `-` and at least one digit; anything else after the `e`
/// (`1e`, `1e+5`) fails the whole numeral, so the caller leaves the text
/// alone. An uppercase `E` is a glued letter and fails the same way. A bare
/// `0x` prefix is still a (malformed) hex literal.
pub(crate) fn literal_len(rest: &[u8]) -> Option<usize> {
    debug_assert!(rest.first().is_some_and(u8::is_ascii_digit));

    let len = if rest.starts_with(b"0x") || rest.starts_with(b"0X") {
        2 + run_of(&rest[2..], ByteClass::XDIGIT)
    } else {
        decimal_len(rest)?
    };

    match rest.get(len) {
        Some(&b) if b == b'_' || is(b, ByteClass::ALPHA) => None,
        _ => Some(len),
    }
}

fn decimal_len(rest: &[u8]) -> Option<usize> {
    let mut len = run_of(rest, ByteClass::DIGIT);

    if rest.get(len) == Some(&b'.') {
        let fraction = run_of(&rest[len + 1..], ByteClass::DIGIT);
        if fraction > 0 {
            len += 1 + fraction;
        }
    }

    if rest.get(len) == Some(&b'e') {
        let mut exponent = len + 1;
        if rest.get(exponent) == Some(&b'-') {
            exponent += 1;
        }
        let digits = run_of(&rest[exponent..], ByteClass::DIGIT);
        if digits == 0 {
            return None;
        }
        len = exponent + digits;
    }

    Some(len)
}

/// Number of leading bytes of `bytes` in `class`.
fn run_of(bytes: &[u8], class: ByteClass) -> usize {
    bytes.iter().take_while(|&&b| is(b, class)).count()
}
