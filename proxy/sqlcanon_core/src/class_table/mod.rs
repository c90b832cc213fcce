//! Byte classification table.
//!
//! Every byte value maps to a [`ByteClass`] bitset. The table is a `const`
//! computed at compile time, so lookups are a single indexed load with no
//! initialization order to worry about and no synchronization on reads.
//!
//! Only ASCII bytes carry classes. Bytes `0x80..=0xFF` (UTF-8 lead and
//! continuation bytes) classify as empty, which is what keeps multi-byte
//! characters from ever being mistaken for quotes, digits or comment starters.

use bitflags::bitflags;

bitflags! {
    /// Semantic classes a byte can belong to.
    ///
    /// A byte may belong to several classes at once (`'7'` is digit, alnum and
    /// hex-digit).
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ByteClass: u8 {
        /// `' '`, `\t`, `\n`, `\v`, `\f`, `\r`.
        const SPACE = 1 << 0;
        /// `0-9`.
        const DIGIT = 1 << 1;
        /// `A-Z`, `a-z`.
        const ALPHA = 1 << 2;
        /// Digit or alpha.
        const ALNUM = 1 << 3;
        /// `0-9`, `A-F`, `a-f`.
        const XDIGIT = 1 << 4;
        /// `"`, `'`, `` ` ``.
        const QUOTE = 1 << 5;
        /// Bytes that may open a comment: `/`, `#`, `-`.
        const COMMENT = 1 << 6;
    }
}

/// Classes whose members become markers. Backslash is a marker too but has
/// no class of its own; see [`is_marker`].
const MARKER_MASK: u8 = ByteClass::DIGIT.bits() | ByteClass::QUOTE.bits() | ByteClass::COMMENT.bits();

static TABLE: [u8; 256] = build_table();

const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < table.len() {
        #[allow(clippy::cast_possible_truncation, reason = "i < 256")]
        let b = i as u8;
        let mut bits = 0;

        if matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r') {
            bits |= ByteClass::SPACE.bits();
        }
        if b.is_ascii_digit() {
            bits |= ByteClass::DIGIT.bits() | ByteClass::ALNUM.bits();
        }
        if b.is_ascii_alphabetic() {
            bits |= ByteClass::ALPHA.bits() | ByteClass::ALNUM.bits();
        }
        if b.is_ascii_hexdigit() {
            bits |= ByteClass::XDIGIT.bits();
        }
        if matches!(b, b'"' | b'\'' | b'`') {
            bits |= ByteClass::QUOTE.bits();
        }
        if matches!(b, b'/' | b'#' | b'-') {
            bits |= ByteClass::COMMENT.bits();
        }

        table[i] = bits;
        i += 1;
    }
    table
}

/// Returns every class `b` belongs to.
#[inline]
pub fn classify(b: u8) -> ByteClass {
    ByteClass::from_bits_retain(TABLE[b as usize])
}

/// Returns `true` if `b` belongs to `class` (or, for a composite `class`, to
/// any of its members).
#[inline]
pub fn is(b: u8, class: ByteClass) -> bool {
    TABLE[b as usize] & class.bits() != 0
}

/// Returns `true` if the canonicalizer must look at `b`: a quote, a digit,
/// a comment starter or a backslash.
#[inline]
pub fn is_marker(b: u8) -> bool {
    TABLE[b as usize] & MARKER_MASK != 0 || b == b'\\'
}

#[cfg(test)]
mod tests;
