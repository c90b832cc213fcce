//! The canonicalization driver.
//!
//! One forward pass over the marker list. Spans between markers are moved
//! down verbatim; each marker is dispatched on its byte class:
//!
//! - quote: string literals become [`PLACEHOLDER`], backtick identifiers
//!   are kept. An unterminated literal stops the pass and the rest of the
//!   input is copied as is.
//! - digit: a numeral that starts a token becomes [`PLACEHOLDER`],
//!   absorbing a unary minus in front of it.
//! - comment starter: comments are deleted, executable comments kept.
//! - backslash, or a starter that opens no comment: copied verbatim.
//!
//! Markers inside a span that a handler already consumed are skipped.

use std::cell::RefCell;

use crate::class_table::{classify, is, ByteClass};
use crate::comment::{self, Comment};
use crate::cursor::{MarkerCursor, RewriteCursor};
use crate::{literal, number, Scanner};

/// Byte that replaces every literal.
pub const PLACEHOLDER: u8 = b'?';

/// Reusable canonicalization state.
///
/// Holds the scanner to use and the marker buffer, which keeps its capacity
/// between calls so steady-state canonicalization does not allocate. One
/// `Canonicalizer` per thread is the intended use; [`get_canonical`] keeps a
/// thread-local one.
#[derive(Clone, Debug, Default)]
pub struct Canonicalizer {
    scanner: Scanner,
    markers: Vec<usize>,
}

impl Canonicalizer {
    /// A canonicalizer using the process-wide [`Scanner::selected`].
    pub fn new() -> Self {
        Self::with_scanner(Scanner::selected())
    }

    /// A canonicalizer using a specific scanner.
    pub fn with_scanner(scanner: Scanner) -> Self {
        Self {
            scanner,
            markers: Vec::new(),
        }
    }

    /// The scanner this canonicalizer runs.
    pub fn scanner(&self) -> Scanner {
        self.scanner
    }

    /// Canonicalize `sql` in place.
    #[allow(
        unsafe_code,
        reason = "rewriting in place through as_mut_vec preserves UTF-8"
    )]
    pub fn canonicalize(&mut self, sql: &mut String) {
        // SAFETY: every span the driver removes or replaces starts at an
        // ASCII byte and ends just after one, and the only byte it writes is
        // the ASCII placeholder. Verbatim spans therefore start and end on
        // character boundaries and the result stays valid UTF-8.
        let bytes = unsafe { sql.as_mut_vec() };
        self.canonicalize_bytes(bytes);
        debug_assert!(std::str::from_utf8(sql.as_bytes()).is_ok());
    }

    /// Canonicalize raw statement bytes in place.
    pub fn canonicalize_bytes(&mut self, sql: &mut Vec<u8>) {
        self.scanner.scan(sql, &mut self.markers);
        rewrite(sql, &self.markers);
    }
}

thread_local! {
    static CANONICALIZER: RefCell<Canonicalizer> = RefCell::new(Canonicalizer::new());
}

/// Canonicalize `sql` in place with this thread's canonicalizer.
pub fn get_canonical(sql: &mut String) {
    CANONICALIZER.with_borrow_mut(|canonicalizer| canonicalizer.canonicalize(sql));
}

/// Canonicalize raw bytes in place with this thread's canonicalizer.
pub fn canonicalize_bytes(sql: &mut Vec<u8>) {
    CANONICALIZER.with_borrow_mut(|canonicalizer| canonicalizer.canonicalize_bytes(sql));
}

/// Return the canonical form of `sql`, leaving the input untouched.
pub fn canonicalize(sql: &str) -> String {
    let mut canonical = sql.to_owned();
    get_canonical(&mut canonical);
    canonical
}

/// Rewrite `sql` in place given its ascending marker offsets.
fn rewrite(sql: &mut Vec<u8>, markers: &[usize]) {
    let mut cursor = RewriteCursor::new(sql);
    let mut markers = MarkerCursor::new(markers);
    // Output offset just past the most recent placeholder. A minus written
    // directly after it is a binary operator, not a sign.
    let mut placeholder_end: Option<usize> = None;

    while let Some(marker) = markers.next() {
        if marker < cursor.read_pos() {
            continue;
        }
        cursor.copy_to(marker);
        let Some(b) = cursor.current() else {
            break;
        };
        let class = classify(b);

        if class.contains(ByteClass::QUOTE) {
            let Some(close) = literal::find_closing(cursor.input(), &mut markers, b) else {
                tracing::trace!(offset = marker, "unterminated literal, copying remainder");
                break;
            };
            if b == b'`' {
                cursor.copy_to(close + 1);
            } else {
                cursor.skip_to(close + 1);
                cursor.emit(PLACEHOLDER);
                placeholder_end = Some(cursor.write_pos());
            }
        } else if class.contains(ByteClass::DIGIT) {
            if !starts_token(cursor.last_written()) {
                continue;
            }
            let Some(len) = number::literal_len(cursor.remaining()) else {
                continue;
            };
            let binary_minus = placeholder_end.is_some_and(|end| end + 1 == cursor.write_pos());
            if cursor.last_written() == Some(b'-') && !binary_minus {
                cursor.unwrite();
            }
            cursor.skip_to(marker + len);
            cursor.emit(PLACEHOLDER);
            placeholder_end = Some(cursor.write_pos());
        } else if class.contains(ByteClass::COMMENT) {
            match comment::recognize(cursor.remaining()) {
                Some(Comment::Executable(len)) => cursor.copy_to(marker + len),
                Some(Comment::Stripped(len)) => {
                    cursor.skip_to(marker + len);
                    drop_space_after_comment(&mut cursor);
                }
                None => {}
            }
        }
    }

    cursor.finish();
}

/// A digit starts a token unless the output before it continues an
/// identifier (`t1`, `col_2`). A statement never starts with a literal, so a
/// digit at the very start of the output is left alone.
fn starts_token(previous: Option<u8>) -> bool {
    match previous {
        Some(b) => b != b'_' && !is(b, ByteClass::ALNUM),
        None => false,
    }
}

/// Collapse whitespace a deleted comment leaves behind.
///
/// If nothing but whitespace follows, it is dropped along with any
/// whitespace already written before the comment. Otherwise whitespace after
/// the comment is dropped when the output already ends in whitespace (or is
/// empty), so `a /* x */ b` becomes `a b`.
///
/// A comment with non-space bytes on both sides separates tokens, so it is
/// replaced by a single space: `1/**/FROM` becomes `1 FROM` and `-/**/-`
/// becomes `- -`, never a new `--` comment or a longer token.
fn drop_space_after_comment(cursor: &mut RewriteCursor<'_>) {
    let space = cursor
        .remaining()
        .iter()
        .take_while(|&&b| is(b, ByteClass::SPACE))
        .count();

    if space == cursor.remaining().len() {
        cursor.skip_to(cursor.len());
        cursor.trim_trailing_space();
        return;
    }

    let after_space = match cursor.last_written() {
        Some(b) => is(b, ByteClass::SPACE),
        None => true,
    };
    if after_space {
        cursor.skip_to(cursor.read_pos() + space);
    } else if space == 0 {
        cursor.emit(b' ');
    }
}

#[cfg(test)]
mod tests;
