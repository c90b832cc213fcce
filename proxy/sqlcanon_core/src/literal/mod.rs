//! Quoted literal matching.
//!
//! Only markers can close a literal (every quote byte is a marker), so the
//! matcher walks the marker list instead of the bytes in between. Markers it
//! consumes are gone for the driver too, which is what keeps digits and
//! comment starters inside strings from being processed.

use crate::cursor::MarkerCursor;

/// Find the marker that closes the literal opened by `delim`.
///
/// `markers` must be positioned just past the opening quote. A backslash
/// followed by the delimiter or another backslash escapes it, so the marker
/// right after the backslash is skipped. Doubled delimiters (`'it''s'`) are
/// not special: the second quote closes the literal and the third opens a
/// new one.
///
/// Returns the offset of the closing delimiter, or `None` if the markers run
/// out first (an unterminated literal).
pub(crate) fn find_closing(sql: &[u8], markers: &mut MarkerCursor<'_>, delim: u8) -> Option<usize> {
    while let Some(offset) = markers.next() {
        let b = sql[offset];
        if b == delim {
            return Some(offset);
        }
        if b == b'\\' && matches!(sql.get(offset + 1), Some(&next) if next == delim || next == b'\\')
        {
            // The escaped byte is itself a marker at `offset + 1`.
            markers.next();
        }
    }
    None
}
