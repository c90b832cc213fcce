//! Byte-at-a-time marker scanner.

use crate::class_table::is_marker;

/// Append the offsets of marker bytes in `sql[from..]` to `markers`.
///
/// Offsets are absolute (relative to the start of `sql`). The AVX2 scanner
/// reuses this for the tail that does not fill a whole vector.
pub(super) fn scan(sql: &[u8], from: usize, markers: &mut Vec<usize>) {
    for (offset, &b) in sql.iter().enumerate().skip(from) {
        if is_marker(b) {
            markers.push(offset);
        }
    }
}
