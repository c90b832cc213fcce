//! Cursors used by the canonicalization driver.
//!
//! [`RewriteCursor`] owns exclusive access to the statement buffer for the
//! duration of one call and tracks two offsets into it:
//!
//! ```text
//! [ canonical output | gap (stale input) | unread input ]
//!  0                 write               read           len
//! ```
//!
//! Bytes before `write` are output, bytes from `read` on are untouched
//! input. Every operation keeps `write <= read`, so writing output can never
//! clobber input that has not been read yet. Overlapping moves go through
//! [`slice::copy_within`], which is `memmove`.
//!
//! [`MarkerCursor`] walks the ascending marker list forward.

use crate::class_table::{is, ByteClass};

/// Read/write cursor pair over a statement buffer being compacted in place.
#[derive(Debug)]
pub(crate) struct RewriteCursor<'a> {
    buf: &'a mut Vec<u8>,
    /// Next input byte to examine.
    read: usize,
    /// Length of the output written so far.
    write: usize,
}

impl<'a> RewriteCursor<'a> {
    pub(crate) fn new(buf: &'a mut Vec<u8>) -> Self {
        Self {
            buf,
            read: 0,
            write: 0,
        }
    }

    /// Offset of the next unread input byte.
    #[inline]
    pub(crate) fn read_pos(&self) -> usize {
        self.read
    }

    /// Length of the output so far.
    #[inline]
    pub(crate) fn write_pos(&self) -> usize {
        self.write
    }

    /// Length of the input.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    /// The whole buffer. Only offsets `>= read_pos()` still hold input.
    #[inline]
    pub(crate) fn input(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// Unread input, starting at the read position.
    #[inline]
    pub(crate) fn remaining(&self) -> &[u8] {
        &self.buf[self.read..]
    }

    /// The byte at the read position, or `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<u8> {
        self.buf.get(self.read).copied()
    }

    /// The last byte of output, or `None` if nothing has been written.
    #[inline]
    pub(crate) fn last_written(&self) -> Option<u8> {
        self.write.checked_sub(1).map(|i| self.buf[i])
    }

    /// Copy input `read..end` to the output verbatim.
    pub(crate) fn copy_to(&mut self, end: usize) {
        debug_assert!(self.read <= end && end <= self.buf.len());
        let len = end - self.read;
        if self.write != self.read {
            self.buf.copy_within(self.read..end, self.write);
        }
        self.read = end;
        self.write += len;
    }

    /// Discard input `read..end` without writing anything.
    pub(crate) fn skip_to(&mut self, end: usize) {
        debug_assert!(self.read <= end && end <= self.buf.len());
        self.read = end;
    }

    /// Append one byte to the output.
    ///
    /// Only valid after at least one more byte has been read than written,
    /// which holds whenever a literal of one or more bytes was just skipped.
    pub(crate) fn emit(&mut self, b: u8) {
        assert!(
            self.write < self.read,
            "emit would overwrite unread input (write {} read {})",
            self.write,
            self.read
        );
        self.buf[self.write] = b;
        self.write += 1;
    }

    /// Drop the last byte of output.
    pub(crate) fn unwrite(&mut self) {
        debug_assert!(self.write > 0);
        self.write = self.write.saturating_sub(1);
    }

    /// Drop trailing whitespace from the output.
    pub(crate) fn trim_trailing_space(&mut self) {
        while let Some(b) = self.last_written() {
            if !is(b, ByteClass::SPACE) {
                break;
            }
            self.write -= 1;
        }
    }

    /// Copy whatever input is left and truncate the buffer to the output.
    pub(crate) fn finish(mut self) {
        let len = self.buf.len();
        self.copy_to(len);
        self.buf.truncate(self.write);
    }
}

/// Forward cursor over the ascending marker offsets.
#[derive(Clone, Debug)]
pub(crate) struct MarkerCursor<'m> {
    markers: &'m [usize],
    next: usize,
}

impl<'m> MarkerCursor<'m> {
    pub(crate) fn new(markers: &'m [usize]) -> Self {
        debug_assert!(markers.windows(2).all(|w| w[0] < w[1]));
        Self { markers, next: 0 }
    }
}

impl Iterator for MarkerCursor<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let marker = self.markers.get(self.next).copied()?;
        self.next += 1;
        Some(marker)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.markers.len() - self.next;
        (left, Some(left))
    }
}
