//! Comment recognition.
//!
//! Three comment forms exist in MariaDB/MySQL SQL:
//!
//! - `# ...` to end of line
//! - `-- ...` to end of line (the dash pair must be followed by a space)
//! - `/* ... */`, where `/*!` and `/*M` open an *executable* comment whose
//!   body is SQL that version-aware servers run. Those are kept verbatim.

/// What the driver should do with a recognized comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Comment {
    /// Delete this many bytes.
    Stripped(usize),
    /// Copy this many bytes verbatim.
    Executable(usize),
}

/// Recognize a comment at the start of `rest`.
///
/// `rest[0]` is a comment starter candidate (`#`, `-` or `/`). Returns
/// `None` when it does not actually open a comment (`a-b`, `a/b`, `--x`).
/// Line comments include their terminating `\n` (and with it any `\r`
/// before it). Unterminated block comments extend to the end of `rest`.
pub(crate) fn recognize(rest: &[u8]) -> Option<Comment> {
    match rest {
        [b'#', ..] | [b'-', b'-', b' ', ..] => Some(Comment::Stripped(line_len(rest))),
        [b'/', b'*', body @ ..] => {
            let len = memchr::memmem::find(body, b"*/").map_or(rest.len(), |end| 2 + end + 2);
            if matches!(body.first(), Some(b'!' | b'M')) {
                Some(Comment::Executable(len))
            } else {
                Some(Comment::Stripped(len))
            }
        }
        _ => None,
    }
}

fn line_len(rest: &[u8]) -> usize {
    memchr::memchr(b'\n', rest).map_or(rest.len(), |newline| newline + 1)
}
