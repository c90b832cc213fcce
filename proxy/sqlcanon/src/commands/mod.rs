//! Command handlers for the `sqlcanon` CLI.
//!
//! Each submodule implements one command. The `*_text` functions do the
//! work on in-memory input and a writer; the `run_*` functions wire them to
//! the real input, stdout and stderr.

mod canon;
mod digest;
mod scanner;

pub use canon::{canon_text, run_canon};
pub use digest::{digest_text, run_digest, write_digest, Digest, DigestRow};
pub use scanner::{report_scanner, run_scanner};

use crate::input::Statement;

/// What a command did with its input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Statements canonicalized.
    pub processed: usize,
    /// Statements skipped for exceeding `--max-len`.
    pub skipped: usize,
}

impl Summary {
    fn skip(&mut self, statement: Statement<'_>) {
        tracing::warn!(
            line = statement.line,
            len = statement.text.len(),
            "statement exceeds --max-len, skipping"
        );
        self.skipped += 1;
    }

    /// Print the skip count to stderr, if anything was skipped.
    pub fn report(&self) {
        if self.skipped > 0 {
            eprintln!(
                "skipped {} of {} statements longer than --max-len",
                self.skipped,
                self.processed + self.skipped
            );
        }
    }
}
