//! SQL canonicalization for the query proxy.
//!
//! Reduces a statement to its *canonical form*: literal values replaced by
//! `?`, comments removed (executable `/*! ... */` comments excepted) and the
//! whitespace they leave behind collapsed. Statements that differ only in
//! literal values and comments canonicalize to the same text, which the
//! query classifier, the statement cache and the statement filter use as a
//! key.
//!
//! ```
//! let mut sql = String::from("SELECT name FROM users WHERE id = 42 -- lookup");
//! sqlcanon_core::get_canonical(&mut sql);
//! assert_eq!(sql, "SELECT name FROM users WHERE id = ?");
//! ```
//!
//! # Pipeline
//!
//! 1. [`class_table`]: a `const` 256-entry byte classification table.
//! 2. [`Scanner`]: finds every byte that needs attention (quotes, digits,
//!    comment starters, backslashes). AVX2 when the CPU has it, a portable
//!    loop otherwise; both produce the same offsets.
//! 3. The driver walks those markers once, moving plain spans down and
//!    rewriting literals and comments. The buffer is rewritten in place and
//!    only ever shrinks.
//!
//! # Malformed input
//!
//! Nothing here fails. An unterminated string stops rewriting and the rest
//! of the statement is copied as is; a malformed number is left as text.
//! Either way the output is deterministic, so caches and filters degrade
//! instead of erroring.

pub mod class_table;
mod canonical;
mod comment;
mod cursor;
mod literal;
mod number;
mod scanner;

pub use canonical::{canonicalize, canonicalize_bytes, get_canonical, Canonicalizer, PLACEHOLDER};
pub use class_table::{classify, is_marker, ByteClass};
pub use scanner::{Scanner, ScannerKind};
