//! The `canon` command: print each statement's canonical form.

use std::io::{self, BufWriter, Write};

use sqlcanon_core::{Canonicalizer, Scanner};

use super::Summary;
use crate::input::{read_input, statements};
use crate::options::CanonOptions;
use crate::CliError;

/// Canonicalize every statement in `text`, writing one line per statement.
///
/// Over-length statements produce no output line and are counted in the
/// returned summary.
pub fn canon_text<W: Write>(
    text: &str,
    options: &CanonOptions,
    scanner: Scanner,
    out: &mut W,
) -> Result<Summary, CliError> {
    let mut canonicalizer = Canonicalizer::with_scanner(scanner);
    let mut summary = Summary::default();
    let mut buf = String::new();

    for statement in statements(text, options.keep_empty) {
        if options.exceeds_limit(statement.text.len()) {
            summary.skip(statement);
            continue;
        }
        buf.clear();
        buf.push_str(statement.text);
        canonicalizer.canonicalize(&mut buf);
        writeln!(out, "{buf}")?;
        summary.processed += 1;
    }

    Ok(summary)
}

/// Run `sqlcanon canon [FILE|-]`.
pub fn run_canon(input: Option<&str>, options: &CanonOptions) -> Result<(), CliError> {
    let scanner = options.resolve_scanner()?;
    let text = read_input(input)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = canon_text(&text, options, scanner, &mut out)?;
    out.flush()?;

    summary.report();
    Ok(())
}
