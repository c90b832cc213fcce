//! The `digest` command: group statements by canonical form and count them.
//!
//! Canonicalization runs on the rayon pool with one [`Canonicalizer`] per
//! worker. Each worker folds into its own map and the maps are merged at the
//! end, so no lock is taken per statement.

use std::io::{self, BufWriter, Write};

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use sqlcanon_core::{Canonicalizer, Scanner};

use super::Summary;
use crate::input::{read_input, statements};
use crate::options::CanonOptions;
use crate::CliError;

/// One canonical form and how many statements share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestRow {
    pub count: usize,
    pub canonical: String,
}

/// Result of digesting an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    /// Sorted by descending count, then canonical text; cut to `--top`.
    pub rows: Vec<DigestRow>,
    pub summary: Summary,
}

/// Digest every statement in `text`. Blank lines are never counted.
pub fn digest_text(text: &str, options: &CanonOptions, scanner: Scanner) -> Digest {
    let mut summary = Summary::default();
    let mut accepted = Vec::new();
    for statement in statements(text, false) {
        if options.exceeds_limit(statement.text.len()) {
            summary.skip(statement);
        } else {
            accepted.push(statement.text);
        }
    }
    summary.processed = accepted.len();

    let counts = accepted
        .par_iter()
        .map_init(
            || Canonicalizer::with_scanner(scanner),
            |canonicalizer, sql| {
                let mut canonical = (*sql).to_owned();
                canonicalizer.canonicalize(&mut canonical);
                canonical
            },
        )
        .fold(
            FxHashMap::default,
            |mut counts: FxHashMap<String, usize>, canonical| {
                *counts.entry(canonical).or_insert(0) += 1;
                counts
            },
        )
        .reduce(FxHashMap::default, merge_counts);

    let mut rows: Vec<DigestRow> = counts
        .into_iter()
        .map(|(canonical, count)| DigestRow { count, canonical })
        .collect();
    rows.sort_unstable_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.canonical.cmp(&b.canonical))
    });
    if let Some(top) = options.top {
        rows.truncate(top);
    }

    tracing::debug!(
        statements = summary.processed,
        distinct = rows.len(),
        "digest complete"
    );
    Digest { rows, summary }
}

fn merge_counts(
    mut into: FxHashMap<String, usize>,
    from: FxHashMap<String, usize>,
) -> FxHashMap<String, usize> {
    for (canonical, count) in from {
        *into.entry(canonical).or_insert(0) += count;
    }
    into
}

/// Write digest rows as `count<TAB>canonical`.
pub fn write_digest<W: Write>(digest: &Digest, out: &mut W) -> Result<(), CliError> {
    for row in &digest.rows {
        writeln!(out, "{}\t{}", row.count, row.canonical)?;
    }
    Ok(())
}

/// Run `sqlcanon digest [FILE|-]`.
pub fn run_digest(input: Option<&str>, options: &CanonOptions) -> Result<(), CliError> {
    let scanner = options.resolve_scanner()?;
    let text = read_input(input)?;
    let digest = digest_text(&text, options, scanner);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_digest(&digest, &mut out)?;
    out.flush()?;

    digest.summary.report();
    Ok(())
}
