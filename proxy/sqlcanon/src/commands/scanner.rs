//! The `scanner` command: report which marker scanner this host runs.

use std::io::{self, Write};

use sqlcanon_core::{Scanner, ScannerKind};

use crate::CliError;

/// Write the selected scanner followed by the support status of each kind.
pub fn report_scanner<W: Write>(out: &mut W) -> Result<(), CliError> {
    writeln!(out, "selected: {}", Scanner::selected().kind())?;
    for kind in [ScannerKind::Portable, ScannerKind::Avx2] {
        let status = if kind.is_supported() {
            "supported"
        } else {
            "unsupported"
        };
        writeln!(out, "{kind}: {status}")?;
    }
    Ok(())
}

/// Run `sqlcanon scanner`.
pub fn run_scanner() -> Result<(), CliError> {
    let stdout = io::stdout();
    report_scanner(&mut stdout.lock())
}
