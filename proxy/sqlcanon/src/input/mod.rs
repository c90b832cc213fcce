//! Statement input: a file or stdin, one statement per line.

use std::io::Read;

use crate::CliError;

/// Read the whole input. `None` and `-` both mean stdin.
pub fn read_input(path: Option<&str>) -> Result<String, CliError> {
    match path {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| CliError::read("<stdin>", e))?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|e| CliError::read(path, e)),
    }
}

/// One statement from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement<'a> {
    /// 1-based line number.
    pub line: usize,
    pub text: &'a str,
}

/// Split input text into statements, one per line.
///
/// Line endings (`\n` or `\r\n`) are not part of the statement. Blank lines
/// are dropped unless `keep_empty` is set.
pub fn statements(text: &str, keep_empty: bool) -> impl Iterator<Item = Statement<'_>> {
    text.lines()
        .enumerate()
        .map(|(i, text)| Statement { line: i + 1, text })
        .filter(move |s| keep_empty || !s.text.trim().is_empty())
}
