//! Options shared by the `canon` and `digest` commands.

use sqlcanon_core::{Scanner, ScannerKind};

use crate::CliError;

/// Statements longer than this are skipped unless `--max-len` says otherwise.
pub const DEFAULT_MAX_LEN: usize = 1024 * 1024;

/// Options parsed from command line arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonOptions {
    /// Scanner override (--scanner=auto|portable|avx2). `None` is auto.
    pub scanner: Option<ScannerKind>,
    /// Length limit in bytes (--max-len=<bytes>). `None` is the default
    /// limit, `Some(0)` disables the limit.
    pub max_len: Option<usize>,
    /// Digest rows to print (--top=<n>). `None` prints all.
    pub top: Option<usize>,
    /// Emit an empty line for each blank input line (--keep-empty)
    pub keep_empty: bool,
}

impl CanonOptions {
    /// Merge another `CanonOptions` into this one.
    ///
    /// Option fields take the new value if present; `keep_empty` is OR'd.
    pub fn merge(&mut self, other: &Self) {
        if other.scanner.is_some() {
            self.scanner = other.scanner;
        }
        if other.max_len.is_some() {
            self.max_len = other.max_len;
        }
        if other.top.is_some() {
            self.top = other.top;
        }
        self.keep_empty |= other.keep_empty;
    }

    /// The effective length limit, `None` when unlimited.
    pub fn length_limit(&self) -> Option<usize> {
        match self.max_len {
            None => Some(DEFAULT_MAX_LEN),
            Some(0) => None,
            Some(n) => Some(n),
        }
    }

    /// Whether a statement of `len` bytes is over the limit.
    pub fn exceeds_limit(&self, len: usize) -> bool {
        self.length_limit().is_some_and(|max| len > max)
    }

    /// Resolve the scanner to run, failing if the override names one the
    /// CPU cannot run.
    pub fn resolve_scanner(&self) -> Result<Scanner, CliError> {
        match self.scanner {
            None => Ok(Scanner::selected()),
            Some(kind) => Scanner::for_kind(kind).ok_or(CliError::UnsupportedScanner(kind)),
        }
    }
}

/// Parse `--` options into a [`CanonOptions`].
///
/// Every argument must be a recognized option.
pub fn parse_canon_options(args: &[String]) -> Result<CanonOptions, CliError> {
    let mut options = CanonOptions::default();

    for arg in args {
        if let Some(name) = arg.strip_prefix("--scanner=") {
            options.scanner = match name {
                "auto" => None,
                _ => Some(ScannerKind::parse(name).ok_or_else(|| CliError::InvalidValue {
                    option: "--scanner",
                    value: name.to_string(),
                })?),
            };
        } else if let Some(value) = arg.strip_prefix("--max-len=") {
            options.max_len = Some(parse_count("--max-len", value)?);
        } else if let Some(value) = arg.strip_prefix("--top=") {
            options.top = Some(parse_count("--top", value)?);
        } else if arg == "--keep-empty" {
            options.keep_empty = true;
        } else {
            return Err(CliError::UnknownOption(arg.clone()));
        }
    }

    Ok(options)
}

/// Split a command's arguments into its input path and options.
///
/// Anything starting with `--` is an option; `-` and other arguments name
/// the input. At most one input may be given. Options may appear on either
/// side of it.
pub fn parse_command_args(args: &[String]) -> Result<(Option<String>, CanonOptions), CliError> {
    let mut input = None;
    let mut options = CanonOptions::default();

    for (i, arg) in args.iter().enumerate() {
        if arg.starts_with("--") {
            let parsed = parse_canon_options(&args[i..=i])?;
            options.merge(&parsed);
        } else if input.is_none() {
            input = Some(arg.clone());
        } else {
            return Err(CliError::ExtraArgument(arg.clone()));
        }
    }

    Ok((input, options))
}

fn parse_count(option: &'static str, value: &str) -> Result<usize, CliError> {
    value.parse().map_err(|_| CliError::InvalidValue {
        option,
        value: value.to_string(),
    })
}
