//! Marker scanning.
//!
//! A marker is the offset of a byte the canonicalizer has to inspect: a
//! quote, a digit, a comment starter (`/`, `#`, `-`) or a backslash. Every
//! other byte is copied verbatim, so the driver only ever wakes up at
//! markers.
//!
//! Two implementations produce the same ascending offset list:
//!
//! - **Portable**: one table lookup per byte. Runs everywhere.
//! - **AVX2**: classifies 32 bytes per step with vector compares and
//!   extracts offsets from the resulting bitmask. `x86_64` only, and only
//!   when the CPU reports AVX2 at runtime.
//!
//! The choice is a capability check, never a behavioral one. The property
//! tests in `tests.rs` hold both implementations to identical output.

use std::fmt;
use std::sync::OnceLock;

#[cfg(target_arch = "x86_64")]
mod avx2;
mod portable;

/// Which scanning implementation a [`Scanner`] runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScannerKind {
    /// Byte-at-a-time table lookups.
    Portable,
    /// 32-byte AVX2 classification.
    Avx2,
}

impl ScannerKind {
    /// Stable lowercase name, as accepted by [`ScannerKind::parse`].
    pub fn as_str(self) -> &'static str {
        match self {
            ScannerKind::Portable => "portable",
            ScannerKind::Avx2 => "avx2",
        }
    }

    /// Parse a name produced by [`ScannerKind::as_str`].
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "portable" => Some(ScannerKind::Portable),
            "avx2" => Some(ScannerKind::Avx2),
            _ => None,
        }
    }

    /// Whether the current host can run this kind.
    pub fn is_supported(self) -> bool {
        match self {
            ScannerKind::Portable => true,
            ScannerKind::Avx2 => avx2_supported(),
        }
    }
}

impl fmt::Display for ScannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A marker scanner that is known to be runnable on this host.
///
/// The field is private so an AVX2 scanner can only be obtained through
/// [`Scanner::avx2`], which checks the CPU first. That check is what makes
/// the `unsafe` call in [`Scanner::scan`] sound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scanner {
    kind: ScannerKind,
}

impl Scanner {
    /// The portable scanner.
    pub const fn portable() -> Self {
        Self {
            kind: ScannerKind::Portable,
        }
    }

    /// The AVX2 scanner, or `None` if the CPU does not support AVX2.
    pub fn avx2() -> Option<Self> {
        avx2_supported().then_some(Self {
            kind: ScannerKind::Avx2,
        })
    }

    /// The scanner for `kind`, or `None` if the host cannot run it.
    pub fn for_kind(kind: ScannerKind) -> Option<Self> {
        match kind {
            ScannerKind::Portable => Some(Self::portable()),
            ScannerKind::Avx2 => Self::avx2(),
        }
    }

    /// Probe the CPU and return the widest scanner it supports.
    pub fn detect() -> Self {
        Self::avx2().unwrap_or_else(Self::portable)
    }

    /// The process-wide scanner, detected on first use and cached.
    pub fn selected() -> Self {
        static SELECTED: OnceLock<Scanner> = OnceLock::new();
        *SELECTED.get_or_init(|| {
            let scanner = Self::detect();
            tracing::debug!(scanner = %scanner.kind, "selected marker scanner");
            scanner
        })
    }

    /// Which implementation this scanner runs.
    pub fn kind(self) -> ScannerKind {
        self.kind
    }

    /// Replace the contents of `markers` with the ascending offsets of every
    /// marker byte in `sql`.
    #[allow(
        unsafe_code,
        reason = "AVX2 scanning requires target_feature intrinsics"
    )]
    pub fn scan(self, sql: &[u8], markers: &mut Vec<usize>) {
        markers.clear();
        match self.kind {
            ScannerKind::Portable => portable::scan(sql, 0, markers),
            #[cfg(target_arch = "x86_64")]
            ScannerKind::Avx2 => {
                // SAFETY: a `Scanner` with kind `Avx2` is only constructed by
                // `Scanner::avx2()`, after `is_x86_feature_detected!("avx2")`
                // returned true.
                unsafe { avx2::scan(sql, markers) }
            }
            #[cfg(not(target_arch = "x86_64"))]
            ScannerKind::Avx2 => portable::scan(sql, 0, markers),
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::selected()
    }
}

fn avx2_supported() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        std::arch::is_x86_feature_detected!("avx2")
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        false
    }
}
