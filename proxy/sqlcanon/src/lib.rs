//! Command-line front end for `sqlcanon_core`.
//!
//! Reads statement logs (one statement per line) and either prints each
//! statement's canonical form or groups statements by canonical form and
//! counts them. The binary in `main.rs` only dispatches; everything it runs
//! lives here so integration tests can drive it without spawning processes.

pub mod commands;
pub mod error;
pub mod input;
pub mod options;

pub use error::CliError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Logging is opt-in: nothing is installed unless `RUST_LOG` is set, and
/// then events go to stderr filtered by it. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
