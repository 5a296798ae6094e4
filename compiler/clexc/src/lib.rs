//! Clexc - command-line driver for the clex scanner
//!
//! Reads a source file, runs [`clex_lexer::Scanner`] over it and prints the
//! token stream. The binary in `main.rs` only parses arguments and maps
//! errors to exit codes; everything it calls lives here so tests can drive
//! it without spawning a process.

pub mod commands;
mod error;
mod options;

pub use error::CliError;
pub use options::{parse_lex_args, LexCommand, LexOptions};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=clex_lexer=debug` or `RUST_LOG=clex_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
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
