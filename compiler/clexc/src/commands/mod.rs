//! Command handlers for the clexc CLI.
//!
//! Each submodule implements one CLI command. Shared utilities like
//! `read_file` live here in the module root.

use std::io::Read;

use crate::CliError;

mod lex;

pub use lex::{lex_file, lex_to, select_tokens, write_json, write_text, LexSummary};

/// Read a source file, or standard input when `path` is `-`.
pub fn read_file(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::from_read("<stdin>", e))?;
        return Ok(content);
    }
    std::fs::read_to_string(path).map_err(|e| CliError::from_read(path, e))
}
