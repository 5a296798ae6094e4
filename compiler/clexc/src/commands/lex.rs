//! `clexc lex`: scan a file and print its token stream.

use std::io::{self, BufWriter, Write};

use clex_lexer::{tokenize, Token};
use tracing::debug;

use super::read_file;
use crate::{CliError, LexOptions};

/// Counts from one `lex` run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexSummary {
    /// Tokens written, including end of input.
    pub printed: usize,
    /// Comment tokens left out by `--skip-comments`.
    pub skipped: usize,
    /// Illegal tokens in the scanned input.
    pub illegal: usize,
}

/// Lex a file and print the token stream to stdout.
pub fn lex_file(path: &str, options: &LexOptions) -> Result<LexSummary, CliError> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = lex_to(path, options, &mut out)?;
    out.flush()?;
    Ok(summary)
}

/// Lex a file and write the token stream to `out`.
///
/// With `deny_illegal` set, the tokens are still written before the
/// [`CliError::IllegalTokens`] error is returned.
pub fn lex_to(
    path: &str,
    options: &LexOptions,
    out: &mut impl Write,
) -> Result<LexSummary, CliError> {
    let content = read_file(path)?;
    let tokens = tokenize(&content);
    let illegal = tokens.iter().filter(|t| t.is_illegal()).count();
    let (selected, skipped) = select_tokens(&tokens, options);

    if options.json {
        write_json(out, &selected)?;
    } else {
        write_text(out, &selected)?;
    }

    let summary = LexSummary {
        printed: selected.len(),
        skipped,
        illegal,
    };
    debug!(path, ?summary, "lexed file");

    if options.deny_illegal && illegal > 0 {
        out.flush()?;
        return Err(CliError::IllegalTokens {
            path: path.to_owned(),
            count: illegal,
        });
    }
    Ok(summary)
}

/// Tokens to print under `options`, and how many comments were dropped.
pub fn select_tokens<'a>(tokens: &'a [Token], options: &LexOptions) -> (Vec<&'a Token>, usize) {
    let selected: Vec<&Token> = tokens
        .iter()
        .filter(|t| !(options.skip_comments && t.is_comment()))
        .collect();
    let skipped = tokens.len() - selected.len();
    (selected, skipped)
}

/// One token per line: `kind literal @ start..end`.
pub fn write_text(out: &mut impl Write, tokens: &[&Token]) -> io::Result<()> {
    for tok in tokens {
        writeln!(out, "{tok}")?;
    }
    Ok(())
}

/// Pretty-printed JSON array of tokens, newline terminated.
pub fn write_json(out: &mut impl Write, tokens: &[&Token]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, tokens)?;
    writeln!(out)?;
    Ok(())
}
