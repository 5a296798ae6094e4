//! Clex Lexer - tokenizer for preprocessed C-family source
//!
//! This crate turns source text into a flat sequence of [`Token`]s for a
//! downstream parser:
//! - [`Scanner`] for pull-based scanning, one token per call
//! - [`tokenize`] for the whole sequence at once
//! - Classification queries on [`TokenKind`] (type tokens, operators,
//!   prefix/postfix operators, compound assignment)
//!
//! Input is expected to be preprocessor output. Line-marker directives that
//! start with `#` are kept as comment tokens rather than interpreted.
//!
//! # Error Model
//!
//! Scanning never fails. Unterminated literals, unterminated comments and
//! stray characters become [`TokenKind::Illegal`] tokens carrying a
//! [`LexError`], and the scanner moves on.
//!
//! # Features
//!
//! - `serde`: derive `Serialize` for [`Token`], [`TokenKind`], [`Span`] and
//!   [`LexError`].

mod cursor;
mod error;
mod keywords;
mod scanner;
mod source_buffer;
mod token;

pub use error::LexError;
pub use scanner::{tokenize, Scanner};
pub use token::{Span, Token, TokenKind};
