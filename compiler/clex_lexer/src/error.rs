//! Reasons attached to illegal tokens.
//!
//! The scanner never fails: malformed input becomes a
//! [`TokenKind::Illegal`](crate::TokenKind::Illegal) token carrying one of
//! these values, and scanning continues after it.

use thiserror::Error;

/// Why a span of input could not be turned into a regular token.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LexError {
    /// End of input before the closing `"` of a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// End of input inside a character literal.
    #[error("unterminated character literal")]
    UnterminatedChar,
    /// End of input before the `*/` of a block comment.
    #[error("unterminated block comment")]
    UnterminatedComment,
    /// A character that starts no token.
    #[error("unexpected character {ch:?}")]
    UnexpectedCharacter { ch: char },
}

impl LexError {
    /// `true` for the three unterminated-construct reasons.
    pub fn is_unterminated(self) -> bool {
        match self {
            LexError::UnterminatedString
            | LexError::UnterminatedChar
            | LexError::UnterminatedComment => true,
            LexError::UnexpectedCharacter { .. } => false,
        }
    }
}
