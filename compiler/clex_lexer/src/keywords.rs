//! Reserved-word table.
//!
//! One static map from exact word text to keyword kind. The identifier
//! scanner reads a maximal `[A-Za-z_][A-Za-z0-9_]*` run first and only then
//! consults the table, so `structx` stays an identifier.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::TokenKind;

/// Every reserved word, including the `__attribute__` and `__asm`
/// extensions.
pub(crate) const RESERVED: [(&str, TokenKind); 23] = [
    ("return", TokenKind::Return),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("goto", TokenKind::Goto),
    ("for", TokenKind::For),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("switch", TokenKind::Switch),
    ("case", TokenKind::Case),
    ("default", TokenKind::Default),
    ("extern", TokenKind::Extern),
    ("volatile", TokenKind::Volatile),
    ("const", TokenKind::Const),
    ("typedef", TokenKind::Typedef),
    ("union", TokenKind::Union),
    ("struct", TokenKind::Struct),
    ("enum", TokenKind::Enum),
    ("__attribute__", TokenKind::Attribute),
    ("void", TokenKind::Void),
    ("__asm", TokenKind::Asm),
    ("sizeof", TokenKind::Sizeof),
];

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| RESERVED.iter().copied().collect());

/// Look up a reserved word by exact text.
///
/// Returns `None` for ordinary identifiers. Matching is case-sensitive:
/// `Return` is an identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}
