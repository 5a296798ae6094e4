use super::*;
use pretty_assertions::assert_eq;

/// Every kind, used to check predicates against hand-written expectations.
const ALL_KINDS: &[TokenKind] = &[
    TokenKind::Eof,
    TokenKind::Ident,
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::Str,
    TokenKind::Char,
    TokenKind::Return,
    TokenKind::If,
    TokenKind::Else,
    TokenKind::While,
    TokenKind::Do,
    TokenKind::Goto,
    TokenKind::For,
    TokenKind::Break,
    TokenKind::Continue,
    TokenKind::Switch,
    TokenKind::Case,
    TokenKind::Default,
    TokenKind::Extern,
    TokenKind::Volatile,
    TokenKind::Const,
    TokenKind::Typedef,
    TokenKind::Union,
    TokenKind::Struct,
    TokenKind::Enum,
    TokenKind::Void,
    TokenKind::Sizeof,
    TokenKind::Attribute,
    TokenKind::Asm,
    TokenKind::Assign,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Star,
    TokenKind::Slash,
    TokenKind::Percent,
    TokenKind::Less,
    TokenKind::Greater,
    TokenKind::EqualEqual,
    TokenKind::BangEqual,
    TokenKind::LessEqual,
    TokenKind::GreaterEqual,
    TokenKind::Ampersand,
    TokenKind::Pipe,
    TokenKind::Caret,
    TokenKind::Tilde,
    TokenKind::Bang,
    TokenKind::AmpersandAmpersand,
    TokenKind::PipePipe,
    TokenKind::Shl,
    TokenKind::Shr,
    TokenKind::PlusPlus,
    TokenKind::MinusMinus,
    TokenKind::Arrow,
    TokenKind::Question,
    TokenKind::Colon,
    TokenKind::PlusAssign,
    TokenKind::MinusAssign,
    TokenKind::StarAssign,
    TokenKind::SlashAssign,
    TokenKind::PercentAssign,
    TokenKind::AmpersandAssign,
    TokenKind::PipeAssign,
    TokenKind::CaretAssign,
    TokenKind::ShlAssign,
    TokenKind::ShrAssign,
    TokenKind::TildeAssign,
    TokenKind::Dot,
    TokenKind::Comma,
    TokenKind::Semicolon,
    TokenKind::LeftParen,
    TokenKind::RightParen,
    TokenKind::LeftBrace,
    TokenKind::RightBrace,
    TokenKind::LeftBracket,
    TokenKind::RightBracket,
    TokenKind::Backslash,
    TokenKind::Comment,
    TokenKind::Illegal(LexError::UnterminatedString),
];

fn kinds_where(pred: impl Fn(TokenKind) -> bool) -> Vec<TokenKind> {
    ALL_KINDS.iter().copied().filter(|&k| pred(k)).collect()
}

const COMPOUND: [TokenKind; 11] = [
    TokenKind::PlusAssign,
    TokenKind::MinusAssign,
    TokenKind::StarAssign,
    TokenKind::SlashAssign,
    TokenKind::PercentAssign,
    TokenKind::AmpersandAssign,
    TokenKind::PipeAssign,
    TokenKind::CaretAssign,
    TokenKind::ShlAssign,
    TokenKind::ShrAssign,
    TokenKind::TildeAssign,
];

// === Predicates ===

#[test]
fn type_tokens() {
    assert_eq!(
        kinds_where(TokenKind::is_type_token),
        vec![
            TokenKind::Ident,
            TokenKind::Volatile,
            TokenKind::Const,
            TokenKind::Union,
            TokenKind::Struct,
            TokenKind::Enum,
            TokenKind::Void,
            TokenKind::Star,
            TokenKind::Caret,
        ]
    );
}

#[test]
fn prefix_operators() {
    assert_eq!(
        kinds_where(TokenKind::is_prefix_operator),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Ampersand,
            TokenKind::Tilde,
            TokenKind::Bang,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
        ]
    );
}

#[test]
fn postfix_operators() {
    assert_eq!(
        kinds_where(TokenKind::is_postfix_operator),
        vec![
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::LeftParen,
        ]
    );
}

#[test]
fn compound_assign_operators() {
    assert_eq!(kinds_where(TokenKind::is_compound_assign), COMPOUND.to_vec());
    assert!(!TokenKind::Assign.is_compound_assign());
}

#[test]
fn operators_include_every_compound_assign() {
    for kind in COMPOUND {
        assert!(kind.is_operator(), "{kind:?} should be an operator");
    }
}

#[test]
fn operators_exclude_non_binary_punctuation() {
    for kind in [
        TokenKind::Bang,
        TokenKind::Arrow,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::LeftParen,
        TokenKind::Backslash,
    ] {
        assert!(!kind.is_operator(), "{kind:?} should not be an operator");
    }
}

#[test]
fn operators_include_conditional_parts() {
    assert!(TokenKind::Question.is_operator());
    assert!(TokenKind::Colon.is_operator());
    assert!(TokenKind::Assign.is_operator());
    assert!(TokenKind::PipePipe.is_operator());
}

#[test]
fn literals_and_sentinels_match_no_predicate() {
    for kind in [
        TokenKind::Eof,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::Str,
        TokenKind::Char,
        TokenKind::Comment,
        TokenKind::Illegal(LexError::UnexpectedCharacter { ch: '@' }),
    ] {
        assert!(!kind.is_type_token());
        assert!(!kind.is_operator());
        assert!(!kind.is_prefix_operator());
        assert!(!kind.is_postfix_operator());
        assert!(!kind.is_compound_assign());
    }
}

#[test]
fn token_forwards_predicates_to_kind() {
    let tok = Token::new(TokenKind::Star, "*", Span::new(0, 1));
    assert!(tok.is_type_token());
    assert!(tok.is_operator());
    assert!(tok.is_prefix_operator());
    assert!(!tok.is_postfix_operator());
    assert!(!tok.is_compound_assign());
}

// === Keywords ===

#[test]
fn keyword_str_covers_exactly_the_reserved_words() {
    let keywords: Vec<_> = ALL_KINDS.iter().filter_map(|k| k.keyword_str()).collect();
    assert_eq!(keywords.len(), 23);
    assert!(keywords.contains(&"__attribute__"));
    assert!(keywords.contains(&"__asm"));
    assert_eq!(TokenKind::Ident.keyword_str(), None);
}

// === Display ===

#[test]
fn display_names() {
    assert_eq!(TokenKind::ShrAssign.to_string(), ">>=");
    assert_eq!(TokenKind::TildeAssign.to_string(), "~=");
    assert_eq!(TokenKind::Struct.to_string(), "struct");
    assert_eq!(TokenKind::Ident.to_string(), "identifier");
    assert_eq!(TokenKind::Backslash.to_string(), "\\");
    assert_eq!(
        TokenKind::Illegal(LexError::UnterminatedComment).to_string(),
        "illegal (unterminated block comment)"
    );
}

#[test]
fn every_kind_has_a_distinct_display_name() {
    let mut names: Vec<_> = ALL_KINDS.iter().map(|k| k.display_name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), ALL_KINDS.len());
}

#[test]
fn token_display() {
    let tok = Token::new(TokenKind::Str, "\"hi\"", Span::new(3, 7));
    assert_eq!(tok.to_string(), "string \"\\\"hi\\\"\" @ 3..7");
}

// === Accessors ===

#[test]
fn illegal_token_exposes_reason() {
    let tok = Token::new(
        TokenKind::Illegal(LexError::UnterminatedString),
        "\"abc",
        Span::new(0, 4),
    );
    assert!(tok.is_illegal());
    assert_eq!(tok.error(), Some(LexError::UnterminatedString));
    assert!(LexError::UnterminatedString.is_unterminated());
    assert!(!LexError::UnexpectedCharacter { ch: '$' }.is_unterminated());
}

#[test]
fn span_len() {
    let span = Span::new(4, 9);
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
    assert!(Span::new(2, 2).is_empty());
    assert_eq!(span.to_string(), "4..9");
}
