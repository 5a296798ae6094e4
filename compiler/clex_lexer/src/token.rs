//! Token model: kinds, spans, and the capability predicates a parser
//! queries on individual tokens.
//!
//! Every predicate is an exhaustive `match` over [`TokenKind`] with no
//! wildcard arm. Adding a variant is a compile error until each predicate
//! has placed it explicitly.

use std::fmt;

use crate::error::LexError;

/// Byte range `[start, end)` of the input a token consumed.
///
/// Covers delimiters too: a block comment's span includes `/*` and `*/`
/// even though its literal does not.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Closed set of token kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// End of input. Produced once the source is exhausted, and on every
    /// call after that.
    Eof,

    /// Identifier that is not a reserved word.
    Ident,
    /// Integer literal, any radix, suffixes included: `42`, `0x1A`, `10UL`.
    Int,
    /// Floating literal: any numeric literal containing a `.`.
    Float,
    /// String literal, quotes included in the literal.
    Str,
    /// Character literal, quotes excluded from the literal.
    Char,

    // Reserved words
    Return,
    If,
    Else,
    While,
    Do,
    Goto,
    For,
    Break,
    Continue,
    Switch,
    Case,
    Default,
    Extern,
    Volatile,
    Const,
    Typedef,
    Union,
    Struct,
    Enum,
    Void,
    Sizeof,
    /// `__attribute__`
    Attribute,
    /// `__asm`
    Asm,

    // Operators
    Assign,             // =
    Plus,               // +
    Minus,              // -
    Star,               // *
    Slash,              // /
    Percent,            // %
    Less,               // <
    Greater,            // >
    EqualEqual,         // ==
    BangEqual,          // !=
    LessEqual,          // <=
    GreaterEqual,       // >=
    Ampersand,          // &
    Pipe,               // |
    Caret,              // ^
    Tilde,              // ~
    Bang,               // !
    AmpersandAmpersand, // &&
    PipePipe,           // ||
    Shl,                // <<
    Shr,                // >>
    PlusPlus,           // ++
    MinusMinus,         // --
    Arrow,              // ->
    Question,           // ?
    Colon,              // :

    // Compound assignment
    PlusAssign,      // +=
    MinusAssign,     // -=
    StarAssign,      // *=
    SlashAssign,     // /=
    PercentAssign,   // %=
    AmpersandAssign, // &=
    PipeAssign,      // |=
    CaretAssign,     // ^=
    ShlAssign,       // <<=
    ShrAssign,       // >>=
    /// `~=`, accepted as an extension.
    TildeAssign,

    // Punctuation
    Dot,          // .
    Comma,        // ,
    Semicolon,    // ;
    LeftParen,    // (
    RightParen,   // )
    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // [
    RightBracket, // ]
    Backslash,    // \

    /// Block comment or `#` line (preprocessor line markers land here).
    Comment,
    /// Input that could not be scanned; see [`LexError`].
    Illegal(LexError),
}

impl TokenKind {
    /// Can this token begin (or continue) a type in a declaration?
    ///
    /// Identifiers count because typedef names are identifiers, and `^` is
    /// accepted for block pointer types.
    #[allow(
        clippy::match_same_arms,
        reason = "arms grouped by token category for exhaustive review"
    )]
    pub fn is_type_token(self) -> bool {
        match self {
            TokenKind::Ident
            | TokenKind::Star
            | TokenKind::Const
            | TokenKind::Void
            | TokenKind::Struct
            | TokenKind::Union
            | TokenKind::Enum
            | TokenKind::Volatile
            | TokenKind::Caret => true,

            TokenKind::Eof
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::Str
            | TokenKind::Char
            | TokenKind::Comment
            | TokenKind::Illegal(_) => false,

            TokenKind::Return
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::While
            | TokenKind::Do
            | TokenKind::Goto
            | TokenKind::For
            | TokenKind::Break
            | TokenKind::Continue
            | TokenKind::Switch
            | TokenKind::Case
            | TokenKind::Default
            | TokenKind::Extern
            | TokenKind::Typedef
            | TokenKind::Sizeof
            | TokenKind::Attribute
            | TokenKind::Asm => false,

            TokenKind::Assign
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Less
            | TokenKind::Greater
            | TokenKind::EqualEqual
            | TokenKind::BangEqual
            | TokenKind::LessEqual
            | TokenKind::GreaterEqual
            | TokenKind::Ampersand
            | TokenKind::Pipe
            | TokenKind::Tilde
            | TokenKind::Bang
            | TokenKind::AmpersandAmpersand
            | TokenKind::PipePipe
            | TokenKind::Shl
            | TokenKind::Shr
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus
            | TokenKind::Arrow
            | TokenKind::Question
            | TokenKind::Colon => false,

            TokenKind::PlusAssign
            | TokenKind::MinusAssign
            | TokenKind::StarAssign
            | TokenKind::SlashAssign
            | TokenKind::PercentAssign
            | TokenKind::AmpersandAssign
            | TokenKind::PipeAssign
            | TokenKind::CaretAssign
            | TokenKind::ShlAssign
            | TokenKind::ShrAssign
            | TokenKind::TildeAssign => false,

            TokenKind::Dot
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::LeftBrace
            | TokenKind::RightBrace
            | TokenKind::LeftBracket
            | TokenKind::RightBracket
            | TokenKind::Backslash => false,
        }
    }

    /// Binary, relational, conditional and assignment operators.
    ///
    /// `?` and `:` are included so a parser can treat the conditional
    /// operator uniformly; `!`, `->` and `.` are not.
    #[allow(
        clippy::match_same_arms,
        reason = "arms grouped by token category for exhaustive review"
    )]
    pub fn is_operator(self) -> bool {
        match self {
            TokenKind::Assign
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Less
            | TokenKind::Greater
            | TokenKind::EqualEqual
            | TokenKind::BangEqual
            | TokenKind::LessEqual
            | TokenKind::GreaterEqual
            | TokenKind::Ampersand
            | TokenKind::Pipe
            | TokenKind::Caret
            | TokenKind::Tilde
            | TokenKind::AmpersandAmpersand
            | TokenKind::PipePipe
            | TokenKind::Shl
            | TokenKind::Shr
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus
            | TokenKind::Question
            | TokenKind::Colon => true,

            TokenKind::PlusAssign
            | TokenKind::MinusAssign
            | TokenKind::StarAssign
            | TokenKind::SlashAssign
            | TokenKind::PercentAssign
            | TokenKind::AmpersandAssign
            | TokenKind::PipeAssign
            | TokenKind::CaretAssign
            | TokenKind::ShlAssign
            | TokenKind::ShrAssign
            | TokenKind::TildeAssign => true,

            TokenKind::Bang | TokenKind::Arrow => false,

            TokenKind::Eof
            | TokenKind::Ident
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::Str
            | TokenKind::Char
            | TokenKind::Comment
            | TokenKind::Illegal(_) => false,

            TokenKind::Return
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::While
            | TokenKind::Do
            | TokenKind::Goto
            | TokenKind::For
            | TokenKind::Break
            | TokenKind::Continue
            | TokenKind::Switch
            | TokenKind::Case
            | TokenKind::Default
            | TokenKind::Extern
            | TokenKind::Volatile
            | TokenKind::Const
            | TokenKind::Typedef
            | TokenKind::Union
            | TokenKind::Struct
            | TokenKind::Enum
            | TokenKind::Void
            | TokenKind::Sizeof
            | TokenKind::Attribute
            | TokenKind::Asm => false,

            TokenKind::Dot
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::LeftBrace
            | TokenKind::RightBrace
            | TokenKind::LeftBracket
            | TokenKind::RightBracket
            | TokenKind::Backslash => false,
        }
    }

    /// Tokens that can start a prefix (unary) expression.
    #[allow(
        clippy::match_same_arms,
        reason = "arms grouped by token category for exhaustive review"
    )]
    pub fn is_prefix_operator(self) -> bool {
        match self {
            TokenKind::Minus
            | TokenKind::Plus
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus
            | TokenKind::Tilde
            | TokenKind::Bang
            | TokenKind::Star
            | TokenKind::Ampersand => true,

            TokenKind::Assign
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Less
            | TokenKind::Greater
            | TokenKind::EqualEqual
            | TokenKind::BangEqual
            | TokenKind::LessEqual
            | TokenKind::GreaterEqual
            | TokenKind::Pipe
            | TokenKind::Caret
            | TokenKind::AmpersandAmpersand
            | TokenKind::PipePipe
            | TokenKind::Shl
            | TokenKind::Shr
            | TokenKind::Arrow
            | TokenKind::Question
            | TokenKind::Colon => false,

            TokenKind::PlusAssign
            | TokenKind::MinusAssign
            | TokenKind::StarAssign
            | TokenKind::SlashAssign
            | TokenKind::PercentAssign
            | TokenKind::AmpersandAssign
            | TokenKind::PipeAssign
            | TokenKind::CaretAssign
            | TokenKind::ShlAssign
            | TokenKind::ShrAssign
            | TokenKind::TildeAssign => false,

            TokenKind::Eof
            | TokenKind::Ident
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::Str
            | TokenKind::Char
            | TokenKind::Comment
            | TokenKind::Illegal(_) => false,

            TokenKind::Return
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::While
            | TokenKind::Do
            | TokenKind::Goto
            | TokenKind::For
            | TokenKind::Break
            | TokenKind::Continue
            | TokenKind::Switch
            | TokenKind::Case
            | TokenKind::Default
            | TokenKind::Extern
            | TokenKind::Volatile
            | TokenKind::Const
            | TokenKind::Typedef
            | TokenKind::Union
            | TokenKind::Struct
            | TokenKind::Enum
            | TokenKind::Void
            | TokenKind::Sizeof
            | TokenKind::Attribute
            | TokenKind::Asm => false,

            TokenKind::Dot
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::LeftBrace
            | TokenKind::RightBrace
            | TokenKind::LeftBracket
            | TokenKind::RightBracket
            | TokenKind::Backslash => false,
        }
    }

    /// Tokens that continue a postfix expression: call, `++`, `--`.
    #[allow(
        clippy::match_same_arms,
        reason = "arms grouped by token category for exhaustive review"
    )]
    pub fn is_postfix_operator(self) -> bool {
        match self {
            TokenKind::LeftParen | TokenKind::PlusPlus | TokenKind::MinusMinus => true,

            TokenKind::Assign
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Less
            | TokenKind::Greater
            | TokenKind::EqualEqual
            | TokenKind::BangEqual
            | TokenKind::LessEqual
            | TokenKind::GreaterEqual
            | TokenKind::Ampersand
            | TokenKind::Pipe
            | TokenKind::Caret
            | TokenKind::Tilde
            | TokenKind::Bang
            | TokenKind::AmpersandAmpersand
            | TokenKind::PipePipe
            | TokenKind::Shl
            | TokenKind::Shr
            | TokenKind::Arrow
            | TokenKind::Question
            | TokenKind::Colon => false,

            TokenKind::PlusAssign
            | TokenKind::MinusAssign
            | TokenKind::StarAssign
            | TokenKind::SlashAssign
            | TokenKind::PercentAssign
            | TokenKind::AmpersandAssign
            | TokenKind::PipeAssign
            | TokenKind::CaretAssign
            | TokenKind::ShlAssign
            | TokenKind::ShrAssign
            | TokenKind::TildeAssign => false,

            TokenKind::Eof
            | TokenKind::Ident
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::Str
            | TokenKind::Char
            | TokenKind::Comment
            | TokenKind::Illegal(_) => false,

            TokenKind::Return
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::While
            | TokenKind::Do
            | TokenKind::Goto
            | TokenKind::For
            | TokenKind::Break
            | TokenKind::Continue
            | TokenKind::Switch
            | TokenKind::Case
            | TokenKind::Default
            | TokenKind::Extern
            | TokenKind::Volatile
            | TokenKind::Const
            | TokenKind::Typedef
            | TokenKind::Union
            | TokenKind::Struct
            | TokenKind::Enum
            | TokenKind::Void
            | TokenKind::Sizeof
            | TokenKind::Attribute
            | TokenKind::Asm => false,

            TokenKind::Dot
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::RightParen
            | TokenKind::LeftBrace
            | TokenKind::RightBrace
            | TokenKind::LeftBracket
            | TokenKind::RightBracket
            | TokenKind::Backslash => false,
        }
    }

    /// Compound assignment operators (`+=` through `~=`). Plain `=` is not
    /// compound.
    #[allow(
        clippy::match_same_arms,
        reason = "arms grouped by token category for exhaustive review"
    )]
    pub fn is_compound_assign(self) -> bool {
        match self {
            TokenKind::PlusAssign
            | TokenKind::MinusAssign
            | TokenKind::StarAssign
            | TokenKind::SlashAssign
            | TokenKind::PercentAssign
            | TokenKind::AmpersandAssign
            | TokenKind::PipeAssign
            | TokenKind::CaretAssign
            | TokenKind::ShlAssign
            | TokenKind::ShrAssign
            | TokenKind::TildeAssign => true,

            TokenKind::Assign
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Less
            | TokenKind::Greater
            | TokenKind::EqualEqual
            | TokenKind::BangEqual
            | TokenKind::LessEqual
            | TokenKind::GreaterEqual
            | TokenKind::Ampersand
            | TokenKind::Pipe
            | TokenKind::Caret
            | TokenKind::Tilde
            | TokenKind::Bang
            | TokenKind::AmpersandAmpersand
            | TokenKind::PipePipe
            | TokenKind::Shl
            | TokenKind::Shr
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus
            | TokenKind::Arrow
            | TokenKind::Question
            | TokenKind::Colon => false,

            TokenKind::Eof
            | TokenKind::Ident
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::Str
            | TokenKind::Char
            | TokenKind::Comment
            | TokenKind::Illegal(_) => false,

            TokenKind::Return
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::While
            | TokenKind::Do
            | TokenKind::Goto
            | TokenKind::For
            | TokenKind::Break
            | TokenKind::Continue
            | TokenKind::Switch
            | TokenKind::Case
            | TokenKind::Default
            | TokenKind::Extern
            | TokenKind::Volatile
            | TokenKind::Const
            | TokenKind::Typedef
            | TokenKind::Union
            | TokenKind::Struct
            | TokenKind::Enum
            | TokenKind::Void
            | TokenKind::Sizeof
            | TokenKind::Attribute
            | TokenKind::Asm => false,

            TokenKind::Dot
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::LeftBrace
            | TokenKind::RightBrace
            | TokenKind::LeftBracket
            | TokenKind::RightBracket
            | TokenKind::Backslash => false,
        }
    }

    /// Reserved word for keyword kinds, `None` otherwise.
    pub fn keyword_str(self) -> Option<&'static str> {
        match self {
            TokenKind::Return => Some("return"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::While => Some("while"),
            TokenKind::Do => Some("do"),
            TokenKind::Goto => Some("goto"),
            TokenKind::For => Some("for"),
            TokenKind::Break => Some("break"),
            TokenKind::Continue => Some("continue"),
            TokenKind::Switch => Some("switch"),
            TokenKind::Case => Some("case"),
            TokenKind::Default => Some("default"),
            TokenKind::Extern => Some("extern"),
            TokenKind::Volatile => Some("volatile"),
            TokenKind::Const => Some("const"),
            TokenKind::Typedef => Some("typedef"),
            TokenKind::Union => Some("union"),
            TokenKind::Struct => Some("struct"),
            TokenKind::Enum => Some("enum"),
            TokenKind::Void => Some("void"),
            TokenKind::Sizeof => Some("sizeof"),
            TokenKind::Attribute => Some("__attribute__"),
            TokenKind::Asm => Some("__asm"),
            _ => None,
        }
    }

    /// Short human-readable name, used by `Display` and the token dump.
    #[inline]
    pub fn display_name(self) -> &'static str {
        if let Some(word) = self.keyword_str() {
            return word;
        }
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::Str => "string",
            TokenKind::Char => "char",
            TokenKind::Comment => "comment",
            TokenKind::Illegal(_) => "illegal",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::EqualEqual => "==",
            TokenKind::BangEqual => "!=",
            TokenKind::LessEqual => "<=",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Ampersand => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Tilde => "~",
            TokenKind::Bang => "!",
            TokenKind::AmpersandAmpersand => "&&",
            TokenKind::PipePipe => "||",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Arrow => "->",
            TokenKind::Question => "?",
            TokenKind::Colon => ":",
            TokenKind::PlusAssign => "+=",
            TokenKind::MinusAssign => "-=",
            TokenKind::StarAssign => "*=",
            TokenKind::SlashAssign => "/=",
            TokenKind::PercentAssign => "%=",
            TokenKind::AmpersandAssign => "&=",
            TokenKind::PipeAssign => "|=",
            TokenKind::CaretAssign => "^=",
            TokenKind::ShlAssign => "<<=",
            TokenKind::ShrAssign => ">>=",
            TokenKind::TildeAssign => "~=",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Backslash => "\\",
            // Keywords returned above.
            _ => "keyword",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Illegal(err) => write!(f, "illegal ({err})"),
            _ => f.write_str(self.display_name()),
        }
    }
}

/// A scanned token.
///
/// Owns its literal text; it holds no reference back to the scanner or the
/// input.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token. Strings keep their quotes; comments and
    /// character literals drop their delimiters; end of input is empty.
    pub literal: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            literal: literal.into(),
            span,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Comment
    }

    #[inline]
    pub fn is_illegal(&self) -> bool {
        matches!(self.kind, TokenKind::Illegal(_))
    }

    /// The reason attached to an illegal token.
    #[inline]
    pub fn error(&self) -> Option<LexError> {
        match self.kind {
            TokenKind::Illegal(err) => Some(err),
            _ => None,
        }
    }

    #[inline]
    pub fn is_type_token(&self) -> bool {
        self.kind.is_type_token()
    }

    #[inline]
    pub fn is_operator(&self) -> bool {
        self.kind.is_operator()
    }

    #[inline]
    pub fn is_prefix_operator(&self) -> bool {
        self.kind.is_prefix_operator()
    }

    #[inline]
    pub fn is_postfix_operator(&self) -> bool {
        self.kind.is_postfix_operator()
    }

    #[inline]
    pub fn is_compound_assign(&self) -> bool {
        self.kind.is_compound_assign()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}", self.kind, self.literal, self.span)
    }
}

#[cfg(test)]
mod tests;
