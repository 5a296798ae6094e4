//! Hand-written scanner producing [`Token`]s on demand.
//!
//! # Design
//!
//! The [`Scanner`] owns the input and a single byte offset. Each call to
//! [`Scanner::next_token`] builds a [`Cursor`] at that offset, hands it by
//! `&mut` to exactly one sub-scanner, and stores the cursor's final position
//! back. Sub-scanners are free functions: they see only the cursor, never
//! the scanner, so no scanning state is shared or aliased.
//!
//! Main dispatch looks at one byte after skipping whitespace. Punctuators
//! follow maximal munch by consuming a byte and then inspecting the next
//! one; three-byte operators (`<<=`, `>>=`) extend their two-byte prefix.
//!
//! Malformed input never panics and never stops the scanner: it becomes a
//! [`TokenKind::Illegal`] token that consumes at least one byte.

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::keywords;
use crate::source_buffer::SourceBuffer;
use crate::token::{Span, Token, TokenKind};

/// Pull-based tokenizer over one source text.
///
/// Single use: once [`TokenKind::Eof`] is returned, every later call returns
/// `Eof` again. Construct a new scanner to rescan.
#[derive(Clone, Debug)]
pub struct Scanner {
    buffer: SourceBuffer,
    /// Offset of the first unconsumed byte. Never decreases.
    pos: u32,
}

impl Scanner {
    /// Take a private copy of `source` and position at its start.
    pub fn new(source: &str) -> Self {
        Scanner {
            buffer: SourceBuffer::new(source),
            pos: 0,
        }
    }

    /// Byte offset of the next unconsumed input byte.
    #[inline]
    pub fn position(&self) -> u32 {
        self.pos
    }

    /// Length of the input in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.buffer.len()
    }

    /// Produce the next token.
    ///
    /// Returns `Eof` with an empty literal and an empty span at the end of
    /// the input, and keeps returning it on later calls.
    pub fn next_token(&mut self) -> Token {
        let mut cursor = self.buffer.cursor_at(self.pos);
        let token = scan(&mut cursor);
        debug_assert!(cursor.pos() >= self.pos, "scanner position moved backwards");
        self.pos = cursor.pos();
        trace!(
            kind = ?token.kind,
            start = token.span.start,
            end = token.span.end,
            "token"
        );
        token
    }

    /// Scan the rest of the input.
    ///
    /// The result always ends with exactly one `Eof` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }
        debug!(
            tokens = tokens.len(),
            illegal = tokens.iter().filter(|t| t.is_illegal()).count(),
            bytes = self.buffer.len(),
            "tokenized source"
        );
        tokens
    }
}

/// Yields every token before `Eof`; `Eof` itself ends the iteration.
impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl std::iter::FusedIterator for Scanner {}

/// Tokenize a whole source text.
///
/// Equivalent to `Scanner::new(source).tokenize()`: the result ends with a
/// single `Eof` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).tokenize()
}

// ─── Dispatch ──────────────────────────────────────────────────────

fn scan(cursor: &mut Cursor<'_>) -> Token {
    cursor.eat_whitespace();
    let start = cursor.pos();
    if cursor.is_eof() {
        return Token::new(TokenKind::Eof, String::new(), Span::new(start, start));
    }
    match cursor.current() {
        b'a'..=b'z' | b'A'..=b'Z' | b'_' => identifier(cursor, start),
        b'0'..=b'9' => number(cursor, start),
        b'"' => string(cursor, start),
        b'\'' => char_literal(cursor, start),
        b'#' => hash_comment(cursor, start),
        b'/' => slash_or_comment(cursor, start),
        b'=' => with_equal(cursor, start, TokenKind::Assign, TokenKind::EqualEqual),
        b'!' => with_equal(cursor, start, TokenKind::Bang, TokenKind::BangEqual),
        b'*' => with_equal(cursor, start, TokenKind::Star, TokenKind::StarAssign),
        b'%' => with_equal(cursor, start, TokenKind::Percent, TokenKind::PercentAssign),
        b'^' => with_equal(cursor, start, TokenKind::Caret, TokenKind::CaretAssign),
        b'~' => with_equal(cursor, start, TokenKind::Tilde, TokenKind::TildeAssign),
        b'+' => plus(cursor, start),
        b'-' => minus(cursor, start),
        b'&' => doubled_or_equal(
            cursor,
            start,
            TokenKind::Ampersand,
            TokenKind::AmpersandAmpersand,
            TokenKind::AmpersandAssign,
        ),
        b'|' => doubled_or_equal(
            cursor,
            start,
            TokenKind::Pipe,
            TokenKind::PipePipe,
            TokenKind::PipeAssign,
        ),
        b'<' => angle(cursor, start, b'<', Angle::LESS),
        b'>' => angle(cursor, start, b'>', Angle::GREATER),
        b';' => single(cursor, start, TokenKind::Semicolon),
        b',' => single(cursor, start, TokenKind::Comma),
        b'.' => single(cursor, start, TokenKind::Dot),
        b':' => single(cursor, start, TokenKind::Colon),
        b'?' => single(cursor, start, TokenKind::Question),
        b'(' => single(cursor, start, TokenKind::LeftParen),
        b')' => single(cursor, start, TokenKind::RightParen),
        b'{' => single(cursor, start, TokenKind::LeftBrace),
        b'}' => single(cursor, start, TokenKind::RightBrace),
        b'[' => single(cursor, start, TokenKind::LeftBracket),
        b']' => single(cursor, start, TokenKind::RightBracket),
        b'\\' => single(cursor, start, TokenKind::Backslash),
        _ => unexpected(cursor, start),
    }
}

/// Token whose literal is exactly the bytes consumed since `start`.
fn finish(cursor: &Cursor<'_>, start: u32, kind: TokenKind) -> Token {
    let end = cursor.pos();
    Token::new(kind, cursor.lexeme(start, end), Span::new(start, end))
}

/// Illegal token covering everything consumed since `start`.
fn illegal(cursor: &Cursor<'_>, start: u32, err: LexError) -> Token {
    debug!(error = %err, start, end = cursor.pos(), "illegal token");
    finish(cursor, start, TokenKind::Illegal(err))
}

// ─── Identifiers ───────────────────────────────────────────────────

fn identifier(cursor: &mut Cursor<'_>, start: u32) -> Token {
    cursor.advance(); // first byte already validated
    cursor.eat_while(is_ident_continue);
    let text = cursor.lexeme(start, cursor.pos());
    let kind = keywords::lookup(&text).unwrap_or(TokenKind::Ident);
    Token::new(kind, text, Span::new(start, cursor.pos()))
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

// ─── Numbers ───────────────────────────────────────────────────────

/// Scan an integer or floating literal.
///
/// Radix prefixes and octal shape are decided once, from the byte after a
/// leading `0`. The body then accepts any hex digit, the suffix letters
/// `uUlL` and `.`, so `09f` and `1e5` are single integer literals; a `.`
/// anywhere makes the literal a float.
fn number(cursor: &mut Cursor<'_>, start: u32) -> Token {
    let mut is_float = false;
    let first = cursor.current();
    cursor.advance();

    if first == b'0' {
        match cursor.current() {
            // 0x.., 0b.., and 0NNN octal: consume the second byte as-is
            b'x' | b'b' | b'0'..=b'9' => cursor.advance(),
            b'.' => {
                cursor.advance();
                is_float = true;
            }
            _ => {}
        }
    }

    loop {
        match cursor.current() {
            b'.' => {
                is_float = true;
                cursor.advance();
            }
            b'u' | b'U' | b'l' | b'L' => cursor.advance(),
            b if b.is_ascii_hexdigit() => cursor.advance(),
            _ => break,
        }
    }

    let kind = if is_float {
        TokenKind::Float
    } else {
        TokenKind::Int
    };
    finish(cursor, start, kind)
}

// ─── String & Char Literals ────────────────────────────────────────

/// Scan a string literal. The literal keeps both quotes.
///
/// `\\` and `\"` are two-byte units; any other backslash is ordinary
/// content. End of input before the closing quote yields an illegal token
/// holding the rest of the input.
fn string(cursor: &mut Cursor<'_>, start: u32) -> Token {
    cursor.advance(); // opening '"'
    loop {
        match cursor.skip_to_string_delim() {
            b'"' => {
                cursor.advance(); // closing '"'
                return finish(cursor, start, TokenKind::Str);
            }
            b'\\' => {
                cursor.advance(); // '\'
                if matches!(cursor.current(), b'\\' | b'"') {
                    cursor.advance();
                }
            }
            _ => return illegal(cursor, start, LexError::UnterminatedString),
        }
    }
}

/// Scan a character literal. The literal excludes the quotes.
///
/// Escapes are `\` plus either a run of decimal digits or one character.
/// The byte where the closing quote belongs is skipped without being
/// checked, so `'ab'` yields `a` and leaves `'` as the next input. Only
/// running out of input is an error.
fn char_literal(cursor: &mut Cursor<'_>, start: u32) -> Token {
    cursor.advance(); // opening '\''
    if cursor.is_eof() {
        return illegal(cursor, start, LexError::UnterminatedChar);
    }

    let content_start = cursor.pos();
    if cursor.current() == b'\\' {
        cursor.advance(); // '\'
        if cursor.is_eof() {
            return illegal(cursor, start, LexError::UnterminatedChar);
        }
        if cursor.current().is_ascii_digit() {
            cursor.eat_while(|b| b.is_ascii_digit());
        } else {
            cursor.advance_char();
        }
    } else {
        cursor.advance_char();
    }
    let content_end = cursor.pos();

    if cursor.is_eof() {
        return illegal(cursor, start, LexError::UnterminatedChar);
    }
    cursor.advance_char(); // closing quote position, unchecked

    Token::new(
        TokenKind::Char,
        cursor.lexeme(content_start, content_end),
        Span::new(start, cursor.pos()),
    )
}

// ─── Comments ──────────────────────────────────────────────────────

/// `#` through end of line. The literal excludes the `#` and the line
/// terminator; the terminator itself is consumed when present.
fn hash_comment(cursor: &mut Cursor<'_>, start: u32) -> Token {
    cursor.advance(); // '#'
    let body_start = cursor.pos();
    cursor.eat_until_line_end();
    let body_end = cursor.pos();
    cursor.advance(); // '\n' or '\r'; no-op at end of input
    Token::new(
        TokenKind::Comment,
        cursor.lexeme(body_start, body_end),
        Span::new(start, cursor.pos()),
    )
}

fn slash_or_comment(cursor: &mut Cursor<'_>, start: u32) -> Token {
    cursor.advance(); // '/'
    match cursor.current() {
        b'=' => {
            cursor.advance();
            finish(cursor, start, TokenKind::SlashAssign)
        }
        b'*' => {
            cursor.advance(); // '*'
            block_comment(cursor, start)
        }
        _ => finish(cursor, start, TokenKind::Slash),
    }
}

/// Body of a `/* ... */` comment; the opener is already consumed.
fn block_comment(cursor: &mut Cursor<'_>, start: u32) -> Token {
    let body_start = cursor.pos();
    if !cursor.skip_to_block_comment_end() {
        return illegal(cursor, start, LexError::UnterminatedComment);
    }
    let body_end = cursor.pos();
    cursor.advance(); // '*'
    cursor.advance(); // '/'
    Token::new(
        TokenKind::Comment,
        cursor.lexeme(body_start, body_end),
        Span::new(start, cursor.pos()),
    )
}

// ─── Operators ─────────────────────────────────────────────────────

/// Single-byte token: advance one byte and emit `kind`.
fn single(cursor: &mut Cursor<'_>, start: u32, kind: TokenKind) -> Token {
    cursor.advance();
    finish(cursor, start, kind)
}

/// `x` or `x=`.
fn with_equal(cursor: &mut Cursor<'_>, start: u32, bare: TokenKind, eq: TokenKind) -> Token {
    cursor.advance();
    if cursor.current() == b'=' {
        cursor.advance();
        return finish(cursor, start, eq);
    }
    finish(cursor, start, bare)
}

/// `x`, `xx`, or `x=` (for `&` and `|`).
fn doubled_or_equal(
    cursor: &mut Cursor<'_>,
    start: u32,
    bare: TokenKind,
    doubled: TokenKind,
    eq: TokenKind,
) -> Token {
    let first = cursor.current();
    cursor.advance();
    let kind = match cursor.current() {
        b if b == first => doubled,
        b'=' => eq,
        _ => return finish(cursor, start, bare),
    };
    cursor.advance();
    finish(cursor, start, kind)
}

fn plus(cursor: &mut Cursor<'_>, start: u32) -> Token {
    cursor.advance(); // '+'
    let kind = match cursor.current() {
        b'+' => TokenKind::PlusPlus,
        b'=' => TokenKind::PlusAssign,
        _ => return finish(cursor, start, TokenKind::Plus),
    };
    cursor.advance();
    finish(cursor, start, kind)
}

fn minus(cursor: &mut Cursor<'_>, start: u32) -> Token {
    cursor.advance(); // '-'
    let kind = match cursor.current() {
        b'>' => TokenKind::Arrow,
        b'-' => TokenKind::MinusMinus,
        b'=' => TokenKind::MinusAssign,
        _ => return finish(cursor, start, TokenKind::Minus),
    };
    cursor.advance();
    finish(cursor, start, kind)
}

/// Kinds produced by `<` or `>` and their extensions.
#[derive(Clone, Copy)]
struct Angle {
    bare: TokenKind,
    bare_eq: TokenKind,
    shift: TokenKind,
    shift_eq: TokenKind,
}

impl Angle {
    const LESS: Angle = Angle {
        bare: TokenKind::Less,
        bare_eq: TokenKind::LessEqual,
        shift: TokenKind::Shl,
        shift_eq: TokenKind::ShlAssign,
    };
    const GREATER: Angle = Angle {
        bare: TokenKind::Greater,
        bare_eq: TokenKind::GreaterEqual,
        shift: TokenKind::Shr,
        shift_eq: TokenKind::ShrAssign,
    };
}

/// `<`, `<=`, `<<`, `<<=` and the `>` mirror images.
fn angle(cursor: &mut Cursor<'_>, start: u32, ch: u8, kinds: Angle) -> Token {
    cursor.advance();
    match cursor.current() {
        b'=' => {
            cursor.advance();
            finish(cursor, start, kinds.bare_eq)
        }
        b if b == ch => {
            cursor.advance();
            if cursor.current() == b'=' {
                cursor.advance();
                return finish(cursor, start, kinds.shift_eq);
            }
            finish(cursor, start, kinds.shift)
        }
        _ => finish(cursor, start, kinds.bare),
    }
}

// ─── Error tokens ──────────────────────────────────────────────────

/// A byte that starts no token. Consumes one whole UTF-8 character so the
/// literal is always valid text.
fn unexpected(cursor: &mut Cursor<'_>, start: u32) -> Token {
    cursor.advance_char();
    let text = cursor.lexeme(start, cursor.pos());
    let ch = text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
    illegal(cursor, start, LexError::UnexpectedCharacter { ch })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
