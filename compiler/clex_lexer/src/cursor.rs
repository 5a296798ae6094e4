//! Byte cursor over a sentinel-terminated [`SourceBuffer`](crate::source_buffer::SourceBuffer).
//!
//! The cursor advances through the buffer byte-by-byte. Reads at or past the
//! end of the source return the `0x00` sentinel, so the scanner's
//! advance-then-inspect lookahead never needs an explicit bounds check.
//!
//! # Interior Null Bytes
//!
//! A `0x00` at `pos < source_len` is an ordinary input byte (the scanner
//! reports it as an unexpected character); a `0x00` at `pos >= source_len`
//! is the sentinel. [`Cursor::is_eof`] compares positions, never bytes.

/// Cursor over the scanner input.
///
/// The cursor is [`Copy`]; the scanner creates one per token from its stored
/// position and writes the final position back once the token is produced.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// # Contract
    ///
    /// `buf[source_len]` must be `0x00` and every byte after it must be
    /// `0x00` as well. `pos <= source_len`.
    pub(crate) fn new(buf: &'a [u8], source_len: u32, pos: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        debug_assert!(pos <= source_len, "cursor starts past end of source");
        Self {
            buf,
            pos,
            source_len,
        }
    }

    /// Byte at the current position; `0x00` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Advance one byte. Never moves past end of input.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Advance past one full UTF-8 character.
    ///
    /// The width comes from the leading byte; the result is clamped to the
    /// source length so a truncated sequence cannot push the cursor into the
    /// padding.
    #[inline]
    pub(crate) fn advance_char(&mut self) {
        let width = utf8_char_width(self.current());
        self.pos = self.pos.saturating_add(width).min(self.source_len);
    }

    /// `true` once every source byte has been consumed.
    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    /// Owned copy of `start..end`.
    ///
    /// The scanner only cuts at ASCII delimiters or whole UTF-8 characters,
    /// so the lossy conversion never substitutes anything for input that
    /// came from a `&str`.
    pub(crate) fn lexeme(&self, start: u32, end: u32) -> String {
        debug_assert!(start <= end, "lexeme start {start} exceeds end {end}");
        debug_assert!(
            end <= self.source_len,
            "lexeme end {end} exceeds source length {}",
            self.source_len
        );
        String::from_utf8_lossy(&self.buf[start as usize..end as usize]).into_owned()
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel stops the loop.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) && !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Skip spaces, tabs, line feeds and carriage returns.
    #[inline]
    pub(crate) fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'));
    }

    /// Advance to the next `\n` or `\r`, or to end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub(crate) fn eat_until_line_end(&mut self) {
        let remaining = self.remaining();
        match memchr::memchr2(b'\n', b'\r', remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Advance to the next `"` or `\` inside a string literal.
    ///
    /// Returns the byte found, or `0` when end of input was reached first.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub(crate) fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = self.remaining();
        if let Some(offset) = memchr::memchr2(b'"', b'\\', remaining) {
            self.pos += offset as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance to the next `*/`, leaving the cursor on the `*`.
    ///
    /// Returns `false` (with the cursor at end of input) when no terminator
    /// exists in the rest of the source.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub(crate) fn skip_to_block_comment_end(&mut self) -> bool {
        let remaining = self.remaining();
        if let Some(offset) = memchr::memmem::find(remaining, b"*/") {
            self.pos += offset as u32;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }

    /// Unconsumed source bytes (no sentinel).
    #[inline]
    fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }
}

/// Number of bytes in the UTF-8 character whose leading byte is `byte`.
///
/// Continuation bytes and invalid leaders count as one byte, so the cursor
/// always makes progress.
#[inline]
fn utf8_char_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
