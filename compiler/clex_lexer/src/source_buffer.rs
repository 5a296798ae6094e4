//! Sentinel-terminated copy of the scanner input.
//!
//! The buffer appends a `0x00` sentinel after the source bytes and pads the
//! allocation up to the next 64-byte boundary. Every lookahead the scanner
//! performs therefore lands on valid memory, and a read at
//! or past the end of the source always yields `0x00`.
//!
//! A `0x00` byte *inside* the source is legal input for the buffer; the
//! [`Cursor`] tells the two apart by comparing the position against the
//! source length.

use crate::cursor::Cursor;

/// Cache line size in bytes, used for buffer padding.
const CACHE_LINE: usize = 64;

/// Owned, immutable input of a [`Scanner`](crate::Scanner).
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub(crate) struct SourceBuffer {
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a fresh sentinel-terminated buffer.
    ///
    /// Inputs larger than `u32::MAX` bytes are truncated to `u32::MAX`; the
    /// scanner treats the truncation point as end of input.
    pub(crate) fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = u32::try_from(source_bytes.len()).unwrap_or(u32::MAX);
        let copied = source_len as usize;

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (copied + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Zero-filled, so the sentinel and padding need no extra writes.
        let mut buf = vec![0u8; padded_len];
        buf[..copied].copy_from_slice(&source_bytes[..copied]);

        Self { buf, source_len }
    }

    /// Length of the source content in bytes.
    #[inline]
    pub(crate) fn len(&self) -> u32 {
        self.source_len
    }

    /// Cursor positioned at byte offset `pos`.
    ///
    /// `pos` is clamped to the source length, so a cursor can never start
    /// inside the padding region.
    #[inline]
    pub(crate) fn cursor_at(&self, pos: u32) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len, pos.min(self.source_len))
    }

    /// Source bytes without the sentinel or padding.
    #[cfg(test)]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Full backing allocation, including sentinel and padding.
    #[cfg(test)]
    pub(crate) fn padded(&self) -> &[u8] {
        &self.buf
    }
}
