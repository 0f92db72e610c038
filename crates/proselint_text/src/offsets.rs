//! Conversion between byte offsets and UTF-16 code unit offsets.

use proselint_ast::Span;

/// Maps byte offsets of a `&str` to UTF-16 offsets and back.
///
/// Pure ASCII text needs no table: both encodings agree. Otherwise the map
/// records one `(byte, utf16)` pair per character plus an end sentinel.
#[derive(Debug, Clone)]
pub struct OffsetMap {
    /// Character boundaries; empty when the text is ASCII.
    boundaries: Vec<(usize, u32)>,
    byte_len: usize,
    utf16_len: u32,
}

impl OffsetMap {
    /// Builds the map for `text`.
    pub fn new(text: &str) -> Self {
        if text.is_ascii() {
            return Self {
                boundaries: Vec::new(),
                byte_len: text.len(),
                utf16_len: text.len() as u32,
            };
        }

        let mut boundaries = Vec::with_capacity(text.len() + 1);
        let mut utf16 = 0u32;
        for (byte, ch) in text.char_indices() {
            boundaries.push((byte, utf16));
            utf16 += ch.len_utf16() as u32;
        }
        boundaries.push((text.len(), utf16));

        Self {
            boundaries,
            byte_len: text.len(),
            utf16_len: utf16,
        }
    }

    /// Length of the text in UTF-16 code units.
    pub fn utf16_len(&self) -> u32 {
        self.utf16_len
    }

    /// Converts a byte offset on a character boundary to a UTF-16 offset.
    ///
    /// Offsets past the end clamp to the text length. An offset inside a
    /// multi-byte character resolves to the start of that character.
    pub fn to_utf16(&self, byte: usize) -> u32 {
        if byte >= self.byte_len {
            return self.utf16_len;
        }
        if self.boundaries.is_empty() {
            return byte as u32;
        }
        match self.boundaries.binary_search_by_key(&byte, |&(b, _)| b) {
            Ok(idx) => self.boundaries[idx].1,
            Err(idx) => self.boundaries[idx.saturating_sub(1)].1,
        }
    }

    /// Converts a UTF-16 offset back to a byte offset.
    ///
    /// Returns `None` when the offset is past the end or splits a surrogate
    /// pair.
    pub fn to_byte(&self, utf16: u32) -> Option<usize> {
        if utf16 > self.utf16_len {
            return None;
        }
        if self.boundaries.is_empty() {
            return Some(utf16 as usize);
        }
        self.boundaries
            .binary_search_by_key(&utf16, |&(_, u)| u)
            .ok()
            .map(|idx| self.boundaries[idx].0)
    }

    /// Converts a byte range into a UTF-16 [`Span`].
    pub fn span(&self, start: usize, end: usize) -> Span {
        Span::new(self.to_utf16(start), self.to_utf16(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_identity() {
        let map = OffsetMap::new("Hello World");
        assert_eq!(map.to_utf16(0), 0);
        assert_eq!(map.to_utf16(5), 5);
        assert_eq!(map.to_utf16(11), 11);
        assert_eq!(map.to_byte(6), Some(6));
        assert_eq!(map.utf16_len(), 11);
    }

    #[test]
    fn test_multibyte_bmp() {
        // "é" is 2 bytes, 1 UTF-16 unit.
        let text = "café very";
        let map = OffsetMap::new(text);
        let very = text.find("very").unwrap();
        assert_eq!(very, 6);
        assert_eq!(map.to_utf16(very), 5);
        assert_eq!(map.to_byte(5), Some(6));
        assert_eq!(map.utf16_len(), 9);
    }

    #[test]
    fn test_supplementary_plane() {
        // "🎉" is 4 bytes, 2 UTF-16 units.
        let text = "a🎉b";
        let map = OffsetMap::new(text);
        assert_eq!(map.to_utf16(0), 0);
        assert_eq!(map.to_utf16(1), 1);
        assert_eq!(map.to_utf16(5), 3);
        assert_eq!(map.to_byte(3), Some(5));
        assert_eq!(map.to_byte(2), None);
    }

    #[test]
    fn test_clamps_past_end() {
        let map = OffsetMap::new("ab→");
        assert_eq!(map.to_utf16(100), map.utf16_len());
        assert_eq!(map.to_byte(map.utf16_len() + 1), None);
    }

    #[test]
    fn test_span_conversion() {
        let text = "naïve planning";
        let map = OffsetMap::new(text);
        let start = text.find("planning").unwrap();
        let span = map.span(start, start + "planning".len());
        assert_eq!(span, Span::new(6, 14));
    }

    #[test]
    fn test_empty_text() {
        let map = OffsetMap::new("");
        assert_eq!(map.utf16_len(), 0);
        assert_eq!(map.to_utf16(0), 0);
        assert_eq!(map.to_byte(0), Some(0));
    }
}
