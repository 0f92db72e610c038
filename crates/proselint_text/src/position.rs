//! Line and column resolution.

use proselint_ast::Position;

/// Resolves a UTF-16 offset to a 1-based line and column.
///
/// Scans forward from the start of `text`. Every `\n` before `offset` starts
/// a new line; every other code unit advances the column. Offsets past the
/// end resolve to the position just after the last character.
pub fn line_and_column(text: &str, offset: u32) -> Position {
    let mut line = 0u32;
    let mut column = 0u32;
    let mut index = 0u32;

    for ch in text.chars() {
        if index >= offset {
            break;
        }
        let units = ch.len_utf16() as u32;
        if ch == '\n' {
            line += 1;
            column = 0;
        } else {
            // A surrogate pair split by the offset only counts its first unit.
            column += units.min(offset - index);
        }
        index += units;
    }

    Position::new(line + 1, column + 1)
}

/// Precomputed line starts for repeated position lookups in one text.
///
/// Produces the same results as [`line_and_column`] in `O(log n)` per
/// lookup.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// UTF-16 offset of the first code unit of each line.
    line_starts: Vec<u32>,
    len: u32,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut offset = 0u32;
        for ch in text.chars() {
            offset += ch.len_utf16() as u32;
            if ch == '\n' {
                line_starts.push(offset);
            }
        }
        Self {
            line_starts,
            len: offset,
        }
    }

    /// Number of lines in the text. An empty text has one line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Resolves a UTF-16 offset to a 1-based position.
    pub fn position(&self, offset: u32) -> Position {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        Position::new(line as u32, offset - line_start + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::start(0, Position::new(1, 1))]
    #[case::mid_first_line(6, Position::new(1, 7))]
    #[case::on_newline(11, Position::new(1, 12))]
    #[case::after_newline(12, Position::new(2, 1))]
    #[case::second_line(14, Position::new(2, 3))]
    #[case::past_end(200, Position::new(2, 7))]
    fn test_line_and_column(#[case] offset: u32, #[case] expected: Position) {
        let text = "Hello world\nsecond";
        assert_eq!(line_and_column(text, offset), expected);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(line_and_column("", 0), Position::new(1, 1));
        assert_eq!(LineIndex::new("").position(0), Position::new(1, 1));
    }

    #[test]
    fn test_columns_count_utf16_units() {
        // "🎉" occupies two UTF-16 code units.
        let text = "🎉 very";
        assert_eq!(line_and_column(text, 3), Position::new(1, 4));
        assert_eq!(LineIndex::new(text).position(3), Position::new(1, 4));
    }

    #[test]
    fn test_consecutive_newlines() {
        let text = "a\n\n\nb";
        let index = LineIndex::new(text);
        assert_eq!(index.line_count(), 4);
        assert_eq!(index.position(4), Position::new(4, 1));
        assert_eq!(line_and_column(text, 4), Position::new(4, 1));
    }

    #[test]
    fn test_index_agrees_with_scan() {
        let text = "First line.\nSécond line — with “quotes”.\n\n🎉 party\ntrailing\n";
        let index = LineIndex::new(text);
        let len: u32 = text.chars().map(|c| c.len_utf16() as u32).sum();
        for offset in 0..=len + 2 {
            assert_eq!(
                index.position(offset),
                line_and_column(text, offset),
                "offset {offset}"
            );
        }
    }
}
