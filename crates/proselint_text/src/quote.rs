//! Heuristic detection of quoted text.
//!
//! A match is considered quoted when an odd number of double quotes, or an
//! odd number of non-contraction single quotes, precede it. A single quote
//! sits inside a contraction when both of its neighbours, looking only at
//! the text before the match, are ASCII letters.
//!
//! All scanning is byte-wise. Quote characters and ASCII letters never occur
//! inside a multi-byte UTF-8 sequence, so byte offsets are exact.

/// Returns true if the byte offset `pos` lies inside a quotation.
pub fn is_quoted(text: &str, pos: usize) -> bool {
    let before = &text.as_bytes()[..pos.min(text.len())];

    let doubles = before.iter().filter(|&&b| b == b'"').count();
    let singles = before
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\'' && !is_contraction(before, i))
        .count();

    doubles % 2 == 1 || singles % 2 == 1
}

fn is_contraction(bytes: &[u8], i: usize) -> bool {
    let prev = i.checked_sub(1).and_then(|p| bytes.get(p));
    let next = bytes.get(i + 1);
    matches!((prev, next), (Some(p), Some(n)) if p.is_ascii_alphabetic() && n.is_ascii_alphabetic())
}

/// Precomputed quote positions for repeated [`is_quoted`] queries.
///
/// Answers the same question as [`is_quoted`] in `O(log n)`.
#[derive(Debug, Clone, Default)]
pub struct QuoteIndex {
    doubles: Vec<usize>,
    /// Single quotes that are not between two letters in the full text.
    singles: Vec<usize>,
    /// Single quotes between two letters in the full text.
    contractions: Vec<usize>,
}

impl QuoteIndex {
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut index = Self::default();
        for (i, &b) in bytes.iter().enumerate() {
            match b {
                b'"' => index.doubles.push(i),
                b'\'' if is_contraction(bytes, i) => index.contractions.push(i),
                b'\'' => index.singles.push(i),
                _ => {}
            }
        }
        index
    }

    /// Returns true if the byte offset `pos` lies inside a quotation.
    pub fn is_quoted(&self, pos: usize) -> bool {
        let doubles = self.doubles.partition_point(|&q| q < pos);
        let mut singles = self.singles.partition_point(|&q| q < pos);

        // A contraction apostrophe right before `pos` loses its right-hand
        // neighbour once the text is cut at `pos`, so it counts as a quote.
        if pos > 0 && self.contractions.binary_search(&(pos - 1)).is_ok() {
            singles += 1;
        }

        doubles % 2 == 1 || singles % 2 == 1
    }
}
