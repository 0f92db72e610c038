//! # proselint_text
//!
//! Low-level text helpers used by checks and by the lint engine:
//!
//! - [`OffsetMap`]: byte offsets (what `regex` reports) to UTF-16 offsets
//!   (what findings carry) and back.
//! - [`LineIndex`] and [`line_and_column`]: 1-based line/column lookup.
//! - [`QuoteIndex`] and [`is_quoted`]: the quoted-span heuristic that exempts
//!   other people's words from style critique.

mod offsets;
mod position;
mod quote;

pub use offsets::OffsetMap;
pub use position::{LineIndex, line_and_column};
pub use quote::{QuoteIndex, is_quoted};
