//! # proselint_ast
//!
//! Source location types shared by every prose linter crate.
//!
//! Offsets are counted in UTF-16 code units so that a host working with
//! JavaScript or LSP string indices can use them without conversion.
//! Lines and columns are both 1-based.
//!
//! ## Example
//!
//! ```rust
//! use proselint_ast::{Position, Span};
//!
//! let span = Span::new(8, 12);
//! assert_eq!(span.len(), 4);
//!
//! let pos = Position::new(1, 9);
//! assert_eq!(pos.column, 9);
//! ```

mod span;

pub use span::{Position, Span};
