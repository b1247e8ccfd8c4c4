//! # Block Kinds
//!
//! Each multi-line construct owns its line syntax here. The classifier and
//! the tokenizers call into these types; neither hardcodes a delimiter.
//!
//! - **`BlockQuote`**: `>` prefixes and depth counting
//! - **`CodeFence`**: backtick fences, language tags, entity escaping
//! - **`ListItem`**: bullet and ordered item lines
//! - **`TableRow`**: pipe rows, alignment rows, cell splitting

pub mod block_quote;
pub mod code_fence;
pub mod list;
pub mod table;

pub use block_quote::{BlockQuote, QuoteLine};
pub use code_fence::{CodeFence, FenceSig};
pub use list::{ListItem, ListLine, ListMarker};
pub use table::{Alignment, TableRow};
