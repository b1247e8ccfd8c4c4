//! # Token Model
//!
//! - **`token`**: `Element`, `ElementKind`, `Attribute` and the `Forest` arena
//!   that owns one block's elements
//! - **`merged_token`**: `MergedNode`, the generator's folded stand-in
//! - **`invariants`**: structural checks over a forest, used by tests

pub mod invariants;
pub mod merged_token;
pub mod token;

pub use merged_token::MergedNode;
pub use token::{Attribute, Element, ElementKind, Forest, NodeId};
