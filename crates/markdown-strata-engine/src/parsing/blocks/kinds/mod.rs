//! # Line Kinds
//!
//! Block-level syntax knowledge, one type per construct. The classifier asks
//! these types whether a line matches; it never hardcodes a marker itself.

pub mod block_quote;
pub mod code_fence;
pub mod header;
pub mod list_marker;
pub mod reference;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceOpen};
pub use header::Header;
pub use list_marker::ListMarker;
pub use reference::Reference;
pub use thematic_break::ThematicBreak;
