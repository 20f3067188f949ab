//! # Inline Parsing
//!
//! Cursor-based delimiter scanning followed by emphasis resolution.
//!
//! ## Architecture
//!
//! Inline parsing runs over one span of text at a time (a text line's
//! content, a header's text).
//!
//! 1. **Scanning** (`parser`): the cursor walks the text, splitting out code
//!    spans (raw zones) and recording every `*`, `_` and `~` run as a
//!    [`Delimiter`] with precomputed open/close flags.
//! 2. **Resolution** (`emphasis`): the [`DelimiterArray`] repeatedly yields
//!    its first closable pair until none is left, emitting [`EmphasisNode`]s.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode`, `EmphasisNode`, `ParsedInline`
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, EmphasisMarker)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`delimiter`**: `Delimiter`, `Flanking`, `DelimiterArray`
//! - **`emphasis`**: the resolution algorithm on `DelimiterArray`
//! - **`parser`**: `parse_inline()` main entry point

pub mod cursor;
pub mod delimiter;
pub mod emphasis;
pub mod kinds;
pub mod parser;
pub mod types;

pub use delimiter::{Delimiter, DelimiterArray, Flanking};
pub use emphasis::EmphasisMatch;
pub use kinds::EmphasisMarker;
pub use parser::{parse_inline, scan_inline};
pub use types::{EmphasisCategory, EmphasisNode, InlineNode, ParsedInline};
