//! # Inline Kinds
//!
//! Inline-specific types that own their syntax characters.
//!
//! - **`CodeSpan`**: `TICK` - raw zone that suppresses delimiter scanning
//! - **`EmphasisMarker`**: `*`, `_` and `~` delimiter runs
//!
//! The scanner asks these types; it never hardcodes `` ` `` or `*`.

pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::EmphasisMarker;
