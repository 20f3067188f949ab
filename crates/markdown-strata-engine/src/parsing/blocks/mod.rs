//! # Block Lines
//!
//! Line-level classification for block parsing. Each physical line becomes a
//! [`Line`]: its kind, its leading [`Indent`] and a cursor over its text.
//! Assembling lines into a block tree happens downstream.
//!
//! ## Modules
//!
//! - **`indent`**: `Indent` and `IndentUnit`, the mixed space/tab width model
//! - **`types`**: `Line`, `LineKind`, `ListKind` and friends
//! - **`kinds`**: syntax knowledge per construct (list markers, quotes, fences, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces a `Line` for each rope line
//!
//! ## Key Invariants
//!
//! - List and quote lines own exactly one inner line (the rest of the physical line)
//! - All spans are absolute byte offsets into the rope
//! - A line's cursor never includes the line ending

pub mod classify;
pub mod indent;
pub mod kinds;
pub mod types;

pub use classify::{CODE_INDENT, MarkdownLineClassifier};
pub use indent::{Indent, IndentUnit};
pub use kinds::FenceKind;
pub use types::{BulletKind, Line, LineKind, ListKind, NumberKind, ReferenceDefinition};
