//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts classified lines and their inline results to a
//!   stable, serializable `Snap` format for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds,
//!   inner lines contained in their container line, emphasis inside its text)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
