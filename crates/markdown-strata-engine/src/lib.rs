pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    blocks::{Indent, IndentUnit, Line, LineKind, ListKind, MarkdownLineClassifier},
    classify_lines,
    inline::{DelimiterArray, EmphasisCategory, EmphasisNode, ParsedInline, parse_inline},
    parse_inline_for_line,
};
