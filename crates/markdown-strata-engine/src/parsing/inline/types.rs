use serde::Serialize;

use crate::parsing::rope::span::Span;

/// A flat inline node with byte spans into the rope.
///
/// Text and code spans tile the scanned input. Emphasis is reported
/// separately as [`EmphasisNode`]s overlaying the text, since delimiter runs
/// stay inside the text nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineNode {
    /// Text outside any code span, delimiter characters included.
    Text(Span),
    /// A code span. This is a raw zone - no delimiters are scanned inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
}

impl InlineNode {
    /// Extracts the full span from any inline node variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. } => *full,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmphasisCategory {
    Bold,
    Italic,
    Strikethrough,
}

/// One resolved emphasis span.
///
/// `span` covers the delimiters consumed by the match as well as the
/// emphasized text: `**a**` yields level 2 over all five bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmphasisNode {
    /// Number of delimiter characters consumed on each side.
    pub level: usize,
    pub category: EmphasisCategory,
    pub span: Span,
}

/// Result of scanning and resolving one inline span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedInline {
    pub nodes: Vec<InlineNode>,
    /// Emphasis in the order it was resolved.
    pub emphasis: Vec<EmphasisNode>,
}
