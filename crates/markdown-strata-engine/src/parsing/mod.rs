pub mod blocks;
pub mod inline;
pub mod rope;
pub mod snapshot;

use log::debug;
use markdown_strata_config::{BlockConfig, InlineConfig};
use xi_rope::Rope;

use blocks::{Line, LineKind, MarkdownLineClassifier};
use inline::ParsedInline;
use rope::{lines_with_spans, slice::slice_to_string, span::Span};

/// Classifies every line of the rope.
pub fn classify_lines(rope: &Rope, config: &BlockConfig) -> Vec<Line> {
    let classifier = MarkdownLineClassifier::new(config);
    let lines: Vec<Line> = lines_with_spans(rope)
        .map(|lr| classifier.classify(&lr))
        .collect();
    debug!("classified {} lines ({} bytes)", lines.len(), rope.len());
    lines
}

/// Inline-parses the text of a line: the content of a text line or the text
/// of a header, looking through any list/quote nesting. Other kinds have no
/// inline content.
pub fn parse_inline_for_line(rope: &Rope, line: &Line, config: &InlineConfig) -> ParsedInline {
    let Some(span) = inline_span(line) else {
        return ParsedInline::default();
    };
    let s = slice_to_string(rope, span);
    inline::parse_inline(span.start, &s, config)
}

fn inline_span(line: &Line) -> Option<Span> {
    let leaf = line.innermost();
    match leaf.kind {
        LineKind::Text => Some(leaf.cursor),
        LineKind::Header { text, .. } => Some(text),
        _ => None,
    }
}
