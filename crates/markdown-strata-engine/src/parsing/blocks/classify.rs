use log::trace;
use markdown_strata_config::BlockConfig;

use crate::parsing::rope::{lines::LineRef, span::Span};

use super::{
    indent::Indent,
    kinds::{BlockQuote, CodeFence, Header, ListMarker, Reference, ThematicBreak},
    types::{Line, LineKind},
};

/// Indentation level from which a line can no longer open a block construct.
pub const CODE_INDENT: isize = 4;

/// Classifies individual lines for the block parsing phase.
///
/// Each line is classified on its own, without reference to surrounding
/// lines. List and quote markers nest: the text after the marker is
/// classified again as the marker's inner line.
#[derive(Debug, Clone)]
pub struct MarkdownLineClassifier {
    max_nesting: usize,
}

impl MarkdownLineClassifier {
    pub fn new(config: &BlockConfig) -> Self {
        Self {
            max_nesting: config.max_nesting,
        }
    }

    /// Classifies a rope line. The line ending is never part of the cursor.
    pub fn classify(&self, lr: &LineRef) -> Line {
        let line = self.classify_text(lr.content(), lr.span.start);
        trace!("line {:?}: {:?}", lr.span, line.kind);
        line
    }

    /// Classifies `s`, whose first byte sits at offset `base` in the source.
    pub fn classify_text(&self, s: &str, base: usize) -> Line {
        self.classify_at_depth(s, base, 0)
    }

    fn classify_at_depth(&self, s: &str, base: usize, depth: usize) -> Line {
        let (indent, idx) = Indent::scan(s);
        let rest = &s[idx..];
        let start = base + idx;
        let cursor = Span::new(start, base + s.len());
        let kind = self.classify_rest(rest, start, &indent, depth);
        Line::new(kind, indent, cursor)
    }

    /// Priority: list marker, quote marker, thematic break, fence, header,
    /// reference definition, text. A full thematic break beats the list
    /// marker it starts with.
    fn classify_rest(&self, rest: &str, start: usize, indent: &Indent, depth: usize) -> LineKind {
        if rest.is_empty() {
            return LineKind::Empty;
        }
        if indent.level() >= CODE_INDENT {
            return LineKind::Text;
        }

        let thematic = ThematicBreak::matches(rest);
        let containers_allowed = depth < self.max_nesting;

        if containers_allowed && !thematic {
            if let Some((list_kind, marker_len)) = ListMarker::parse(rest) {
                let inner = self.inner_line(rest, start, marker_len, depth);
                return LineKind::List(list_kind, Box::new(inner));
            }
            if let Some(offset) = BlockQuote::strip_prefix(rest) {
                let inner = self.classify_at_depth(&rest[offset..], start + offset, depth + 1);
                return LineKind::Quote(Box::new(inner));
            }
        } else if !containers_allowed {
            trace!("nesting limit {} reached at offset {start}", self.max_nesting);
        }

        if thematic {
            return LineKind::ThematicBreak;
        }
        if let Some(fence) = CodeFence::parse(rest) {
            return LineKind::Fence {
                kind: fence.kind,
                info: Span::new(start + fence.info.start, start + fence.info.end),
                length: fence.length,
            };
        }
        if let Some((level, text)) = Header::parse(rest) {
            return LineKind::Header {
                text: Span::new(start + text.start, start + text.end),
                level,
            };
        }
        if let Some((label, definition)) = Reference::parse(rest) {
            return LineKind::ReferenceDefinition { label, definition };
        }
        LineKind::Text
    }

    /// The line after a list marker. One following space belongs to the
    /// marker; anything beyond it is the inner line's own indent.
    fn inner_line(&self, rest: &str, start: usize, marker_len: usize, depth: usize) -> Line {
        let skip = match rest.as_bytes().get(marker_len) {
            Some(b' ') => marker_len + 1,
            _ => marker_len,
        };
        self.classify_at_depth(&rest[skip..], start + skip, depth + 1)
    }
}

impl Default for MarkdownLineClassifier {
    fn default() -> Self {
        Self::new(&BlockConfig::default())
    }
}
