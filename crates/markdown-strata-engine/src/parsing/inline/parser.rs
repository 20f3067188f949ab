use markdown_strata_config::InlineConfig;

use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    delimiter::{Delimiter, DelimiterArray, Flanking},
    kinds::{CodeSpan, EmphasisMarker},
    types::{InlineNode, ParsedInline},
};

/// Scans inline content and resolves its emphasis.
///
/// # Arguments
/// - `base`: Byte offset in the rope where `s` begins (for absolute span positions)
/// - `s`: The text to parse (one line's content, or several joined)
///
/// # Returns
/// Text and code span nodes covering the whole input, plus the resolved
/// emphasis. Delimiters that never match stay literal text.
pub fn parse_inline(base: usize, s: &str, config: &InlineConfig) -> ParsedInline {
    let (nodes, mut delimiters) = scan_inline(base, s, config);
    let mut emphasis = vec![];
    let len = delimiters.len();
    delimiters.process_all_emphases(0..len, &mut emphasis);
    ParsedInline { nodes, emphasis }
}

/// Splits `s` into text and code span nodes and collects its emphasis delimiters.
///
/// Code spans are checked first and suppress delimiter scanning inside them.
pub fn scan_inline(base: usize, s: &str, config: &InlineConfig) -> (Vec<InlineNode>, DelimiterArray) {
    let mut cur = Cursor::new(s, base);
    let mut nodes = vec![];
    let mut delimiters = DelimiterArray::new();
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_parse_code_span(&mut cur) {
            flush_text(&mut nodes, text_start, node.span().start);
            text_start = node.span().end;
            nodes.push(node);
            continue;
        }
        if let Some(delimiter) = try_scan_delimiter(&mut cur, config) {
            delimiters.push(delimiter);
            continue;
        }
        cur.bump_char();
    }

    flush_text(&mut nodes, text_start, cur.pos());
    (nodes, delimiters)
}

/// Attempts to parse a code span starting at the current position.
///
/// The opening backtick run must be closed by a run of the same length.
/// On failure the whole opening run is skipped as text, so a shorter run
/// inside it is never retried as an opener.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    let ticks = cur.run_len(CodeSpan::TICK);
    cur.bump_n(ticks);
    let inner_start = cur.pos();

    while !cur.eof() {
        if cur.peek() == Some(CodeSpan::TICK) {
            let run = cur.run_len(CodeSpan::TICK);
            if run == ticks {
                let inner_end = cur.pos();
                cur.bump_n(run);
                return Some(InlineNode::CodeSpan {
                    full: Span {
                        start,
                        end: cur.pos(),
                    },
                    inner: Span {
                        start: inner_start,
                        end: inner_end,
                    },
                });
            }
            cur.bump_n(run);
            continue;
        }
        cur.bump_char();
    }

    // Not closed: restore and step over the opening run as plain text.
    *cur = saved;
    cur.bump_n(ticks);
    None
}

/// Consumes a run of `*`, `_` or `~` and computes its flanking.
fn try_scan_delimiter(cur: &mut Cursor<'_>, config: &InlineConfig) -> Option<Delimiter> {
    let marker = EmphasisMarker::from_byte(cur.peek()?)?;
    if marker == EmphasisMarker::Tilde && !config.strikethrough {
        return None;
    }

    let run_start = cur.i;
    let run = cur.run_len(marker.byte());
    cur.bump_n(run);

    let flanking = Flanking::compute(marker, cur.char_before(run_start), cur.char_at(cur.i));
    Some(Delimiter::new(marker, run, cur.pos(), flanking))
}
