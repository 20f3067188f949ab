use markdown_strata_config::InlineConfig;
use xi_rope::Rope;

use crate::parsing::{
    blocks::{Line, LineKind},
    parse_inline_for_line,
    rope::preview,
};

/// Validates classifier and inline output invariants.
///
/// Asserts that:
/// - Every cursor is within rope bounds
/// - An inner line's cursor lies inside its container's cursor
/// - Indent composition never exceeds the bytes before the cursor
/// - Emphasis nodes lie inside the line and have a positive level
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, lines: &[Line], config: &InlineConfig) {
    for line in lines {
        check_line(rope, line);

        let cursor = line.cursor;
        for e in parse_inline_for_line(rope, line, config).emphasis {
            assert!(e.level > 0, "emphasis with zero level: {e:?}");
            assert!(
                e.span.start < e.span.end && e.span.start >= cursor.start && e.span.end <= cursor.end,
                "emphasis {:?} outside line {:?} ({:?})",
                e.span,
                cursor,
                preview(rope, cursor, 40)
            );
        }
    }
}

fn check_line(rope: &Rope, line: &Line) {
    let rope_len = rope.len();
    let c = line.cursor;
    assert!(
        c.start <= c.end && c.end <= rope_len,
        "line cursor out of bounds: {c:?} (rope len: {rope_len})"
    );
    assert!(
        line.indent.composition().len() <= c.start,
        "indent of {} units before cursor {c:?}",
        line.indent.composition().len()
    );

    if let LineKind::List(_, inner) | LineKind::Quote(inner) = &line.kind {
        assert!(
            inner.cursor.start >= c.start && inner.cursor.end == c.end,
            "inner cursor {:?} not inside container cursor {c:?} ({:?})",
            inner.cursor,
            preview(rope, c, 40)
        );
        check_line(rope, inner);
    }
}
