use markdown_strata_config::InlineConfig;
use serde::Serialize;
use xi_rope::Rope;

use crate::parsing::{
    blocks::{Line, LineKind, ListKind},
    inline::EmphasisNode,
    parse_inline_for_line,
};

/// Snapshot of classified lines for testing with `insta`.
#[derive(Serialize)]
pub struct Snap {
    pub lines: Vec<LineSnap>,
}

/// Snapshot of a single line, flattened through its containers.
#[derive(Serialize)]
pub struct LineSnap {
    /// Kind of the innermost line (e.g. "Text", "Header(2)", "Fence(Tildes)").
    pub kind: String,
    /// Container path from outermost to innermost (e.g. ["Quote", "List(Bullet(Star))"]).
    pub containers: Vec<String>,
    /// Cursor of the innermost line as (start, end).
    pub span: (usize, usize),
    /// Indent level of the outer line.
    pub indent: isize,
    /// Resolved emphasis of the innermost line's text.
    pub emphasis: Vec<EmphasisSnap>,
}

#[derive(Serialize)]
pub struct EmphasisSnap {
    pub kind: String,
    pub level: usize,
    pub span: (usize, usize),
}

/// Converts classified lines into a serializable snapshot.
pub fn normalize(rope: &Rope, lines: &[Line], config: &InlineConfig) -> Snap {
    let lines = lines
        .iter()
        .map(|line| {
            let mut containers = vec![];
            let mut leaf = line;
            loop {
                match &leaf.kind {
                    LineKind::List(kind, inner) => {
                        containers.push(format!("List({})", list_label(kind)));
                        leaf = inner.as_ref();
                    }
                    LineKind::Quote(inner) => {
                        containers.push("Quote".to_string());
                        leaf = inner.as_ref();
                    }
                    _ => break,
                }
            }

            let emphasis = parse_inline_for_line(rope, line, config)
                .emphasis
                .iter()
                .map(emphasis_snap)
                .collect();

            LineSnap {
                kind: kind_label(&leaf.kind),
                containers,
                span: (leaf.cursor.start, leaf.cursor.end),
                indent: line.indent.level(),
                emphasis,
            }
        })
        .collect();

    Snap { lines }
}

fn list_label(kind: &ListKind) -> String {
    match kind {
        ListKind::Bullet(b) => format!("Bullet({b:?})"),
        ListKind::Numbered(style, n) => format!("Numbered({style:?} {n})"),
    }
}

fn kind_label(kind: &LineKind) -> String {
    match kind {
        LineKind::List(kind, _) => format!("List({})", list_label(kind)),
        LineKind::Quote(_) => "Quote".to_string(),
        LineKind::Text => "Text".to_string(),
        LineKind::Header { level, .. } => format!("Header({level})"),
        LineKind::Fence { kind, length, .. } => format!("Fence({kind:?} {length})"),
        LineKind::ThematicBreak => "ThematicBreak".to_string(),
        LineKind::Empty => "Empty".to_string(),
        LineKind::ReferenceDefinition { label, .. } => format!("Reference({label})"),
    }
}

fn emphasis_snap(e: &EmphasisNode) -> EmphasisSnap {
    EmphasisSnap {
        kind: format!("{:?}", e.category),
        level: e.level,
        span: (e.span.start, e.span.end),
    }
}
