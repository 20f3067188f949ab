use serde::Serialize;

use crate::parsing::rope::span::Span;

use super::{indent::Indent, kinds::FenceKind};

/// Glyph class of a bullet list marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BulletKind {
    /// `*`
    Star,
    /// `-`
    Hyphen,
    /// `+`
    Plus,
}

/// Delimiter style of an ordered list marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NumberKind {
    /// `1.`
    Dot,
    /// `1)`
    Paren,
}

/// The marker that opens a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    Bullet(BulletKind),
    Numbered(NumberKind, u32),
}

impl ListKind {
    /// Textual width of the marker.
    ///
    /// A bullet is 1. A numbered marker is 2 for a one-digit ordinal and one
    /// more for each additional digit, so `7.` is 2 and `23)` is 3.
    pub fn width(&self) -> usize {
        match *self {
            ListKind::Bullet(_) => 1,
            ListKind::Numbered(_, mut value) => {
                let mut width = 2;
                while value > 9 {
                    value /= 10;
                    width += 1;
                }
                width
            }
        }
    }

    /// True when a line with marker `other` continues a list opened with `self`.
    ///
    /// Ordinals are ignored; bullets must share a glyph and numbered markers a
    /// delimiter style.
    pub fn is_continuation_of(&self, other: &ListKind) -> bool {
        match (self, other) {
            (ListKind::Bullet(l), ListKind::Bullet(r)) => l == r,
            (ListKind::Numbered(l, _), ListKind::Numbered(r, _)) => l == r,
            _ => false,
        }
    }
}

/// A `[label]: destination "title"` definition found on one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceDefinition {
    pub destination: String,
    pub title: Option<String>,
}

/// What a single line is, before any block assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LineKind {
    /// A list marker followed by the rest of the line.
    List(ListKind, Box<Line>),
    /// A `>` marker followed by the rest of the line.
    Quote(Box<Line>),
    Text,
    /// An ATX header; `text` excludes the `#` markers and surrounding whitespace.
    Header { text: Span, level: usize },
    /// An opening or closing code fence; `length` is the number of fence characters.
    Fence {
        kind: FenceKind,
        info: Span,
        length: usize,
    },
    ThematicBreak,
    Empty,
    ReferenceDefinition {
        label: String,
        definition: ReferenceDefinition,
    },
}

impl LineKind {
    pub fn is_empty(&self) -> bool {
        matches!(self, LineKind::Empty)
    }
}

/// A classified line: its kind, its leading indentation and the text after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub kind: LineKind,
    pub indent: Indent,
    /// Text of the line. Starts after the indent unless [`Line::restore_indent`]
    /// has been called.
    pub cursor: Span,
}

impl Line {
    pub fn new(kind: LineKind, indent: Indent, cursor: Span) -> Self {
        Self {
            kind,
            indent,
            cursor,
        }
    }

    /// Removes `amount` of indentation level, see [`Indent::trim_front`].
    pub fn remove_indent(&mut self, amount: isize) {
        self.indent.trim_front(amount);
    }

    /// Moves the cursor start back over the indentation characters.
    ///
    /// Each unit of the composition is one byte of source, whatever its width.
    /// The cursor must currently exclude the indent.
    pub fn restore_indent(&mut self) {
        self.cursor.extend_start(self.indent.composition().len());
    }

    /// Inverse of [`Line::restore_indent`].
    pub fn strip_indent(&mut self) {
        self.cursor.shrink_start(self.indent.composition().len());
    }

    /// The line at the bottom of any list/quote nesting.
    pub fn innermost(&self) -> &Line {
        let mut line = self;
        while let LineKind::List(_, inner) | LineKind::Quote(inner) = &line.kind {
            line = inner.as_ref();
        }
        line
    }

    /// Number of list/quote containers wrapping the innermost line.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut line = self;
        while let LineKind::List(_, inner) | LineKind::Quote(inner) = &line.kind {
            depth += 1;
            line = inner.as_ref();
        }
        depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::indent::IndentUnit;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(ListKind::Bullet(BulletKind::Hyphen), 1)]
    #[case(ListKind::Numbered(NumberKind::Dot, 0), 2)]
    #[case(ListKind::Numbered(NumberKind::Dot, 7), 2)]
    #[case(ListKind::Numbered(NumberKind::Paren, 23), 3)]
    #[case(ListKind::Numbered(NumberKind::Dot, 100), 4)]
    #[case(ListKind::Numbered(NumberKind::Dot, 123_456_789), 10)]
    fn list_kind_width(#[case] kind: ListKind, #[case] width: usize) {
        assert_eq!(kind.width(), width);
    }

    #[rstest]
    #[case(ListKind::Numbered(NumberKind::Dot, 1), ListKind::Numbered(NumberKind::Dot, 99), true)]
    #[case(ListKind::Numbered(NumberKind::Dot, 1), ListKind::Numbered(NumberKind::Paren, 1), false)]
    #[case(ListKind::Bullet(BulletKind::Star), ListKind::Bullet(BulletKind::Star), true)]
    #[case(ListKind::Bullet(BulletKind::Star), ListKind::Bullet(BulletKind::Plus), false)]
    #[case(ListKind::Bullet(BulletKind::Hyphen), ListKind::Numbered(NumberKind::Dot, 1), false)]
    fn list_kind_continuation(#[case] a: ListKind, #[case] b: ListKind, #[case] expected: bool) {
        assert_eq!(a.is_continuation_of(&b), expected);
        assert_eq!(b.is_continuation_of(&a), expected);
    }

    #[test]
    fn continuation_is_not_structural_equality() {
        let a = ListKind::Numbered(NumberKind::Dot, 1);
        let b = ListKind::Numbered(NumberKind::Dot, 2);
        assert!(a.is_continuation_of(&b));
        assert_ne!(a, b);
    }

    fn indented_text_line() -> Line {
        // "\t  text" at offset 100: indent occupies bytes 100..103
        let (indent, idx) = Indent::scan("\t  text");
        Line::new(LineKind::Text, indent, Span::new(100 + idx, 107))
    }

    #[test]
    fn restore_indent_moves_one_byte_per_unit() {
        let mut line = indented_text_line();
        assert_eq!(line.indent.level(), 6);
        line.restore_indent();
        assert_eq!(line.cursor, Span::new(100, 107));
        line.strip_indent();
        assert_eq!(line.cursor, Span::new(103, 107));
    }

    #[test]
    fn remove_indent_then_restore_uses_remaining_units() {
        let mut line = indented_text_line();
        line.remove_indent(4);
        assert_eq!(line.indent.composition(), &[IndentUnit::Space, IndentUnit::Space]);
        line.restore_indent();
        assert_eq!(line.cursor, Span::new(101, 107));
    }

    #[test]
    fn innermost_and_depth_follow_nesting() {
        let leaf = Line::new(LineKind::Text, Indent::new(), Span::new(4, 8));
        let quote = Line::new(LineKind::Quote(Box::new(leaf.clone())), Indent::new(), Span::new(2, 8));
        let list = Line::new(
            LineKind::List(ListKind::Bullet(BulletKind::Plus), Box::new(quote)),
            Indent::new(),
            Span::new(0, 8),
        );
        assert_eq!(list.depth(), 2);
        assert_eq!(list.innermost(), &leaf);
        assert_eq!(leaf.depth(), 0);
    }
}
