use xi_rope::Rope;

use super::span::Span;

/// A single physical line of the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes the line ending if present).
    pub span: Span,
    /// The raw line text, line ending included.
    pub text: String,
}

impl LineRef {
    /// The line text without its trailing `\n` / `\r\n`.
    pub fn content(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` so line endings stay inside each span and consecutive
/// spans tile the whole rope.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_tile_the_rope() {
        let rope = Rope::from("a\r\n\tb\n\nc");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].span, Span::new(0, 3));
        assert_eq!(lines[1].span, Span::new(3, 6));
        assert_eq!(lines[2].span, Span::new(6, 7));
        assert_eq!(lines[3].span, Span::new(7, 8));
    }

    #[test]
    fn content_strips_line_endings() {
        let rope = Rope::from("a\r\n\tb\n");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines[0].content(), "a");
        assert_eq!(lines[1].content(), "\tb");
    }
}
