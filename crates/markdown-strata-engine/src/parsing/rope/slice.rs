use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}

/// Extracts text for a span, truncated to `max` chars with a `...` suffix.
///
/// Used for human-readable snapshot output.
pub fn preview(rope: &Rope, sp: Span, max: usize) -> String {
    let s = slice_to_string(rope, sp);
    if s.chars().count() <= max {
        return s;
    }
    let mut out: String = s.chars().take(max).collect();
    out.push_str("...");
    out
}
