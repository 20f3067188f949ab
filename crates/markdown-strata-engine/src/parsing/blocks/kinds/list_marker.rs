use crate::parsing::blocks::types::{BulletKind, ListKind, NumberKind};

/// List item marker knowledge: bullets `*` `-` `+` and ordinals `1.` / `1)`.
pub struct ListMarker;

impl ListMarker {
    /// Longest ordinal accepted, in digits.
    pub const MAX_DIGITS: usize = 9;

    /// Recognises a list marker at the start of `s` (indentation already removed).
    ///
    /// Returns the kind and the marker's byte length. The marker must be
    /// followed by a space, a tab or the end of the line.
    pub fn parse(s: &str) -> Option<(ListKind, usize)> {
        let b = s.as_bytes();
        let (kind, len) = match *b.first()? {
            b'*' => (ListKind::Bullet(BulletKind::Star), 1),
            b'-' => (ListKind::Bullet(BulletKind::Hyphen), 1),
            b'+' => (ListKind::Bullet(BulletKind::Plus), 1),
            b'0'..=b'9' => Self::parse_ordinal(b)?,
            _ => return None,
        };
        match b.get(len) {
            None | Some(b' ') | Some(b'\t') => Some((kind, len)),
            _ => None,
        }
    }

    fn parse_ordinal(b: &[u8]) -> Option<(ListKind, usize)> {
        let digits = b.iter().take_while(|c| c.is_ascii_digit()).count();
        if digits > Self::MAX_DIGITS {
            return None;
        }
        let style = match b.get(digits)? {
            b'.' => NumberKind::Dot,
            b')' => NumberKind::Paren,
            _ => return None,
        };
        let ordinal = b[..digits]
            .iter()
            .fold(0u32, |acc, c| acc * 10 + u32::from(c - b'0'));
        Some((ListKind::Numbered(style, ordinal), digits + 1))
    }
}
