use serde::Serialize;

/// One whitespace character of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IndentUnit {
    Space,
    Tab,
}

impl IndentUnit {
    /// Width this unit contributes to an indent level.
    pub const fn width(self) -> isize {
        match self {
            IndentUnit::Space => 1,
            IndentUnit::Tab => 4,
        }
    }

    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b' ' => Some(IndentUnit::Space),
            b'\t' => Some(IndentUnit::Tab),
            _ => None,
        }
    }
}

/// A run of spaces and tabs.
///
/// Keeps both the total width (the `level`) and the composition. Two spaces
/// followed by a tab have a level of `1 + 1 + 4 = 6` and a composition of
/// `[Space, Space, Tab]`.
///
/// `level` is signed: [`Indent::trim_front`] subtracts the requested amount
/// verbatim, which can take it below zero or out of step with the
/// composition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Indent {
    level: isize,
    composition: Vec<IndentUnit>,
}

impl Indent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the leading spaces and tabs of `s`.
    ///
    /// Returns the indent and the byte offset where the rest of the line starts.
    pub fn scan(s: &str) -> (Self, usize) {
        let mut indent = Self::new();
        let mut idx = 0;
        for &b in s.as_bytes() {
            let Some(unit) = IndentUnit::from_byte(b) else {
                break;
            };
            indent.append(unit);
            idx += 1;
        }
        (indent, idx)
    }

    pub fn level(&self) -> isize {
        self.level
    }

    pub fn composition(&self) -> &[IndentUnit] {
        &self.composition
    }

    pub fn is_empty(&self) -> bool {
        self.composition.is_empty()
    }

    pub fn append(&mut self, unit: IndentUnit) {
        self.composition.push(unit);
        self.level += unit.width();
    }

    /// Removes `amount` of level from the front.
    ///
    /// Whole leading units are dropped until their widths add up to at least
    /// `amount`, but `level` is reduced by exactly `amount`. Trimming 3 from a
    /// single tab leaves an empty composition with a level of 1.
    pub fn trim_front(&mut self, amount: isize) {
        let mut removed = 0;
        let mut idx = 0;
        while idx < self.composition.len() && removed < amount {
            removed += self.composition[idx].width();
            idx += 1;
        }
        self.composition.drain(..idx);
        self.level -= amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::IndentUnit::{Space, Tab};

    fn indent_of(units: &[IndentUnit]) -> Indent {
        let mut indent = Indent::new();
        for &u in units {
            indent.append(u);
        }
        indent
    }

    #[test]
    fn mixed_units_sum_widths() {
        let indent = indent_of(&[Space, Tab, Space]);
        assert_eq!(indent.level(), 6);
        assert_eq!(indent.composition(), &[Space, Tab, Space]);
    }

    #[test]
    fn scan_stops_at_first_non_whitespace() {
        let (indent, idx) = Indent::scan("  \t- item");
        assert_eq!(idx, 3);
        assert_eq!(indent.level(), 6);
        assert_eq!(indent.composition(), &[Space, Space, Tab]);
    }

    #[test]
    fn scan_without_indent() {
        let (indent, idx) = Indent::scan("text");
        assert_eq!(idx, 0);
        assert!(indent.is_empty());
        assert_eq!(indent.level(), 0);
    }

    #[rstest]
    #[case(&[Space, Space, Tab], 2, &[Tab], 4)]
    #[case(&[Tab, Space], 4, &[Space], 1)]
    #[case(&[Space, Tab], 0, &[Space, Tab], 5)]
    fn trim_on_unit_boundary_keeps_invariant(
        #[case] units: &[IndentUnit],
        #[case] amount: isize,
        #[case] remaining: &[IndentUnit],
        #[case] level: isize,
    ) {
        let mut indent = indent_of(units);
        indent.trim_front(amount);
        assert_eq!(indent.composition(), remaining);
        assert_eq!(indent.level(), level);
    }

    #[test]
    fn trim_inside_tab_diverges_from_composition() {
        let mut indent = indent_of(&[Tab]);
        indent.trim_front(3);
        assert!(indent.composition().is_empty());
        assert_eq!(indent.level(), 1);
    }

    #[test]
    fn trim_past_level_goes_negative() {
        let mut indent = indent_of(&[Space, Space]);
        indent.trim_front(5);
        assert!(indent.is_empty());
        assert_eq!(indent.level(), -3);
    }

    #[test]
    fn trim_removes_whole_unit_crossing_amount() {
        let mut indent = indent_of(&[Space, Tab, Space]);
        indent.trim_front(2);
        assert_eq!(indent.composition(), &[Space]);
        assert_eq!(indent.level(), 4);
    }
}
