use serde::Serialize;

use super::kinds::EmphasisMarker;

/// One maximal run of a single emphasis character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Delimiter {
    pub marker: EmphasisMarker,
    pub can_open: bool,
    pub can_close: bool,
    /// Number of characters left in the run. Always positive.
    pub run: usize,
    /// Absolute offset just after the run. Spans are computed backward from here.
    pub position: usize,
}

impl Delimiter {
    pub fn new(marker: EmphasisMarker, run: usize, position: usize, flanking: Flanking) -> Self {
        Self {
            marker,
            can_open: flanking.can_open,
            can_close: flanking.can_close,
            run,
            position,
        }
    }
}

/// Open/close eligibility of a delimiter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flanking {
    pub can_open: bool,
    pub can_close: bool,
}

impl Flanking {
    /// Computes eligibility from the chars around the run.
    ///
    /// `before`/`after` are `None` at the edges of the scanned text, which
    /// count as whitespace. `_` cannot open or close inside a word.
    pub fn compute(marker: EmphasisMarker, before: Option<char>, after: Option<char>) -> Self {
        let before_ws = before.is_none_or(char::is_whitespace);
        let after_ws = after.is_none_or(char::is_whitespace);
        let before_punct = before.is_some_and(is_punctuation);
        let after_punct = after.is_some_and(is_punctuation);

        let left = !after_ws && (!after_punct || before_ws || before_punct);
        let right = !before_ws && (!before_punct || after_ws || after_punct);

        match marker {
            EmphasisMarker::Underscore => Self {
                can_open: left && (!right || before_punct),
                can_close: right && (!left || after_punct),
            },
            EmphasisMarker::Asterisk | EmphasisMarker::Tilde => Self {
                can_open: left,
                can_close: right,
            },
        }
    }
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || (!c.is_alphanumeric() && !c.is_whitespace() && !c.is_control())
}

/// The ordered delimiter slots of one inline span.
///
/// A slot is emptied once its delimiter is fully consumed or discarded, so
/// indices stay stable while emphasis is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DelimiterArray {
    pub(crate) slots: Vec<Option<Delimiter>>,
}

impl DelimiterArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, delimiter: Delimiter) {
        self.slots.push(Some(delimiter));
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Delimiter> {
        self.slots.get(idx)?.as_ref()
    }

    pub fn slots(&self) -> &[Option<Delimiter>] {
        &self.slots
    }

    /// Delimiters not yet consumed or discarded, with their slot index.
    pub fn remaining(&self) -> impl Iterator<Item = (usize, &Delimiter)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.as_ref().map(|d| (i, d)))
    }
}

impl From<Vec<Option<Delimiter>>> for DelimiterArray {
    fn from(slots: Vec<Option<Delimiter>>) -> Self {
        Self { slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const OPEN: Flanking = Flanking {
        can_open: true,
        can_close: false,
    };
    const CLOSE: Flanking = Flanking {
        can_open: false,
        can_close: true,
    };
    const BOTH: Flanking = Flanking {
        can_open: true,
        can_close: true,
    };
    const NEITHER: Flanking = Flanking {
        can_open: false,
        can_close: false,
    };

    #[rstest]
    #[case(EmphasisMarker::Asterisk, None, Some('a'), OPEN)]
    #[case(EmphasisMarker::Asterisk, Some('a'), None, CLOSE)]
    #[case(EmphasisMarker::Asterisk, Some('a'), Some('b'), BOTH)]
    #[case(EmphasisMarker::Asterisk, Some(' '), Some(' '), NEITHER)]
    #[case(EmphasisMarker::Asterisk, None, None, NEITHER)]
    #[case(EmphasisMarker::Asterisk, Some('a'), Some('"'), CLOSE)]
    #[case(EmphasisMarker::Asterisk, Some('"'), Some('a'), OPEN)]
    #[case(EmphasisMarker::Asterisk, Some('('), Some('"'), BOTH)]
    #[case(EmphasisMarker::Tilde, Some('a'), Some('b'), BOTH)]
    #[case(EmphasisMarker::Underscore, Some('a'), Some('b'), NEITHER)]
    #[case(EmphasisMarker::Underscore, None, Some('a'), OPEN)]
    #[case(EmphasisMarker::Underscore, Some('a'), Some('.'), CLOSE)]
    #[case(EmphasisMarker::Underscore, Some('('), Some('a'), OPEN)]
    #[case(EmphasisMarker::Underscore, Some('.'), Some('.'), BOTH)]
    fn flanking_rules(
        #[case] marker: EmphasisMarker,
        #[case] before: Option<char>,
        #[case] after: Option<char>,
        #[case] expected: Flanking,
    ) {
        assert_eq!(Flanking::compute(marker, before, after), expected);
    }

    #[test]
    fn remaining_skips_empty_slots() {
        let d = Delimiter::new(EmphasisMarker::Asterisk, 1, 1, OPEN);
        let array = DelimiterArray::from(vec![Some(d), None, Some(d)]);
        let idx: Vec<_> = array.remaining().map(|(i, _)| i).collect();
        assert_eq!(idx, vec![0, 2]);
        assert_eq!(array.len(), 3);
        assert_eq!(array.get(1), None);
        assert_eq!(array.get(7), None);
    }
}
