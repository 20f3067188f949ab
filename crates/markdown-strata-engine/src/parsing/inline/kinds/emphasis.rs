use serde::Serialize;

use crate::parsing::inline::types::EmphasisCategory;

/// The character of an emphasis delimiter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EmphasisMarker {
    Asterisk,
    Underscore,
    Tilde,
}

impl EmphasisMarker {
    pub const ASTERISK: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    pub const TILDE: u8 = b'~';

    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            Self::ASTERISK => Some(EmphasisMarker::Asterisk),
            Self::UNDERSCORE => Some(EmphasisMarker::Underscore),
            Self::TILDE => Some(EmphasisMarker::Tilde),
            _ => None,
        }
    }

    pub fn byte(self) -> u8 {
        match self {
            EmphasisMarker::Asterisk => Self::ASTERISK,
            EmphasisMarker::Underscore => Self::UNDERSCORE,
            EmphasisMarker::Tilde => Self::TILDE,
        }
    }

    /// The kind of emphasis a matched pair of this marker produces.
    pub fn category(self) -> EmphasisCategory {
        match self {
            EmphasisMarker::Asterisk => EmphasisCategory::Bold,
            EmphasisMarker::Underscore => EmphasisCategory::Italic,
            EmphasisMarker::Tilde => EmphasisCategory::Strikethrough,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_roundtrip() {
        for marker in [
            EmphasisMarker::Asterisk,
            EmphasisMarker::Underscore,
            EmphasisMarker::Tilde,
        ] {
            assert_eq!(EmphasisMarker::from_byte(marker.byte()), Some(marker));
        }
        assert_eq!(EmphasisMarker::from_byte(b'#'), None);
    }

    #[test]
    fn categories() {
        assert_eq!(EmphasisMarker::Asterisk.category(), EmphasisCategory::Bold);
        assert_eq!(EmphasisMarker::Underscore.category(), EmphasisCategory::Italic);
        assert_eq!(
            EmphasisMarker::Tilde.category(),
            EmphasisCategory::Strikethrough
        );
    }
}
