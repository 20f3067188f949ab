use std::ops::Range;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn char(self) -> u8 {
        match self {
            FenceKind::Backticks => b'`',
            FenceKind::Tildes => b'~',
        }
    }
}

/// A fence line: its kind, run length and info string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen {
    pub kind: FenceKind,
    /// Number of fence characters.
    pub length: usize,
    /// Byte range of the trimmed info string, relative to the parsed text.
    pub info: Range<usize>,
}

pub struct CodeFence;

impl CodeFence {
    /// Minimum run of fence characters.
    pub const MIN_LENGTH: usize = 3;

    /// Recognises a fence at the start of `s` (indentation already removed).
    pub fn parse(s: &str) -> Option<FenceOpen> {
        let b = s.as_bytes();
        let kind = match b.first()? {
            b'`' => FenceKind::Backticks,
            b'~' => FenceKind::Tildes,
            _ => return None,
        };
        let length = b.iter().take_while(|&&c| c == kind.char()).count();
        if length < Self::MIN_LENGTH {
            return None;
        }

        let rest = &s[length..];
        let info_start = length + (rest.len() - rest.trim_start().len());
        let info_end = length + rest.trim_end().len();
        let info = if info_start < info_end {
            info_start..info_end
        } else {
            length..length
        };

        // A backtick fence's info string may not contain backticks.
        if kind == FenceKind::Backticks && s[info.clone()].contains('`') {
            return None;
        }

        Some(FenceOpen { kind, length, info })
    }
}
