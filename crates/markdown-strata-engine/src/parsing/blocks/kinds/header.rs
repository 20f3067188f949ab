use std::ops::Range;

/// ATX header knowledge (`# Title` through `###### Title`).
pub struct Header;

impl Header {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Recognises an ATX header at the start of `s`.
    ///
    /// Returns the level and the byte range of the header text with the
    /// surrounding whitespace and any closing `#` sequence removed.
    pub fn parse(s: &str) -> Option<(usize, Range<usize>)> {
        let b = s.as_bytes();
        let level = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        match b.get(level) {
            None | Some(b' ') | Some(b'\t') => {}
            _ => return None,
        }

        let mut end = s.trim_end().len();
        let start = (level + (s[level..].len() - s[level..].trim_start().len())).min(end);

        // Closing sequence: trailing #s preceded by whitespace (or filling the text).
        let without_hashes = s[start..end].trim_end_matches(Self::MARKER as char);
        let closing_len = end - start - without_hashes.len();
        if closing_len > 0
            && (without_hashes.is_empty() || without_hashes.ends_with([' ', '\t']))
        {
            end = start + without_hashes.trim_end().len();
        }

        Some((level, start..end))
    }
}
