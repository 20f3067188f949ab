/// Blockquote marker knowledge.
///
/// All blockquote syntax lives here rather than in the classifier.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: u8 = b'>';

    /// Strips one blockquote marker from the start of `s`.
    ///
    /// Returns the byte offset where the quoted text begins: after the `>` and
    /// at most one following space. Nested markers are left for the caller to
    /// classify recursively. Returns `None` if `s` does not start with `>`.
    pub fn strip_prefix(s: &str) -> Option<usize> {
        let b = s.as_bytes();
        if b.first() != Some(&Self::PREFIX) {
            return None;
        }
        if b.get(1) == Some(&b' ') {
            Some(2)
        } else {
            Some(1)
        }
    }
}
