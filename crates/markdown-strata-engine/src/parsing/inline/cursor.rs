/// A cursor for byte-by-byte inline scanning with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position
/// in the original rope (via `base` offset).
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Base offset in the rope (added to local index for absolute positions).
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes. Does not bounds check.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances past one whole char, so `i` stays on a char boundary.
    pub fn bump_char(&mut self) {
        if let Some(c) = self.s.get(self.i..).and_then(|rest| rest.chars().next()) {
            self.i += c.len_utf8();
        } else {
            self.i += 1;
        }
    }

    /// Length of the run of byte `b` starting at the current position.
    pub fn run_len(&self, b: u8) -> usize {
        self.s.as_bytes()[self.i.min(self.s.len())..]
            .iter()
            .take_while(|&&c| c == b)
            .count()
    }

    /// The char ending right before local index `at`, if any.
    pub fn char_before(&self, at: usize) -> Option<char> {
        self.s.get(..at)?.chars().next_back()
    }

    /// The char starting at local index `at`, if any.
    pub fn char_at(&self, at: usize) -> Option<char> {
        self.s.get(at..)?.chars().next()
    }
}
