pub struct ThematicBreak;

impl ThematicBreak {
    pub const MIN_COUNT: usize = 3;

    /// True if `s` is a thematic break: three or more of the same `*`, `-` or
    /// `_`, optionally separated by spaces or tabs, and nothing else.
    pub fn matches(s: &str) -> bool {
        let mut marker = None;
        let mut count = 0;
        for b in s.bytes() {
            match b {
                b' ' | b'\t' => {}
                b'*' | b'-' | b'_' => {
                    if *marker.get_or_insert(b) != b {
                        return false;
                    }
                    count += 1;
                }
                _ => return false,
            }
        }
        count >= Self::MIN_COUNT
    }
}
