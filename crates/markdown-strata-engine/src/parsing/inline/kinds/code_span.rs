/// Code span knowledge.
///
/// Code spans are raw zones: no delimiters are scanned inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
