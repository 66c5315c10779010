/// Inline code delimiter.
///
/// A run of N backticks opens code mode and only a run of exactly N closes it.
/// Nothing but the closing run is recognised while code mode is active.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
