/// Paragraph block type (marker struct).
///
/// Paragraphs have no opening delimiter: they are the default leaf block
/// when no other block opener matches. Inline parsing is applied to their
/// joined text.
pub struct Paragraph;

impl Paragraph {
    /// Trailing spaces that force the next line into a new block.
    pub const FORCED_BREAK: &'static str = "  ";
    /// What continuation lines are joined with.
    pub const JOIN: &'static str = " ";
}
