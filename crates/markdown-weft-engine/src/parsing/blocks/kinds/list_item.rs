use crate::parsing::text::{DIGITS, TextSlice, WHITESPACE};

/// List item markers: `- `, `* `, `+ ` bullets and `N. ` numbers.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [&'static str; 3] = ["+ ", "* ", "- "];
    pub const NUMBER_SUFFIX: &'static str = ". ";
    /// Leading whitespace characters per indent level. A tab counts as one.
    pub const INDENT_WIDTH: usize = 4;

    /// Indent level of a raw line: leading whitespace count / 4, truncated.
    pub fn indent_level(line: TextSlice<'_>) -> usize {
        line.count_any(WHITESPACE, 0) / Self::INDENT_WIDTH
    }

    pub fn is_bullet_line(line: TextSlice<'_>) -> bool {
        line.trim_front_any(WHITESPACE).starts_with_any(&Self::BULLETS)
    }

    /// The number on an ordered item line, if it is one.
    ///
    /// Digits must be followed directly by `. `. Absurdly long numbers
    /// saturate instead of failing.
    pub fn ordered_number(line: TextSlice<'_>) -> Option<u64> {
        let line = line.trim_front_any(WHITESPACE);
        let digits = line.count_any(DIGITS, 0);
        if digits == 0 || !line.contains_at(Self::NUMBER_SUFFIX, digits) {
            return None;
        }
        let number = line.as_str().as_bytes()[..digits]
            .iter()
            .fold(0u64, |n, d| {
                n.saturating_mul(10).saturating_add(u64::from(d - b'0'))
            });
        Some(number)
    }

    /// True for any line that opens a list item.
    pub fn is_item_line(line: TextSlice<'_>) -> bool {
        Self::is_bullet_line(line) || Self::ordered_number(line).is_some()
    }

    /// Drops indent and a single bullet.
    pub fn strip_bullet(line: TextSlice<'_>) -> TextSlice<'_> {
        let line = line.trim_front_any(WHITESPACE);
        Self::BULLETS
            .iter()
            .find(|b| line.starts_with(b))
            .map_or(line, |b| line.trim_front_literal(b))
    }

    /// Drops indent, the digits and the `. ` suffix.
    pub fn strip_number(line: TextSlice<'_>) -> TextSlice<'_> {
        line.trim_front_any(WHITESPACE)
            .trim_front_any(DIGITS)
            .trim_front_literal(Self::NUMBER_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("- a", 0)]
    #[case("   - a", 0)]
    #[case("    - a", 1)]
    #[case("       - a", 1)]
    #[case("        - a", 2)]
    #[case("\t\t\t\t- a", 1)]
    fn indent_levels(#[case] line: &str, #[case] level: usize) {
        assert_eq!(ListItem::indent_level(TextSlice::new(line)), level);
    }

    #[rstest]
    #[case("1. one", Some(1))]
    #[case("  42. deep", Some(42))]
    #[case("007. bond", Some(7))]
    #[case("99999999999999999999999. big", Some(u64::MAX))]
    #[case("1.no space", None)]
    #[case("x. b", None)]
    #[case(". b", None)]
    fn ordered_numbers(#[case] line: &str, #[case] expected: Option<u64>) {
        assert_eq!(ListItem::ordered_number(TextSlice::new(line)), expected);
    }

    #[test]
    fn item_lines() {
        for line in ["- a", "* a", "+ a", "  - a", "3. c"] {
            assert!(ListItem::is_item_line(TextSlice::new(line)), "{line}");
        }
        for line in ["-a", "---", "**bold**", "3.14", ""] {
            assert!(!ListItem::is_item_line(TextSlice::new(line)), "{line}");
        }
    }

    #[test]
    fn strip_takes_one_bullet_only() {
        assert_eq!(ListItem::strip_bullet(TextSlice::new("  - - nested")), "- nested");
        assert_eq!(ListItem::strip_bullet(TextSlice::new("* > quote")), "> quote");
    }

    #[test]
    fn strip_number_prefix() {
        assert_eq!(ListItem::strip_number(TextSlice::new("  12. twelve")), "twelve");
    }
}
