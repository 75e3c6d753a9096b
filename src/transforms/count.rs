//! Scalar operations counting parts of the text

use unicode_general_category::{get_general_category, GeneralCategory};

/// Counts the pieces obtained by splitting the text on single spaces
pub fn count_words(text: &str) -> usize {
    text.split(' ').count()
}

/// Counts the lines of the text, a trailing newline does not start a new line
pub fn count_lines(text: &str) -> usize {
    text.lines().count()
}

/// Whether the character is neither whitespace nor printable
/// (control, format, private use or unassigned code points)
fn is_non_printable(c: char) -> bool {
    !c.is_whitespace()
        && matches!(
            get_general_category(c),
            GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
        )
}

/// Counts the characters of the text
///
/// # Arguments
/// * `exclude_spaces` - Skip whitespace characters
/// * `exclude_non_printable` - Skip control, format and unassigned characters
///
/// # Examples
/// ```
/// use texttools::transforms::count::count_characters;
///
/// assert_eq!(count_characters("a b\u{1b}", false, true), 3);
/// assert_eq!(count_characters("a b\u{1b}", true, false), 3);
/// ```
pub fn count_characters(text: &str, exclude_spaces: bool, exclude_non_printable: bool) -> usize {
    text.chars()
        .filter(|c| !(exclude_spaces && c.is_whitespace()))
        .filter(|c| !(exclude_non_printable && is_non_printable(*c)))
        .count()
}
