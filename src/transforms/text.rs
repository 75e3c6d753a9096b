//! Chainable text operations (case, trimming, replacing, sorting, ...)

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::constants::word_mode::WORD_DELIMITER;
use crate::error::{Error, Result};

/// Applies `f` to the words of every line, keeping the lines apart
fn on_words<F>(text: &str, f: F) -> String
where
    F: Fn(&mut Vec<&str>),
{
    text.split('\n')
        .map(|line| {
            let mut words: Vec<&str> = line.split(WORD_DELIMITER).collect();
            f(&mut words);
            words.join(WORD_DELIMITER)
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// Rotates ASCII letters by 13 positions
///
/// # Examples
/// ```
/// use texttools::transforms::text::rot13;
///
/// assert_eq!(rot13("Hello, World!"), "Uryyb, Jbeyq!");
/// ```
pub fn rot13(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'a'..='z' => (((c as u8 - b'a') + 13) % 26 + b'a') as char,
            'A'..='Z' => (((c as u8 - b'A') + 13) % 26 + b'A') as char,
            _ => c,
        })
        .collect()
}

/// Reverses the text grapheme by grapheme, or the order of the words
/// of each line when `operate_on_word` is set
pub fn reverse(text: &str, operate_on_word: bool) -> String {
    if operate_on_word {
        on_words(text, |words| words.reverse())
    } else {
        text.graphemes(true).rev().collect()
    }
}

/// Replaces every match of the `pattern` regular expression.
/// Capture groups can be referenced in the replacement as `$1`, `${name}`...
pub fn replace(text: &str, pattern: &str, replacement: &str) -> Result<String> {
    let regex =
        Regex::new(pattern).map_err(|e| Error::Msg(format!("invalid pattern \"{}\" : {}", pattern, e)))?;
    Ok(regex.replace_all(text, replacement).into_owned())
}

/// Removes every match of the `pattern` regular expression
pub fn remove(text: &str, pattern: &str) -> Result<String> {
    replace(text, pattern, "")
}

pub fn add_before(text: &str, string_to_add: &str) -> String {
    format!("{}{}", string_to_add, text)
}

pub fn add_after(text: &str, string_to_add: &str) -> String {
    format!("{}{}", text, string_to_add)
}

/// Strips surrounding whitespace, or any of the characters in
/// `chars_to_remove` when given and not empty
pub fn trim(text: &str, chars_to_remove: Option<&str>) -> String {
    match chars_to_remove.filter(|chars| !chars.is_empty()) {
        Some(chars) => text.trim_matches(|c: char| chars.contains(c)).to_string(),
        None => text.trim().to_string(),
    }
}

/// Upper-cases the first character and lower-cases the rest
///
/// # Examples
/// ```
/// use texttools::transforms::text::title_case;
///
/// assert_eq!(title_case("hello WORLD"), "Hello world");
/// ```
pub fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

pub fn lower_case(text: &str) -> String {
    text.to_lowercase()
}

pub fn upper_case(text: &str) -> String {
    text.to_uppercase()
}

/// Sorts the characters of the text, or the words of each line when
/// `operate_on_word` is set
///
/// # Examples
/// ```
/// use texttools::transforms::text::sort;
///
/// assert_eq!(sort("dcba", false), "abcd");
/// assert_eq!(sort("cb a", true), "a cb");
/// ```
pub fn sort(text: &str, operate_on_word: bool) -> String {
    if operate_on_word {
        on_words(text, |words| words.sort_unstable())
    } else {
        let mut chars: Vec<char> = text.chars().collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    }
}

/// Lower-cases the text and replaces every whitespace character with `-`
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}
