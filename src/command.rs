//! Parsing of command strings such as `trim->remove('!')->title_case`.
//!
//! The grammar is loose :
//! - operations are separated by `->`, which cannot be escaped
//! - each operation is a word followed by an optional parenthesized argument list
//! - arguments are split on `,` without any quote awareness nor trimming

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::constants::command::{ARGUMENT_SEPARATOR, CHAIN_SYMBOL, OPERATION_PATTERN};
use crate::error::{Error, Result};

static OPERATION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(OPERATION_PATTERN).unwrap());

/// A single operation of a command : its name and its raw argument tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    name: String,
    arguments: Vec<String>,
}

impl Operation {
    pub fn new<N, A, S>(name: N, arguments: A) -> Self
    where
        N: Into<String>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Parses a single chain segment
    ///
    /// # Errors
    /// Returns `Error::Parse` when the segment does not start with an operation name
    pub fn parse(segment: &str) -> Result<Self> {
        let caps = OPERATION_REGEX
            .captures(segment)
            .ok_or_else(|| Error::Parse(segment.to_string()))?;

        let name = caps.get(1).map_or("", |m| m.as_str());
        let arguments = caps
            .get(2)
            .map(|m| m.as_str())
            .filter(|args| !args.is_empty())
            .map(|args| args.split(ARGUMENT_SEPARATOR).collect::<Vec<&str>>())
            .unwrap_or_default();

        Ok(Operation::new(name, arguments))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.arguments.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}({})", self.name, self.arguments.join(","))
        }
    }
}

/// Parses a command string into its operations, preserving the chain order.
/// An empty command yields no operations.
///
/// # Examples
/// ```
/// use texttools::command::parse;
///
/// let operations = parse("trim->remove('!')->title_case").unwrap();
/// assert_eq!(operations.len(), 3);
/// assert_eq!(operations[1].name(), "remove");
/// assert_eq!(operations[1].arguments(), &["'!'"]);
/// ```
pub fn parse(command: &str) -> Result<Vec<Operation>> {
    if command.trim().is_empty() {
        return Ok(Vec::new());
    }
    command.split(CHAIN_SYMBOL).map(Operation::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chain() {
        let operations = parse("trim->remove('!')->title_case->replace('a','b')").unwrap();
        assert_eq!(
            operations,
            vec![
                Operation::new("trim", Vec::<String>::new()),
                Operation::new("remove", vec!["'!'"]),
                Operation::new("title_case", Vec::<String>::new()),
                Operation::new("replace", vec!["'a'", "'b'"]),
            ]
        );
    }

    #[test]
    fn test_empty_parentheses_yield_no_arguments() {
        assert_eq!(parse("sort()").unwrap(), parse("sort").unwrap());
        assert!(parse("sort()").unwrap()[0].arguments().is_empty());
    }

    #[test]
    fn test_arguments_are_split_on_commas_only() {
        let operations = parse("replace('a,b', 'c')").unwrap();
        assert_eq!(operations[0].arguments(), &["'a", "b'", " 'c'"]);
    }

    #[test]
    fn test_named_arguments_are_kept_raw() {
        let operations = parse("sort(operate_on_word=True)").unwrap();
        assert_eq!(operations[0].arguments(), &["operate_on_word=True"]);
    }

    #[test]
    fn test_empty_segments_fail() {
        assert!(matches!(parse("trim->->sort"), Err(Error::Parse(s)) if s.is_empty()));
        assert!(matches!(parse("->trim"), Err(Error::Parse(_))));
        assert!(matches!(parse("trim->"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_malformed_segment_fails() {
        assert!(matches!(parse("(x)"), Err(Error::Parse(s)) if s == "(x)"));
        assert!(matches!(parse("trim-> sort"), Err(Error::Parse(s)) if s == " sort"));
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        let operations = parse("trim junk").unwrap();
        assert_eq!(operations, vec![Operation::new("trim", Vec::<String>::new())]);

        let operations = parse("remove('x'").unwrap();
        assert_eq!(operations[0].name(), "remove");
        assert!(operations[0].arguments().is_empty());
    }

    #[test]
    fn test_empty_command() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   ").unwrap().is_empty());
    }

    #[test]
    fn test_display() {
        let operations = parse("replace('a','b')->trim").unwrap();
        assert_eq!(operations[0].to_string(), "replace('a','b')");
        assert_eq!(operations[1].to_string(), "trim");
    }
}
