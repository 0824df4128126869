//! Error type for query parsing.

use std::{error::Error, fmt};

use chumsky::error::{Simple, SimpleReason};

/// Syntax error with position and expectation information.
///
/// Carries the furthest offset the grammar reached before giving up, the
/// token descriptions that would have been accepted there, and the original
/// input so the error can be displayed with a position indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Character offset of the furthest failure point.
    pub offset: usize,
    /// Descriptions of the tokens accepted at `offset`, sorted and deduplicated.
    pub expected: Vec<String>,
    /// The character actually found at `offset`, if any.
    pub found: Option<char>,
    /// A rule-specific message, when the failure was not a plain token
    /// mismatch (e.g. an interval bound too large to represent).
    pub message: Option<String>,
    /// The original query text.
    pub input: String,
}

impl SyntaxError {
    /// Converts the grammar engine's error set, keeping the furthest failure.
    pub(crate) fn from_engine(input: &str, errors: Vec<Simple<char>>) -> Self {
        let err = match errors.into_iter().max_by_key(|e| e.span().start) {
            Some(err) => err,
            None => {
                return Self {
                    offset: 0,
                    expected: Vec::new(),
                    found: None,
                    message: None,
                    input: input.to_string(),
                }
            }
        };
        let mut expected: Vec<String> = err
            .expected()
            .map(|token| match token {
                Some(c) => format!("'{}'", c),
                None => "end of input".to_string(),
            })
            .collect();
        expected.sort();
        expected.dedup();
        let message = match err.reason() {
            SimpleReason::Custom(msg) => Some(msg.clone()),
            _ => None,
        };
        Self {
            offset: err.span().start,
            expected,
            found: err.found().copied(),
            message,
            input: input.to_string(),
        }
    }

    /// Formats the error with a position indicator showing where it occurred.
    ///
    /// The caret line pads one space per character, so it can drift under
    /// double-width glyphs; `offset` itself is always exact.
    pub fn format_with_context(&self) -> String {
        format!(
            "{}\n  {}\n  {}^",
            self.describe(),
            self.input,
            " ".repeat(self.offset.min(self.input.chars().count()))
        )
    }

    fn describe(&self) -> String {
        let mut out = format!("query syntax error at offset {}: ", self.offset);
        if let Some(message) = &self.message {
            out.push_str(message);
        } else {
            if self.expected.is_empty() {
                out.push_str("unexpected input");
            } else {
                out.push_str(&format!("expected {}", self.expected.join(" or ")));
            }
            match self.found {
                Some(c) => out.push_str(&format!(", found '{}'", c)),
                None => out.push_str(", found end of input"),
            }
        }
        out
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_context())
    }
}

impl Error for SyntaxError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_points_at_offset() {
        let err = SyntaxError {
            offset: 2,
            expected: vec!["')'".to_string()],
            found: None,
            message: None,
            input: "(a".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("expected ')'"));
        assert!(display.contains("found end of input"));
        assert!(display.contains("(a"));
        // two spaces of gutter, then one space per character of offset
        assert!(display.ends_with("    ^"));
    }

    #[test]
    fn custom_message_wins_over_expectations() {
        let err = SyntaxError {
            offset: 0,
            expected: vec!["'x'".to_string()],
            found: Some('y'),
            message: Some("interval bound out of range".to_string()),
            input: "y".to_string(),
        };
        assert!(err.to_string().contains("interval bound out of range"));
        assert!(!err.to_string().contains("expected"));
    }
}
