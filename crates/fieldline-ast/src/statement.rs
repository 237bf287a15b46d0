//! Statements: groups of tokens following the configured field sequence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Span, Token};

/// A token that did not match the field type expected at its position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub expected: String,
    pub found: String,
    pub span: Span,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} but encountered {}", self.expected, self.found)
    }
}

/// An ordered group of tokens expected to follow the statement format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub tokens: Vec<Token>,
    /// The most recent mismatch in this statement, if any
    pub error: Option<Mismatch>,
    /// True until every field of the format has been filled
    pub incomplete: bool,
}

impl Statement {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            error: None,
            incomplete: true,
        }
    }

    /// Number of filled fields: tokens that are neither whitespace nor invalid
    pub fn real_len(&self) -> usize {
        self.fields().count()
    }

    /// Tokens that fill a field, in order
    pub fn fields(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_field())
    }

    pub fn first_field(&self) -> Option<&Token> {
        self.fields().next()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Error text for display; empty when the statement has no mismatch
    pub fn error_message(&self) -> String {
        self.error
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_default()
    }

    /// Span covering every token, or `None` for an empty statement
    pub fn span(&self) -> Option<Span> {
        let first = self.tokens.first()?;
        let last = self.tokens.last()?;
        Some(first.span.merge(last.span))
    }
}

impl Default for Statement {
    fn default() -> Self {
        Self::new()
    }
}
