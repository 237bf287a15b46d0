//! Token definitions

use serde::{Deserialize, Serialize};

use crate::Span;

/// Type name of the implicit whitespace rule. Rules may not use it.
pub const WHITESPACE: &str = "whitespace";

/// Type name given to text no rule matched, unless configured otherwise.
pub const DEFAULT_TYPE: &str = "unknown";

/// A classified, positioned piece of the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Name of the rule that produced this token, [`WHITESPACE`], or the
    /// configured default type
    pub kind: String,
    pub span: Span,
    /// Set by the grammar matcher when the token does not fit its position
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub invalid: bool,
}

impl Token {
    /// Create a token starting at `start`; the end follows from the text length
    pub fn new(text: impl Into<String>, kind: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let span = Span::new(start, start + text.len());
        Self {
            text,
            kind: kind.into(),
            span,
            invalid: false,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == WHITESPACE
    }

    /// Whether this token fills one of its statement's fields
    pub fn is_field(&self) -> bool {
        !self.is_whitespace() && !self.invalid
    }
}
