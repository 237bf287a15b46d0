//! Next-field prediction

use std::sync::Arc;

use fieldline_ast::{Span, Statement};
use fieldline_lexer::TokenRule;
use fieldline_parser::StatementConfig;
use serde::Serialize;

/// The field the user is expected to type next, positioned at the caret
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictedField {
    pub kind: String,
    /// Zero-length span at the caret
    pub span: Span,
    #[serde(skip)]
    pub rule: Arc<TokenRule>,
}

impl PredictedField {
    pub fn description(&self) -> Option<&str> {
        self.rule.description.as_deref()
    }
}

/// Predict the next field for the statement under the caret.
///
/// Without an active statement the first field of a new statement is
/// expected. A complete statement predicts nothing.
pub fn predict_next(
    active: Option<&Statement>,
    caret: usize,
    config: &StatementConfig,
) -> Option<PredictedField> {
    let filled = active.map_or(0, Statement::real_len);
    let kind = config.expected_at(filled)?;
    let rule = config.rule_for(kind)?;

    Some(PredictedField {
        kind: kind.to_string(),
        span: Span::at(caret),
        rule: Arc::clone(rule),
    })
}
