//! The per-keystroke pipeline: tokenize, match, resolve, predict

use fieldline_ast::{Statement, Token};
use fieldline_parser::{parse, StatementConfig};
use serde::Serialize;

use crate::{predict_next, resolve_active, ActiveContext, PredictedField};

/// Everything derived from one `(text, caret)` pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    pub statements: Vec<Statement>,
    pub caret: usize,
    pub active: Option<ActiveContext>,
    pub prediction: Option<PredictedField>,
}

impl ParseResult {
    pub fn active_statement(&self) -> Option<&Statement> {
        self.active.and_then(|a| self.statements.get(a.statement))
    }

    pub fn active_token(&self) -> Option<&Token> {
        let active = self.active?;
        self.statements
            .get(active.statement)?
            .tokens
            .get(active.token?)
    }

    pub fn has_errors(&self) -> bool {
        self.statements.iter().any(Statement::has_error)
    }

    /// Tokens of every statement, in text order
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.statements.iter().flat_map(|s| s.tokens.iter())
    }
}

/// Run the full pipeline over `text` with the caret at byte offset `caret`
pub fn run(text: &str, caret: usize, config: &StatementConfig) -> ParseResult {
    let statements = parse(text, config);
    let active = resolve_active(&statements, caret, config);
    let prediction = predict_next(
        active.and_then(|a| statements.get(a.statement)),
        caret,
        config,
    );

    tracing::debug!(
        statements = statements.len(),
        caret,
        active = ?active,
        predicted = prediction.as_ref().map(|p| p.kind.as_str()),
        "pipeline run"
    );

    ParseResult {
        statements,
        caret,
        active,
        prediction,
    }
}
