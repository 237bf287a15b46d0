//! Suggestion requests and stale-result filtering
//!
//! Every keystroke produces a new [`ParseResult`], and with it possibly a new
//! suggestion request. Lookups may resolve out of order, so results are only
//! delivered while their request is still the latest one issued.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use fieldline_ast::{LookupError, Span, Statement};
use fieldline_lexer::TokenRule;
use fieldline_parser::StatementConfig;

use crate::ParseResult;

/// What the autocomplete should look up for the current caret position
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRequest {
    pub rule: Arc<TokenRule>,
    /// Text typed so far for the field; empty for a predicted field
    pub query: String,
    /// Span a chosen suggestion replaces
    pub replace: Span,
    /// The statement being edited
    pub context: Option<Statement>,
}

impl SuggestionRequest {
    /// Build the request for a pipeline result.
    ///
    /// With the caret on a field, that field's text is the query and its span
    /// is replaced. Otherwise the predicted field is requested with an empty
    /// query at the caret. Returns `None` for a complete statement with the
    /// caret off every field.
    pub fn for_result(result: &ParseResult, config: &StatementConfig) -> Option<Self> {
        let context = result.active_statement().cloned();

        if let Some(token) = result.active_token() {
            let rule = config.rule_for(&token.kind)?;
            return Some(Self {
                rule: Arc::clone(rule),
                query: token.text.clone(),
                replace: token.span,
                context,
            });
        }

        let predicted = result.prediction.as_ref()?;
        Some(Self {
            rule: Arc::clone(&predicted.rule),
            query: String::new(),
            replace: predicted.span,
            context,
        })
    }

    pub async fn fetch(&self, page: usize, page_size: usize) -> Result<Vec<String>, LookupError> {
        self.rule
            .suggest(self.context.as_ref(), &self.query, page, page_size)
            .await
    }
}

/// Identifies one issued lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Generation counter that lets only the latest lookup through
#[derive(Debug, Default)]
pub struct SuggestionGate {
    generation: AtomicU64,
}

impl SuggestionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation; every earlier ticket becomes stale
    pub fn issue(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Mark every outstanding ticket stale, e.g. when the text changed
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Run `request`, returning `None` if a newer lookup was issued meanwhile
    pub async fn fetch(
        &self,
        request: &SuggestionRequest,
        page: usize,
        page_size: usize,
    ) -> Option<Result<Vec<String>, LookupError>> {
        let ticket = self.issue();
        let result = request.fetch(page, page_size).await;

        if self.is_current(ticket) {
            Some(result)
        } else {
            tracing::debug!(
                rule = %request.rule.name,
                query = %request.query,
                "discarding stale suggestions"
            );
            None
        }
    }
}
