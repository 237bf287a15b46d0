//! Error-tolerant grammar matching
//!
//! Groups a token stream into statements following the configured field
//! sequence. A token of the wrong type is kept, flagged invalid, and the same
//! field is offered again to the tokens that follow it.

use fieldline_ast::{Mismatch, Statement, Token};

use crate::StatementConfig;

/// The statement being filled, with its running count of filled fields
struct Open {
    statement: Statement,
    filled: usize,
}

impl Open {
    fn new() -> Self {
        Self {
            statement: Statement::new(),
            filled: 0,
        }
    }

    fn push(&mut self, mut token: Token, config: &StatementConfig) {
        if !token.is_whitespace() {
            // `filled` is below the field count here, so a field is expected
            let expected = config.expected_at(self.filled).unwrap_or_default();
            if token.kind == expected {
                self.filled += 1;
            } else {
                tracing::debug!(
                    expected,
                    found = %token.kind,
                    start = token.span.start,
                    "field mismatch"
                );
                token.invalid = true;
                // Latest mismatch wins
                self.statement.error = Some(Mismatch {
                    expected: expected.to_string(),
                    found: token.kind.clone(),
                    span: token.span,
                });
            }
        }
        self.statement.tokens.push(token);
        self.statement.incomplete = self.filled < config.field_count();
    }
}

/// Group `tokens` into statements
pub fn match_statements(tokens: Vec<Token>, config: &StatementConfig) -> Vec<Statement> {
    let (mut statements, open) = tokens.into_iter().fold(
        (Vec::new(), None::<Open>),
        |(mut statements, open), token| {
            let mut current = match open {
                Some(full) if full.filled == config.field_count() => {
                    statements.push(full.statement);
                    Open::new()
                }
                Some(open) => open,
                None => Open::new(),
            };
            current.push(token, config);
            (statements, Some(current))
        },
    );

    statements.extend(open.map(|o| o.statement));
    statements
}
