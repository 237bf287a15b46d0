//! Caret context: which token and statement the caret sits in

use fieldline_ast::Statement;
use fieldline_parser::StatementConfig;
use serde::{Deserialize, Serialize};

/// Indices of the active statement and, if the caret is on a field, its token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveContext {
    pub statement: usize,
    pub token: Option<usize>,
}

/// Find the statement and token under `caret`.
///
/// Token spans are treated as inclusive at both ends, so on a boundary the
/// earlier token wins. Whitespace and default-type tokens never become the
/// active token, but they still make their statement active. A caret outside
/// every statement falls back to the last one.
pub fn resolve_active(
    statements: &[Statement],
    caret: usize,
    config: &StatementConfig,
) -> Option<ActiveContext> {
    let on_field = statements.iter().enumerate().find_map(|(index, stmt)| {
        stmt.tokens
            .iter()
            .position(|t| t.span.touches(caret) && !config.is_filler(&t.kind))
            .map(|token| ActiveContext {
                statement: index,
                token: Some(token),
            })
    });

    on_field
        .or_else(|| {
            statements
                .iter()
                .position(|stmt| stmt.tokens.iter().any(|t| t.span.touches(caret)))
                .map(|statement| ActiveContext {
                    statement,
                    token: None,
                })
        })
        .or_else(|| {
            statements.len().checked_sub(1).map(|statement| ActiveContext {
                statement,
                token: None,
            })
        })
}
