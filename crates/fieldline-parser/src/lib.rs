//! Fieldline Parser - Statement configuration and grammar matching
//!
//! Turns a token stream into statements that follow a fixed field sequence.
//! Matching never fails: out-of-place tokens are flagged on the statement
//! and the rest of the input is still grouped.

mod config;
mod error;
mod grammar;
mod matcher;

pub use config::*;
pub use error::*;
pub use grammar::*;
pub use matcher::*;

use fieldline_ast::Statement;
use fieldline_lexer::tokenize;

/// Tokenize and match `text` in one step
pub fn parse(text: &str, config: &StatementConfig) -> Vec<Statement> {
    let tokens = tokenize(text, config.rules(), config.default_type());
    match_statements(tokens, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldline_lexer::TokenRule;

    #[test]
    fn test_parse_uses_configured_default_type() {
        let config = StatementConfig::with_default_type(
            ["word"],
            vec![TokenRule::from_pattern("word", "[a-z]+").unwrap()],
            "junk",
        )
        .unwrap();
        let statements = parse("?? abc", &config);
        assert_eq!(statements[0].tokens[0].kind, "junk");
        assert!(statements[0].tokens[0].invalid);
        assert!(!statements[0].incomplete);
    }
}
