//! The built-in example grammar: `identifier comparison value`

use async_trait::async_trait;
use fieldline_ast::{paginate, LookupError, Statement, StaticValues, ValueSource};
use fieldline_lexer::TokenRule;
use fieldline_parser::{ConfigError, StatementConfig};

pub const IDENTIFIER: &str = "identifier";
pub const COMPARISON: &str = "comparison";
pub const VALUE: &str = "value";

/// `prefix0` through `prefix{last}`, filtered by substring match on the query
#[derive(Debug, Clone)]
pub struct NumberedValues {
    prefix: String,
    last: usize,
}

impl NumberedValues {
    pub fn new(prefix: impl Into<String>, last: usize) -> Self {
        Self {
            prefix: prefix.into(),
            last,
        }
    }
}

#[async_trait]
impl ValueSource for NumberedValues {
    async fn lookup(
        &self,
        _context: Option<&Statement>,
        query: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<String>, LookupError> {
        let values = (0..=self.last)
            .map(|i| format!("{}{}", self.prefix, i))
            .filter(|v| v.contains(query))
            .collect();
        Ok(paginate(values, page, page_size))
    }
}

/// Quoted values derived from the statement's first field: `"foo0"`, `"foo1"`, ...
///
/// The query is not used to filter.
#[derive(Debug, Clone)]
pub struct QuotedFieldValues {
    last: usize,
}

impl QuotedFieldValues {
    pub fn new(last: usize) -> Self {
        Self { last }
    }
}

#[async_trait]
impl ValueSource for QuotedFieldValues {
    async fn lookup(
        &self,
        context: Option<&Statement>,
        _query: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<String>, LookupError> {
        let stem = context
            .and_then(Statement::first_field)
            .map(|t| t.text.as_str())
            .unwrap_or_default();
        let values = (0..=self.last)
            .map(|i| format!("\"{}{}\"", stem, i))
            .collect();
        Ok(paginate(values, page, page_size))
    }
}

fn compile(name: &str, pattern: &str) -> Result<TokenRule, ConfigError> {
    TokenRule::from_pattern(name, pattern).map_err(|source| ConfigError::InvalidPattern {
        rule: name.to_string(),
        source,
    })
}

pub fn default_rules() -> Result<Vec<TokenRule>, ConfigError> {
    Ok(vec![
        compile(IDENTIFIER, r"^[a-zA-Z]+[a-zA-Z0-9_]*")?
            .with_description("Name of the field to compare")
            .with_value_source(NumberedValues::new("foo", 100)),
        compile(COMPARISON, r"(<=|>=|=|<|>)")?
            .with_description("Comparison operator")
            .with_value_source(StaticValues::new(["=", "<", ">", "<=", ">="])),
        compile(VALUE, r#"([0-9]+|"[^"]*")"#)?
            .with_description("Number or double-quoted string")
            .with_value_source(QuotedFieldValues::new(100)),
    ])
}

pub fn default_config() -> Result<StatementConfig, ConfigError> {
    StatementConfig::configure([IDENTIFIER, COMPARISON, VALUE], default_rules()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldline_parser::parse;

    #[test]
    fn test_default_config() {
        let config = default_config().unwrap();
        assert_eq!(config.format(), [IDENTIFIER, COMPARISON, VALUE]);
        assert!(config.rules().iter().all(|r| r.value_source.is_some()));
    }

    #[tokio::test]
    async fn test_numbered_values() {
        let source = NumberedValues::new("foo", 100);
        let all = source.lookup(None, "", 0, 0).await.unwrap();
        assert_eq!(all.len(), 101);
        assert_eq!(all[100], "foo100");

        let found = source.lookup(None, "foo10", 0, 0).await.unwrap();
        assert_eq!(found, vec!["foo10", "foo100"]);
    }

    #[tokio::test]
    async fn test_quoted_values_use_first_field() {
        let config = default_config().unwrap();
        let statements = parse("bar = ", &config);
        let source = QuotedFieldValues::new(2);
        let values = source
            .lookup(statements.first(), "ignored", 0, 0)
            .await
            .unwrap();
        assert_eq!(values, vec![r#""bar0""#, r#""bar1""#, r#""bar2""#]);
    }

    #[tokio::test]
    async fn test_quoted_values_without_context() {
        let values = QuotedFieldValues::new(1).lookup(None, "", 0, 0).await.unwrap();
        assert_eq!(values, vec![r#""0""#, r#""1""#]);
    }
}
