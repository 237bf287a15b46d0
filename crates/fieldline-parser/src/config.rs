//! Statement configuration: the field sequence plus the rule table

use std::collections::HashMap;
use std::sync::Arc;

use fieldline_ast::{DEFAULT_TYPE, WHITESPACE};
use fieldline_lexer::TokenRule;

use crate::{ConfigError, Result};

/// A validated statement format and the rules that recognise its fields.
///
/// Cheap to clone; rules are shared.
#[derive(Debug, Clone)]
pub struct StatementConfig {
    format: Vec<String>,
    rules: Vec<Arc<TokenRule>>,
    by_name: HashMap<String, usize>,
    default_type: String,
}

impl StatementConfig {
    /// Build a config with the standard default type ([`DEFAULT_TYPE`])
    pub fn configure<I, S>(format: I, rules: Vec<TokenRule>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_default_type(format, rules, DEFAULT_TYPE)
    }

    /// Build a config whose unmatched text is typed `default_type`
    pub fn with_default_type<I, S>(
        format: I,
        rules: Vec<TokenRule>,
        default_type: impl Into<String>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let format: Vec<String> = format.into_iter().map(Into::into).collect();
        let default_type = default_type.into();

        if format.is_empty() {
            return Err(ConfigError::EmptyFormat);
        }
        if default_type.is_empty() || default_type == WHITESPACE {
            return Err(ConfigError::ReservedName { name: default_type });
        }

        let mut by_name = HashMap::with_capacity(rules.len());
        for (index, rule) in rules.iter().enumerate() {
            if rule.name == WHITESPACE || rule.name == default_type {
                return Err(ConfigError::ReservedName {
                    name: rule.name.clone(),
                });
            }
            if by_name.insert(rule.name.clone(), index).is_some() {
                return Err(ConfigError::DuplicateRule {
                    name: rule.name.clone(),
                });
            }
        }

        if let Some(name) = format.iter().find(|name| !by_name.contains_key(*name)) {
            return Err(ConfigError::UnknownFieldType { name: name.clone() });
        }

        tracing::debug!(
            fields = format.len(),
            rules = rules.len(),
            "statement config ready"
        );

        Ok(Self {
            format,
            rules: rules.into_iter().map(Arc::new).collect(),
            by_name,
            default_type,
        })
    }

    /// Expected field types, in order
    pub fn format(&self) -> &[String] {
        &self.format
    }

    /// Number of fields in a complete statement
    pub fn field_count(&self) -> usize {
        self.format.len()
    }

    /// Field type expected after `filled` fields, or `None` once complete
    pub fn expected_at(&self, filled: usize) -> Option<&str> {
        self.format.get(filled).map(String::as_str)
    }

    /// Rules in declaration order
    pub fn rules(&self) -> &[Arc<TokenRule>] {
        &self.rules
    }

    /// Look up the rule for a field type
    pub fn rule_for(&self, kind: &str) -> Option<&Arc<TokenRule>> {
        self.by_name.get(kind).map(|&index| &self.rules[index])
    }

    pub fn default_type(&self) -> &str {
        &self.default_type
    }

    /// Whitespace and default-type tokens sit between fields, never on one
    pub fn is_filler(&self, kind: &str) -> bool {
        kind == WHITESPACE || kind == self.default_type
    }
}
