//! Declarative grammar files
//!
//! A grammar file is JSON:
//!
//! ```json
//! {
//!   "format": ["identifier", "comparison", "value"],
//!   "default_type": "unknown",
//!   "rules": [
//!     { "name": "comparison", "pattern": "(<=|>=|=|<|>)", "values": ["=", "<"] }
//!   ]
//! }
//! ```
//!
//! A rule with `values` gets a [`StaticValues`] source.

use std::fs;
use std::path::Path;

use fieldline_ast::{StaticValues, DEFAULT_TYPE};
use fieldline_lexer::TokenRule;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result, StatementConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarFile {
    pub format: Vec<String>,
    #[serde(default = "default_type")]
    pub default_type: String,
    pub rules: Vec<RuleEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleEntry {
    pub name: String,
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

fn default_type() -> String {
    DEFAULT_TYPE.to_string()
}

impl GrammarFile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading grammar file");
        Self::from_json(&json)
    }

    /// Compile the patterns and validate the result
    pub fn into_config(self) -> Result<StatementConfig> {
        let rules = self
            .rules
            .into_iter()
            .map(RuleEntry::into_rule)
            .collect::<Result<Vec<_>>>()?;
        StatementConfig::with_default_type(self.format, rules, self.default_type)
    }
}

impl RuleEntry {
    fn into_rule(self) -> Result<TokenRule> {
        let mut rule = TokenRule::from_pattern(self.name.clone(), &self.pattern).map_err(
            |source| ConfigError::InvalidPattern {
                rule: self.name,
                source,
            },
        )?;
        if let Some(description) = self.description {
            rule = rule.with_description(description);
        }
        if !self.values.is_empty() {
            rule = rule.with_value_source(StaticValues::new(self.values));
        }
        Ok(rule)
    }
}

/// Load a grammar file straight into a config
pub fn load_config(path: impl AsRef<Path>) -> Result<StatementConfig> {
    GrammarFile::load(path)?.into_config()
}
