//! Token rules: one lexical class each

use std::fmt;
use std::sync::Arc;

use fieldline_ast::{LookupError, Statement, ValueSource};
use regex::{Match, Regex};

/// A named pattern, with optional description and suggestion lookup
#[derive(Clone)]
pub struct TokenRule {
    pub name: String,
    pub pattern: Regex,
    pub description: Option<String>,
    pub value_source: Option<Arc<dyn ValueSource>>,
}

impl TokenRule {
    pub fn new(name: impl Into<String>, pattern: Regex) -> Self {
        Self {
            name: name.into(),
            pattern,
            description: None,
            value_source: None,
        }
    }

    /// Compile `pattern` and build a rule from it
    pub fn from_pattern(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::new(name, Regex::new(pattern)?))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_value_source(self, source: impl ValueSource + 'static) -> Self {
        self.with_shared_source(Arc::new(source))
    }

    pub fn with_shared_source(mut self, source: Arc<dyn ValueSource>) -> Self {
        self.value_source = Some(source);
        self
    }

    /// Earliest non-empty match in `text`.
    ///
    /// Empty matches are skipped so a pattern like `a*` can never stall the
    /// tokenizer. Alternation is leftmost-first: where an empty alternative
    /// wins at an offset, nothing is matched there, even if a later
    /// alternative would match non-empty text. Put non-empty alternatives
    /// first (`ab|x*`, not `x*|ab`).
    pub fn find_in<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.pattern.find_iter(text).find(|m| !m.is_empty())
    }

    /// Run this rule's value source. Rules without one suggest nothing.
    pub async fn suggest(
        &self,
        context: Option<&Statement>,
        query: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<String>, LookupError> {
        match &self.value_source {
            Some(source) => source.lookup(context, query, page, page_size).await,
            None => Ok(Vec::new()),
        }
    }
}

impl fmt::Debug for TokenRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("description", &self.description)
            .field("value_source", &self.value_source.is_some())
            .finish()
    }
}

/// Rules are equal when they classify text the same way; sources are not compared
impl PartialEq for TokenRule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.pattern.as_str() == other.pattern.as_str()
            && self.description == other.description
    }
}
