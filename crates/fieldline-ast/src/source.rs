//! Value sources: suggestion lookups attached to token rules
//!
//! The engine never calls these itself. Autocomplete hosts invoke them with
//! the active statement and the text typed so far, possibly across an
//! await point, and are responsible for dropping stale results.

use async_trait::async_trait;
use thiserror::Error;

use crate::Statement;

/// Errors a value source may report
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("value source unavailable: {0}")]
    Unavailable(String),

    #[error("lookup cancelled")]
    Cancelled,

    #[error("lookup failed: {0}")]
    Failed(String),
}

/// Supplies candidate values for one field type
#[async_trait]
pub trait ValueSource: Send + Sync {
    /// Look up candidates for `query`.
    ///
    /// `context` is the statement being edited, if any. `page` is zero-based;
    /// a `page_size` of 0 asks for every candidate.
    async fn lookup(
        &self,
        context: Option<&Statement>,
        query: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<String>, LookupError>;
}

/// Slice one page out of a candidate list
pub fn paginate(values: Vec<String>, page: usize, page_size: usize) -> Vec<String> {
    if page_size == 0 {
        return values;
    }
    values
        .into_iter()
        .skip(page.saturating_mul(page_size))
        .take(page_size)
        .collect()
}

/// A fixed list of values, filtered by substring match on the query
#[derive(Debug, Clone, Default)]
pub struct StaticValues {
    values: Vec<String>,
}

impl StaticValues {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

#[async_trait]
impl ValueSource for StaticValues {
    async fn lookup(
        &self,
        _context: Option<&Statement>,
        query: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<String>, LookupError> {
        let matches = self
            .values
            .iter()
            .filter(|v| v.contains(query))
            .cloned()
            .collect();
        Ok(paginate(matches, page, page_size))
    }
}
