//! Edit error types

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("the caret is not on a field")]
    NoActiveToken,
}
