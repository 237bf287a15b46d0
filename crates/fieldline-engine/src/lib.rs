//! Fieldline Engine - Caret context, prediction and autocomplete plumbing
//!
//! [`run`] is the single entry point a host calls after every edit. It
//! re-tokenizes and re-matches the whole text, resolves the token and
//! statement under the caret, and predicts the field expected next.

pub mod defaults;

mod context;
mod edit;
mod error;
mod lookup;
mod pipeline;
mod predict;

pub use context::*;
pub use edit::*;
pub use error::*;
pub use lookup::*;
pub use pipeline::*;
pub use predict::*;
