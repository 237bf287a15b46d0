//! Fieldline AST - Core types shared by every stage of the engine
//!
//! This crate defines spans, tokens, statements and the value-source
//! interface used by autocomplete hosts. It has no parsing logic.

mod span;
mod token;
mod statement;
mod source;

pub use span::*;
pub use token::*;
pub use statement::*;
pub use source::*;
