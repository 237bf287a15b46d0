//! Fieldline - structured statement input with live field prediction
//!
//! This is the root workspace crate that provides integration tests.
//! The actual implementation is in the workspace member crates.

// Re-export main crates for convenience
pub use fieldline_ast as ast;
pub use fieldline_engine as engine;
pub use fieldline_lexer as lexer;
pub use fieldline_parser as parser;

pub use fieldline_engine::{run, ParseResult};
pub use fieldline_parser::StatementConfig;
