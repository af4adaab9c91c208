//! Abstract Syntax Tree definitions for TINY-extended
//!
//! The AST is built by the parser, annotated in place by semantic analysis
//! and read by the evaluator.

pub mod ops;
pub mod expressions;
pub mod statements;
pub mod printer;

// Re-export commonly used types at module level
pub use ops::BinaryOp;
pub use expressions::{Expression, ExpressionKind};
pub use statements::{Program, Statement, StatementKind};
pub use printer::format_program;
