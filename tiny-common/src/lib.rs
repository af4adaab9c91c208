//! TINY-extended Interpreter - Common Types and Utilities
//!
//! This crate contains shared types, error definitions, and the symbol
//! table used across every phase of the TINY-extended pipeline.

pub mod error;
pub mod types;
pub mod source_loc;

pub use error::CompilerError;
pub use types::*;
pub use source_loc::{SourceLocation, SourceSpan};
