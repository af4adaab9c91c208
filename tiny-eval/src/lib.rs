//! TINY-extended Interpreter - Evaluator
//!
//! Executes programs that passed semantic analysis:
//! - Value: runtime values and their rendering
//! - Arith: operator semantics and numeric promotion
//! - Evaluator: statement execution against a slot array

pub mod arith;
pub mod errors;
pub mod evaluator;
pub mod value;

pub use errors::RuntimeError;
pub use evaluator::Evaluator;
pub use value::TypedValue;

use std::io::{BufRead, Write};
use tiny_common::{CompilerError, SymbolTable};
use tiny_frontend::{Frontend, Program};

/// High-level interpreter interface
pub struct Interpreter;

impl Interpreter {
    /// Scan, parse, analyze and run `source`, returning the populated symbol table
    pub fn run_source<R: BufRead, W: Write>(source: &str, input: R, output: W) -> Result<SymbolTable, CompilerError> {
        let (program, symbol_table) = Frontend::analyze_source(source)?;
        Self::run_program(&program, &symbol_table, input, output)?;
        Ok(symbol_table)
    }

    /// Run an already analyzed program
    pub fn run_program<R: BufRead, W: Write>(
        program: &Program,
        symbol_table: &SymbolTable,
        input: R,
        output: W,
    ) -> Result<(), CompilerError> {
        let mut evaluator = Evaluator::new(symbol_table, input, output);
        evaluator.run(program)?;
        Ok(())
    }
}
