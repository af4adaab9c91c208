//! Semantic Analysis for TINY-extended
//!
//! Builds the symbol table and annotates every expression with its type,
//! rejecting ill-typed programs. The walk is depth-first: a node's children
//! are analyzed before the node's own rule is checked, and statements are
//! visited in source order. The first violation aborts the analysis.

pub mod errors;
pub mod expressions;
pub mod statements;

use crate::ast::*;
use tiny_common::{CompilerError, SymbolTable};
use log::debug;

pub use errors::SemanticError;

/// Semantic analyzer context
pub struct SemanticAnalyzer<'a> {
    symbol_table: &'a mut SymbolTable,
}

impl<'a> SemanticAnalyzer<'a> {
    /// Create an analyzer that records declarations into `symbol_table`
    pub fn new(symbol_table: &'a mut SymbolTable) -> Self {
        Self { symbol_table }
    }

    /// Analyze a whole program against the given symbol table
    ///
    /// Running it again on an already annotated program with the same
    /// table succeeds and leaves every type unchanged.
    pub fn analyze(program: &mut Program, symbol_table: &mut SymbolTable) -> Result<(), CompilerError> {
        let mut analyzer = SemanticAnalyzer::new(symbol_table);
        analyzer.analyze_sequence(&mut program.statements)?;
        debug!("Semantic analysis complete: {} variables", analyzer.symbol_table.len());
        Ok(())
    }
}
