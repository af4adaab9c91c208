//! Common types used throughout the interpreter
//!
//! This module defines the data types of the language and the symbol
//! table, which is built by semantic analysis and read by the evaluator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Storage slot of a variable in the runtime variable array
pub type SlotId = usize;

/// Data types of TINY-extended expressions and variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataType {
    /// Not typed (yet)
    #[default]
    Void,
    Integer,
    Real,
    Boolean,
}

impl DataType {
    /// Integer or Real
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Integer | DataType::Real)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Void => write!(f, "Void"),
            DataType::Integer => write!(f, "Integer"),
            DataType::Real => write!(f, "Real"),
            DataType::Boolean => write!(f, "Boolean"),
        }
    }
}

/// Symbol table errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("Type mismatch: variable '{name}' already declared with type '{existing}', attempted redeclaration with type '{attempted}'")]
    TypeConflict {
        name: String,
        existing: DataType,
        attempted: DataType,
    },
}

/// Symbol table entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableInfo {
    pub name: String,
    pub slot: SlotId,
    pub var_type: DataType,
    /// Lines where the variable was declared or referenced, in order
    pub lines: Vec<u32>,
}

/// Registry of declared variables
///
/// Slots are dense, zero-based and handed out in first-declaration order,
/// so `len()` is exactly the size of the runtime variable array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolTable {
    index: HashMap<String, SlotId>,
    variables: Vec<VariableInfo>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            variables: Vec::new(),
        }
    }

    /// Look up a variable by name
    pub fn find(&self, name: &str) -> Option<&VariableInfo> {
        self.index.get(name).map(|&slot| &self.variables[slot])
    }

    /// Declare a variable, or record another declaration line for it
    ///
    /// A name that already exists with the same type gets `line` appended
    /// and keeps its slot. A different type is a [`SymbolError::TypeConflict`].
    pub fn insert(&mut self, name: &str, line: u32, var_type: DataType) -> Result<SlotId, SymbolError> {
        if let Some(&slot) = self.index.get(name) {
            let existing = &mut self.variables[slot];
            if existing.var_type != var_type {
                return Err(SymbolError::TypeConflict {
                    name: name.to_string(),
                    existing: existing.var_type,
                    attempted: var_type,
                });
            }
            existing.lines.push(line);
            return Ok(slot);
        }

        let slot = self.variables.len();
        self.index.insert(name.to_string(), slot);
        self.variables.push(VariableInfo {
            name: name.to_string(),
            slot,
            var_type,
            lines: vec![line],
        });
        Ok(slot)
    }

    /// Record a use site of an already declared variable
    pub fn add_reference(&mut self, name: &str, line: u32) {
        if let Some(&slot) = self.index.get(name) {
            self.variables[slot].lines.push(line);
        }
    }

    /// Number of distinct variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Variables in slot order
    pub fn iter(&self) -> impl Iterator<Item = &VariableInfo> {
        self.variables.iter()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in &self.variables {
            write!(f, "[Var={}][Mem={}][Type={}]", var.name, var.slot, var.var_type)?;
            for line in &var.lines {
                write!(f, "[Line={line}]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
