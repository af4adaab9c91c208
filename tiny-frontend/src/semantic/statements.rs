//! Statement checking and symbol table population

use crate::ast::*;
use crate::semantic::{SemanticAnalyzer, SemanticError};
use tiny_common::{DataType, SourceLocation};
use log::trace;

impl SemanticAnalyzer<'_> {
    pub(crate) fn analyze_sequence(&mut self, statements: &mut [Statement]) -> Result<(), SemanticError> {
        for stmt in statements {
            self.analyze_statement(stmt)?;
        }
        Ok(())
    }

    pub(crate) fn analyze_statement(&mut self, stmt: &mut Statement) -> Result<(), SemanticError> {
        let line = stmt.line;
        let location = SourceLocation::new(line, 1);

        match &mut stmt.kind {
            StatementKind::Declaration { name, var_type, initializer } => {
                if let Some(init) = initializer {
                    let found = self.analyze_expression(init)?;
                    if found != *var_type {
                        return Err(SemanticError::DeclarationMismatch {
                            name: name.clone(),
                            declared: *var_type,
                            found,
                            location,
                        });
                    }
                }

                let slot = self
                    .symbol_table
                    .insert(name, line, *var_type)
                    .map_err(|source| SemanticError::Symbol { source, location })?;
                trace!("Line {}: '{}' declared {} in slot {}", line, name, var_type, slot);
            }

            StatementKind::Assign { name, value, var_type } => {
                let found = self.analyze_expression(value)?;
                let declared = self.resolve(name, line)?;
                if found != declared {
                    return Err(SemanticError::AssignmentMismatch {
                        name: name.clone(),
                        declared,
                        found,
                        location,
                    });
                }
                *var_type = declared;
            }

            StatementKind::If { condition, then_branch, else_branch } => {
                let found = self.analyze_expression(condition)?;
                self.analyze_sequence(then_branch)?;
                if let Some(else_branch) = else_branch {
                    self.analyze_sequence(else_branch)?;
                }
                if found != DataType::Boolean {
                    return Err(SemanticError::IfCondition { found, location });
                }
            }

            StatementKind::Repeat { body, condition } => {
                self.analyze_sequence(body)?;
                let found = self.analyze_expression(condition)?;
                if found != DataType::Boolean {
                    return Err(SemanticError::RepeatCondition {
                        found,
                        location: SourceLocation::new(condition.line, 1),
                    });
                }
            }

            StatementKind::Read { name, var_type } => {
                *var_type = self.resolve(name, line)?;
            }

            StatementKind::Write(expr) => {
                if self.analyze_expression(expr)? == DataType::Void {
                    return Err(SemanticError::UntypedWrite { location });
                }
            }
        }

        Ok(())
    }
}
