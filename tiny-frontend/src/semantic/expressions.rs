//! Expression type inference

use crate::ast::*;
use crate::semantic::{SemanticAnalyzer, SemanticError};
use tiny_common::{DataType, SourceLocation};
use log::trace;

impl SemanticAnalyzer<'_> {
    /// Annotate `expr` and its operands with their types
    pub(crate) fn analyze_expression(&mut self, expr: &mut Expression) -> Result<DataType, SemanticError> {
        let location = SourceLocation::new(expr.line, 1);

        let expr_type = match &mut expr.kind {
            ExpressionKind::IntLiteral(_) => DataType::Integer,
            ExpressionKind::RealLiteral(_) => DataType::Real,
            ExpressionKind::BoolLiteral(_) => DataType::Boolean,

            ExpressionKind::Identifier { name, var_type } => {
                let declared = self.resolve(name, expr.line)?;
                *var_type = declared;
                declared
            }

            ExpressionKind::Binary { op, left, right } => {
                let left_type = self.analyze_expression(left)?;
                let right_type = self.analyze_expression(right)?;
                binary_result_type(*op, left_type, right_type, location)?
            }
        };

        trace!("Line {}: expression typed {}", expr.line, expr_type);
        expr.expr_type = expr_type;
        Ok(expr_type)
    }

    /// Look up a variable's type and record the use site
    pub(crate) fn resolve(&mut self, name: &str, line: u32) -> Result<DataType, SemanticError> {
        let var_type = self
            .symbol_table
            .find(name)
            .map(|info| info.var_type)
            .ok_or_else(|| SemanticError::UndefinedVariable {
                name: name.to_string(),
                location: SourceLocation::new(line, 1),
            })?;

        self.symbol_table.add_reference(name, line);
        Ok(var_type)
    }
}

/// Result type of `left op right`
pub fn binary_result_type(
    op: BinaryOp,
    left: DataType,
    right: DataType,
    location: SourceLocation,
) -> Result<DataType, SemanticError> {
    if op.is_comparison() {
        if left == DataType::Boolean || right == DataType::Boolean {
            return Err(SemanticError::BooleanComparison { location });
        }
        if left == DataType::Void || right == DataType::Void {
            return Err(SemanticError::InvalidComparisonOperand { location });
        }
        return Ok(DataType::Boolean);
    }

    if left == DataType::Boolean || right == DataType::Boolean {
        return Err(SemanticError::BooleanArithmetic { location });
    }

    match (left, right) {
        (DataType::Real, r) if r.is_numeric() => Ok(DataType::Real),
        (l, DataType::Real) if l.is_numeric() => Ok(DataType::Real),
        (DataType::Integer, DataType::Integer) => Ok(DataType::Integer),
        _ => Err(SemanticError::InvalidArithmeticOperands { left, right, location }),
    }
}
