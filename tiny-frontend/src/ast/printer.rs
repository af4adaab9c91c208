//! Indented tree dump of a program
//!
//! One node per line as `[Kind][payload][Type]`. Children sit three columns
//! to the right of their parent; statements of one sequence share a column.

use super::{Expression, ExpressionKind, Program, Statement, StatementKind};
use tiny_common::DataType;
use std::fmt::Write;

const INDENT: usize = 3;

/// Render a whole program
pub fn format_program(program: &Program) -> String {
    let mut out = String::new();
    write_sequence(&mut out, &program.statements, 0);
    out
}

fn write_sequence(out: &mut String, statements: &[Statement], depth: usize) {
    for stmt in statements {
        write_statement(out, stmt, depth);
    }
}

fn write_statement(out: &mut String, stmt: &Statement, depth: usize) {
    let pad = " ".repeat(depth);
    match &stmt.kind {
        StatementKind::Declaration { name, var_type, initializer } => {
            let _ = writeln!(out, "{pad}[Decl][{name}][{var_type}]");
            if let Some(init) = initializer {
                write_expression(out, init, depth + INDENT);
            }
        }
        StatementKind::Assign { name, value, var_type } => {
            let _ = writeln!(out, "{pad}[Assign][{name}]{}", type_suffix(*var_type));
            write_expression(out, value, depth + INDENT);
        }
        StatementKind::If { condition, then_branch, else_branch } => {
            let _ = writeln!(out, "{pad}[If]");
            write_expression(out, condition, depth + INDENT);
            write_sequence(out, then_branch, depth + INDENT);
            if let Some(else_branch) = else_branch {
                write_sequence(out, else_branch, depth + INDENT);
            }
        }
        StatementKind::Repeat { body, condition } => {
            let _ = writeln!(out, "{pad}[Repeat]");
            write_sequence(out, body, depth + INDENT);
            write_expression(out, condition, depth + INDENT);
        }
        StatementKind::Read { name, var_type } => {
            let _ = writeln!(out, "{pad}[Read][{name}]{}", type_suffix(*var_type));
        }
        StatementKind::Write(expr) => {
            let _ = writeln!(out, "{pad}[Write]");
            write_expression(out, expr, depth + INDENT);
        }
    }
}

fn write_expression(out: &mut String, expr: &Expression, depth: usize) {
    let pad = " ".repeat(depth);
    let suffix = type_suffix(expr.expr_type);
    match &expr.kind {
        ExpressionKind::IntLiteral(value) => {
            let _ = writeln!(out, "{pad}[Num][{value}]{suffix}");
        }
        ExpressionKind::RealLiteral(value) => {
            let _ = writeln!(out, "{pad}[Num][{value:.6}]{suffix}");
        }
        ExpressionKind::BoolLiteral(value) => {
            let _ = writeln!(out, "{pad}[Bool][{value}]{suffix}");
        }
        ExpressionKind::Identifier { name, .. } => {
            let _ = writeln!(out, "{pad}[ID][{name}]{suffix}");
        }
        ExpressionKind::Binary { op, left, right } => {
            let _ = writeln!(out, "{pad}[Oper][{}]{suffix}", op.name());
            write_expression(out, left, depth + INDENT);
            write_expression(out, right, depth + INDENT);
        }
    }
}

fn type_suffix(data_type: DataType) -> String {
    if data_type == DataType::Void {
        String::new()
    } else {
        format!("[{data_type}]")
    }
}
