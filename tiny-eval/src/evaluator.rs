//! Tree-walking execution of an analyzed program
//!
//! Variables live in a flat slot array sized from the symbol table; each
//! slot starts out as the zero value of its declared type. `read` and
//! `write` go through the injected input and output streams.

use crate::arith;
use crate::errors::RuntimeError;
use crate::value::TypedValue;
use log::{debug, trace};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tiny_common::{DataType, SlotId, SymbolTable};
use tiny_frontend::{Expression, ExpressionKind, Program, Statement, StatementKind};

pub struct Evaluator<'a, R: BufRead, W: Write> {
    symbols: &'a SymbolTable,
    slots: Vec<TypedValue>,
    input: R,
    output: W,
    /// Words of the current input line not consumed yet
    pending: VecDeque<String>,
}

impl<'a, R: BufRead, W: Write> Evaluator<'a, R, W> {
    pub fn new(symbols: &'a SymbolTable, input: R, output: W) -> Self {
        let slots = symbols.iter().map(|var| TypedValue::zero(var.var_type)).collect();
        Self {
            symbols,
            slots,
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Execute every top-level statement in order
    pub fn run(&mut self, program: &Program) -> Result<(), RuntimeError> {
        debug!("Running program with {} variable slots", self.slots.len());
        self.run_sequence(&program.statements)?;
        self.output.flush()?;
        Ok(())
    }

    /// Current value of a variable, if it is declared
    pub fn value_of(&self, name: &str) -> Option<TypedValue> {
        self.symbols.find(name).map(|var| self.slots[var.slot])
    }

    fn run_sequence(&mut self, statements: &[Statement]) -> Result<(), RuntimeError> {
        for stmt in statements {
            self.execute(stmt)?;
        }
        Ok(())
    }

    fn execute(&mut self, stmt: &Statement) -> Result<(), RuntimeError> {
        trace!("Executing statement at line {}", stmt.line);

        match &stmt.kind {
            StatementKind::Declaration { name, initializer, .. } => {
                if let Some(init) = initializer {
                    let value = self.evaluate(init)?;
                    let slot = self.slot_of(name)?;
                    self.slots[slot] = value;
                }
            }

            StatementKind::Assign { name, value, .. } => {
                let value = self.evaluate(value)?;
                let slot = self.slot_of(name)?;
                self.slots[slot] = value;
            }

            StatementKind::If { condition, then_branch, else_branch } => {
                if self.evaluate_condition(condition)? {
                    self.run_sequence(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.run_sequence(else_branch)?;
                }
            }

            StatementKind::Repeat { body, condition } => loop {
                self.run_sequence(body)?;
                if self.evaluate_condition(condition)? {
                    break;
                }
            },

            StatementKind::Read { name, .. } => {
                let slot = self.slot_of(name)?;
                let var_type = self.symbols.find(name).map_or(DataType::Integer, |var| var.var_type);
                let value = self.read_value(name, var_type)?;
                self.slots[slot] = value;
            }

            StatementKind::Write(expr) => {
                let value = self.evaluate(expr)?;
                writeln!(self.output, "{value}")?;
            }
        }

        Ok(())
    }

    /// Evaluate an expression to a value
    pub fn evaluate(&self, expr: &Expression) -> Result<TypedValue, RuntimeError> {
        match &expr.kind {
            ExpressionKind::IntLiteral(i) => Ok(TypedValue::Integer(*i)),
            ExpressionKind::RealLiteral(r) => Ok(TypedValue::Real(*r)),
            ExpressionKind::BoolLiteral(b) => Ok(TypedValue::Boolean(*b)),
            ExpressionKind::Identifier { name, .. } => Ok(self.slots[self.slot_of(name)?]),
            ExpressionKind::Binary { op, left, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                arith::apply(*op, left, right)
            }
        }
    }

    fn evaluate_condition(&self, condition: &Expression) -> Result<bool, RuntimeError> {
        match self.evaluate(condition)? {
            TypedValue::Boolean(b) => Ok(b),
            other => Err(RuntimeError::NonBooleanCondition(other.data_type())),
        }
    }

    fn slot_of(&self, name: &str) -> Result<SlotId, RuntimeError> {
        self.symbols
            .find(name)
            .map(|var| var.slot)
            .ok_or_else(|| RuntimeError::UndefinedVariable(name.to_string()))
    }

    /// Prompt for and parse one input word for `name`
    fn read_value(&mut self, name: &str, var_type: DataType) -> Result<TypedValue, RuntimeError> {
        write!(self.output, "Enter {name} ({var_type}): ")?;
        self.output.flush()?;

        let word = self.next_word(name)?;
        let invalid = || RuntimeError::InvalidInput {
            name: name.to_string(),
            expected: var_type,
            word: word.clone(),
        };

        let value = match var_type {
            DataType::Real => TypedValue::Real(word.parse::<f64>().map_err(|_| invalid())?),
            DataType::Boolean => TypedValue::Boolean(word.parse::<i64>().map_err(|_| invalid())? != 0),
            DataType::Integer | DataType::Void => TypedValue::Integer(word.parse::<i64>().map_err(|_| invalid())?),
        };

        debug!("Read {} = {}", name, value);
        Ok(value)
    }

    /// Next whitespace-separated word, pulling new lines as needed
    fn next_word(&mut self, name: &str) -> Result<String, RuntimeError> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Ok(word);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(RuntimeError::InputExhausted(name.to_string()));
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tiny_frontend::Frontend;

    fn run_with_input(source: &str, input: &str) -> (Result<(), RuntimeError>, String) {
        let (program, table) = Frontend::analyze_source(source).unwrap();
        let mut output = Vec::new();
        let result = {
            let mut evaluator = Evaluator::new(&table, input.as_bytes(), &mut output);
            evaluator.run(&program)
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_slots_start_at_typed_zero() {
        let (result, output) = run_with_input("int i; real r; bool b; write i; write r", "");
        assert!(result.is_ok());
        assert_eq!(output, "0\n0.000000\n");
    }

    #[test]
    fn test_read_prompts_and_parses_by_type() {
        let source = "int n; real x; bool ok; read n; read x; read ok; write n; write x; if ok then write 1 end";
        let (result, output) = run_with_input(source, "4 2.5\n7\n");
        assert!(result.is_ok());
        assert_eq!(
            output,
            "Enter n (Integer): Enter x (Real): Enter ok (Boolean): 4\n2.500000\n1\n"
        );
    }

    #[test]
    fn test_read_exhausted_input() {
        let (result, output) = run_with_input("int n; read n", "  \n");
        assert_eq!(result, Err(RuntimeError::InputExhausted("n".to_string())));
        assert_eq!(output, "Enter n (Integer): ");
    }

    #[test]
    fn test_read_rejects_bad_word() {
        let (result, _) = run_with_input("int n; read n", "abc");
        assert!(matches!(result, Err(RuntimeError::InvalidInput { expected: DataType::Integer, .. })));
    }

    #[test]
    fn test_output_before_error_is_kept() {
        let (result, output) = run_with_input("int x; write 1; x := 5 / 0; write 2", "");
        assert_eq!(result, Err(RuntimeError::DivisionByZero));
        assert_eq!(output, "1\n");
    }

    #[test]
    fn test_value_of() {
        let (program, table) = Frontend::analyze_source("real y := 1.5; y := y * 2.0").unwrap();
        let mut evaluator = Evaluator::new(&table, std::io::empty(), std::io::sink());
        evaluator.run(&program).unwrap();
        assert_eq!(evaluator.value_of("y"), Some(TypedValue::Real(3.0)));
        assert_eq!(evaluator.value_of("missing"), None);
    }
}
