//! Binary operator semantics
//!
//! Mixed Integer/Real operands are promoted to Real; two Integers stay
//! Integer with wrapping 64-bit arithmetic.

use crate::errors::RuntimeError;
use crate::value::TypedValue;
use tiny_frontend::BinaryOp;

/// Operand pair after numeric promotion
enum Operands {
    Ints(i64, i64),
    Reals(f64, f64),
}

fn promote(op: BinaryOp, left: TypedValue, right: TypedValue) -> Result<Operands, RuntimeError> {
    match (left, right) {
        (TypedValue::Integer(a), TypedValue::Integer(b)) => Ok(Operands::Ints(a, b)),
        _ => match (left.as_real(), right.as_real()) {
            (Some(a), Some(b)) => Ok(Operands::Reals(a, b)),
            _ => Err(RuntimeError::InvalidOperands {
                op: op.to_string(),
                left: left.data_type(),
                right: right.data_type(),
            }),
        },
    }
}

/// Apply `op` to two evaluated operands
pub fn apply(op: BinaryOp, left: TypedValue, right: TypedValue) -> Result<TypedValue, RuntimeError> {
    let operands = promote(op, left, right)?;

    let value = match (op, operands) {
        (BinaryOp::Equal, Operands::Ints(a, b)) => TypedValue::Boolean(a == b),
        (BinaryOp::Equal, Operands::Reals(a, b)) => TypedValue::Boolean(a == b),
        (BinaryOp::Less, Operands::Ints(a, b)) => TypedValue::Boolean(a < b),
        (BinaryOp::Less, Operands::Reals(a, b)) => TypedValue::Boolean(a < b),
        (BinaryOp::Greater, Operands::Ints(a, b)) => TypedValue::Boolean(a > b),
        (BinaryOp::Greater, Operands::Reals(a, b)) => TypedValue::Boolean(a > b),
        (BinaryOp::GreaterEqual, Operands::Ints(a, b)) => TypedValue::Boolean(a >= b),
        (BinaryOp::GreaterEqual, Operands::Reals(a, b)) => TypedValue::Boolean(a >= b),
        (BinaryOp::LessEqual, Operands::Ints(a, b)) => TypedValue::Boolean(a <= b),
        (BinaryOp::LessEqual, Operands::Reals(a, b)) => TypedValue::Boolean(a <= b),

        (BinaryOp::Add, Operands::Ints(a, b)) => TypedValue::Integer(a.wrapping_add(b)),
        (BinaryOp::Add, Operands::Reals(a, b)) => TypedValue::Real(a + b),
        (BinaryOp::Sub, Operands::Ints(a, b)) => TypedValue::Integer(a.wrapping_sub(b)),
        (BinaryOp::Sub, Operands::Reals(a, b)) => TypedValue::Real(a - b),
        (BinaryOp::Mul, Operands::Ints(a, b)) => TypedValue::Integer(a.wrapping_mul(b)),
        (BinaryOp::Mul, Operands::Reals(a, b)) => TypedValue::Real(a * b),

        (BinaryOp::Div, Operands::Ints(_, 0)) => return Err(RuntimeError::DivisionByZero),
        (BinaryOp::Div, Operands::Ints(a, b)) => TypedValue::Integer(a.wrapping_div(b)),
        (BinaryOp::Div, Operands::Reals(_, b)) if b == 0.0 => return Err(RuntimeError::DivisionByZero),
        (BinaryOp::Div, Operands::Reals(a, b)) => TypedValue::Real(a / b),

        (BinaryOp::DiffSquares, Operands::Ints(a, b)) => {
            TypedValue::Integer(a.wrapping_mul(a).wrapping_sub(b.wrapping_mul(b)))
        }
        (BinaryOp::DiffSquares, Operands::Reals(a, b)) => TypedValue::Real(a * a - b * b),

        // Power reads the exponent unpromoted
        (BinaryOp::Power, _) => return power(left, right),
    };

    Ok(value)
}

/// `base ^ exponent`; a Real exponent is truncated toward zero
fn power(base: TypedValue, exponent: TypedValue) -> Result<TypedValue, RuntimeError> {
    let invalid = || RuntimeError::InvalidOperands {
        op: BinaryOp::Power.to_string(),
        left: base.data_type(),
        right: exponent.data_type(),
    };

    let exp = match exponent {
        TypedValue::Integer(e) => e,
        TypedValue::Real(e) => e as i64,
        TypedValue::Boolean(_) => return Err(invalid()),
    };

    match (base, exponent) {
        (TypedValue::Integer(b), TypedValue::Integer(_)) => Ok(TypedValue::Integer(int_power(b, exp))),
        _ => match base.as_real() {
            Some(b) => Ok(TypedValue::Real(real_power(b, exp))),
            None => Err(invalid()),
        },
    }
}

/// Integer power by recursive squaring
pub fn int_power(base: i64, exp: i64) -> i64 {
    if exp == 0 {
        return 1;
    }
    if exp < 0 || base == 0 {
        return 0;
    }

    let half = int_power(base, exp / 2);
    let square = half.wrapping_mul(half);
    if exp % 2 == 0 {
        square
    } else {
        square.wrapping_mul(base)
    }
}

/// Real power by binary exponentiation over the exponent's bits
pub fn real_power(base: f64, exp: i64) -> f64 {
    if exp == 0 {
        return 1.0;
    }
    if exp < 0 || base == 0.0 {
        return 0.0;
    }

    let mut result = 1.0;
    let mut factor = base;
    let mut remaining = exp;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result *= factor;
        }
        factor *= factor;
        remaining >>= 1;
    }
    result
}
