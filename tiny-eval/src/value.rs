//! Runtime values

use std::fmt;
use tiny_common::DataType;

/// A value held in a variable slot or produced by an expression
///
/// The variant decides how the value is read; there is no separate type tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypedValue {
    Integer(i64),
    Real(f64),
    Boolean(bool),
}

impl TypedValue {
    /// Initial value of a slot of the given type
    pub fn zero(data_type: DataType) -> Self {
        match data_type {
            DataType::Real => TypedValue::Real(0.0),
            DataType::Boolean => TypedValue::Boolean(false),
            DataType::Integer | DataType::Void => TypedValue::Integer(0),
        }
    }

    pub fn data_type(&self) -> DataType {
        match self {
            TypedValue::Integer(_) => DataType::Integer,
            TypedValue::Real(_) => DataType::Real,
            TypedValue::Boolean(_) => DataType::Boolean,
        }
    }

    /// Numeric view as a real, `None` for booleans
    pub fn as_real(&self) -> Option<f64> {
        match *self {
            TypedValue::Integer(i) => Some(i as f64),
            TypedValue::Real(r) => Some(r),
            TypedValue::Boolean(_) => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Integer(i) => write!(f, "{i}"),
            TypedValue::Real(r) => write!(f, "{r:.6}"),
            TypedValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}
