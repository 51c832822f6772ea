use std::fmt::Display;

use super::types::{Literals, NumberType};

/// Runtime values held by bindings
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Boolean(bool),
    UInt8(u8),
    Int(i64),
}

impl Value {
    /// Type the value has when no explicit type is given
    pub fn get_literal(&self) -> Literals {
        match self {
            Value::String(_) => Literals::String,
            Value::Boolean(_) => Literals::Boolean,
            Value::UInt8(_) => Literals::Number(NumberType::UInt8),
            Value::Int(_) => Literals::Number(NumberType::Int),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(value) => write!(f, "{}", value),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::UInt8(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::UInt8(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}
