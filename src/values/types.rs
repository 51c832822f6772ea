//! Primitive type definitions.
//!
//! Every value carries one of the [`Literals`] types. The type tag printed
//! for a value is the lowercase name returned by [`Literals::type_tag`].

use std::fmt::Display;

/// Represents the different literal types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literals {
    String,
    Number(NumberType),
    Boolean,
}

/// Represents numeric types with different widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberType {
    /// Unsigned 8-bit integer, 0-255
    UInt8,
    /// Platform-sized signed integer
    Int,
}

impl Literals {
    pub fn type_tag(&self) -> &'static str {
        match self {
            Literals::String => "string",
            Literals::Boolean => "bool",
            Literals::Number(NumberType::UInt8) => "uint8",
            Literals::Number(NumberType::Int) => "int",
        }
    }
}

impl Display for Literals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_tag())
    }
}
