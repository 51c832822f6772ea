use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_BINDING,
};

use super::{
    bindings::{Binding, BindingKind},
    types::{Literals, NumberType},
    values::Value,
};

pub const YEAR: i64 = 2025;
pub const COMPANY: &str = "CEVA";

lazy_static! {
    /// Package-level constants, visible from every environment
    pub static ref GLOBAL_LOOKUP: HashMap<&'static str, Binding> = {
        let mut map = HashMap::new();
        map.insert(
            "year",
            MK_BINDING!(
                BindingKind::Const,
                "year",
                Value::Int(YEAR),
                Some(Literals::Number(NumberType::Int))
            ),
        );
        map
    };
}

#[derive(Debug, Default)]
pub struct Environment {
    pub variable_lookup: HashMap<String, Binding>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn declare_variable(&mut self, binding: Binding) -> Result<(), Error> {
        if self.variable_lookup.contains_key(&binding.name) {
            return Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: binding.name,
                },
                Position::null(),
            ));
        }

        if let Some(explicit_type) = binding.explicit_type {
            let received = binding.value.get_literal();
            if explicit_type != received {
                return Err(Error::new(
                    ErrorImpl::TypeMatchError {
                        expected: explicit_type.to_string(),
                        received: received.to_string(),
                    },
                    Position::null(),
                ));
            }
        }

        self.variable_lookup.insert(binding.name.clone(), binding);
        Ok(())
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&Binding> {
        self.variable_lookup.get(variable_name)
    }

    /// Looks up a local binding first, then the package-level constants.
    pub fn resolve(&self, variable_name: &str) -> Result<&Binding, Error> {
        self.get_variable(variable_name)
            .or_else(|| GLOBAL_LOOKUP.get(variable_name))
            .ok_or_else(|| {
                Error::new(
                    ErrorImpl::VariableNotDeclared {
                        variable: variable_name.to_string(),
                    },
                    Position::null(),
                )
            })
    }

    /// Values are assigned once, at declaration. Any later assignment fails.
    pub fn assign_variable(&mut self, variable_name: &str, _value: Value) -> Result<(), Error> {
        let binding = self.resolve(variable_name)?;
        let variable = binding.name.clone();

        let error = if binding.is_constant() {
            ErrorImpl::ConstantReassignment { variable }
        } else {
            ErrorImpl::VariableAlreadyAssigned { variable }
        };

        Err(Error::new(error, Position::null()))
    }
}
