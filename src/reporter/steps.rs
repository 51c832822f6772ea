use crate::{
    values::{
        bindings::{Binding, BindingKind},
        environment::COMPANY,
        types::{Literals, NumberType},
        values::Value,
    },
    MK_BINDING,
};

/// Step Types
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Bind a value into the environment
    Declare(Binding),
    /// Print the value of a variable on its own line
    Print { variable: String },
    /// Print `{prefix}{type tag} ` for a variable
    PrintType {
        variable: String,
        prefix: &'static str,
    },
}

impl Step {
    pub fn print(variable: &str) -> Self {
        Step::Print {
            variable: variable.to_string(),
        }
    }

    pub fn print_type(variable: &str, prefix: &'static str) -> Self {
        Step::PrintType {
            variable: variable.to_string(),
            prefix,
        }
    }
}

/// The fixed startup sequence.
///
/// `year` is not declared here; it resolves from the package-level constants.
pub fn startup_program() -> Vec<Step> {
    vec![
        Step::Declare(MK_BINDING!(
            BindingKind::Var,
            "name",
            Value::from("hari"),
            Some(Literals::String)
        )),
        Step::print("name"),
        Step::print_type("name", "Variable is of type: "),
        Step::Declare(MK_BINDING!(
            BindingKind::Var,
            "isLoggedIn",
            Value::from(false),
            Some(Literals::Boolean)
        )),
        Step::print("isLoggedIn"),
        Step::print_type("isLoggedIn", "The type is: "),
        Step::Declare(MK_BINDING!(
            BindingKind::Var,
            "age",
            Value::from(22u8),
            Some(Literals::Number(NumberType::UInt8))
        )),
        Step::print("age"),
        Step::print_type("age", "The type is "),
        Step::Declare(MK_BINDING!(
            BindingKind::Inferred,
            "name1",
            Value::from("Hari Prasath")
        )),
        Step::print("name1"),
        Step::print("year"),
        Step::Declare(MK_BINDING!(BindingKind::Const, "company", Value::from(COMPANY))),
        Step::print("company"),
    ]
}
