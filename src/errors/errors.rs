use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// Re-anchors an error raised outside the step loop onto the step that caused it.
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::OutputWriteError { .. } => "OutputWriteError",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::ConstantReassignment { .. } => "ConstantReassignment",
            ErrorImpl::VariableAlreadyAssigned { .. } => "VariableAlreadyAssigned",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::OutputWriteError { .. } => ErrorTip::None,
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::TypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::ConstantReassignment { variable } => {
                ErrorTip::Suggestion(format!("Constant `{}` cannot be assigned to", variable))
            }
            ErrorImpl::VariableAlreadyAssigned { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` is assigned once at declaration",
                variable
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at step {}", self.internal_error, self.position.0)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("failed to write output: {message}")]
    OutputWriteError { message: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("types do not match: expected {expected:?}, received {received:?}")]
    TypeMatchError { expected: String, received: String },
    #[error("constant {variable:?} cannot be reassigned")]
    ConstantReassignment { variable: String },
    #[error("variable {variable:?} cannot be reassigned")]
    VariableAlreadyAssigned { variable: String },
}

impl From<std::io::Error> for ErrorImpl {
    fn from(error: std::io::Error) -> Self {
        ErrorImpl::OutputWriteError {
            message: error.to_string(),
        }
    }
}
