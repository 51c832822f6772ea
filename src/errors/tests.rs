//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_output_write_error() {
    let error = Error::new(
        ErrorImpl::OutputWriteError {
            message: "broken pipe".to_string(),
        },
        Position(3),
    );

    assert_eq!(error.get_error_name(), "OutputWriteError");
    assert_eq!(error.get_position().0, 3);
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let error_impl = ErrorImpl::from(io_error);

    assert_eq!(
        error_impl,
        ErrorImpl::OutputWriteError {
            message: "pipe closed".to_string()
        }
    );
}

#[test]
fn test_type_mismatch_error() {
    let error = Error::new(
        ErrorImpl::TypeMatchError {
            expected: "uint8".to_string(),
            received: "string".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert_eq!(
        error.get_tip().to_string(),
        "Expected type `uint8`, received `string`"
    );
}

#[test]
fn test_variable_not_declared_error() {
    let error = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "foo".to_string(),
        },
        Position(1),
    );

    assert_eq!(error.get_error_name(), "VariableNotDeclared");
    assert_eq!(error.to_string(), "variable \"foo\" not declared at step 1");
}

#[test]
fn test_constant_reassignment_error() {
    let error = Error::new(
        ErrorImpl::ConstantReassignment {
            variable: "year".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "ConstantReassignment");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("year")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_repositioned() {
    let error = Error::new(
        ErrorImpl::VariableAlreadyDeclared {
            variable: "x".to_string(),
        },
        Position::null(),
    )
    .at(Position(7));

    assert_eq!(error.get_position().0, 7);
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
