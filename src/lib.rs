//! Startup reporter: declares a handful of typed bindings and prints their
//! values, and for some of them their type tags, as a fixed report.
//!
//! 1. [`values`] - primitive types, values, bindings and the environment.
//! 2. [`reporter`] - the step program and the runner that writes it out.
//! 3. [`errors`] - error types shared by both.

#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod macros;
pub mod reporter;
pub mod values;

/// 1-based index of the step being executed; 0 when unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

pub fn format_error(error: &Error) -> String {
    /*
        Error: OutputWriteError
        -> step 2
           | failed to write output: Broken pipe (os error 32)
    */

    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!(
        "{}\n-> step {}\n   | {}",
        header,
        error.get_position().0,
        error.get_internal_error()
    )
}

pub fn display_error(error: &Error) {
    eprintln!("{}", format_error(error));
}
