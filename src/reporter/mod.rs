//! The startup report.
//!
//! The report is a fixed program of steps executed once, in order:
//! declarations bind values into an [`Environment`](crate::values::environment::Environment),
//! print steps write a value or its type tag as one line of output.

pub mod reporter;
pub mod steps;
