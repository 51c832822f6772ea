//! Error types and error handling for the reporter.
//!
//! This module defines the errors that can surface while running the
//! report program:
//!
//! - Error structures carrying the step position that failed
//! - Declaration and lookup failures in the environment
//! - Output write failures, which are fatal for the binary

pub mod errors;

#[cfg(test)]
mod tests;
