//! Typed values and the bindings that hold them.
//!
//! - Primitive types and their type tags (`string`, `bool`, `uint8`, `int`)
//! - Tagged runtime values
//! - Variable, inferred and constant bindings
//! - The environment bindings are declared into, backed by the
//!   process-wide table of package-level constants

pub mod bindings;
pub mod environment;
pub mod types;
pub mod values;
