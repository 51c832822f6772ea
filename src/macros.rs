//! Utility macros for the reporter.
//!
//! - `MK_BINDING!` - Creates a Binding instance

/// Creates a Binding instance.
///
/// # Arguments
///
/// * `$kind` - The BindingKind
/// * `$name` - The binding's name
/// * `$value` - The bound Value
/// * `$type` - Optional explicit type; omitted for inferred bindings
///
/// # Example
///
/// ```ignore
/// let age = MK_BINDING!(BindingKind::Var, "age", Value::UInt8(22), Some(Literals::Number(NumberType::UInt8)));
/// ```
#[macro_export]
macro_rules! MK_BINDING {
    ($kind:expr, $name:expr, $value:expr) => {
        $crate::MK_BINDING!($kind, $name, $value, None)
    };
    ($kind:expr, $name:expr, $value:expr, $type:expr) => {
        $crate::values::bindings::Binding {
            name: String::from($name),
            value: $value,
            kind: $kind,
            explicit_type: $type,
        }
    };
}
