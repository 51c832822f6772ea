use super::{types::Literals, values::Value};

/// How a binding was introduced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// `var name T = value`
    Var,
    /// `name := value`, type taken from the value
    Inferred,
    /// `const name = value`, fixed at compile time
    Const,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub value: Value,
    pub kind: BindingKind,
    pub explicit_type: Option<Literals>,
}

impl Binding {
    pub fn get_type(&self) -> Literals {
        self.explicit_type.unwrap_or_else(|| self.value.get_literal())
    }

    pub fn is_constant(&self) -> bool {
        self.kind == BindingKind::Const
    }
}
