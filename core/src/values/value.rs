//! The runtime value model.
//!
//! Every expression and every result is a [`Value`]. Lists own their children
//! exclusively; copying a value is always a deep duplication, so evaluation is
//! free to consume and rebuild trees in place.

use core::fmt;

use super::function::Builtin;

/// A crispy value.
///
/// Only [`Value::SExpr`] and [`Value::QExpr`] own children; every other variant
/// is a leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// A signed integer.
    Number(i64),
    /// A descriptive failure. Errors are terminal and propagate untouched.
    Error(String),
    /// An identifier, resolved against the environment when evaluated.
    Symbol(String),
    /// An expression: the first child resolves to a function, the rest are
    /// its arguments.
    SExpr(Vec<Value>),
    /// A literal list. Never evaluated automatically.
    QExpr(Vec<Value>),
    /// A native callable.
    Function(Builtin),
}

impl Value {
    pub fn number(x: i64) -> Value {
        Value::Number(x)
    }

    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(message.into())
    }

    pub fn symbol(name: impl Into<String>) -> Value {
        Value::Symbol(name.into())
    }

    /// An empty s-expression.
    pub fn sexpr() -> Value {
        Value::SExpr(Vec::new())
    }

    /// An empty q-expression.
    pub fn qexpr() -> Value {
        Value::QExpr(Vec::new())
    }

    pub fn function(builtin: Builtin) -> Value {
        Value::Function(builtin)
    }

    /// Human-readable name of the active variant, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
            Value::Function(_) => "Function",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::SExpr(_) | Value::QExpr(_))
    }

    /// Children of a list. Leaves have none.
    pub fn children(&self) -> &[Value] {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => cells,
            _ => &[],
        }
    }

    /// Number of children. Always zero for leaves.
    pub fn len(&self) -> usize {
        self.children().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cells_mut(&mut self) -> &mut Vec<Value> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => cells,
            other => panic!("{} is not a list", other.type_name()),
        }
    }

    fn into_cells(self) -> Vec<Value> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => cells,
            other => panic!("{} is not a list", other.type_name()),
        }
    }

    /// Appends `value` as the new last child.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a list.
    pub fn add(mut self, value: Value) -> Value {
        self.cells_mut().push(value);
        self
    }

    /// Removes and returns the child at `index`, shifting later children down.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not a list or `index` is out of bounds.
    pub fn pop(&mut self, index: usize) -> Value {
        self.cells_mut().remove(index)
    }

    /// Like [`Value::pop`], but the rest of the list is dropped.
    pub fn take(mut self, index: usize) -> Value {
        self.pop(index)
    }

    /// Moves every child of `other` onto the end of `self`, in order.
    ///
    /// # Panics
    ///
    /// Panics if either value is not a list.
    pub fn join(mut self, other: Value) -> Value {
        let moved = other.into_cells();
        self.cells_mut().extend(moved);
        self
    }

    /// Relabels a list as a q-expression without copying its children.
    pub fn into_qexpr(self) -> Value {
        Value::QExpr(self.into_cells())
    }

    /// Relabels a list as an s-expression without copying its children.
    pub fn into_sexpr(self) -> Value {
        Value::SExpr(self.into_cells())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(message) => write!(f, "Error: {}", message),
            Value::Symbol(name) => write!(f, "{}", name),
            Value::SExpr(cells) => write_list(f, cells, '(', ')'),
            Value::QExpr(cells) => write_list(f, cells, '{', '}'),
            Value::Function(_) => write!(f, "<function>"),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, cells: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", cell)?;
    }
    write!(f, "{}", close)
}
