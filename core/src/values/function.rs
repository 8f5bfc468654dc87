//! Function values.
//!
//! A function value is an opaque native callback. Builtins never declare an
//! arity; each one validates its own argument list when called.

use core::fmt;

use super::value::Value;
use crate::evaluator::Evaluator;

/// Signature of a native function.
///
/// The callee receives the running evaluator (which gives access to the
/// session environment) and the argument list: an s-expression whose children
/// are the already-evaluated arguments. The callee owns the argument list and
/// must return a fresh result on every path.
///
/// # Example
///
/// ```
/// use crispy_core::evaluator::Evaluator;
/// use crispy_core::values::Value;
///
/// fn first(_eval: &mut Evaluator<'_>, mut args: Value) -> Value {
///     if args.is_empty() {
///         return Value::error("Function 'first' passed no arguments!");
///     }
///     args.pop(0)
/// }
/// ```
pub type NativeFn = fn(&mut Evaluator<'_>, Value) -> Value;

/// A named native function.
///
/// The name is the one the function was registered under. It only shows up
/// in logs and `Debug` output; the printed form of a function stays opaque.
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: NativeFn,
}

impl Builtin {
    pub fn new(name: &'static str, func: NativeFn) -> Self {
        Self { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the function with an argument list.
    pub fn call(&self, evaluator: &mut Evaluator<'_>, args: Value) -> Value {
        (self.func)(evaluator, args)
    }
}

// Function pointers have no stable identity across codegen units, so two
// builtins are the same when they were registered under the same name.
impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Builtin {}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<builtin {}>", self.name)
    }
}
