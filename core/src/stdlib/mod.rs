//! Crispy builtins.
//!
//! The whole standard library is a fixed, ordered catalog of native functions
//! installed into a fresh environment before any evaluation happens:
//! - List: `list`, `head`, `tail`, `eval`, `join`, `len`
//! - Binding: `def`
//! - Math: `+`, `-`, `*`, `/`, `%`, `^`
//!
//! Every builtin receives its argument list already evaluated, consumes it,
//! and validates arity and argument types itself. Failures are returned as
//! error values.

use crate::environment::Environment;
use crate::values::{NativeFn, Value};

pub mod binding;
pub mod list;
pub mod math;


/// The builtin catalog, in registration order.
pub const BUILTINS: &[(&str, NativeFn)] = &[
    // List functions
    ("list", list::builtin_list),
    ("head", list::builtin_head),
    ("tail", list::builtin_tail),
    ("eval", list::builtin_eval),
    ("join", list::builtin_join),
    ("len", list::builtin_len),
    // Binding
    ("def", binding::builtin_def),
    // Math functions
    ("+", math::builtin_add),
    ("-", math::builtin_sub),
    ("*", math::builtin_mul),
    ("/", math::builtin_div),
    ("%", math::builtin_rem),
    ("^", math::builtin_pow),
];

/// Register every builtin in the environment.
pub fn register_builtins(env: &mut Environment) {
    for &(name, func) in BUILTINS {
        env.register_builtin(name, func);
    }
}

// Argument checks. Each returns the error value to hand back, if any, so that
// a builtin can chain them with `or_else` in the order it wants them applied.

pub(crate) fn check_arity(name: &str, args: &Value, expected: usize) -> Option<Value> {
    (args.len() != expected).then(|| {
        Value::error(format!(
            "Function '{}' passed incorrect number of arguments! Got {}, expected {}.",
            name,
            args.len(),
            expected
        ))
    })
}

pub(crate) fn check_has_args(name: &str, args: &Value) -> Option<Value> {
    args.is_empty()
        .then(|| Value::error(format!("Function '{}' passed no arguments!", name)))
}

pub(crate) fn check_qexpr(name: &str, args: &Value, index: usize) -> Option<Value> {
    let arg = &args.children()[index];
    (!matches!(arg, Value::QExpr(_))).then(|| {
        Value::error(format!(
            "Function '{}' passed incorrect type for argument {}! Got {}, expected {}.",
            name,
            index,
            arg.type_name(),
            Value::qexpr().type_name()
        ))
    })
}

pub(crate) fn check_not_empty(name: &str, args: &Value, index: usize) -> Option<Value> {
    args.children()[index]
        .is_empty()
        .then(|| Value::error(format!("Function '{}' passed '{{}}'!", name)))
}
