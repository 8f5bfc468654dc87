//! Tree-walking evaluator for crispy values.
//!
//! Reduction is depth-first and left-to-right, and it stops at the first error:
//!
//! - symbols are replaced by a copy of their binding;
//! - s-expressions have their children evaluated in order, then the leading
//!   function is applied to the rest;
//! - everything else (numbers, errors, q-expressions, functions) is already in
//!   normal form.
//!
//! ## Design Principles
//!
//! - **Never panic**: malformed input always yields an error value
//! - **Stack-safe**: depth tracking turns runaway recursion into an error value
//!
//! ## Example
//!
//! ```
//! use crispy_core::{environment::Environment, evaluator, parser, reader};
//!
//! let mut env = Environment::with_builtins();
//! let program = reader::read(&parser::parse("+ 1 (* 2 3)").unwrap());
//! let result = evaluator::eval(&mut env, program);
//! assert_eq!(result.to_string(), "7");
//! ```

mod eval;

#[cfg(test)]
mod eval_test;

pub use eval::Evaluator;

use crate::{environment::Environment, values::Value};

/// Options controlling evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum evaluation depth (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}

/// Evaluate a value with default options.
pub fn eval(env: &mut Environment, value: Value) -> Value {
    eval_with_options(EvaluatorOptions::default(), env, value)
}

/// Evaluate a value with custom options.
///
/// ## Example
///
/// ```
/// use crispy_core::environment::Environment;
/// use crispy_core::evaluator::{EvaluatorOptions, eval_with_options};
/// use crispy_core::values::Value;
///
/// let mut env = Environment::new();
/// let options = EvaluatorOptions { max_depth: 5000 };
/// let result = eval_with_options(options, &mut env, Value::number(1));
/// assert_eq!(result, Value::number(1));
/// ```
pub fn eval_with_options(options: EvaluatorOptions, env: &mut Environment, value: Value) -> Value {
    Evaluator::new(options, env).eval(value)
}
