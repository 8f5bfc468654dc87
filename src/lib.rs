//! Crispy - a small Lisp with q-expressions
//!
//! # Overview
//!
//! Crispy programs are made of numbers, symbols, s-expressions `( ... )` and
//! q-expressions `{ ... }`. S-expressions are evaluated by applying their first
//! element to the rest; q-expressions are data and are left alone until `eval`
//! turns them into code.
//!
//! # Quick Start
//!
//! ```
//! use crispy::{Engine, Value};
//!
//! let mut engine = Engine::default();
//! engine.eval("def {xs} {1 2 3}").unwrap();
//!
//! let result = engine.eval("eval (join {len} (list xs))").unwrap();
//! assert_eq!(result, Value::number(3));
//! ```
//!
//! # Errors
//!
//! Only parse failures surface as [`Error`]. Everything that goes wrong while
//! evaluating is an ordinary [`Value::Error`] result:
//!
//! ```
//! use crispy::Engine;
//!
//! let mut engine = Engine::default();
//! let result = engine.eval("head {}").unwrap();
//! assert_eq!(result.to_string(), "Error: Function 'head' passed '{}'!");
//! ```

mod error_renderer;

// Re-export public API from crispy_core
pub use crispy_core::api::{Diagnostic, Engine, EngineOptions, Error, Severity};

// Re-export commonly used types and values
pub use crispy_core::environment::Environment;
pub use crispy_core::evaluator::{self, Evaluator, EvaluatorOptions};
pub use crispy_core::values::{self, Builtin, NativeFn, Value};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
