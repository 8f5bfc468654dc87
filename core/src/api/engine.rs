//! The crispy evaluation engine.

use super::{EngineOptions, Error};
use crate::environment::Environment;
use crate::values::Value;
use crate::{evaluator, parser, reader};

/// A crispy session.
///
/// The engine owns the session environment: it is created once with the
/// builtin catalog, mutated by `def`, and dropped with the engine. Every
/// [`Engine::eval`] call sees the definitions of the calls before it.
///
/// # Example
///
/// ```
/// use crispy_core::api::{Engine, EngineOptions};
/// use crispy_core::values::Value;
///
/// let mut engine = Engine::new(EngineOptions::default(), |env| {
///     env.put("answer", &Value::number(42));
/// });
///
/// engine.eval("def {x} 1").unwrap();
/// let result = engine.eval("+ x answer").unwrap();
/// assert_eq!(result, Value::number(43));
/// ```
pub struct Engine {
    environment: Environment,
    options: EngineOptions,
}

impl Engine {
    /// Create a new engine.
    ///
    /// The initialization closure runs after the builtins are registered, so
    /// it can add bindings or replace builtins.
    pub fn new(options: EngineOptions, init: impl FnOnce(&mut Environment)) -> Self {
        let mut environment = Environment::with_builtins();
        init(&mut environment);
        tracing::debug!(bindings = environment.len(), "engine ready");

        Self {
            environment,
            options,
        }
    }

    /// Access the session environment.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Parse and read a program without evaluating it.
    ///
    /// The result is the s-expression holding every top-level expression.
    pub fn read(&self, source: &str) -> Result<Value, Error> {
        let tree = parser::parse_with_max_depth(source, self.options.max_parse_depth)?;
        Ok(reader::read(&tree))
    }

    /// Parse, read and evaluate a program.
    ///
    /// Only parse failures are reported as `Err`. Evaluation failures are
    /// ordinary [`Value::Error`] results.
    pub fn eval(&mut self, source: &str) -> Result<Value, Error> {
        let program = self.read(source)?;
        Ok(self.eval_value(program))
    }

    /// Evaluate an already-read value in this session.
    pub fn eval_value(&mut self, value: Value) -> Value {
        evaluator::eval_with_options(
            self.options.evaluator_options(),
            &mut self.environment,
            value,
        )
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EngineOptions::default(), |_| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_logging;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_engine_session_keeps_definitions() {
        init_test_logging();
        let mut engine = Engine::default();
        assert_eq!(engine.eval("def {x y} 1 2").unwrap(), Value::sexpr());
        assert_eq!(engine.eval("+ x y").unwrap(), Value::number(3));
    }

    #[test]
    fn test_engine_init_closure() {
        let mut engine = Engine::new(EngineOptions::default(), |env| {
            env.put("ten", &Value::number(10));
        });
        assert_eq!(engine.eval("* ten ten").unwrap(), Value::number(100));
        assert_eq!(engine.environment().names().last(), Some("ten"));
    }

    #[test]
    fn test_engine_read_does_not_evaluate() {
        let engine = Engine::default();
        assert_eq!(
            engine.read("+ 1 2").unwrap(),
            Value::SExpr(vec![Value::symbol("+"), Value::number(1), Value::number(2)])
        );
    }

    #[test]
    fn test_engine_parse_error() {
        let mut engine = Engine::default();
        let err = engine.eval("(+ 1").unwrap_err();
        assert_eq!(err.source_text(), "(+ 1");
        assert_eq!(err.diagnostics().len(), 1);
    }

    #[test]
    fn test_engine_runtime_error_is_a_value() {
        let mut engine = Engine::default();
        assert_eq!(
            engine.eval("/ 1 0").unwrap(),
            Value::error("Division by zero!")
        );
    }

    #[test]
    fn test_engine_options() {
        let options = EngineOptions {
            max_depth: 3,
            max_parse_depth: 4,
        };
        let mut engine = Engine::new(options, |_| {});
        assert_eq!(
            engine.eval("(((((1)))))").unwrap_err().diagnostics()[0].code.as_deref(),
            Some("P004")
        );
        assert_eq!(
            engine.eval("(((1)))").unwrap(),
            Value::error("evaluation depth exceeds maximum of 3 levels")
        );
    }
}
